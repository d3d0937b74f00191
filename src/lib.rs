pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::io::Write;
use std::path::Path;

pub use crate::core::render::TreeRenderer;
pub use crate::error::{Result, TreeError};
pub use crate::fs::RealFileSystem;

/// Render the directory tree under `root` from the real filesystem.
pub fn dir_tree<W: Write + ?Sized>(out: &mut W, root: &Path, include_files: bool) -> Result<()> {
    TreeRenderer::new(&RealFileSystem).render(root, include_files, out)
}
