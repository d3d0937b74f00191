mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use std::path::Path;

use crate::error::Result;
use crate::models::FsEntry;

/// Source of directory listings for the renderer.
///
/// Implementations report [`TreeError::Open`](crate::TreeError::Open) when `dir`
/// cannot be opened as a directory and [`TreeError::Read`](crate::TreeError::Read)
/// when enumerating it fails part way. The returned order is unspecified.
pub trait FileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}
