use std::io::Write;
use std::path::Path;

use tracing::trace;

use crate::error::{Result, TreeError};
use crate::fs::FileSystem;
use crate::models::FsEntry;

use super::walk::list_entries;

const BRANCH: &str = "├───";
const LAST_BRANCH: &str = "└───";
const OPEN_INDENT: &str = "│\t";
const CLOSED_INDENT: &str = "\t";

/// Per-level state threaded down the recursion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderContext {
    prefix: String,
    include_files: bool,
}

impl RenderContext {
    pub fn root(include_files: bool) -> Self {
        Self {
            prefix: String::new(),
            include_files,
        }
    }

    pub fn include_files(&self) -> bool {
        self.include_files
    }

    /// Prefix written in front of an entry at this level.
    pub fn line_prefix(&self, is_last: bool) -> String {
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        format!("{}{branch}", self.prefix)
    }

    /// Context for the children of an entry at this level.
    pub fn child(&self, is_last: bool) -> Self {
        let indent = if is_last { CLOSED_INDENT } else { OPEN_INDENT };
        Self {
            prefix: format!("{}{indent}", self.prefix),
            include_files: self.include_files,
        }
    }
}

/// `empty` for zero-length files, otherwise the byte count suffixed with `b`.
pub fn size_label(size: u64) -> String {
    if size == 0 {
        "empty".to_owned()
    } else {
        format!("{size}b")
    }
}

/// Writes a directory tree, depth first, one entry per line.
pub struct TreeRenderer<'a, F: ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> TreeRenderer<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Render the contents of `root` (not `root` itself) into `out`.
    ///
    /// The first error aborts the walk. Lines written before it stay written.
    pub fn render<W: Write + ?Sized>(
        &self,
        root: &Path,
        include_files: bool,
        out: &mut W,
    ) -> Result<()> {
        self.render_dir(root, &RenderContext::root(include_files), out)
    }

    fn render_dir<W: Write + ?Sized>(
        &self,
        dir: &Path,
        ctx: &RenderContext,
        out: &mut W,
    ) -> Result<()> {
        let entries = list_entries(self.fs, dir, ctx.include_files())?;

        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == entries.len();
            write_entry(out, &ctx.line_prefix(is_last), entry)?;

            if entry.is_dir() {
                self.render_dir(&dir.join(&entry.name), &ctx.child(is_last), out)?;
            }
        }

        Ok(())
    }
}

/// Names go out as raw bytes, so names that are not UTF-8 are written unchanged.
fn write_entry<W: Write + ?Sized>(out: &mut W, prefix: &str, entry: &FsEntry) -> Result<()> {
    let mut line = Vec::with_capacity(prefix.len() + entry.name.len() + 16);
    line.extend_from_slice(prefix.as_bytes());
    line.extend_from_slice(entry.name.as_encoded_bytes());
    if !entry.is_dir() {
        line.extend_from_slice(format!(" ({})", size_label(entry.size)).as_bytes());
    }
    line.push(b'\n');

    let shown = String::from_utf8_lossy(&line);
    trace!(line = shown.trim_end(), "write");
    out.write_all(&line).map_err(TreeError::Write)
}
