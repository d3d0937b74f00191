use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::fs::FileSystem;
use crate::models::FsEntry;

/// Read one directory and return the entries to display, in display order.
///
/// Files are dropped unless `include_files` is set. The rest are sorted by
/// the raw bytes of their names; names are unique within a directory so no
/// secondary key is needed.
pub fn list_entries<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    include_files: bool,
) -> Result<Vec<FsEntry>> {
    let mut entries = fs.read_dir(dir)?;

    if !include_files {
        entries.retain(FsEntry::is_dir);
    }
    entries.sort_by(|a, b| {
        a.name
            .as_encoded_bytes()
            .cmp(b.name.as_encoded_bytes())
    });

    debug!(dir = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}
