use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};
use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        // The handle is closed when `handle` drops, on success and on every early return.
        let handle = fs::read_dir(dir).map_err(|source| TreeError::Open {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in handle {
            let entry = entry.map_err(|source| TreeError::Read {
                path: dir.to_path_buf(),
                source,
            })?;
            // DirEntry::metadata does not traverse symlinks.
            let metadata = entry.metadata().map_err(|source| TreeError::Read {
                path: entry.path(),
                source,
            })?;

            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            entries.push(FsEntry {
                name: entry.file_name(),
                kind,
                size: metadata.len(),
            });
        }

        Ok(entries)
    }
}
