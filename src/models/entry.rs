use std::ffi::OsString;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One item of a directory listing, as reported by the filesystem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub name: OsString,
    pub kind: EntryKind,
    /// Size in bytes. Only meaningful for files.
    pub size: u64,
}

impl FsEntry {
    pub fn directory(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: 0,
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
