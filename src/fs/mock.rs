use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};
use crate::models::FsEntry;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    OpenErr(String),
    ReadErr(String),
}

#[derive(Default)]
pub struct MockFileSystem {
    responses: RefCell<HashMap<PathBuf, Response>>,
    calls: RefCell<Vec<PathBuf>>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        self.responses
            .borrow_mut()
            .insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_open_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        self.responses
            .borrow_mut()
            .insert(dir.into(), Response::OpenErr(message.into()));
    }

    pub fn set_read_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        self.responses
            .borrow_mut()
            .insert(dir.into(), Response::ReadErr(message.into()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl FileSystem for MockFileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        self.calls.borrow_mut().push(dir.to_path_buf());

        let path = dir.to_path_buf();
        match self.responses.borrow().get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::OpenErr(message)) => Err(TreeError::Open {
                path,
                source: io::Error::other(message.clone()),
            }),
            Some(Response::ReadErr(message)) => Err(TreeError::Read {
                path,
                source: io::Error::other(message.clone()),
            }),
            None => Err(TreeError::Open {
                path,
                source: io::Error::new(io::ErrorKind::NotFound, "no mock response"),
            }),
        }
    }
}
