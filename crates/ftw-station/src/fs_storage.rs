use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use ftw_core::storage::{Storage, StorageError};

/// Storage rooted at a host directory.
///
/// Device paths such as `/log.txt` are resolved relative to the root, so the
/// data directory plays the part of the device's flash filesystem.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Host path backing a device path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl Storage for FsStorage {
    fn read(&mut self, path: &str) -> Result<Vec<u8>, StorageError> {
        fs::read(self.resolve(path)).map_err(storage_error)
    }

    fn write(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        fs::write(self.resolve(path), contents).map_err(storage_error)
    }

    fn append(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        // The handle is dropped on return, whether the write succeeded or not.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.resolve(path))
            .map_err(storage_error)?;

        file.write_all(contents).map_err(storage_error)
    }
}

fn storage_error(e: io::Error) -> StorageError {
    match e.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Io(e.to_string()),
    }
}
