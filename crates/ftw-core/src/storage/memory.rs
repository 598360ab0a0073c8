use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::{Storage, StorageError};

/// RAM-backed storage. Nothing survives a restart.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    files: BTreeMap<String, Vec<u8>>,
    writes: usize,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-loaded with a single file.
    pub fn with_file(path: &str, contents: &[u8]) -> Self {
        let mut storage = Self::new();
        storage.files.insert(path.to_string(), contents.to_vec());
        storage
    }

    /// Reject every write and append from now on.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn contents(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Number of successful writes and appends.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Io("read-only filesystem".to_string()));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn read(&mut self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.files.get(path).cloned().ok_or(StorageError::NotFound)
    }

    fn write(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        self.check_writable()?;
        self.files.insert(path.to_string(), contents.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn append(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        self.check_writable()?;
        self.files
            .entry(path.to_string())
            .or_default()
            .extend_from_slice(contents);
        self.writes += 1;
        Ok(())
    }
}
