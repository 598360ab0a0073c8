//! Stable storage and the durable fallback log
//!
//! The station only needs three primitives from its storage medium: read a
//! whole file, overwrite a whole file, append to a file. Everything that
//! persists (the station configuration and undelivered telemetry) goes through
//! the [`Storage`] trait.

mod durable_log;
#[cfg(test)]
mod memory;

pub use durable_log::DurableLog;
#[cfg(test)]
pub use memory::MemoryStorage;

use alloc::string::String;
use alloc::vec::Vec;
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("file not found")]
    NotFound,
    #[error("I/O error: {0}")]
    Io(String),
    #[error("failed to encode record")]
    Encode,
}

pub trait Storage {
    /// Read the whole content stored at `path`.
    fn read(&mut self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Replace the content stored at `path`, creating the file when missing.
    fn write(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError>;

    /// Append to `path`, creating the file when missing.
    ///
    /// Whatever the outcome, the underlying handle is released before this
    /// returns.
    fn append(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read(&mut self, path: &str) -> Result<Vec<u8>, StorageError> {
        (**self).read(path)
    }

    fn write(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        (**self).write(path, contents)
    }

    fn append(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        (**self).append(path, contents)
    }
}
