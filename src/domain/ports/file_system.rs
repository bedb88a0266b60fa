//! FileSystem port - abstraction over file I/O operations
//!
//! Use cases read assets and write artifacts only through this trait, so they
//! can be exercised against an in-memory implementation.

use std::path::Path;

use crate::error::EmbedResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read the whole file as bytes; no partial content is ever returned
    fn read_bytes(&self, path: &Path) -> EmbedResult<Vec<u8>>;

    /// Read the whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> EmbedResult<String>;

    /// Write `content` to `path` in a single operation, replacing any previous file
    fn write(&self, path: &Path, content: &str) -> EmbedResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> EmbedResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_bytes(&self, path: &Path) -> EmbedResult<Vec<u8>> {
        (**self).read_bytes(path)
    }

    fn read_to_string(&self, path: &Path) -> EmbedResult<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> EmbedResult<()> {
        (**self).write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> EmbedResult<()> {
        (**self).create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
