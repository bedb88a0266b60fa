//! Mock file system for testing
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared between a use
//! case and the test that inspects it.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::FileSystem;
use crate::error::{EmbedError, EmbedResult};

#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    /// Every path passed to `write`, in call order
    pub writes: Arc<Mutex<Vec<PathBuf>>>,
    /// When set, every `write` fails with this kind
    pub fail_writes: Option<io::ErrorKind>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.into());
        self
    }

    pub fn failing_writes(mut self, kind: io::ErrorKind) -> Self {
        self.fail_writes = Some(kind);
        self
    }

    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl FileSystem for MockFileSystem {
    fn read_bytes(&self, path: &Path) -> EmbedResult<Vec<u8>> {
        self.file(path).ok_or_else(|| {
            EmbedError::read(path, io::Error::new(io::ErrorKind::NotFound, "File not found"))
        })
    }

    fn read_to_string(&self, path: &Path) -> EmbedResult<String> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes)
            .map_err(|e| EmbedError::read(path, io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn write(&self, path: &Path, content: &str) -> EmbedResult<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        if let Some(kind) = self.fail_writes {
            return Err(EmbedError::write(path, io::Error::new(kind, "mock write failure")));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> EmbedResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
