//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::error::{EmbedError, EmbedResult};

/// Local file system implementation
///
/// Writes go through a temporary file in the destination directory that is
/// renamed over the target, so readers never observe a half-written artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_bytes(&self, path: &Path) -> EmbedResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| EmbedError::read(path, e))
    }

    fn read_to_string(&self, path: &Path) -> EmbedResult<String> {
        std::fs::read_to_string(path).map_err(|e| EmbedError::read(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> EmbedResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| EmbedError::write(path, e))?;

        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = tempfile::Builder::new();
        // New artifacts get the usual 0o666 minus umask, not tempfile's 0o600.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder
            .tempfile_in(parent)
            .map_err(|e| EmbedError::write(path, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| EmbedError::write(path, e))?;

        // A replaced artifact keeps its permissions.
        if let Ok(existing) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| EmbedError::write(path, e))?;
        }

        tmp.persist(path)
            .map_err(|e| EmbedError::write(path, e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> EmbedResult<()> {
        std::fs::create_dir_all(path).map_err(|e| EmbedError::write(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
