// src/fs/mock.rs

//! In-memory [`FileSystem`] for tests.

use super::{FileSystem, PathKind};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock filesystem backed by a shared path table.
///
/// `Clone` shares the underlying table, so a clone handed to a runner sees
/// entries added later through the original handle.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, PathKind>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a non-directory entry at `path`.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.as_ref().to_path_buf(), PathKind::File);
    }

    /// Record a directory entry at `path`.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.as_ref().to_path_buf(), PathKind::Directory);
    }
}

impl FileSystem for MockFileSystem {
    fn path_kind(&self, path: &Path) -> io::Result<Option<PathKind>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(path).copied())
    }
}
