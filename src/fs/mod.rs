// src/fs/mod.rs

//! Path-stat capability used for target-eligibility checks.
//!
//! The runner only ever asks one question of the filesystem: what kind of
//! entry, if any, sits at a target-name path. Keeping that behind a trait
//! lets tests decide the answer without touching disk (see [`mock`]);
//! nothing here ever reads file contents.

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::Path;

pub mod mock;

/// Kind of filesystem entry found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Any existing entry that is not a directory (regular file, socket,
    /// device node, ...).
    File,
    Directory,
}

/// Abstract path-stat interface.
pub trait FileSystem: Send + Sync + Debug {
    /// Kind of the entry at `path`, following symlinks.
    ///
    /// `Ok(None)` means nothing exists there; any other failure (permission
    /// denied, I/O error) is returned as-is.
    fn path_kind(&self, path: &Path) -> io::Result<Option<PathKind>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn path_kind(&self, path: &Path) -> io::Result<Option<PathKind>> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(PathKind::Directory)),
            Ok(_) => Ok(Some(PathKind::File)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
