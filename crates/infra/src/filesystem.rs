// crates/infra/src/filesystem.rs
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use wildsweep_ports::filesystem::{DirectoryReader, EntryKind, FileRemover};
use wildsweep_shared_kernel::{InfrastructureError, Result};

/// Filesystem adapter implementing the directory and removal ports on top of `std::fs`.
///
/// Walked entries are classified with `symlink_metadata`, so a link to a directory is
/// reported as [`EntryKind::Other`]. Only [`DirectoryReader::is_directory`] follows links.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

fn traversal_error(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::Traversal {
        path: path.to_path_buf(),
        source,
    }
}

impl DirectoryReader for StdFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<OsString>> {
        let entries = fs::read_dir(dir).map_err(|e| traversal_error(dir, e))?;
        let names = entries
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| traversal_error(dir, e))?;
        Ok(names)
    }

    fn kind(&self, path: &Path) -> Result<EntryKind> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| traversal_error(path, e))?;
        let file_type = metadata.file_type();
        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        };
        Ok(kind)
    }

    fn is_directory(&self, path: &Path) -> Result<bool> {
        let metadata = fs::metadata(path).map_err(|e| traversal_error(path, e))?;
        Ok(metadata.is_dir())
    }
}

impl FileRemover for StdFileSystem {
    fn remove(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|source| InfrastructureError::Deletion {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
