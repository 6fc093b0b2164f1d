// crates/ports/src/filesystem.rs
use std::ffi::OsString;
use std::path::Path;

use wildsweep_shared_kernel::Result;

/// Classification of a directory entry, without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices and anything else the walker leaves alone.
    Other,
}

/// Port for observing a directory tree.
pub trait DirectoryReader: Send + Sync {
    /// Names of the immediate entries of `dir`, in no particular order.
    fn list(&self, dir: &Path) -> Result<Vec<OsString>>;

    fn kind(&self, path: &Path) -> Result<EntryKind>;

    /// Whether `path` resolves to a directory, following symbolic links.
    ///
    /// Used for the starting path only; walked entries go through [`Self::kind`].
    fn is_directory(&self, path: &Path) -> Result<bool>;
}

/// Port for removing a single regular file.
pub trait FileRemover: Send + Sync {
    fn remove(&self, path: &Path) -> Result<()>;
}
