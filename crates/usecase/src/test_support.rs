// crates/usecase/src/test_support.rs
//! In-memory stand-ins for the filesystem and progress ports.

use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use wildsweep_ports::filesystem::{DirectoryReader, EntryKind, FileRemover};
use wildsweep_ports::progress::{ProgressSink, RunReport};
use wildsweep_shared_kernel::{InfrastructureError, Result, WildsweepError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    File,
    Dir,
    Link,
    /// Symlink resolving to a directory; listable, but never walked into as an entry.
    DirLink,
}

#[derive(Default)]
pub struct MemoryFs {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
    unlistable: Mutex<HashSet<PathBuf>>,
    undeletable: Mutex<HashSet<PathBuf>>,
    listed: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    /// Creates `root` plus every file in `files` (relative to `root`) and their parents.
    pub fn with_files(root: &str, files: &[&str]) -> Self {
        let fs = Self::default();
        fs.add_dir(root);
        for rel in files {
            fs.add_file(&format!("{root}/{rel}"));
        }
        fs
    }

    pub fn add_dir(&self, path: &str) {
        let path = PathBuf::from(path);
        let mut nodes = self.nodes.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || ancestor == Path::new("/") {
                break;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    pub fn add_file(&self, path: &str) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            self.add_dir(&parent.to_string_lossy());
        }
        self.nodes.lock().unwrap().insert(path, Node::File);
    }

    pub fn add_link(&self, path: &str) {
        self.nodes.lock().unwrap().insert(PathBuf::from(path), Node::Link);
    }

    pub fn add_dir_link(&self, path: &str) {
        self.nodes.lock().unwrap().insert(PathBuf::from(path), Node::DirLink);
    }

    pub fn deny_listing(&self, path: &str) {
        self.unlistable.lock().unwrap().insert(PathBuf::from(path));
    }

    pub fn deny_removal(&self, path: &str) {
        self.undeletable.lock().unwrap().insert(PathBuf::from(path));
    }

    pub fn exists(&self, path: &str) -> bool {
        self.nodes.lock().unwrap().contains_key(Path::new(path))
    }

    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, n)| **n == Node::File)
            .map(|(p, _)| p.clone())
            .collect()
    }

    /// Directories in the order they were listed.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.lock().unwrap().clone()
    }
}

fn traversal(path: &Path, kind: io::ErrorKind) -> WildsweepError {
    InfrastructureError::Traversal {
        path: path.to_path_buf(),
        source: io::Error::from(kind),
    }
    .into()
}

impl DirectoryReader for MemoryFs {
    fn list(&self, dir: &Path) -> Result<Vec<OsString>> {
        if self.unlistable.lock().unwrap().contains(dir) {
            return Err(traversal(dir, io::ErrorKind::PermissionDenied));
        }
        let nodes = self.nodes.lock().unwrap();
        match nodes.get(dir) {
            Some(Node::Dir | Node::DirLink) => {}
            Some(_) => return Err(traversal(dir, io::ErrorKind::NotADirectory)),
            None => return Err(traversal(dir, io::ErrorKind::NotFound)),
        }
        self.listed.lock().unwrap().push(dir.to_path_buf());
        // Reverse order so callers cannot rely on the listing being sorted.
        Ok(nodes
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
            .rev()
            .collect())
    }

    fn kind(&self, path: &Path) -> Result<EntryKind> {
        match self.nodes.lock().unwrap().get(path) {
            Some(Node::File) => Ok(EntryKind::File),
            Some(Node::Dir) => Ok(EntryKind::Directory),
            Some(Node::Link | Node::DirLink) => Ok(EntryKind::Other),
            None => Err(traversal(path, io::ErrorKind::NotFound)),
        }
    }

    fn is_directory(&self, path: &Path) -> Result<bool> {
        match self.nodes.lock().unwrap().get(path) {
            Some(node) => Ok(matches!(node, Node::Dir | Node::DirLink)),
            None => Err(traversal(path, io::ErrorKind::NotFound)),
        }
    }
}

impl FileRemover for MemoryFs {
    fn remove(&self, path: &Path) -> Result<()> {
        let deletion = |kind: io::ErrorKind| -> WildsweepError {
            InfrastructureError::Deletion {
                path: path.to_path_buf(),
                source: io::Error::from(kind),
            }
            .into()
        };
        if self.undeletable.lock().unwrap().contains(path) {
            return Err(deletion(io::ErrorKind::PermissionDenied));
        }
        let mut nodes = self.nodes.lock().unwrap();
        match nodes.get(path) {
            Some(Node::File) => {
                nodes.remove(path);
                Ok(())
            }
            Some(_) => Err(deletion(io::ErrorKind::IsADirectory)),
            None => Err(deletion(io::ErrorKind::NotFound)),
        }
    }
}

#[derive(Default)]
pub struct RecordingSink {
    deleted: Mutex<Vec<PathBuf>>,
    failed: Mutex<Vec<PathBuf>>,
    completed: Mutex<Vec<RunReport>>,
}

impl RecordingSink {
    pub fn deleted(&self) -> Vec<PathBuf> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn failed(&self) -> Vec<PathBuf> {
        self.failed.lock().unwrap().clone()
    }

    pub fn completions(&self) -> usize {
        self.completed.lock().unwrap().len()
    }
}

impl ProgressSink for RecordingSink {
    fn on_deleted(&self, path: &Path) -> Result<()> {
        self.deleted.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn on_failed(&self, path: &Path, _error: &WildsweepError) -> Result<()> {
        self.failed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn on_complete(&self, report: &RunReport) -> Result<()> {
        self.completed.lock().unwrap().push(report.clone());
        Ok(())
    }
}
