use std::path::{Component, Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
///
/// `.` components are dropped so that two spellings of the same directory compare equal.
/// `..` is kept as-is; collapsing it lexically would be wrong in the presence of symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    joined.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
