// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_info;

pub use counts::{DirectoryCount, FileCount};
pub use file_info::FilePath;
