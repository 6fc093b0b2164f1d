// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod progress;

pub use filesystem::StdFileSystem;
pub use persistence::{RequestFormat, load_request};
pub use progress::LogProgress;
