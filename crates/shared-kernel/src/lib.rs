// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError, Result,
    WildsweepError,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use path::logical_absolute;
pub use value_objects::{DirectoryCount, FileCount, FilePath};
