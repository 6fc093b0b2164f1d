//! # Domain
//!
//! Pure logic with no filesystem access:
//!
//! - [`pattern`]: parsing of bracketed wildcard tokens such as `[**cache**.tmp]`
//! - [`predicate`]: compiling parsed patterns into path predicates
//! - [`request`]: validation of an inclusion request before any traversal

#![allow(clippy::multiple_crate_versions)]

pub mod pattern;
pub mod predicate;
pub mod request;

pub use pattern::{Pattern, PatternKind};
pub use predicate::{Predicate, PredicateSet, compile, compile_all};
pub use request::{FileTypes, InclusionRequest, PathValue, ValidatedRequest};
