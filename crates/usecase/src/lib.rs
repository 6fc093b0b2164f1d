//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the filesystem ports
//! to implement a deletion run:
//!
//! - [`orchestrator`]: validates a request, compiles its patterns and drives the walk
//! - [`walker`]: depth-first traversal that evaluates predicates against each file
//! - [`deletion`]: removal of matched files and the failure policy
//! - [`options`]: run-time switches (walk strategy, strict deletion)
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod deletion;
pub mod options;
pub mod orchestrator;
pub mod tally;
pub mod walker;

#[cfg(test)]
mod test_support;

pub use deletion::DeletionEngine;
pub use options::{RunOptions, RunOptionsBuilder};
pub use orchestrator::RunDeletion;
pub use tally::WalkTally;
pub use walker::TreeWalker;
pub use wildsweep_ports::progress::{RunReport, WalkStrategy};
