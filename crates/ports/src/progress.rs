// crates/ports/src/progress.rs
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use wildsweep_shared_kernel::{DirectoryCount, FileCount, FilePath, Result, WildsweepError};

/// How the inclusion patterns are applied to the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalkStrategy {
    /// Re-walk the whole tree once per pattern, in declaration order.
    #[default]
    PerPattern,
    /// Walk once, testing every pattern against each file.
    SinglePass,
}

/// A matched file that could not be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionFailure {
    pub path: FilePath,
    pub reason: String,
}

/// Outcome of one completed deletion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub root: FilePath,
    pub strategy: WalkStrategy,
    pub patterns: Vec<String>,
    pub exclusions: Vec<String>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub directories_visited: DirectoryCount,
    pub files_visited: FileCount,
    pub files_deleted: FileCount,
    pub deletion_failures: FileCount,
    pub deleted: Vec<FilePath>,
    pub failures: Vec<DeletionFailure>,
}

/// Receives deletion events while a run is in progress.
pub trait ProgressSink: Send + Sync {
    fn on_deleted(&self, path: &Path) -> Result<()>;
    fn on_failed(&self, path: &Path, error: &WildsweepError) -> Result<()>;
    /// Called exactly once, after every pattern has been applied to the whole tree.
    fn on_complete(&self, report: &RunReport) -> Result<()>;
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_deleted(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn on_failed(&self, _path: &Path, _error: &WildsweepError) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _report: &RunReport) -> Result<()> {
        Ok(())
    }
}
