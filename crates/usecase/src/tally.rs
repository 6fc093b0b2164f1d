// crates/usecase/src/tally.rs
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use wildsweep_ports::progress::{DeletionFailure, RunReport, WalkStrategy};
use wildsweep_shared_kernel::{DirectoryCount, FileCount, FilePath, WildsweepError};

/// Counters accumulated across every walk of one run.
#[derive(Debug, Default)]
pub struct WalkTally {
    pub directories_visited: DirectoryCount,
    pub files_visited: FileCount,
    pub deleted: Vec<FilePath>,
    pub failures: Vec<DeletionFailure>,
}

impl WalkTally {
    pub fn record_deleted(&mut self, path: &Path) {
        self.deleted.push(FilePath::from(path));
    }

    pub fn record_failure(&mut self, path: &Path, error: &WildsweepError) {
        self.failures.push(DeletionFailure {
            path: FilePath::from(path),
            reason: error.to_string(),
        });
    }

    pub fn into_report(self, header: ReportHeader) -> RunReport {
        RunReport {
            root: FilePath::new(header.root),
            strategy: header.strategy,
            patterns: header.patterns,
            exclusions: header.exclusions,
            started_at: header.started_at,
            finished_at: Local::now(),
            directories_visited: self.directories_visited,
            files_visited: self.files_visited,
            files_deleted: FileCount::new(self.deleted.len()),
            deletion_failures: FileCount::new(self.failures.len()),
            deleted: self.deleted,
            failures: self.failures,
        }
    }
}

/// Run-level facts that do not come from the walk itself.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub root: PathBuf,
    pub strategy: WalkStrategy,
    pub patterns: Vec<String>,
    pub exclusions: Vec<String>,
    pub started_at: DateTime<Local>,
}
