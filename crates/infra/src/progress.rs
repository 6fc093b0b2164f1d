// crates/infra/src/progress.rs
use std::path::Path;

use log::{info, warn};
use wildsweep_ports::progress::{ProgressSink, RunReport};
use wildsweep_shared_kernel::{Result, WildsweepError};

/// Progress sink that forwards every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_deleted(&self, path: &Path) -> Result<()> {
        info!("deleted {}", path.display());
        Ok(())
    }

    fn on_failed(&self, path: &Path, error: &WildsweepError) -> Result<()> {
        warn!("could not delete {}: {error}", path.display());
        Ok(())
    }

    fn on_complete(&self, report: &RunReport) -> Result<()> {
        info!(
            "finished {} pattern(s) under {}: {} deleted, {} failed",
            report.patterns.len(),
            report.root,
            report.files_deleted,
            report.deletion_failures
        );
        Ok(())
    }
}
