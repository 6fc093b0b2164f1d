// crates/usecase/src/orchestrator.rs
use std::path::Path;

use chrono::Local;
use log::info;
use wildsweep_domain::{InclusionRequest, compile_all};
use wildsweep_ports::filesystem::{DirectoryReader, FileRemover};
use wildsweep_ports::progress::{ProgressSink, RunReport, WalkStrategy};
use wildsweep_shared_kernel::{ApplicationError, Result, logical_absolute};

use crate::deletion::DeletionEngine;
use crate::options::RunOptions;
use crate::tally::{ReportHeader, WalkTally};
use crate::walker::TreeWalker;

/// Entry point of a deletion run.
pub struct RunDeletion<'a> {
    reader: &'a dyn DirectoryReader,
    remover: &'a dyn FileRemover,
    sink: &'a dyn ProgressSink,
}

impl<'a> RunDeletion<'a> {
    pub fn new(
        reader: &'a dyn DirectoryReader,
        remover: &'a dyn FileRemover,
        sink: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            reader,
            remover,
            sink,
        }
    }

    /// Validate `request`, apply every inclusion pattern to the tree, then signal completion.
    ///
    /// Returns only once all patterns have been applied across the whole tree. Every
    /// pattern is compiled before the first directory is listed, so a malformed token
    /// never leaves a partial run behind.
    ///
    /// # Errors
    /// Validation and pattern errors are raised before touching the filesystem.
    /// Traversal errors abort the run. Deletion errors abort only in strict mode.
    pub fn run(&self, request: &InclusionRequest, options: &RunOptions) -> Result<RunReport> {
        let started_at = Local::now();
        let request = request.validate()?;
        let inclusions = compile_all(&request.included)?;
        let exclusions = compile_all(&request.excluded)?;

        let root = logical_absolute(&request.starting_path);
        let stop_at = request.stopping_path.as_deref().map(logical_absolute);
        self.ensure_directory(&root)?;

        let engine = DeletionEngine::new(self.remover, self.sink, options.strict);
        let walker = TreeWalker::new(self.reader, engine, stop_at.as_deref());
        let mut tally = WalkTally::default();

        match options.strategy {
            WalkStrategy::PerPattern => {
                for (token, single) in request.included.iter().zip(inclusions.split()) {
                    info!("applying {token} under {}", root.display());
                    walker.walk(&root, &single, &exclusions, &mut tally)?;
                }
            }
            WalkStrategy::SinglePass => {
                let count = inclusions.len();
                info!("applying {count} pattern(s) under {}", root.display());
                walker.walk(&root, &inclusions, &exclusions, &mut tally)?;
            }
        }

        let report = tally.into_report(ReportHeader {
            root,
            strategy: options.strategy,
            patterns: request.included,
            exclusions: request.excluded,
            started_at,
        });
        info!(
            "run complete: {} deleted, {} failed, {} directories scanned",
            report.files_deleted, report.deletion_failures, report.directories_visited
        );
        self.sink.on_complete(&report)?;
        Ok(report)
    }

    fn ensure_directory(&self, root: &Path) -> Result<()> {
        if self.reader.is_directory(root)? {
            Ok(())
        } else {
            Err(ApplicationError::RootNotDirectory {
                path: root.to_path_buf(),
            }
            .into())
        }
    }
}
