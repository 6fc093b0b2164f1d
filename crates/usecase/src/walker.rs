// crates/usecase/src/walker.rs
use std::path::{Path, PathBuf};

use log::{debug, trace};
use wildsweep_domain::PredicateSet;
use wildsweep_ports::filesystem::{DirectoryReader, EntryKind};
use wildsweep_shared_kernel::Result;

use crate::deletion::DeletionEngine;
use crate::tally::WalkTally;

/// Depth-first traversal that deletes every regular file matched by a predicate.
///
/// Uses an explicit work stack, so tree depth is bounded by memory rather than by
/// the call stack. Each directory listing is snapshotted and sorted before any entry
/// is acted on; deleting files never disturbs the iteration.
pub struct TreeWalker<'a> {
    reader: &'a dyn DirectoryReader,
    deleter: DeletionEngine<'a>,
    stop_at: Option<&'a Path>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(
        reader: &'a dyn DirectoryReader,
        deleter: DeletionEngine<'a>,
        stop_at: Option<&'a Path>,
    ) -> Self {
        Self {
            reader,
            deleter,
            stop_at,
        }
    }

    /// Walk `root`, which must be an absolute path to a directory.
    ///
    /// Files whose path satisfies any of `exclusions` are never deleted. The directory at
    /// the stopping path, if any, is not entered.
    ///
    /// # Errors
    /// Fails on the first directory that cannot be listed or entry that cannot be
    /// classified, wherever it is in the tree. Deletion failures only abort in strict mode.
    pub fn walk(
        &self,
        root: &Path,
        predicates: &PredicateSet,
        exclusions: &PredicateSet,
        tally: &mut WalkTally,
    ) -> Result<()> {
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            if self.is_stopping_point(&dir) {
                debug!("not entering stopping path {}", dir.display());
                continue;
            }
            debug!("entering {}", dir.display());
            tally.directories_visited.increment();

            let mut names = self.reader.list(&dir)?;
            names.sort();

            let mut subdirs = Vec::new();
            for name in names {
                let path = dir.join(&name);
                match self.reader.kind(&path)? {
                    EntryKind::File => self.visit_file(&path, predicates, exclusions, tally)?,
                    EntryKind::Directory => subdirs.push(path),
                    EntryKind::Other => trace!("skipping {}", path.display()),
                }
            }
            // Reversed so the stack yields subdirectories in name order.
            pending.extend(subdirs.into_iter().rev());
        }

        Ok(())
    }

    fn visit_file(
        &self,
        path: &Path,
        predicates: &PredicateSet,
        exclusions: &PredicateSet,
        tally: &mut WalkTally,
    ) -> Result<()> {
        tally.files_visited.increment();
        let text = path.to_string_lossy();

        if let Some(rule) = exclusions.first_match(&text) {
            debug!("keeping {} (excluded by {})", path.display(), rule.source());
            return Ok(());
        }
        let Some(rule) = predicates.first_match(&text) else {
            return Ok(());
        };

        debug!("{} matches {}", path.display(), rule.source());
        self.deleter.delete_matched(path, tally)
    }

    fn is_stopping_point(&self, dir: &Path) -> bool {
        self.stop_at.is_some_and(|stop| stop == dir)
    }
}
