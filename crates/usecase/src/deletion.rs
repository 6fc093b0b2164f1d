// crates/usecase/src/deletion.rs
use std::path::Path;

use log::debug;
use wildsweep_ports::{filesystem::FileRemover, progress::ProgressSink};
use wildsweep_shared_kernel::Result;

use crate::tally::WalkTally;

/// Removes matched files. All failure handling for removals lives here.
#[derive(Clone, Copy)]
pub struct DeletionEngine<'a> {
    remover: &'a dyn FileRemover,
    sink: &'a dyn ProgressSink,
    strict: bool,
}

impl<'a> DeletionEngine<'a> {
    pub fn new(remover: &'a dyn FileRemover, sink: &'a dyn ProgressSink, strict: bool) -> Self {
        Self {
            remover,
            sink,
            strict,
        }
    }

    /// Remove one file. No retries.
    ///
    /// # Errors
    /// Propagates the remover's deletion error.
    pub fn delete_file(&self, path: &Path) -> Result<()> {
        self.remover.remove(path)
    }

    /// Remove a matched file and apply the failure policy.
    ///
    /// Outside strict mode a failed removal is reported to the sink and recorded, and the
    /// walk carries on.
    ///
    /// # Errors
    /// Returns the deletion error in strict mode, or any error raised by the sink.
    pub fn delete_matched(&self, path: &Path, tally: &mut WalkTally) -> Result<()> {
        match self.delete_file(path) {
            Ok(()) => {
                debug!("removed {}", path.display());
                tally.record_deleted(path);
                self.sink.on_deleted(path)
            }
            Err(err) if self.strict => Err(err),
            Err(err) => {
                debug!("removal failed, continuing: {err}");
                tally.record_failure(path, &err);
                self.sink.on_failed(path, &err)
            }
        }
    }
}
