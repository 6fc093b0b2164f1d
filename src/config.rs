// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::logging;
use crate::options::OutputFormat;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use wildsweep_domain::InclusionRequest;
use wildsweep_infra::load_request;
use wildsweep_usecase::{RunOptions, WalkStrategy};

/// Everything `main` needs once the command line has been resolved.
#[derive(Debug)]
pub struct Config {
    pub request: InclusionRequest,
    pub run: RunOptions,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let request = match &args.selection.request {
            Some(path) => load_request(path)?,
            None => request_from_flags(&args),
        };
        let strategy = if args.behavior.single_pass {
            WalkStrategy::SinglePass
        } else {
            WalkStrategy::PerPattern
        };

        Ok(Self {
            request,
            run: RunOptions {
                strategy,
                strict: args.behavior.strict,
            },
            format: args.output.format,
            log_level: logging::level_for(args.output.verbose, args.output.quiet),
        })
    }
}

fn request_from_flags(args: &Args) -> InclusionRequest {
    let starting = args.starting_path.as_deref().map(path_text).unwrap_or_default();
    let stopping = args.selection.stop_at.as_deref().map(path_text).unwrap_or_default();
    // No `-x` means no exclusion list, not an empty one.
    let exclude = &args.selection.exclude;
    let excluded = (!exclude.is_empty()).then(|| exclude.clone());
    InclusionRequest::new(starting, stopping, args.selection.include.clone(), excluded)
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
