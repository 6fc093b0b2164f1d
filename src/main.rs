// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use wildsweep::args::Args;
use wildsweep::config::Config;
use wildsweep::{logging, presentation};
use wildsweep_infra::{LogProgress, StdFileSystem};
use wildsweep_usecase::RunDeletion;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args).context("failed to read the request")?;
    logging::init(config.log_level).context("failed to install logger")?;

    let fs = StdFileSystem::new();
    let report = RunDeletion::new(&fs, &fs, &LogProgress)
        .run(&config.request, &config.run)
        .context("deletion run aborted")?;

    presentation::print_report(&report, config.format)
        .context("failed to write the report")?;
    Ok(())
}
