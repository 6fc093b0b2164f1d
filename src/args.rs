// src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wildsweep",
    version,
    about = "Recursively delete files whose paths match bracketed wildcard tokens",
    after_help = "TOKENS:\n  [.js]                 files ending in .js\n  [**example**]         paths containing 'example'\n  [**example**.js]      paths containing 'example' and ending in .js\n  [**a**b**]            paths containing both 'a' and 'b'\n\nTokens are matched against the whole absolute path, parent directory names included."
)]
pub struct Args {
    #[command(flatten)]
    pub selection: SelectionOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Directory to clean, walked recursively
    #[arg(
        value_name = "STARTING_PATH",
        value_hint = ValueHint::DirPath,
        required_unless_present = "request",
        conflicts_with = "request"
    )]
    pub starting_path: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct SelectionOptions {
    /// Inclusion token; files matching any of them are deleted (repeatable)
    #[arg(
        short = 'i',
        long = "include",
        value_name = "TOKEN",
        required_unless_present = "request",
        help_heading = "Selection"
    )]
    pub include: Vec<String>,

    /// Exclusion token; matching files are never deleted (repeatable)
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "TOKEN",
        help_heading = "Selection"
    )]
    pub exclude: Vec<String>,

    /// Directory that is never entered
    #[arg(
        long,
        value_name = "PATH",
        value_hint = ValueHint::DirPath,
        help_heading = "Selection"
    )]
    pub stop_at: Option<PathBuf>,

    /// Read the whole request from a JSON or YAML document
    #[arg(
        long,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        conflicts_with_all = ["include", "exclude", "stop_at"],
        help_heading = "Selection"
    )]
    pub request: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Walk the tree once and test every token against each file
    #[arg(long, help_heading = "Behavior")]
    pub single_pass: bool,

    /// Abort on the first file that cannot be deleted
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Output")]
    pub quiet: bool,
}
