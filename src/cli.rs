//! Command-line flags and the run configuration built from them.

use crate::error::{MatmulError, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "matmul-rows",
    version = env!("CARGO_PKG_VERSION"),
    about = "Multiply two dense matrices, optionally across all cores."
)]
pub struct Cli {
    /// Enable multithreading: one thread per core (default is one thread)
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// Read both matrices from this file instead of standard input
    #[arg(short = 'f', long = "file", value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Generate random matrices
    #[arg(short = 'g', long, conflicts_with = "file")]
    pub generate: bool,

    /// Print all matrices
    #[arg(short = 'o', long)]
    pub output: bool,

    /// Number of worker threads in parallel mode (defaults to core count)
    #[arg(short = 't', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,

    /// Seed for generated matrices
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the two input matrices come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Terminal,
    File(PathBuf),
    Generate,
}

/// Everything a run needs, resolved from the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: InputSource,
    pub parallel: bool,
    pub print: bool,
    pub threads: Option<usize>,
    pub seed: Option<u64>,
}

/// What parsing the command line asks `main` to do.
#[derive(Debug)]
pub enum Command {
    /// Help or version text was requested; print it and exit 0.
    Info(String),
    Run { config: RunConfig, verbose: u8 },
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        let source = match (self.file, self.generate) {
            (Some(path), _) => InputSource::File(path),
            (None, true) => InputSource::Generate,
            (None, false) => InputSource::Terminal,
        };

        RunConfig {
            source,
            parallel: self.parallel,
            print: self.output,
            threads: self.threads.map(|n| n as usize),
            seed: self.seed,
        }
    }
}

/// Parses `args` (program name first).
///
/// Help and version are not errors. Every other clap failure becomes
/// [`MatmulError::InvalidArgument`].
pub fn parse_args<I, T>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => {
            let verbose = cli.verbose;
            Ok(Command::Run {
                config: cli.into_config(),
                verbose,
            })
        }
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Command::Info(err.render().to_string()))
            }
            _ => Err(MatmulError::InvalidArgument(first_error_line(
                &err.render().to_string(),
            ))),
        },
    }
}

/// First line of a rendered clap error, without clap's `error: ` tag.
fn first_error_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
