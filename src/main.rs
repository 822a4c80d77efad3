//! Command-line entry point.
//!
//! Reads two matrices (stdin, `-f <path>`, or `-g` to generate), multiplies
//! them, and reports the elapsed time. Input problems exit with a
//! dedicated status code:
//!
//! | code | cause                     |
//! |------|---------------------------|
//! | 100  | malformed numeric input   |
//! | 110  | invalid matrix size       |
//! | 120  | file cannot be opened     |
//! | 130  | invalid argument          |

use log::LevelFilter;
use matmul_rows::MatmulError;
use matmul_rows::app::run;
use matmul_rows::cli::{Command, parse_args};
use std::io;
use std::process::ExitCode;

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn fail(err: &MatmulError) -> ExitCode {
    eprintln!("Error: {}", err);
    ExitCode::from(err.exit_code())
}

fn main() -> ExitCode {
    let (config, verbose) = match parse_args(std::env::args_os()) {
        Ok(Command::Info(text)) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run { config, verbose }) => (config, verbose),
        Err(err) => return fail(&err),
    };

    setup_logging(verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&config, stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}
