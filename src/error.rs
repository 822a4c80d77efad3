//! Error types for the input and command-line layer.
//!
//! The multiplication routines themselves never fail; everything here is
//! raised before they run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for input acquisition and the run loop
pub type Result<T> = std::result::Result<T, MatmulError>;

/// Exit code for malformed numeric input.
pub const INCORRECT_INPUT_CODE: u8 = 100;
/// Exit code for a non-positive or mismatched matrix size.
pub const INCORRECT_SIZE_CODE: u8 = 110;
/// Exit code for an input file that cannot be opened.
pub const INCORRECT_PATH_CODE: u8 = 120;
/// Exit code for an unrecognised command-line argument.
pub const INCORRECT_ARGUMENT_CODE: u8 = 130;

/// Errors that stop a run before (or while) matrices are acquired
#[derive(Debug, Error)]
pub enum MatmulError {
    /// A token was missing or was not a number
    #[error("Incorrect input")]
    InvalidInput,

    /// A dimension was below 1, or the inner dimensions differ
    #[error("Incorrect matrix size")]
    InvalidSize,

    /// The `-f` path could not be opened or read
    #[error("File cannot be opened: {}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Command-line parsing failed
    #[error("The argument is not valid: {0}")]
    InvalidArgument(String),

    /// Writing to stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl MatmulError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MatmulError::InvalidInput => INCORRECT_INPUT_CODE,
            MatmulError::InvalidSize => INCORRECT_SIZE_CODE,
            MatmulError::InvalidPath { .. } => INCORRECT_PATH_CODE,
            MatmulError::InvalidArgument(_) => INCORRECT_ARGUMENT_CODE,
            MatmulError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            MatmulError::InvalidInput,
            MatmulError::InvalidSize,
            MatmulError::InvalidPath {
                path: PathBuf::from("missing.txt"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            MatmulError::InvalidArgument("-x".into()),
        ];
        let codes: Vec<u8> = errors.iter().map(MatmulError::exit_code).collect();
        assert_eq!(codes, vec![100, 110, 120, 130]);
    }

    #[test]
    fn test_messages() {
        assert_eq!(MatmulError::InvalidInput.to_string(), "Incorrect input");
        assert_eq!(MatmulError::InvalidSize.to_string(), "Incorrect matrix size");
        let err = MatmulError::InvalidPath {
            path: PathBuf::from("data/m.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "File cannot be opened: data/m.txt");
    }
}
