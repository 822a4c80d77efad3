//! Reading matrix pairs from whitespace-delimited text.
//!
//! The layout is `m1 n1` followed by `m1 * n1` values, then `m2 n2`
//! followed by `m2 * n2` values. Line breaks carry no meaning.
//!
//! Tokens are pulled one line at a time, so reading stops at the line
//! holding the last value of the second matrix. Later lines are not read.

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use log::debug;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

struct Tokens<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|_| MatmulError::InvalidInput)?;
            if read == 0 {
                return Err(MatmulError::InvalidInput);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }

    fn dims(&mut self) -> Result<(usize, usize)> {
        let m: i64 = self.next_token()?.parse().map_err(|_| MatmulError::InvalidInput)?;
        let n: i64 = self.next_token()?.parse().map_err(|_| MatmulError::InvalidInput)?;
        if m < 1 || n < 1 {
            return Err(MatmulError::InvalidSize);
        }
        let m = usize::try_from(m).map_err(|_| MatmulError::InvalidSize)?;
        let n = usize::try_from(n).map_err(|_| MatmulError::InvalidSize)?;
        Ok((m, n))
    }

    fn matrix(&mut self) -> Result<Matrix> {
        let (rows, cols) = self.dims()?;
        let len = rows.checked_mul(cols).ok_or(MatmulError::InvalidSize)?;

        let data = (0..len)
            .map(|_| {
                self.next_token()?
                    .parse::<f64>()
                    .map_err(|_| MatmulError::InvalidInput)
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Matrix::from_vec(rows, cols, data))
    }
}

/// Reads two matrices from `reader` and checks they can be multiplied.
///
/// Stops after the line holding the last value of the second matrix;
/// later lines are left in the stream.
pub fn read_pair<R: BufRead>(reader: R) -> Result<(Matrix, Matrix)> {
    let mut tokens = Tokens::new(reader);
    let a = tokens.matrix()?;
    let b = tokens.matrix()?;

    if a.cols != b.rows {
        debug!(
            "inner dimensions differ: {}x{} * {}x{}",
            a.rows, a.cols, b.rows, b.cols
        );
        return Err(MatmulError::InvalidSize);
    }

    Ok((a, b))
}

/// Parses a matrix pair from in-memory text.
pub fn parse_pair(text: &str) -> Result<(Matrix, Matrix)> {
    read_pair(text.as_bytes())
}

/// Reads a matrix pair from the file at `path`.
pub fn read_pair_from_file(path: &Path) -> Result<(Matrix, Matrix)> {
    debug!("reading matrices from {}", path.display());
    let file = File::open(path).map_err(|source| MatmulError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;
    read_pair(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn test_parse_pair() {
        let (a, b) = parse_pair("2 2\n1 2\n3 4\n2 2\n5 6 7 8\n").unwrap();
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(a.data, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.data, vec![5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_layout_ignores_line_breaks() {
        let (a, b) = parse_pair("1 3 1 0 0 3\n1\n7\n8 9").unwrap();
        assert_eq!(a.shape(), (1, 3));
        assert_eq!(b.shape(), (3, 1));
        assert_eq!(b.data, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_non_numeric_value() {
        let err = parse_pair("1 1 x 1 1 2").unwrap_err();
        assert!(matches!(err, MatmulError::InvalidInput));
    }

    #[test]
    fn test_truncated_input() {
        let err = parse_pair("2 2 1 2 3").unwrap_err();
        assert!(matches!(err, MatmulError::InvalidInput));

        let err = parse_pair("").unwrap_err();
        assert!(matches!(err, MatmulError::InvalidInput));
    }

    #[test]
    fn test_non_positive_size() {
        for text in ["0 2", "2 0", "-1 3", "3 -4"] {
            let err = parse_pair(text).unwrap_err();
            assert!(matches!(err, MatmulError::InvalidSize), "{}", text);
        }
    }

    #[test]
    fn test_fractional_size_is_input_error() {
        let err = parse_pair("1.5 2").unwrap_err();
        assert!(matches!(err, MatmulError::InvalidInput));
    }

    #[test]
    fn test_inner_dimension_mismatch() {
        let err = parse_pair("1 2 1 2 1 2 3 4").unwrap_err();
        assert!(matches!(err, MatmulError::InvalidSize));
    }

    #[test]
    fn test_missing_file() {
        let err = read_pair_from_file(Path::new("/nonexistent/matrices.txt")).unwrap_err();
        assert!(matches!(err, MatmulError::InvalidPath { .. }));
        assert_eq!(err.exit_code(), 120);
    }

    /// Hands out `data` on the first read, then fails every later read,
    /// like a terminal that is still open.
    struct OpenTerminal {
        data: Option<&'static [u8]>,
    }

    impl Read for OpenTerminal {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    buf[..data.len()].copy_from_slice(data);
                    Ok(data.len())
                }
                None => Err(io::Error::other("terminal still open")),
            }
        }
    }

    #[test]
    fn test_stops_after_last_value() {
        let terminal = OpenTerminal {
            data: Some(&b"2 2\n1 2\n3 4\n2 2\n5 6\n7 8\n"[..]),
        };
        let (a, b) = read_pair(BufReader::new(terminal)).unwrap();
        assert_eq!(a.data, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.data, vec![5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_read_error_before_last_value() {
        let terminal = OpenTerminal {
            data: Some(&b"2 2\n1 2\n3 4\n2 2\n5 6\n"[..]),
        };
        let err = read_pair(BufReader::new(terminal)).unwrap_err();
        assert!(matches!(err, MatmulError::InvalidInput));
    }

    #[test]
    fn test_trailing_input_left_unread() {
        let mut stream = "1 1 2\n1 1 3\nrest of stream\n".as_bytes();
        read_pair(&mut stream).unwrap();
        assert_eq!(stream, b"rest of stream\n");
    }

    #[test]
    fn test_read_pair_from_reader() {
        let (a, b) = read_pair("1 1 2.5\n1 1 -4".as_bytes()).unwrap();
        assert_eq!(a.data, vec![2.5]);
        assert_eq!(b.data, vec![-4.0]);
    }
}
