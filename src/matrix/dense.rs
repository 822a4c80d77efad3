//! Owned row-major matrix used by the input and reporting layers.

use std::io::{self, Write};

/// An `rows × cols` matrix of f64, stored flat in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    /// Wraps `data` as a `rows × cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );
        Self { rows, cols, data }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_vec(rows, cols, vec![0.0; rows * cols])
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Writes `Matrix <name>:` followed by one line per row.
    ///
    /// Every value is followed by a single space, so each line ends in a
    /// trailing space.
    pub fn write_named<W: Write>(&self, out: &mut W, name: &str) -> io::Result<()> {
        writeln!(out, "Matrix {}:", name)?;
        for row in self.data.chunks(self.cols.max(1)).take(self.rows) {
            for value in row {
                write!(out, "{} ", value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_layout() {
        let id = Matrix::identity(3);
        assert_eq!(
            id.data,
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(id.get(2, 2), 1.0);
        assert_eq!(id.get(0, 2), 0.0);
    }

    #[test]
    fn test_write_named() {
        let m = Matrix::from_vec(2, 2, vec![19.0, 22.0, 43.0, 50.5]);
        let mut out = Vec::new();
        m.write_named(&mut out, "C").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Matrix C:\n19 22 \n43 50.5 \n"
        );
    }

    #[test]
    #[should_panic(expected = "expected 2x3=6 elements")]
    fn test_from_vec_rejects_wrong_length() {
        Matrix::from_vec(2, 3, vec![0.0; 5]);
    }
}
