//! Dense matrix multiplication with a row-partitioned multi-threaded path.
//!
//! Two entry points compute the same thing. [`multiply`] is the plain
//! i-j-k triple loop; [`multiply_parallel`] splits the output rows into
//! contiguous chunks and runs that same loop on each chunk in its own
//! thread. Each output cell is produced by exactly one thread with the
//! same summation order, so both return bit-identical results.
//!
//! ## Usage
//!
//! ```
//! use matmul_rows::multiply;
//!
//! let a = vec![1.0, 2.0, 3.0, 4.0];
//! let b = vec![5.0, 6.0, 7.0, 8.0];
//!
//! let c = multiply(&a, &b, 2, 2, 2, 2);
//! assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use matmul_rows::{multiply, multiply_parallel};
//!
//! let a = vec![1.5f64; 64 * 64];
//! let b = vec![0.25f64; 64 * 64];
//!
//! let c = multiply_parallel(&a, &b, 64, 64, 64, 64);
//! assert_eq!(c, multiply(&a, &b, 64, 64, 64, 64));
//! ```
//!
//! ## Layout
//!
//! Matrices are flat `&[f64]` in row-major order: A is m1×n1, B is m2×n2,
//! C is m1×n2. The caller guarantees `n1 == m2` and the slice lengths;
//! the multiplication routines don't check them (debug builds assert).
//!
//! The rest of the crate is the command-line tool around this: flag
//! parsing ([`cli`]), text input ([`input`]), random matrices
//! ([`generate`]) and the run loop ([`app`]).

pub mod app;
pub mod cli;
pub mod error;
pub mod generate;
pub mod input;
pub mod matrix;
pub mod threaded;

pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use threaded::rows_mt::{matmul_rows_mt, matmul_rows_mt_with};

/// Matrix multiply: C = A * B, single-threaded.
///
/// A is m1×n1, B is m2×n2, both row-major; returns C (m1×n2). Requires
/// `n1 == m2`. Each cell is summed over the inner index in ascending
/// order, starting from zero.
pub fn multiply(a: &[f64], b: &[f64], m1: usize, n1: usize, m2: usize, n2: usize) -> Vec<f64> {
    matmul_naive_ijk(a, b, m1, n1, m2, n2)
}

/// Same as [`multiply`] but splits the output rows across threads.
///
/// Uses one thread per available core (1 if the platform can't say).
/// Threads are created for this call and joined before it returns.
pub fn multiply_parallel(
    a: &[f64],
    b: &[f64],
    m1: usize,
    n1: usize,
    m2: usize,
    n2: usize,
) -> Vec<f64> {
    matmul_rows_mt(a, b, m1, n1, m2, n2)
}

/// [`multiply_parallel`] with an explicit thread count.
///
/// `workers == 1` degenerates to a single chunk covering every row.
pub fn multiply_parallel_with(
    a: &[f64],
    b: &[f64],
    m1: usize,
    n1: usize,
    m2: usize,
    n2: usize,
    workers: usize,
) -> Vec<f64> {
    matmul_rows_mt_with(a, b, m1, n1, m2, n2, workers)
}
