//! Multi-threaded row-partitioned multiplication.

use crate::matrix::naive_ijk::matmul_rows_ijk;
use crate::threaded::partition::{hardware_workers, partition};
use log::{debug, trace};
use std::thread;

/// Multi-threaded matrix multiplication, one thread per hardware unit.
///
/// Same contract and same result, bit for bit, as
/// [`matmul_naive_ijk`](crate::matrix::naive_ijk::matmul_naive_ijk).
pub fn matmul_rows_mt(
    a: &[f64],
    b: &[f64],
    m1: usize,
    n1: usize,
    m2: usize,
    n2: usize,
) -> Vec<f64> {
    matmul_rows_mt_with(a, b, m1, n1, m2, n2, hardware_workers())
}

/// Multi-threaded matrix multiplication with an explicit worker count.
///
/// Splits the output rows with [`partition`], spawns one scoped thread
/// per range (idle ranges included) and joins them all before returning.
/// Each thread owns a disjoint `&mut` slice of C, so the workers never
/// share a writable location.
///
/// A panic in any worker propagates out of this call.
///
/// # Arguments
///
/// * `workers` - Number of threads; 0 is treated as 1
pub fn matmul_rows_mt_with(
    a: &[f64],
    b: &[f64],
    m1: usize,
    n1: usize,
    m2: usize,
    n2: usize,
    workers: usize,
) -> Vec<f64> {
    debug_assert_eq!(a.len(), m1 * n1, "A: expected {}x{}={} elements", m1, n1, m1 * n1);
    debug_assert_eq!(b.len(), m2 * n2, "B: expected {}x{}={} elements", m2, n2, m2 * n2);
    debug_assert_eq!(n1, m2, "inner dimensions differ: {} vs {}", n1, m2);

    let mut c = vec![0.0; m1 * n2];
    let ranges = partition(m1, workers);
    debug!(
        "row-parallel matmul {}x{} * {}x{} on {} workers",
        m1,
        n1,
        m2,
        n2,
        ranges.len()
    );

    thread::scope(|s| {
        let mut rest = c.as_mut_slice();
        for (tid, rows) in ranges.into_iter().enumerate() {
            let (mine, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * n2);
            rest = tail;

            trace!("worker {} -> rows {:?}", tid, rows);
            s.spawn(move || matmul_rows_ijk(a, b, mine, rows, n1, n2));
        }
    });

    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::matmul_naive_ijk;

    #[test]
    fn test_rows_mt_matches_naive_exactly() {
        let (m, n, k) = (37, 23, 41);
        let a: Vec<f64> = (0..m * k).map(|i| ((i * 7) % 13) as f64 * 0.37 - 1.1).collect();
        let b: Vec<f64> = (0..k * n).map(|i| ((i * 5) % 11) as f64 * 1.9 + 0.013).collect();

        let expected = matmul_naive_ijk(&a, &b, m, k, k, n);
        for workers in [1, 2, 3, 4, 7, 36, 37, 64] {
            let got = matmul_rows_mt_with(&a, &b, m, k, k, n, workers);
            assert_eq!(expected, got, "workers = {}", workers);
        }
    }

    #[test]
    fn test_zero_workers_runs_single_chunk() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        assert_eq!(
            matmul_rows_mt_with(&a, &b, 2, 2, 2, 2, 0),
            vec![19.0, 22.0, 43.0, 50.0]
        );
    }

    #[test]
    fn test_default_worker_count() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![7.0, 8.0, 9.0];
        assert_eq!(matmul_rows_mt(&a, &b, 1, 3, 3, 1), vec![7.0]);
    }
}
