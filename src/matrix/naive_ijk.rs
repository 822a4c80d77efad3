use std::ops::Range;

/// Reference matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. Every output cell is accumulated
/// over `k` in ascending order starting from `0.0`, which pins the
/// rounding: any other path that wants to match this one bit for bit
/// has to produce each cell the same way (see [`matmul_rows_ijk`]).
///
/// The caller guarantees `a.len() == m1 * n1`, `b.len() == m2 * n2` and
/// `n1 == m2`. Nothing is validated here beyond debug assertions.
///
/// # Arguments
///
/// * `a` - Matrix A (m1 × n1), row-major
/// * `b` - Matrix B (m2 × n2), row-major
/// * `m1`, `n1` - Rows and columns of A
/// * `m2`, `n2` - Rows and columns of B
///
/// Returns C (m1 × n2), row-major, freshly allocated.
///
/// # Example
///
/// ```
/// use matmul_rows::matrix::naive_ijk::matmul_naive_ijk;
///
/// let a = vec![1.0, 2.0, 3.0, 4.0];
/// let b = vec![5.0, 6.0, 7.0, 8.0];
///
/// assert_eq!(matmul_naive_ijk(&a, &b, 2, 2, 2, 2), vec![19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn matmul_naive_ijk(
    a: &[f64],
    b: &[f64],
    m1: usize,
    n1: usize,
    m2: usize,
    n2: usize,
) -> Vec<f64> {
    debug_assert_eq!(a.len(), m1 * n1, "A: expected {}x{}={} elements", m1, n1, m1 * n1);
    debug_assert_eq!(b.len(), m2 * n2, "B: expected {}x{}={} elements", m2, n2, m2 * n2);
    debug_assert_eq!(n1, m2, "inner dimensions differ: {} vs {}", n1, m2);

    let mut c = vec![0.0; m1 * n2];
    matmul_rows_ijk(a, b, &mut c, 0..m1, n1, n2);
    c
}

/// Computes output rows `rows` of C = A * B into `c_rows`.
///
/// `c_rows` holds exactly the rows in `rows` (so `rows.len() * n2`
/// elements), starting at row `rows.start`. This is the kernel shared by
/// the sequential and the threaded paths; an empty range is a no-op.
///
/// # Arguments
///
/// * `c_rows` - Output slice for `rows`, row-major, must be zeroed
/// * `rows` - Half-open range of output rows
/// * `n1` - Columns of A (= rows of B)
/// * `n2` - Columns of B and C
pub fn matmul_rows_ijk(
    a: &[f64],
    b: &[f64],
    c_rows: &mut [f64],
    rows: Range<usize>,
    n1: usize,
    n2: usize,
) {
    debug_assert_eq!(c_rows.len(), rows.len() * n2);

    for (local, row) in rows.enumerate() {
        let a_row = &a[row * n1..(row + 1) * n1];
        let c_row = &mut c_rows[local * n2..(local + 1) * n2];
        for (col, cell) in c_row.iter_mut().enumerate() {
            for (inner, &a_val) in a_row.iter().enumerate() {
                *cell += a_val * b[inner * n2 + col];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2x3_times_3x2() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0];

        assert_eq!(
            matmul_naive_ijk(&a, &b, 2, 3, 3, 2),
            vec![58.0, 64.0, 139.0, 154.0]
        );
    }

    #[test]
    fn test_row_range_writes_only_its_rows() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 3x2
        let b = vec![1.0, 0.0, 0.0, 1.0]; // 2x2 identity

        let mut middle = vec![0.0; 2];
        matmul_rows_ijk(&a, &b, &mut middle, 1..2, 2, 2);
        assert_eq!(middle, vec![3.0, 4.0]);

        let mut nothing: Vec<f64> = Vec::new();
        matmul_rows_ijk(&a, &b, &mut nothing, 3..3, 2, 2);
        assert!(nothing.is_empty());
    }

    #[test]
    fn test_single_element() {
        assert_eq!(matmul_naive_ijk(&[3.0], &[-2.5], 1, 1, 1, 1), vec![-7.5]);
    }
}
