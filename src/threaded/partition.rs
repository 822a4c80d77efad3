//! Static row partitioning for the threaded paths.

use std::ops::Range;

/// Worker count from the platform's concurrency estimate.
///
/// Falls back to 1 when the platform can't tell.
pub fn hardware_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Rows handed to each worker: `1 + len / workers`.
///
/// This always rounds up, even when `len` divides evenly, so trailing
/// workers can end up with nothing to do.
pub fn chunk_size(len: usize, workers: usize) -> usize {
    1 + len / workers.max(1)
}

/// Splits `[0, len)` into one contiguous range per worker.
///
/// Exactly `workers` ranges come back (at least one), in order. Worker `t`
/// gets `[t * chunk, min((t + 1) * chunk, len))`; a worker whose start is
/// already past `len` gets an empty range at `len` and is still scheduled.
///
/// ```
/// use matmul_rows::threaded::partition::partition;
///
/// assert_eq!(partition(4, 2), vec![0..3, 3..4]);
/// assert_eq!(partition(2, 4), vec![0..1, 1..2, 2..2, 2..2]);
/// ```
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = chunk_size(len, workers);

    let ranges: Vec<_> = (0..workers)
        .map(|t| {
            let end = ((t + 1) * chunk).min(len);
            let begin = (t * chunk).min(end);
            begin..end
        })
        .collect();

    debug_assert!(
        covers_exactly(&ranges, len),
        "row chunks overlap or leave gaps: {:?} for len {}",
        ranges,
        len
    );

    ranges
}

/// True when `ranges` are ordered, disjoint and union to `[0, len)`.
pub fn covers_exactly(ranges: &[Range<usize>], len: usize) -> bool {
    let mut next = 0;
    for r in ranges {
        if r.start != next || r.end < r.start {
            return false;
        }
        next = r.end;
    }
    next == len
}
