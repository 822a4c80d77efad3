//! Multi-threaded random fill.

use crate::generate::value_distribution;
use crate::threaded::partition::partition;
use log::trace;
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use std::thread;

/// Seed for worker `worker` derived from the run's base seed.
pub fn worker_seed(seed: u64, worker: usize) -> u64 {
    seed ^ (worker as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Fills `data` with uniform values using `workers` threads.
///
/// The flat element range is chunked exactly like the row-parallel
/// multiplication chunks rows. Each worker builds its own `StdRng` from
/// [`worker_seed`], so no generator state is shared between threads.
pub fn random_fill_mt(data: &mut [f64], workers: usize, seed: u64) {
    let ranges = partition(data.len(), workers);
    let dist = value_distribution();
    let dist = &dist;

    thread::scope(|s| {
        let mut rest = data;
        for (tid, range) in ranges.into_iter().enumerate() {
            let (mine, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;

            trace!("fill worker {} -> elements {:?}", tid, range);
            s.spawn(move || {
                let mut rng = StdRng::seed_from_u64(worker_seed(seed, tid));
                for v in mine.iter_mut() {
                    *v = dist.sample(&mut rng);
                }
            });
        }
    });
}
