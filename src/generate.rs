//! Random test matrices for generation mode.
//!
//! There is no process-wide generator: every function takes the RNG (or
//! the seed to build one) from its caller, so a run is reproducible from
//! its seed.

use crate::matrix::Matrix;
use crate::threaded::generate_mt::random_fill_mt;
use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound (inclusive) of generated values.
pub const VALUE_LOW: f64 = 1.0;
/// Upper bound (exclusive) of generated values.
pub const VALUE_HIGH: f64 = 10.0;
/// Smallest generated dimension.
pub const SIZE_LOW: usize = 1;
/// Largest generated dimension.
pub const SIZE_HIGH: usize = 5;

/// Distribution of generated matrix entries.
pub fn value_distribution() -> Uniform<f64> {
    Uniform::new(VALUE_LOW, VALUE_HIGH)
}

/// Picks `(m1, n1, m2, n2)` with every size in `[SIZE_LOW, SIZE_HIGH]`
/// and `m2 == n1`, so the pair is always multipliable.
pub fn random_dims<R: Rng + ?Sized>(rng: &mut R) -> (usize, usize, usize, usize) {
    let sizes = Uniform::new_inclusive(SIZE_LOW, SIZE_HIGH);
    let m1 = sizes.sample(rng);
    let n1 = sizes.sample(rng);
    let n2 = sizes.sample(rng);
    (m1, n1, n1, n2)
}

/// Fills a `rows × cols` matrix from `rng`, in row-major order.
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    let dist = value_distribution();
    let data = (0..rows * cols).map(|_| dist.sample(rng)).collect();
    Matrix::from_vec(rows, cols, data)
}

/// Fresh base seed from OS entropy, used when the caller gave none.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}

/// Generates a random multipliable pair `(A, B)` from `seed`.
///
/// Dimensions always come from a single RNG seeded with `seed`. With
/// `workers == None` the values come from that same RNG; with
/// `Some(w)` each matrix is filled by `w` threads, each with its own
/// RNG derived from `seed` and the worker index. Output for a given
/// seed therefore also depends on the worker count.
pub fn random_pair(seed: u64, workers: Option<usize>) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (m1, n1, m2, n2) = random_dims(&mut rng);
    debug!("generating {}x{} and {}x{} (seed {})", m1, n1, m2, n2, seed);

    match workers {
        None => {
            let a = random_matrix(m1, n1, &mut rng);
            let b = random_matrix(m2, n2, &mut rng);
            (a, b)
        }
        Some(w) => {
            let mut a = Matrix::zeros(m1, n1);
            let mut b = Matrix::zeros(m2, n2);
            // Distinct streams for A and B.
            random_fill_mt(&mut a.data, w, seed);
            random_fill_mt(&mut b.data, w, seed.wrapping_add(1));
            (a, b)
        }
    }
}
