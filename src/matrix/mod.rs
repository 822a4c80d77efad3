//! Matrix storage and the sequential reference multiplication.
//!
//! The i-j-k kernel here is the correctness baseline that the threaded
//! path in [`crate::threaded`] reuses row range by row range.

pub mod dense;
pub mod naive_ijk;

pub use dense::Matrix;
