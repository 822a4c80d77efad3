//! Multi-threaded implementations.
//!
//! Work is split by output row into contiguous chunks, one fresh thread
//! per chunk, joined before the call returns. The partition is static:
//! see [`partition::partition`] for the exact chunk layout.
//!
//! Available implementations:
//! - `rows_mt`: row-partitioned i-j-k multiplication
//! - `generate_mt`: chunked random matrix fill, one RNG per worker

pub mod generate_mt;
pub mod partition;
pub mod rows_mt;
