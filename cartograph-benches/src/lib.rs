//! Benchmark support crate for cartograph.
//!
//! Generates seeded synthetic road networks for the Criterion benchmarks of
//! the spanning forest builder, the route search and the full pipeline.

pub mod error;
pub mod network;
pub mod params;
