//! Property-based tests for the spanning forest builder and route search.
//!
//! Generated road maps are checked against independent oracles
//! (Floyd–Warshall distances, Prim spanning weights, breadth-first component
//! counts) and for run-to-run determinism.

mod forest_properties;
mod oracle;
mod route_properties;
mod types;
