//! Benchmark setup error type.

use cartograph_core::{CartographError, GraphError, RouteError};

use crate::network::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic network generation failed.
    #[error("synthetic network generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Indexing the generated roads failed.
    #[error("road indexing failed: {0}")]
    Graph(#[from] GraphError),
    /// Resolving the benchmark query failed.
    #[error("route search failed: {0}")]
    Route(#[from] RouteError),
    /// Planning the generated network failed.
    #[error("network planning failed: {0}")]
    Planning(#[from] CartographError),
}
