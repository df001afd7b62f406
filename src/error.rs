//! Error types.

use thiserror::Error;

/// Errors produced by evokit operations.
///
/// Contract violations (mismatched arities, out-of-range indices) are not
/// represented here; those panic with an explicit message and are documented
/// under `# Panics` on the respective APIs.
#[derive(Debug, Error)]
pub enum EvoError {
    /// A bucketed adjacency list ran out of arena slots.
    ///
    /// Recoverable by constructing the list with a larger capacity.
    #[error("bucket list capacity exceeded ({capacity} slots)")]
    CapacityExceeded {
        /// Fixed capacity the list was built with.
        capacity: usize,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
