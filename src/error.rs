//! Error types for cost matrix construction and tour validation.

use thiserror::Error;

/// Errors raised when input violates a solver precondition.
///
/// Unreachable edges, infeasible graphs and timeouts are not errors: they
/// surface as unbounded scores or sentinel [`SolutionStats`](crate::models::SolutionStats).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// The matrix has no cities.
    #[error("cost matrix must contain at least one city")]
    EmptyGraph,

    /// A row length differs from the number of rows.
    #[error("cost matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// An edge carries a negative cost.
    #[error("negative cost {cost} on edge {from} -> {to}")]
    NegativeCost {
        /// Source city.
        from: usize,
        /// Destination city.
        to: usize,
        /// The cost found.
        cost: f64,
    },

    /// An edge cost is NaN.
    #[error("cost on edge {from} -> {to} is NaN")]
    NanCost {
        /// Source city.
        from: usize,
        /// Destination city.
        to: usize,
    },

    /// A tour is not a permutation of the graph's cities.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, TspError>;
