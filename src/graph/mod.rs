//! Directed cost graphs.
//!
//! Provides a dense cost matrix for asymmetric TSP instances.

mod matrix;

pub use matrix::CostMatrix;
