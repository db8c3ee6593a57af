//! Result records and the solver abstraction.
//!
//! Every strategy reports progress as a list of [`SolutionStats`], one per
//! improving tour, behind the common [`Solver`] trait.

mod solver;
mod stats;

pub use solver::Solver;
pub use stats::{SolutionStats, Summary};
