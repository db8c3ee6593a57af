//! Lower bounds for partial tours.
//!
//! - [`ReducedCostMatrix`] — Row/column reduction with incremental edge commits
//! - [`PartialTour`] — Search node: path, actual cost, admissible bound

mod partial;
mod reduced;

pub use partial::PartialTour;
pub use reduced::ReducedCostMatrix;
