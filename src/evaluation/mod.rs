//! Tour cost evaluation and permutation checks.

mod scorer;

pub use scorer::{score_tour, validate_tour};
