//! Baseline constructive strategies.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk from one start, O(n²)
//! - [`Greedy`] — Nearest neighbor from every start; also seeds branch-and-bound
//! - [`RandomSampling`] — Uniform random permutations until the budget runs out

mod greedy;
mod random;

pub use greedy::{best_greedy_tour, nearest_neighbor, Construction, Greedy};
pub use random::{RandomConfig, RandomSampling};
