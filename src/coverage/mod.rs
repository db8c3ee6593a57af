//! Search-space coverage statistics.
//!
//! - [`CutTree`] — Fraction of the rooted permutation tree eliminated by pruning
//!   or full exploration

mod cut_tree;

pub use cut_tree::CutTree;
