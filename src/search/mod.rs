//! Tree search over partial tours.
//!
//! - [`BranchAndBound`] — Reduced-cost branch-and-bound, depth-first or best-first
//! - [`DepthFirst`] — Exhaustive enumeration without bounds
//! - [`Frontier`] — Stack or bound-ordered heap of pending partial tours
//! - [`StatsRecorder`] — Incumbent, counters and coverage shared by all strategies

mod bnb;
mod config;
mod dfs;
mod frontier;
mod recorder;

pub use bnb::{solve_with_budget, BranchAndBound, SearchOutcome, SearchStatus};
pub use config::{SearchConfig, SearchOrder};
pub use dfs::DepthFirst;
pub use frontier::Frontier;
pub use recorder::StatsRecorder;
