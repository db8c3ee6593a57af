//! # u-tsp
//!
//! Anytime solver for the asymmetric Traveling Salesperson Problem. Produces
//! a sequence of improving tours under a wall-clock budget, along with
//! search-space coverage statistics for comparing strategies.
//!
//! ## Modules
//!
//! - [`graph`] — Dense cost matrix with unreachable edges
//! - [`evaluation`] — Tour scoring and validation
//! - [`bound`] — Reduced-cost lower bounds and partial tours
//! - [`coverage`] — Cut tree measuring the eliminated permutation space
//! - [`search`] — Branch-and-bound, exhaustive DFS, frontier, statistics
//! - [`constructive`] — Greedy nearest-neighbor and random-sampling baselines
//! - [`models`] — `SolutionStats` records and the `Solver` trait
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use u_tsp::graph::CostMatrix;
//! use u_tsp::models::Solver;
//! use u_tsp::search::BranchAndBound;
//! use u_tsp::Timer;
//!
//! let graph = CostMatrix::from_rows(&[
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![1.0, 0.0, 6.0, 4.0],
//!     vec![15.0, 7.0, 0.0, 8.0],
//!     vec![6.0, 3.0, 12.0, 0.0],
//! ])
//! .expect("valid matrix");
//!
//! let stats = BranchAndBound::default().solve(&graph, &Timer::new(Duration::from_secs(5)));
//! let best = stats.last().expect("at least one record");
//! assert_eq!(best.score, 21.0);
//! ```

pub mod bound;
pub mod constructive;
pub mod coverage;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod models;
pub mod search;
pub mod timer;

pub use error::{Result, TspError};
pub use timer::Timer;
