//! Solver trait.

use crate::graph::CostMatrix;
use crate::timer::Timer;

use super::SolutionStats;

/// An anytime TSP strategy.
///
/// Implementations return every strictly improving tour they find within the
/// timer's budget, oldest first, or a single sentinel record if none.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::models::{Solver, SolutionStats};
/// use u_tsp::Timer;
///
/// struct Identity;
///
/// impl Solver for Identity {
///     fn name(&self) -> &'static str { "identity" }
///     fn solve(&self, graph: &CostMatrix, timer: &Timer) -> Vec<SolutionStats> {
///         let tour: Vec<usize> = (0..graph.size()).collect();
///         let score = u_tsp::evaluation::score_tour(&tour, graph);
///         vec![SolutionStats {
///             tour,
///             score,
///             time: timer.elapsed(),
///             max_queue_size: 1,
///             n_nodes_expanded: 1,
///             n_nodes_pruned: 0,
///             n_leaves_covered: 1,
///             fraction_leaves_covered: 0.0,
///         }]
///     }
/// }
///
/// let graph = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 0.0]]).expect("valid");
/// let stats = Identity.solve(&graph, &Timer::new(Duration::from_secs(1)));
/// assert_eq!(stats[0].score, 3.0);
/// ```
pub trait Solver {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Searches `graph` until done or `timer` expires.
    fn solve(&self, graph: &CostMatrix, timer: &Timer) -> Vec<SolutionStats>;
}
