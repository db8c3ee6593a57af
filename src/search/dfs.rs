//! Exhaustive depth-first enumeration.
//!
//! Walks every path from the root with no lower bound; only unreachable
//! edges are pruned. Useful as a reference point for how much the
//! reduced-cost bound saves.

use crate::evaluation::score_tour;
use crate::graph::CostMatrix;
use crate::models::{SolutionStats, Solver};
use crate::timer::Timer;

use super::StatsRecorder;

/// Depth-first search without bounding.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::models::Solver;
/// use u_tsp::search::DepthFirst;
/// use u_tsp::Timer;
///
/// let graph = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 5.0],
///     vec![5.0, 0.0, 1.0],
///     vec![1.0, 5.0, 0.0],
/// ])
/// .expect("valid");
/// let stats = DepthFirst::default().solve(&graph, &Timer::new(Duration::from_secs(1)));
/// assert_eq!(stats.last().map(|s| s.score), Some(3.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst {
    root: usize,
}

impl DepthFirst {
    /// Enumerates tours starting at `root`.
    pub fn with_root(root: usize) -> Self {
        Self { root }
    }
}

impl Solver for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn solve(&self, graph: &CostMatrix, timer: &Timer) -> Vec<SolutionStats> {
        let n = graph.size();
        let root = if self.root < n { self.root } else { 0 };
        let mut recorder = StatsRecorder::new(n, root, timer);
        let mut stack: Vec<Vec<usize>> = vec![vec![root]];
        recorder.observe_queue(stack.len());

        loop {
            if timer.is_expired() {
                break;
            }
            let Some(path) = stack.pop() else {
                break;
            };

            if path.len() == n {
                let score = score_tour(&path, graph);
                recorder.on_explored(&path);
                recorder.offer(&path, score);
                continue;
            }

            recorder.on_expanded();
            let last = path[path.len() - 1];
            for city in 0..n {
                if path.contains(&city) {
                    continue;
                }
                let mut child = Vec::with_capacity(path.len() + 1);
                child.extend_from_slice(&path);
                child.push(city);
                if graph.is_reachable(last, city) {
                    stack.push(child);
                } else {
                    recorder.on_pruned(&child);
                }
            }
            recorder.observe_queue(stack.len());
        }

        recorder.finish()
    }
}
