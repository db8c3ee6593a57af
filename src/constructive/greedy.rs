//! Greedy nearest-neighbor construction.
//!
//! From a start city, repeatedly move to the cheapest reachable unvisited
//! city. A city with no reachable unvisited neighbor ends the attempt.
//! Running this from every start gives a cheap incumbent for branch-and-bound.
//!
//! # Complexity
//!
//! O(n²) per start, O(n³) over all starts.

use crate::evaluation::score_tour;
use crate::graph::CostMatrix;
use crate::models::{SolutionStats, Solver};
use crate::search::StatsRecorder;
use crate::timer::Timer;

/// Result of one nearest-neighbor attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Construction {
    /// Every city visited. `score` includes the closing edge and may be
    /// infinite if that edge is unreachable.
    Complete {
        /// Tour starting at the chosen city.
        tour: Vec<usize>,
        /// Closed tour cost.
        score: f64,
    },
    /// Stuck before visiting every city.
    DeadEnd {
        /// Path walked before getting stuck.
        path: Vec<usize>,
    },
}

/// Walks nearest neighbors from `start`.
///
/// Ties go to the lowest city index.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::constructive::{nearest_neighbor, Construction};
///
/// let inf = f64::INFINITY;
/// let graph = CostMatrix::from_rows(&[
///     vec![0.0, 9.0, inf, 8.0, inf],
///     vec![inf, 0.0, 4.0, inf, 2.0],
///     vec![inf, 3.0, 0.0, 4.0, inf],
///     vec![inf, 6.0, 7.0, 0.0, 12.0],
///     vec![1.0, inf, inf, 10.0, 0.0],
/// ])
/// .expect("valid");
///
/// assert_eq!(
///     nearest_neighbor(&graph, 1),
///     Construction::Complete { tour: vec![1, 4, 0, 3, 2], score: 21.0 }
/// );
/// assert!(matches!(nearest_neighbor(&graph, 0), Construction::DeadEnd { .. }));
/// ```
pub fn nearest_neighbor(graph: &CostMatrix, start: usize) -> Construction {
    let n = graph.size();
    let mut remaining: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;

    while !remaining.is_empty() {
        let Some((next, _)) = graph.nearest_reachable(current, &remaining) else {
            return Construction::DeadEnd { path: tour };
        };
        remaining.retain(|&c| c != next);
        tour.push(next);
        current = next;
    }

    let score = score_tour(&tour, graph);
    Construction::Complete { tour, score }
}

/// Cheapest feasible nearest-neighbor tour over all start cities.
///
/// Stops early, keeping what it has, once `timer` expires. Returns `None` if
/// no start produced a feasible tour.
pub fn best_greedy_tour(graph: &CostMatrix, timer: &Timer) -> Option<(Vec<usize>, f64)> {
    let mut best: Option<(Vec<usize>, f64)> = None;
    for start in 0..graph.size() {
        if timer.is_expired() {
            break;
        }
        if let Construction::Complete { tour, score } = nearest_neighbor(graph, start) {
            if score.is_finite() && best.as_ref().map_or(true, |(_, b)| score < *b) {
                best = Some((tour, score));
            }
        }
    }
    best
}

/// Greedy baseline: one nearest-neighbor attempt per start city.
///
/// Emits a record each time a start beats every earlier start.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Solver for Greedy {
    fn name(&self) -> &'static str {
        "greedy_tour"
    }

    fn solve(&self, graph: &CostMatrix, timer: &Timer) -> Vec<SolutionStats> {
        let mut recorder = StatsRecorder::new(graph.size(), 0, timer);
        recorder.observe_queue(1);

        for start in 0..graph.size() {
            if timer.is_expired() {
                break;
            }
            match nearest_neighbor(graph, start) {
                Construction::Complete { tour, score } => {
                    recorder.on_expanded_many((tour.len() - 1) as u64);
                    if score.is_finite() {
                        recorder.on_explored(&tour);
                        recorder.offer(&tour, score);
                    } else {
                        recorder.on_pruned(&tour);
                    }
                }
                Construction::DeadEnd { path } => {
                    recorder.on_expanded_many((path.len() - 1) as u64);
                    recorder.on_pruned(&path);
                }
            }
        }

        recorder.finish()
    }
}
