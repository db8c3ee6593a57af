//! Branch-and-bound over partial tours.
//!
//! # Algorithm
//!
//! 1. Seed the incumbent with the best greedy tour (if any).
//! 2. Push the root city with its reduced-cost bound.
//! 3. Pop a partial tour. Prune it if its bound no longer beats the
//!    incumbent; score it if complete; otherwise push every child whose
//!    edge is reachable and whose bound beats the incumbent.
//! 4. Stop when the frontier empties (the incumbent is optimal) or the
//!    timer expires (the incumbent is the best found).
//!
//! Every abandoned path is cut from the coverage tree, so an exhausted
//! search reports full coverage.

use std::time::Duration;

use crate::bound::PartialTour;
use crate::constructive::best_greedy_tour;
use crate::evaluation::score_tour;
use crate::graph::CostMatrix;
use crate::models::{SolutionStats, Solver};
use crate::timer::Timer;

use super::{Frontier, SearchConfig, SearchOrder, StatsRecorder};

/// Phases of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seeding,
    Searching,
    Done,
    TimedOut,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Frontier emptied: the last incumbent is optimal, or no tour exists.
    Exhausted,
    /// Budget ran out: the last incumbent is the best found, optimality unproven.
    TimedOut,
}

/// Result of [`BranchAndBound::run`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Improving tours in discovery order, or a single sentinel.
    pub stats: Vec<SolutionStats>,
    /// Termination mode.
    pub status: SearchStatus,
    /// Fraction of the permutation tree eliminated when the search stopped.
    pub coverage: f64,
}

impl SearchOutcome {
    /// The final record.
    pub fn best(&self) -> Option<&SolutionStats> {
        self.stats.last()
    }

    /// Returns `true` if the search proved its result.
    pub fn is_exhausted(&self) -> bool {
        self.status == SearchStatus::Exhausted
    }
}

/// Anytime branch-and-bound with reduced-cost lower bounds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::search::{BranchAndBound, SearchConfig, SearchStatus};
/// use u_tsp::Timer;
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
/// let outcome = BranchAndBound::new(SearchConfig::default())
///     .run(&graph, &Timer::new(Duration::from_secs(10)));
/// assert_eq!(outcome.status, SearchStatus::Exhausted);
/// assert_eq!(outcome.best().map(|s| s.score), Some(21.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBound {
    config: SearchConfig,
}

impl BranchAndBound {
    /// Creates a solver with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches `graph` until the frontier empties or `timer` expires.
    pub fn run(&self, graph: &CostMatrix, timer: &Timer) -> SearchOutcome {
        let n = graph.size();
        let root = if self.config.root < n {
            self.config.root
        } else {
            log::warn!(
                "root {} out of range for {} cities, using 0",
                self.config.root,
                n
            );
            0
        };
        let mut recorder = StatsRecorder::new(n, root, timer);

        // The root is queued before seeding so every record sees it
        let root_tour = PartialTour::root(graph, root);
        let root_bound = root_tour.bound();
        let mut frontier = Frontier::new(self.config.order);
        frontier.push(root_tour);
        recorder.observe_queue(frontier.len());

        let mut phase = Phase::Seeding;
        log::debug!("{:?}: {} cities, {:?} order", phase, n, self.config.order);
        if self.config.seed_with_greedy {
            if let Some((tour, score)) = best_greedy_tour(graph, timer) {
                recorder.offer(&tour, score);
            }
        }

        phase = Phase::Searching;
        log::debug!(
            "{:?}: root bound {:.3}, incumbent {:.3}",
            phase,
            root_bound,
            recorder.best_score()
        );

        let mut path = Vec::with_capacity(n);
        phase = loop {
            if frontier.is_empty() {
                break Phase::Done;
            }
            if timer.is_expired() {
                break Phase::TimedOut;
            }
            let Some(node) = frontier.pop() else {
                break Phase::Done;
            };

            // Bounds go stale as the incumbent improves
            if node.bound() >= recorder.best_score() {
                recorder.on_pruned(node.path());
                continue;
            }

            if node.is_complete() {
                let score = score_tour(node.path(), graph);
                recorder.on_explored(node.path());
                recorder.offer(node.path(), score);
                continue;
            }

            recorder.on_expanded();
            let last = node.last();
            path.clear();
            path.extend_from_slice(node.path());
            path.push(last);
            let tail = path.len() - 1;
            for city in node.unvisited() {
                if !graph.is_reachable(last, city) {
                    path[tail] = city;
                    recorder.on_pruned(&path);
                    continue;
                }
                let child = node.branch(graph, city);
                if child.bound() >= recorder.best_score() {
                    recorder.on_pruned(child.path());
                    continue;
                }
                frontier.push(child);
            }
            recorder.observe_queue(frontier.len());
        };

        let status = match phase {
            Phase::TimedOut => SearchStatus::TimedOut,
            _ => SearchStatus::Exhausted,
        };
        log::info!(
            "{:?} after {:.4}s: best {:.3}, expanded {}, pruned {}, max queue {}, coverage {:.4}%",
            phase,
            timer.elapsed().as_secs_f64(),
            recorder.best_score(),
            recorder.n_nodes_expanded(),
            recorder.n_nodes_pruned(),
            recorder.max_queue_size(),
            recorder.coverage().fraction_leaves_covered() * 100.0
        );

        let coverage = recorder.coverage().fraction_leaves_covered();
        SearchOutcome {
            stats: recorder.finish(),
            status,
            coverage,
        }
    }
}

impl Solver for BranchAndBound {
    fn name(&self) -> &'static str {
        match self.config.order {
            SearchOrder::DepthFirst => "branch_and_bound",
            SearchOrder::BestFirst => "branch_and_bound_smart",
        }
    }

    fn solve(&self, graph: &CostMatrix, timer: &Timer) -> Vec<SolutionStats> {
        self.run(graph, timer).stats
    }
}

/// Convenience: best-first branch-and-bound with a budget.
pub fn solve_with_budget(graph: &CostMatrix, budget: Duration) -> SearchOutcome {
    BranchAndBound::default().run(graph, &Timer::new(budget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::validate_tour;

    const INF: f64 = f64::INFINITY;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0.0, 9.0, INF, 8.0, INF],
            vec![INF, 0.0, 4.0, INF, 2.0],
            vec![INF, 3.0, 0.0, 4.0, INF],
            vec![INF, 6.0, 7.0, 0.0, 12.0],
            vec![1.0, INF, INF, 10.0, 0.0],
        ])
        .expect("valid")
    }

    fn timer() -> Timer {
        Timer::new(Duration::from_secs(30))
    }

    fn both_orders() -> [SearchConfig; 2] {
        [
            SearchConfig::default().with_order(SearchOrder::DepthFirst),
            SearchConfig::default().with_order(SearchOrder::BestFirst),
        ]
    }

    #[test]
    fn test_sample_keeps_greedy_seed() {
        for config in both_orders() {
            let outcome = BranchAndBound::new(config).run(&sample(), &timer());
            assert!(outcome.is_exhausted());
            // Greedy already finds the optimum, so nothing improves on it
            assert_eq!(outcome.stats.len(), 1);
            assert_eq!(outcome.stats[0].tour, vec![1, 4, 0, 3, 2]);
            assert!((outcome.stats[0].score - 21.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_seed_record_sees_queued_root() {
        let outcome = BranchAndBound::default().run(&sample(), &timer());
        let seed = &outcome.stats[0];
        assert_eq!(seed.max_queue_size, 1);
        assert_eq!(seed.n_nodes_expanded, 0);
    }

    #[test]
    fn test_sample_without_seed_finds_optimum() {
        for config in both_orders() {
            let outcome =
                BranchAndBound::new(config.with_greedy_seed(false)).run(&sample(), &timer());
            assert!(outcome.is_exhausted());
            let best = outcome.best().expect("record");
            assert_eq!(best.tour, vec![0, 3, 2, 1, 4]);
            assert!((best.score - 21.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_full_coverage_on_exhaustion() {
        let g = CostMatrix::from_rows(&[
            vec![0.0, 3.0, 8.0, 5.0],
            vec![4.0, 0.0, 2.0, 9.0],
            vec![7.0, 6.0, 0.0, 1.0],
            vec![2.0, 8.0, 3.0, 0.0],
        ])
        .expect("valid");
        for config in both_orders() {
            let outcome = BranchAndBound::new(config.with_greedy_seed(false)).run(&g, &timer());
            assert!(outcome.is_exhausted());
            assert!((outcome.coverage - 1.0).abs() < 1e-12);
            let best = outcome.best().expect("record");
            assert!(validate_tour(&best.tour, &g).is_ok());
            assert!(best.fraction_leaves_covered <= outcome.coverage);
        }
    }

    #[test]
    fn test_timeout_coverage_partial() {
        let outcome = BranchAndBound::default().run(&sample(), &Timer::new(Duration::ZERO));
        assert_eq!(outcome.coverage, 0.0);
    }

    #[test]
    fn test_single_hamiltonian_cycle() {
        // Only 0→2→4→1→3→0 exists
        let mut rows = vec![vec![INF; 5]; 5];
        let cycle = [0, 2, 4, 1, 3];
        for i in 0..5 {
            rows[cycle[i]][cycle[(i + 1) % 5]] = (i + 1) as f64;
        }
        let g = CostMatrix::from_rows(&rows).expect("valid");
        for config in both_orders() {
            let outcome = BranchAndBound::new(config.with_greedy_seed(false)).run(&g, &timer());
            assert!(outcome.is_exhausted());
            assert_eq!(outcome.stats.len(), 1);
            assert_eq!(outcome.stats[0].tour, cycle.to_vec());
            assert!((outcome.stats[0].score - 15.0).abs() < 1e-10);
            assert!((outcome.stats[0].fraction_leaves_covered - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_hamiltonian_cycle_sentinel() {
        let g = CostMatrix::from_rows(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, INF],
            vec![1.0, INF, 0.0],
        ])
        .expect("valid");
        let outcome = BranchAndBound::default().run(&g, &timer());
        assert!(outcome.is_exhausted());
        assert_eq!(outcome.stats.len(), 1);
        assert!(outcome.stats[0].is_sentinel());
        assert!((outcome.stats[0].fraction_leaves_covered - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_timeout_returns_sentinel() {
        let outcome = BranchAndBound::default().run(&sample(), &Timer::new(Duration::ZERO));
        assert_eq!(outcome.status, SearchStatus::TimedOut);
        assert_eq!(outcome.stats.len(), 1);
        assert!(outcome.stats[0].is_sentinel());
    }

    #[test]
    fn test_single_city() {
        let g = CostMatrix::from_rows(&[vec![0.0]]).expect("valid");
        for config in both_orders() {
            let outcome = BranchAndBound::new(config.with_greedy_seed(false)).run(&g, &timer());
            assert!(outcome.is_exhausted());
            assert_eq!(outcome.stats[0].tour, vec![0]);
            assert_eq!(outcome.stats[0].score, 0.0);
        }
    }

    #[test]
    fn test_two_cities() {
        let g = CostMatrix::from_rows(&[vec![0.0, 4.0], vec![6.0, 0.0]]).expect("valid");
        let outcome = BranchAndBound::new(SearchConfig::default().with_greedy_seed(false))
            .run(&g, &timer());
        assert_eq!(outcome.stats[0].tour, vec![0, 1]);
        assert_eq!(outcome.stats[0].score, 10.0);
    }

    #[test]
    fn test_out_of_range_root_falls_back() {
        let config = SearchConfig::default()
            .with_root(99)
            .with_greedy_seed(false);
        let outcome = BranchAndBound::new(config).run(&sample(), &timer());
        assert_eq!(outcome.best().map(|s| s.tour[0]), Some(0));
    }

    #[test]
    fn test_solver_names() {
        let dfs = BranchAndBound::new(SearchConfig::default().with_order(SearchOrder::DepthFirst));
        assert_eq!(dfs.name(), "branch_and_bound");
        assert_eq!(BranchAndBound::default().name(), "branch_and_bound_smart");
    }

    #[test]
    fn test_solve_with_budget() {
        let outcome = solve_with_budget(&sample(), Duration::from_secs(5));
        assert_eq!(outcome.best().map(|s| s.score), Some(21.0));
    }
}
