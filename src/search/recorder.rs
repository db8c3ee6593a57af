//! Incumbent tracking and statistics emission shared by every strategy.

use crate::coverage::CutTree;
use crate::models::SolutionStats;
use crate::timer::Timer;

/// Counters, coverage and incumbent for one search call.
///
/// [`offer`](StatsRecorder::offer) appends a [`SolutionStats`] only when a
/// tour strictly beats the incumbent, so emitted scores strictly decrease.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::search::StatsRecorder;
/// use u_tsp::Timer;
///
/// let timer = Timer::new(Duration::from_secs(1));
/// let mut rec = StatsRecorder::new(3, 0, &timer);
/// assert!(rec.offer(&[0, 1, 2], 10.0));
/// assert!(!rec.offer(&[0, 2, 1], 10.0));
/// assert!(rec.offer(&[0, 2, 1], 7.0));
/// assert_eq!(rec.finish().len(), 2);
/// ```
#[derive(Debug)]
pub struct StatsRecorder<'t> {
    timer: &'t Timer,
    cut_tree: CutTree,
    stats: Vec<SolutionStats>,
    best_score: f64,
    max_queue_size: usize,
    n_nodes_expanded: u64,
    n_nodes_pruned: u64,
}

impl<'t> StatsRecorder<'t> {
    /// Creates a recorder for a graph of `n` cities rooted at `root`.
    pub fn new(n: usize, root: usize, timer: &'t Timer) -> Self {
        Self {
            timer,
            cut_tree: CutTree::new(n, root),
            stats: Vec::new(),
            best_score: f64::INFINITY,
            max_queue_size: 0,
            n_nodes_expanded: 0,
            n_nodes_pruned: 0,
        }
    }

    /// Counts one expanded node.
    pub fn on_expanded(&mut self) {
        self.n_nodes_expanded = self.n_nodes_expanded.saturating_add(1);
    }

    /// Counts `count` expanded nodes at once.
    pub fn on_expanded_many(&mut self, count: u64) {
        self.n_nodes_expanded = self.n_nodes_expanded.saturating_add(count);
    }

    /// Counts a pruned node and eliminates its subtree.
    pub fn on_pruned(&mut self, path: &[usize]) {
        self.n_nodes_pruned = self.n_nodes_pruned.saturating_add(1);
        self.cut_tree.cut(path);
    }

    /// Eliminates a fully explored path without counting a pruning.
    pub fn on_explored(&mut self, path: &[usize]) {
        self.cut_tree.cut(path);
    }

    /// Records the current frontier size.
    pub fn observe_queue(&mut self, len: usize) {
        self.max_queue_size = self.max_queue_size.max(len);
    }

    /// Accepts `tour` as the new incumbent if it strictly improves on it.
    ///
    /// Returns `true` if a record was emitted.
    pub fn offer(&mut self, tour: &[usize], score: f64) -> bool {
        if !score.is_finite() || score >= self.best_score {
            return false;
        }
        self.best_score = score;
        let record = self.snapshot(tour.to_vec(), score);
        log::debug!(
            "new incumbent {:.3} at {:.4}s (expanded {}, pruned {}, coverage {:.4}%)",
            score,
            record.time.as_secs_f64(),
            record.n_nodes_expanded,
            record.n_nodes_pruned,
            record.fraction_leaves_covered * 100.0
        );
        self.stats.push(record);
        true
    }

    /// Score of the incumbent, `INFINITY` if none.
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Nodes expanded so far.
    pub fn n_nodes_expanded(&self) -> u64 {
        self.n_nodes_expanded
    }

    /// Nodes pruned so far.
    pub fn n_nodes_pruned(&self) -> u64 {
        self.n_nodes_pruned
    }

    /// Largest frontier size observed so far.
    pub fn max_queue_size(&self) -> usize {
        self.max_queue_size
    }

    /// Coverage accumulated so far.
    pub fn coverage(&self) -> &CutTree {
        &self.cut_tree
    }

    /// Emitted records, or a single sentinel if nothing was found.
    pub fn finish(self) -> Vec<SolutionStats> {
        if !self.stats.is_empty() {
            return self.stats;
        }
        vec![SolutionStats::sentinel(
            self.timer.elapsed(),
            self.max_queue_size,
            self.n_nodes_expanded,
            self.n_nodes_pruned,
            self.cut_tree.n_leaves_cut(),
            self.cut_tree.fraction_leaves_covered(),
        )]
    }

    fn snapshot(&self, tour: Vec<usize>, score: f64) -> SolutionStats {
        SolutionStats {
            tour,
            score,
            time: self.timer.elapsed(),
            max_queue_size: self.max_queue_size,
            n_nodes_expanded: self.n_nodes_expanded,
            n_nodes_pruned: self.n_nodes_pruned,
            n_leaves_covered: self.cut_tree.n_leaves_cut(),
            fraction_leaves_covered: self.cut_tree.fraction_leaves_covered(),
        }
    }
}
