//! Per-incumbent search statistics.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Snapshot taken each time a solver finds a strictly better tour.
///
/// A solver returns these in discovery order, so scores strictly decrease
/// along the list. When no tour was found the list holds a single sentinel
/// record with an empty tour and an infinite score.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::models::SolutionStats;
///
/// let s = SolutionStats::sentinel(Duration::from_millis(5), 1, 10, 4, 3, 0.5);
/// assert!(s.is_sentinel());
/// assert!(s.tour.is_empty());
/// assert_eq!(s.score, f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionStats {
    /// Complete tour as a permutation of all cities.
    pub tour: Vec<usize>,
    /// True cost of the tour including the closing edge.
    pub score: f64,
    /// Time since the search started.
    pub time: Duration,
    /// Largest frontier size observed so far.
    pub max_queue_size: usize,
    /// Nodes expanded so far.
    pub n_nodes_expanded: u64,
    /// Nodes pruned so far.
    pub n_nodes_pruned: u64,
    /// Leaves of the permutation tree eliminated so far.
    pub n_leaves_covered: u128,
    /// `n_leaves_covered` as a fraction of all leaves.
    pub fraction_leaves_covered: f64,
}

impl SolutionStats {
    /// Record returned when no feasible tour was found.
    pub fn sentinel(
        time: Duration,
        max_queue_size: usize,
        n_nodes_expanded: u64,
        n_nodes_pruned: u64,
        n_leaves_covered: u128,
        fraction_leaves_covered: f64,
    ) -> Self {
        Self {
            tour: Vec::new(),
            score: f64::INFINITY,
            time,
            max_queue_size,
            n_nodes_expanded,
            n_nodes_pruned,
            n_leaves_covered,
            fraction_leaves_covered,
        }
    }

    /// Returns `true` for the no-solution record.
    pub fn is_sentinel(&self) -> bool {
        self.tour.is_empty() && self.score.is_infinite()
    }

    /// Multi-line human readable summary under the given solver name.
    pub fn summary<'a>(&'a self, name: &'a str) -> Summary<'a> {
        Summary { name, stats: self }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`SolutionStats::summary`].
pub struct Summary<'a> {
    name: &'a str,
    stats: &'a SolutionStats,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "--------- {} ---------", self.name)?;
        writeln!(f, "Score: {:.3}", s.score)?;
        writeln!(f, "Time: {:.4} sec", s.time.as_secs_f64())?;
        writeln!(
            f,
            "Coverage: {:.4}% covered",
            s.fraction_leaves_covered * 100.0
        )?;
        writeln!(f, "Max Queue Size: {}", s.max_queue_size)?;
        writeln!(f, "# nodes expanded: {}", s.n_nodes_expanded)?;
        writeln!(f, "# nodes pruned: {}", s.n_nodes_pruned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolutionStats {
        SolutionStats {
            tour: vec![0, 3, 2, 1, 4],
            score: 21.0,
            time: Duration::from_millis(1500),
            max_queue_size: 7,
            n_nodes_expanded: 12,
            n_nodes_pruned: 9,
            n_leaves_covered: 18,
            fraction_leaves_covered: 0.75,
        }
    }

    #[test]
    fn test_sentinel() {
        let s = SolutionStats::sentinel(Duration::ZERO, 1, 0, 0, 0, 0.0);
        assert!(s.is_sentinel());
        assert!(!sample().is_sentinel());
    }

    #[test]
    fn test_summary() {
        let text = sample().summary("branch_and_bound").to_string();
        assert!(text.starts_with("--------- branch_and_bound ---------\n"));
        assert!(text.contains("Score: 21.000\n"));
        assert!(text.contains("Time: 1.5000 sec\n"));
        assert!(text.contains("Coverage: 75.0000% covered\n"));
        assert!(text.contains("Max Queue Size: 7\n"));
        assert!(text.contains("# nodes expanded: 12\n"));
        assert!(text.contains("# nodes pruned: 9\n"));
    }

    #[test]
    fn test_serialize_fields() {
        let json = serde_json::to_value(sample()).expect("serializable");
        assert_eq!(json["tour"], serde_json::json!([0, 3, 2, 1, 4]));
        assert_eq!(json["score"], serde_json::json!(21.0));
        assert_eq!(json["max_queue_size"], serde_json::json!(7));
        assert_eq!(json["fraction_leaves_covered"], serde_json::json!(0.75));
    }
}
