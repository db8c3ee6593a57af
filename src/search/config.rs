//! Branch-and-bound configuration.

use serde::{Deserialize, Serialize};

/// Order in which pending partial tours are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchOrder {
    /// LIFO stack: finish one branch before backtracking. Low memory.
    DepthFirst,
    /// Lowest bound first, deeper tours first on ties. Prunes harder.
    #[default]
    BestFirst,
}

/// Configuration for [`BranchAndBound`](super::BranchAndBound).
///
/// # Examples
///
/// ```
/// use u_tsp::search::{SearchConfig, SearchOrder};
///
/// let config = SearchConfig::default()
///     .with_order(SearchOrder::DepthFirst)
///     .with_greedy_seed(false);
/// assert_eq!(config.order, SearchOrder::DepthFirst);
/// assert!(!config.seed_with_greedy);
/// assert_eq!(config.root, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Frontier discipline.
    pub order: SearchOrder,
    /// Start from the best greedy tour as incumbent.
    pub seed_with_greedy: bool,
    /// City every partial tour starts from.
    pub root: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            order: SearchOrder::BestFirst,
            seed_with_greedy: true,
            root: 0,
        }
    }
}

impl SearchConfig {
    /// Sets the frontier discipline.
    pub fn with_order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    /// Enables or disables the greedy incumbent seed.
    pub fn with_greedy_seed(mut self, enabled: bool) -> Self {
        self.seed_with_greedy = enabled;
        self
    }

    /// Sets the root city.
    pub fn with_root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }
}
