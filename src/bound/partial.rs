//! Partial tours carried on the search frontier.

use crate::graph::CostMatrix;

use super::reduced::ReducedCostMatrix;

/// A path from the root city together with its lower bound.
///
/// The bound never exceeds the cost of any tour that extends the path.
/// Each node owns its reduced-cost table, since committing an edge is
/// destructive and siblings branch from the same parent.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::bound::PartialTour;
///
/// let graph = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 4.0],
///     vec![2.0, 0.0, 1.0],
///     vec![1.0, 3.0, 0.0],
/// ])
/// .expect("valid");
/// let root = PartialTour::root(&graph, 0);
/// let child = root.branch(&graph, 1);
/// assert_eq!(child.path(), &[0, 1]);
/// assert_eq!(child.cost(), 1.0);
/// assert!(child.bound() >= root.bound());
/// assert!(child.bound() <= 3.0); // 0→1→2→0
/// ```
#[derive(Debug, Clone)]
pub struct PartialTour {
    path: Vec<usize>,
    visited: Vec<bool>,
    cost: f64,
    bound: f64,
    matrix: ReducedCostMatrix,
}

impl PartialTour {
    /// Creates the single-city node at `root` with the fully reduced bound.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a city of `graph`.
    pub fn root(graph: &CostMatrix, root: usize) -> Self {
        let (matrix, bound) = ReducedCostMatrix::new(graph);
        let mut visited = vec![false; graph.size()];
        visited[root] = true;
        Self {
            path: vec![root],
            visited,
            cost: 0.0,
            bound,
            matrix,
        }
    }

    /// Extends this path by `city`, computing the child's bound.
    ///
    /// The child's bound is the parent's bound plus the reduced cost of the
    /// new edge plus the reduction triggered by committing it. An unreachable
    /// edge yields an infinite bound.
    pub fn branch(&self, graph: &CostMatrix, city: usize) -> Self {
        debug_assert!(!self.visited[city], "city {city} already on path");
        let last = self.last();
        let edge = self.matrix.get(last, city);
        let (matrix, reduction) = self.matrix.commit(last, city);

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(city);
        let mut visited = self.visited.clone();
        visited[city] = true;

        Self {
            path,
            visited,
            cost: self.cost + graph.get(last, city),
            bound: self.bound + edge + reduction,
            matrix,
        }
    }

    /// Cities visited so far, in order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The most recently visited city.
    pub fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Number of cities on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`: a partial tour holds at least the root.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns `true` if every city is on the path.
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.visited.len()
    }

    /// Returns `true` if `city` is already on the path.
    pub fn contains(&self, city: usize) -> bool {
        self.visited[city]
    }

    /// Cities not yet on the path, in ascending order.
    pub fn unvisited(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, &v)| !v)
            .map(|(c, _)| c)
    }

    /// Actual cost of the committed edges.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Lower bound on any completion of this path.
    pub fn bound(&self) -> f64 {
        self.bound
    }
}
