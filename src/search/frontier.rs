//! Pending partial tours, ordered by the search discipline.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::bound::PartialTour;

use super::SearchOrder;

/// Heap entry ranking lower bounds first, then longer paths.
struct Ranked(PartialTour);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: the smaller bound must compare greater
        other
            .0
            .bound()
            .total_cmp(&self.0.bound())
            .then_with(|| self.0.len().cmp(&other.0.len()))
    }
}

/// Collection of partial tours awaiting expansion.
///
/// # Examples
///
/// ```
/// use u_tsp::bound::PartialTour;
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::search::{Frontier, SearchOrder};
///
/// let graph = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 9.0],
///     vec![9.0, 0.0, 1.0],
///     vec![1.0, 9.0, 0.0],
/// ])
/// .expect("valid");
/// let root = PartialTour::root(&graph, 0);
///
/// let mut frontier = Frontier::new(SearchOrder::BestFirst);
/// frontier.push(root.branch(&graph, 2));
/// frontier.push(root.branch(&graph, 1));
/// // 0→1 is the cheaper branch
/// assert_eq!(frontier.pop().map(|t| t.last()), Some(1));
/// ```
pub struct Frontier {
    pending: Pending,
}

enum Pending {
    Stack(Vec<PartialTour>),
    Heap(BinaryHeap<Ranked>),
}

impl Frontier {
    /// Creates an empty frontier with the given discipline.
    pub fn new(order: SearchOrder) -> Self {
        let pending = match order {
            SearchOrder::DepthFirst => Pending::Stack(Vec::new()),
            SearchOrder::BestFirst => Pending::Heap(BinaryHeap::new()),
        };
        Self { pending }
    }

    /// Adds a partial tour.
    pub fn push(&mut self, tour: PartialTour) {
        match &mut self.pending {
            Pending::Stack(stack) => stack.push(tour),
            Pending::Heap(heap) => heap.push(Ranked(tour)),
        }
    }

    /// Removes the next partial tour to expand.
    pub fn pop(&mut self) -> Option<PartialTour> {
        match &mut self.pending {
            Pending::Stack(stack) => stack.pop(),
            Pending::Heap(heap) => heap.pop().map(|r| r.0),
        }
    }

    /// Number of pending tours.
    pub fn len(&self) -> usize {
        match &self.pending {
            Pending::Stack(stack) => stack.len(),
            Pending::Heap(heap) => heap.len(),
        }
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
