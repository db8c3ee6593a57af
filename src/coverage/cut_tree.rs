//! Search-space coverage accounting.
//!
//! The permutation space with a fixed root is a tree whose nodes are paths
//! starting at the root and whose (n−1)! leaves are complete tours. A path of
//! `k` cities spans (n−k)! leaves. Cutting a path marks all of them covered.
//!
//! Cuts are kept at the coarsest level: a cut below an already-cut path adds
//! nothing, a cut above finer cuts absorbs them, and a node whose children
//! are all cut collapses into a single cut. The covered count therefore never
//! double counts and never decreases.

use std::collections::BTreeMap;

/// Tracks which fraction of the rooted permutation tree has been eliminated.
///
/// Leaf counts saturate at `u128::MAX` for very large graphs. The covered
/// fraction is accumulated from exact ratios `(n−k)!/(n−1)!`, so it stays
/// in `[0, 1]` for any size.
///
/// # Examples
///
/// ```
/// use u_tsp::coverage::CutTree;
///
/// let mut tree = CutTree::new(4, 0);
/// assert_eq!(tree.total_leaves(), 6);
/// assert_eq!(tree.cut(&[0, 1]), 2);
/// assert_eq!(tree.cut(&[0, 1, 2]), 0); // already covered
/// assert!((tree.fraction_leaves_covered() - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CutTree {
    n: usize,
    root: usize,
    table: LeafTable,
    top: CutNode,
}

/// Per-depth leaf counts and leaf fractions.
#[derive(Debug, Clone)]
struct LeafTable {
    n: usize,
    /// `counts[k]` = (n−k)!, saturating.
    counts: Vec<u128>,
    /// `fractions[k]` = (n−k)!/(n−1)!.
    fractions: Vec<f64>,
}

#[derive(Debug, Clone, Default)]
struct CutNode {
    cut: bool,
    cut_children: usize,
    covered_leaves: u128,
    covered_fraction: f64,
    children: BTreeMap<usize, CutNode>,
}

#[derive(Debug, Clone, Copy)]
struct Delta {
    leaves: u128,
    fraction: f64,
}

impl LeafTable {
    fn new(n: usize) -> Self {
        let mut counts = vec![1u128; n + 1];
        let mut fractions = vec![1.0f64; n + 1];
        // Walk from the leaves (k = n) up to the root (k = 1)
        for k in (1..n).rev() {
            let free = (n - k) as u128;
            counts[k] = counts[k + 1].saturating_mul(free);
        }
        for k in 2..=n {
            fractions[k] = fractions[k - 1] / (n - k + 1) as f64;
        }
        if n > 0 {
            counts[0] = counts[1];
            fractions[0] = 1.0;
        }
        Self {
            n,
            counts,
            fractions,
        }
    }

    /// Marks the path `rest` below `node` (at path length `depth`) as cut.
    ///
    /// Returns `None` if that path was already covered.
    fn cut_below(&self, node: &mut CutNode, rest: &[usize], depth: usize) -> Option<Delta> {
        if node.cut {
            return None;
        }
        let Some((&city, tail)) = rest.split_first() else {
            let delta = Delta {
                leaves: self.counts[depth].saturating_sub(node.covered_leaves),
                fraction: (self.fractions[depth] - node.covered_fraction).max(0.0),
            };
            self.seal(node, depth);
            return Some(delta);
        };

        let child = node.children.entry(city).or_default();
        let delta = self.cut_below(child, tail, depth + 1)?;
        let child_cut = child.cut;

        node.covered_leaves = node.covered_leaves.saturating_add(delta.leaves);
        node.covered_fraction += delta.fraction;
        if child_cut {
            node.cut_children += 1;
            if node.cut_children == self.n - depth {
                self.seal(node, depth);
            }
        }
        Some(delta)
    }

    fn seal(&self, node: &mut CutNode, depth: usize) {
        node.cut = true;
        node.children.clear();
        node.covered_leaves = self.counts[depth];
        node.covered_fraction = self.fractions[depth];
    }
}

impl CutTree {
    /// Creates an empty tree over `n` cities rooted at `root`.
    pub fn new(n: usize, root: usize) -> Self {
        Self {
            n,
            root,
            table: LeafTable::new(n),
            top: CutNode::default(),
        }
    }

    /// Total number of leaves, (n−1)!, saturating.
    pub fn total_leaves(&self) -> u128 {
        if self.n == 0 {
            0
        } else {
            self.table.counts[1]
        }
    }

    /// Eliminates every leaf below `path` and returns how many were newly covered.
    ///
    /// Paths must start at the root. A complete tour starting elsewhere is
    /// rotated to the root first; other paths have no rooted prefix and are
    /// ignored.
    pub fn cut(&mut self, path: &[usize]) -> u128 {
        let rotated;
        let path = match path.first() {
            None => return 0,
            Some(&first) if first == self.root => path,
            Some(_) if path.len() == self.n => {
                let Some(pos) = path.iter().position(|&c| c == self.root) else {
                    return 0;
                };
                rotated = [&path[pos..], &path[..pos]].concat();
                &rotated[..]
            }
            Some(_) => {
                log::trace!("ignoring cut of unrooted path {:?}", path);
                return 0;
            }
        };
        if path.len() > self.n {
            return 0;
        }

        debug_assert!(path.iter().all(|&c| c < self.n), "city out of range in {path:?}");

        self.table
            .cut_below(&mut self.top, &path[1..], 1)
            .map_or(0, |delta| delta.leaves)
    }

    /// Number of leaves eliminated so far.
    pub fn n_leaves_cut(&self) -> u128 {
        self.top.covered_leaves
    }

    /// Eliminated leaves as a fraction of (n−1)!, in `[0, 1]`.
    pub fn fraction_leaves_covered(&self) -> f64 {
        self.top.covered_fraction.clamp(0.0, 1.0)
    }

    /// Returns `true` once every leaf is covered.
    pub fn is_exhausted(&self) -> bool {
        self.top.cut
    }
}
