//! Reduced-cost matrix lower bounds.
//!
//! # Algorithm
//!
//! Every row of a tour's cost matrix contributes exactly one edge, and so does
//! every column. Subtracting each row's minimum and then each column's minimum
//! therefore lowers the cost of every tour by the same constant, which is a
//! lower bound on the optimal tour:
//!
//! ```text
//! cost(tour) = Σ row_min + Σ col_min + Σ reduced(e), e ∈ tour
//! ```
//!
//! Committing edge `i → j` removes row `i` and column `j`, forbids `j → i`,
//! and reduces the remaining rows and columns again. The second reduction is
//! the incremental bound contribution of that step.
//!
//! # Reference
//!
//! Little, J.D.C., Murty, K.G., Sweeney, D.W., Karel, C. (1963). "An algorithm
//! for the traveling salesman problem", *Operations Research* 11(6), 972-989.

use crate::graph::CostMatrix;

/// Dense reduced-cost table over the cities still free to be left or entered.
///
/// Removed and unreachable entries both hold `f64::INFINITY`. A row is *open*
/// while its city has not been departed from; a column is open while its city
/// has not been arrived at. After every reduction each open row and column
/// holding a finite entry has minimum exactly zero.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::bound::ReducedCostMatrix;
///
/// let graph = CostMatrix::from_rows(&[
///     vec![0.0, 3.0, 5.0],
///     vec![4.0, 0.0, 2.0],
///     vec![1.0, 6.0, 0.0],
/// ])
/// .expect("valid");
/// let (matrix, bound) = ReducedCostMatrix::new(&graph);
/// // Row minimums 3 + 2 + 1, column minimums 0 + 0 + 0
/// assert_eq!(bound, 6.0);
/// assert_eq!(matrix.get(0, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedCostMatrix {
    size: usize,
    cells: Vec<f64>,
    row_open: Vec<bool>,
    col_open: Vec<bool>,
}

impl ReducedCostMatrix {
    /// Builds the fully reduced table for `graph`.
    ///
    /// Returns the table and the root lower bound (the sum of all subtracted
    /// minimums).
    pub fn new(graph: &CostMatrix) -> (Self, f64) {
        let size = graph.size();
        let mut cells = Vec::with_capacity(size * size);
        for from in 0..size {
            cells.extend_from_slice(graph.row(from));
        }
        let mut matrix = Self {
            size,
            cells,
            row_open: vec![true; size],
            col_open: vec![true; size],
        };
        let bound = matrix.reduce();
        (matrix, bound)
    }

    /// Number of cities in the underlying graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current reduced cost of `from -> to`; `INFINITY` if removed or unreachable.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.size + to]
    }

    /// Returns `true` while `city` may still be departed from.
    pub fn is_row_open(&self, city: usize) -> bool {
        self.row_open[city]
    }

    /// Returns `true` while `city` may still be arrived at.
    pub fn is_col_open(&self, city: usize) -> bool {
        self.col_open[city]
    }

    /// Extends the partial tour with `from -> to` on a copy of this table.
    ///
    /// Returns the child table and its incremental reduction. The parent is
    /// left untouched so siblings can branch from it.
    pub fn commit(&self, from: usize, to: usize) -> (Self, f64) {
        let mut child = self.clone();
        let reduction = child.commit_in_place(from, to);
        (child, reduction)
    }

    /// In-place variant of [`commit`](Self::commit).
    pub fn commit_in_place(&mut self, from: usize, to: usize) -> f64 {
        let n = self.size;
        for col in 0..n {
            self.cells[from * n + col] = f64::INFINITY;
        }
        for row in 0..n {
            self.cells[row * n + to] = f64::INFINITY;
        }
        self.cells[to * n + from] = f64::INFINITY;
        self.row_open[from] = false;
        self.col_open[to] = false;
        self.reduce()
    }

    /// Row- then column-reduces every open row and column.
    ///
    /// Rows or columns with no finite entry are left alone and contribute zero.
    fn reduce(&mut self) -> f64 {
        let n = self.size;
        let mut total = 0.0;

        for row in 0..n {
            if !self.row_open[row] {
                continue;
            }
            let cells = &mut self.cells[row * n..(row + 1) * n];
            let min = cells.iter().copied().fold(f64::INFINITY, f64::min);
            if min.is_finite() && min > 0.0 {
                for c in cells.iter_mut().filter(|c| c.is_finite()) {
                    *c -= min;
                }
                total += min;
            }
        }

        for col in 0..n {
            if !self.col_open[col] {
                continue;
            }
            let mut min = f64::INFINITY;
            for row in 0..n {
                if self.row_open[row] {
                    min = min.min(self.cells[row * n + col]);
                }
            }
            if min.is_finite() && min > 0.0 {
                for row in 0..n {
                    let c = &mut self.cells[row * n + col];
                    if self.row_open[row] && c.is_finite() {
                        *c -= min;
                    }
                }
                total += min;
            }
        }

        total
    }
}
