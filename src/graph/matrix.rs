//! Dense asymmetric cost matrix.

use crate::error::{Result, TspError};

/// A dense n×n matrix of directed edge costs stored in row-major order.
///
/// `f64::INFINITY` marks an unreachable pair. The diagonal is always
/// unreachable, whatever the input supplied there.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CostMatrix;
///
/// let inf = f64::INFINITY;
/// let graph = CostMatrix::from_rows(&[
///     vec![0.0, 2.0, inf],
///     vec![inf, 0.0, 3.0],
///     vec![4.0, inf, 0.0],
/// ])
/// .expect("valid matrix");
/// assert_eq!(graph.size(), 3);
/// assert_eq!(graph.get(0, 1), 2.0);
/// assert!(!graph.is_reachable(0, 2));
/// assert!(!graph.is_reachable(1, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// Fails if the matrix is empty, not square, or holds a negative or NaN
    /// cost off the diagonal.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(TspError::EmptyGraph);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(TspError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from a row-major buffer of `size * size` costs.
    pub fn from_data(size: usize, mut data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(TspError::EmptyGraph);
        }
        if data.len() != size * size {
            return Err(TspError::NotSquare {
                row: data.len() / size,
                len: data.len() % size,
                expected: size,
            });
        }
        for from in 0..size {
            for to in 0..size {
                let idx = from * size + to;
                if from == to {
                    data[idx] = f64::INFINITY;
                    continue;
                }
                let cost = data[idx];
                if cost.is_nan() {
                    return Err(TspError::NanCost { from, to });
                }
                if cost < 0.0 {
                    return Err(TspError::NegativeCost { from, to, cost });
                }
            }
        }
        Ok(Self { data, size })
    }

    /// Returns the cost of edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns `true` if edge `from -> to` has a finite cost.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Costs of all edges leaving `from`, indexed by destination.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns the cheapest reachable city from `from` among `candidates`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if no candidate
    /// is reachable.
    pub fn nearest_reachable(&self, from: usize, candidates: &[usize]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for &to in candidates {
            let cost = self.get(from, to);
            if !cost.is_finite() {
                continue;
            }
            match best {
                Some((_, b)) if cost >= b => {}
                _ => best = Some((to, cost)),
            }
        }
        best
    }
}
