//! Tour scoring and validation.

use crate::error::{Result, TspError};
use crate::graph::CostMatrix;

/// Total cost of a closed tour, including the edge back to the first city.
///
/// Returns `f64::INFINITY` if any edge is unreachable or the tour is empty.
/// A single-city tour has no edges and costs zero.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CostMatrix;
/// use u_tsp::evaluation::score_tour;
///
/// let graph = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 9.0],
///     vec![9.0, 0.0, 2.0],
///     vec![3.0, 9.0, 0.0],
/// ])
/// .expect("valid");
/// assert_eq!(score_tour(&[0, 1, 2], &graph), 6.0);
/// assert_eq!(score_tour(&[0, 2, 1], &graph), 27.0);
/// ```
pub fn score_tour(tour: &[usize], graph: &CostMatrix) -> f64 {
    match tour {
        [] => f64::INFINITY,
        [_] => 0.0,
        [first, .., last] => {
            let mut total = 0.0;
            for pair in tour.windows(2) {
                total += graph.get(pair[0], pair[1]);
            }
            total += graph.get(*last, *first);
            if total.is_finite() {
                total
            } else {
                f64::INFINITY
            }
        }
    }
}

/// Checks that `tour` visits every city of `graph` exactly once.
pub fn validate_tour(tour: &[usize], graph: &CostMatrix) -> Result<()> {
    let n = graph.size();
    if tour.len() != n {
        return Err(TspError::InvalidTour(format!(
            "expected {} cities, got {}",
            n,
            tour.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n {
            return Err(TspError::InvalidTour(format!("city {city} out of range")));
        }
        if seen[city] {
            return Err(TspError::InvalidTour(format!("city {city} visited twice")));
        }
        seen[city] = true;
    }
    Ok(())
}
