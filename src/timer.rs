//! Wall-clock budget tracking.

use std::time::{Duration, Instant};

/// Tracks elapsed time against a budget fixed at construction.
///
/// Solvers poll [`is_expired`](Timer::is_expired) at the top of every loop
/// iteration; there is no preemption.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::Timer;
///
/// let timer = Timer::new(Duration::from_secs(60));
/// assert!(!timer.is_expired());
/// assert!(timer.elapsed() < Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct Timer {
    start: Instant,
    budget: Duration,
}

impl Timer {
    /// Starts a timer with the given budget.
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Starts a timer with a budget in (fractional) seconds.
    ///
    /// Negative or NaN budgets count as zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        let secs = if secs.is_nan() { 0.0 } else { secs.max(0.0) };
        Self::new(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns `true` once the elapsed time reaches the budget.
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.budget
    }

    /// The configured budget.
    pub fn budget(&self) -> Duration {
        self.budget
    }
}
