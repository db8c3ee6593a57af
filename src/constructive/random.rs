//! Uniform random permutation sampling.
//!
//! The weakest baseline: draw tours uniformly at random until the budget
//! runs out, keeping each one that beats the best seen so far.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::evaluation::score_tour;
use crate::graph::CostMatrix;
use crate::models::{SolutionStats, Solver};
use crate::search::StatsRecorder;
use crate::timer::Timer;

/// Configuration for [`RandomSampling`].
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::RandomConfig;
///
/// let config = RandomConfig::default().with_seed(42).with_max_samples(1_000);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.max_samples, Some(1_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// RNG seed; drawn from the OS when `None`.
    pub seed: Option<u64>,
    /// Stop after this many samples; otherwise run until the timer expires.
    pub max_samples: Option<u64>,
}

impl RandomConfig {
    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of sampled tours.
    pub fn with_max_samples(mut self, max_samples: u64) -> Self {
        self.max_samples = Some(max_samples);
        self
    }
}

/// Random-sampling baseline.
#[derive(Debug, Clone, Default)]
pub struct RandomSampling {
    config: RandomConfig,
}

impl RandomSampling {
    /// Creates the sampler.
    pub fn new(config: RandomConfig) -> Self {
        Self { config }
    }
}

impl Solver for RandomSampling {
    fn name(&self) -> &'static str {
        "random_tour"
    }

    fn solve(&self, graph: &CostMatrix, timer: &Timer) -> Vec<SolutionStats> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut recorder = StatsRecorder::new(graph.size(), 0, timer);
        recorder.observe_queue(1);

        let mut tour: Vec<usize> = (0..graph.size()).collect();
        let mut samples = 0u64;

        while !timer.is_expired() {
            if self.config.max_samples.is_some_and(|max| samples >= max) {
                break;
            }
            samples += 1;

            tour.shuffle(&mut rng);
            recorder.on_expanded();

            let score = score_tour(&tour, graph);
            if score < recorder.best_score() {
                recorder.on_explored(&tour);
                recorder.offer(&tour, score);
            } else {
                recorder.on_pruned(&tour);
            }
        }

        recorder.finish()
    }
}
