//! Search for the subspace size `k` and bin occupancy `q`.
//!
//! Starting from `k = 3, q = 5`, the search ranks the dataset and counts
//! theta, the observations that were clustered in every round. While
//! theta keeps shrinking, `q` grows by a fixed step; once it stops
//! shrinking, `k` grows by one and `q` steps back. The search ends when
//! theta reaches the target or the loop condition is exhausted.
//!
//! The loop condition alone does not guarantee termination, so the
//! number of parameter adjustments is capped by
//! `SearchConfig::max_iterations`.
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::observation::Observation;
use crate::sampler::SubspaceSampler;
use super::Ranker;


/// Starting point, step and iteration cap of the parameter search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Subspace size of the first ranking.
    pub initial_k: usize,
    /// Bin occupancy of the first ranking.
    pub initial_q: i64,
    /// Amount `q` moves by at each adjustment.
    pub step_q: i64,
    /// Maximum number of parameter adjustments.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            initial_k: 3,
            initial_q: 5,
            step_q: 10,
            max_iterations: 100,
        }
    }
}

/// Why a parameter search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Theta fell to the target or below.
    TargetReached,
    /// Theta stopped improving and `q` reached its maximum.
    Exhausted,
    /// `SearchConfig::max_iterations` adjustments were made.
    IterationCap,
}

/// Parameters tried by a search and the theta they produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStep {
    pub k: usize,
    pub q: i64,
    pub theta: usize,
}

/// Outcome of a parameter search.
#[derive(Debug, Clone)]
pub struct Search {
    /// Ranking for the final parameters, most outlying first.
    pub ranking: Vec<Observation>,
    pub k: usize,
    pub q: i64,
    pub theta: usize,
    /// Number of parameter adjustments made.
    pub iterations: usize,
    pub stop: StopReason,
    /// Every ranking computed, in order; the last one is the final.
    pub steps: Vec<SearchStep>,
}

/// Current position of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parameters {
    k: usize,
    q: i64,
    last_theta: usize,
}

impl Parameters {
    fn should_continue(&self, theta: usize, target: usize, max_q: i64) -> bool {
        theta > target || theta < self.last_theta || self.q < max_q
    }

    /// Moves to the next parameters after a ranking produced `theta`.
    fn adjust(&mut self, theta: usize, n: usize, step_q: i64) {
        if theta >= self.last_theta {
            // No longer improving: try a larger subspace.
            self.k += 1;
            self.q -= step_q;
            self.last_theta = n;
        } else {
            self.q += step_q;
            self.last_theta = theta;
        }
    }
}

impl<S: SubspaceSampler> Ranker<S> {
    /// Ranks the observations and counts theta, the number of
    /// observations whose score equals `n`.
    ///
    /// Returns theta and the ranking.
    pub fn theta(&mut self, sample_size: usize, k: usize, q: i64, n: usize)
            -> (usize, Vec<Observation>) {
        let ranking = self.ranked_outliers(sample_size, k, q);
        let theta = ranking.iter()
                           .filter(|o| o.score() == n)
                           .count();

        (theta, ranking)
    }

    /// Ranks the observations with `k` and `q` tuned so that at most
    /// `target` observations are clustered in all rounds.
    ///
    /// # Arguments
    ///
    /// * `target` - Desired theta.
    /// * `sample_size` - Scoring rounds per ranking.
    /// * `n` - Score counted by theta; normally equal to `sample_size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastout::Ranker;
    ///
    /// let rows = (0..20).map(|i| vec![(i % 5) as f64, (i / 5) as f64])
    ///                   .collect::<Vec<_>>();
    /// let mut ranker = Ranker::from_rows(&rows).expect("Invalid dataset");
    ///
    /// let ranking = ranker.optimized_ranking(20, 8, 8);
    /// assert_eq!(ranking.len(), 20);
    /// ```
    pub fn optimized_ranking(&mut self, target: usize, sample_size: usize, n: usize)
            -> Vec<Observation> {
        self.search(target, sample_size, n).ranking
    }

    /// Runs the parameter search of `optimized_ranking()` and reports
    /// the parameters it settled on and how it got there.
    pub fn search(&mut self, target: usize, sample_size: usize, n: usize) -> Search {
        let config = self.config;
        let max_q = (n / 4) as i64;

        let mut params = Parameters {
            k: config.initial_k,
            q: config.initial_q,
            last_theta: n,
        };
        let (mut theta, mut ranking) = self.theta(sample_size, params.k, params.q, n);
        let mut steps = vec![SearchStep { k: params.k, q: params.q, theta: theta }];
        let mut iterations = 0;

        let stop = loop {
            if !params.should_continue(theta, target, max_q) {
                break StopReason::Exhausted;
            }
            if theta <= target {
                break StopReason::TargetReached;
            }
            if iterations >= config.max_iterations {
                warn!(iterations, k = params.k, q = params.q, theta,
                      "parameter search hit its iteration cap");
                break StopReason::IterationCap;
            }

            params.adjust(theta, n, config.step_q);
            iterations += 1;

            let (t, r) = self.theta(sample_size, params.k, params.q, n);
            theta = t;
            ranking = r;

            debug!(k = params.k, q = params.q, theta, last_theta = params.last_theta,
                   "search step");
            steps.push(SearchStep { k: params.k, q: params.q, theta: theta });
        };

        info!(?stop, k = params.k, q = params.q, theta, iterations,
              "parameter search finished");

        Search {
            ranking: ranking,
            k: params.k,
            q: params.q,
            theta: theta,
            iterations: iterations,
            stop: stop,
            steps: steps,
        }
    }
}
