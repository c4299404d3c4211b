//! The FASTOUT ranker.
//!
//! A `Ranker` owns a dataset and ranks its observations by outlier
//! score. Each scoring round picks a random attribute subspace, groups
//! observations into clusters of mutual neighbors and rewards every
//! observation that ended up in a cluster. Observations that are seldom
//! clustered accumulate a low score and come first in the ranking.
//!
//! `ranked_outliers()` ranks for given `k` and `q`; `optimized_ranking()`
//! searches for the `k` and `q` that bring the number of never-isolated
//! observations down to a target.
mod rounds;
pub mod search;

use itertools::Itertools;
use ndarray::prelude::*;
use pcg_rand::Pcg32;
use tracing::debug;

use crate::bins;
use crate::error::{Error, Result};
use crate::observation::Observation;
use crate::sampler::{RandomSubspaces, SubspaceSampler};

pub use self::search::{Search, SearchConfig, SearchStep, StopReason};


/// Ranks the observations of a dataset by FASTOUT outlier score.
///
/// `S` chooses the attribute subspace of each scoring round. By default
/// it is a PCG32-backed `RandomSubspaces`.
pub struct Ranker<S: SubspaceSampler = RandomSubspaces<Pcg32>> {
    observations: Vec<Observation>,
    minimums: Vec<f64>,
    maximums: Vec<f64>,
    sampler: S,
    config: SearchConfig,
}

impl Ranker<RandomSubspaces<Pcg32>> {
    /// Constructs a ranker over `inputs`, one observation per row.
    ///
    /// Subspaces are drawn from an unseeded PCG32 generator.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use(array)]
    /// extern crate ndarray;
    /// extern crate fastout;
    ///
    /// # fn main() {
    /// use fastout::Ranker;
    ///
    /// let inputs = array![[1.0, 3., -1.],
    ///                     [2.0, 50., 1.],
    ///                     [3.0, 5., 1.],
    ///                     [4.2, 2., 1.]];
    /// let ranker = Ranker::new(&inputs.view()).expect("Invalid dataset");
    ///
    /// assert_eq!(ranker.minimums(), &[1.0, 2.0, -1.0]);
    /// assert_eq!(ranker.maximums(), &[4.2, 50.0, 1.0]);
    /// # }
    /// ```
    pub fn new(inputs: &ArrayView2<f64>) -> Result<Ranker> {
        Ranker::with_sampler(inputs, RandomSubspaces::new(None))
    }

    /// Constructs a ranker whose PCG32 generator is seeded with `seed`.
    ///
    /// Two rankers built from the same inputs and seed produce the same
    /// rankings and parameter searches.
    pub fn new_seeded(inputs: &ArrayView2<f64>, seed: [u64; 2]) -> Result<Ranker> {
        Ranker::with_sampler(inputs, RandomSubspaces::new(Some(seed)))
    }

    /// Constructs a ranker from a list of rows.
    ///
    /// Fails if the rows do not all have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Ranker> {
        let inputs = matrix_from_rows(rows)?;

        Ranker::new(&inputs.view())
    }
}

impl<S: SubspaceSampler> Ranker<S> {
    /// Constructs a ranker that takes its subspaces from `sampler`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidDataset` if `inputs` has fewer than two rows or
    /// fewer than two columns, or contains a non-finite value.
    pub fn with_sampler(inputs: &ArrayView2<f64>, sampler: S) -> Result<Ranker<S>> {
        validate(inputs)?;

        let (minimums, maximums) = bins::bounds(inputs);
        let observations = inputs.outer_iter()
                                 .enumerate()
                                 .map(|(id, x)| Observation::new(id, x.to_vec()))
                                 .collect::<Vec<_>>();

        debug!(observations = observations.len(), attributes = minimums.len(),
               "constructed ranker");

        Ok(Ranker {
            observations: observations,
            minimums: minimums,
            maximums: maximums,
            sampler: sampler,
            config: SearchConfig::default(),
        })
    }

    /// Observations in input order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn minimums(&self) -> &[f64] {
        &self.minimums
    }

    pub fn maximums(&self) -> &[f64] {
        &self.maximums
    }

    pub fn n_attributes(&self) -> usize {
        self.minimums.len()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false: a ranker holds at least two observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.config
    }

    /// Sets the starting point, step and iteration cap of
    /// `optimized_ranking()`.
    pub fn set_search_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Number of bins per attribute for an average occupancy of `q`.
    pub fn bin_count(&self, q: i64) -> usize {
        bins::bin_count(self.len(), q)
    }

    /// Bin width of every attribute when its range is split into
    /// `bin_count` bins.
    pub fn bin_widths(&self, bin_count: usize) -> Vec<f64> {
        bins::bin_widths(&self.minimums, &self.maximums, bin_count)
    }

    /// Bin of `observation` on attribute `attribute` for bins of the
    /// given width.
    pub fn bin_index(&self, observation: &Observation, attribute: usize, width: f64) -> i64 {
        bins::bin_index(observation[attribute], self.minimums[attribute],
                        self.maximums[attribute], width)
    }

    /// Recomputes the bins of every observation from `widths`, one width
    /// per attribute.
    pub fn assign_bins(&mut self, widths: &[f64]) {
        let Ranker { ref mut observations,
                     ref minimums,
                     ref maximums, .. } = *self;

        for o in observations.iter_mut() {
            let bins = widths.iter()
                             .enumerate()
                             .map(|(i, &w)| bins::bin_index(o[i], minimums[i], maximums[i], w))
                             .collect();
            o.set_bins(bins);
        }
    }

    /// Ranks the observations by outlier score, most outlying first.
    ///
    /// Scores are reset, bins are computed for an average occupancy of
    /// `q`, and `sample_size` scoring rounds are run on subspaces of
    /// `k + 1` attributes. After the call every score is at most
    /// `sample_size`.
    ///
    /// # Arguments
    ///
    /// * `sample_size` - Number of scoring rounds.
    /// * `k` - Subspace size requested from the sampler.
    /// * `q` - Average number of observations per bin.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use(array)]
    /// extern crate ndarray;
    /// extern crate fastout;
    ///
    /// # fn main() {
    /// use fastout::Ranker;
    ///
    /// let inputs = array![[0.0, 0.0],
    ///                     [0.1, 0.1],
    ///                     [0.2, 0.0],
    ///                     [0.1, 0.2],
    ///                     [100., 100.]];
    /// let mut ranker = Ranker::new_seeded(&inputs.view(), [0, 0])
    ///                         .expect("Invalid dataset");
    ///
    /// let ranking = ranker.ranked_outliers(10, 1, 1);
    /// assert_eq!(ranking[0].id(), 4);
    /// assert_eq!(ranking[0].score(), 0);
    /// # }
    /// ```
    pub fn ranked_outliers(&mut self, sample_size: usize, k: usize, q: i64) -> Vec<Observation> {
        for o in self.observations.iter_mut() {
            o.reset_score();
        }

        let bin_count = self.bin_count(q);
        let widths = self.bin_widths(bin_count);
        self.assign_bins(&widths);

        for _ in 0..sample_size {
            self.score_round(k, &widths);
        }

        self.ranking()
    }

    /// Observations sorted by ascending score. Ties keep input order.
    fn ranking(&self) -> Vec<Observation> {
        self.observations.iter()
                         .cloned()
                         .sorted_by_key(|o| o.score())
                         .collect()
    }
}

/// Checks that `inputs` can be ranked.
fn validate(inputs: &ArrayView2<f64>) -> Result<()> {
    if inputs.nrows() < 2 {
        return Err(Error::invalid_dataset(
            format!("need more than one observation, got {}", inputs.nrows())));
    }
    if inputs.ncols() < 2 {
        return Err(Error::invalid_dataset(
            format!("need more than one attribute, got {}", inputs.ncols())));
    }
    if let Some(((i, j), v)) = inputs.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(Error::invalid_dataset(
            format!("non-finite value {} at row {}, column {}", v, i, j)));
    }

    Ok(())
}

/// Stacks `rows` into a matrix.
fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let d = rows.first().map_or(0, |x| x.len());

    if let Some(i) = rows.iter().position(|x| x.len() != d) {
        return Err(Error::invalid_dataset(
            format!("row {} has {} attributes, expected {}", i, rows[i].len(), d)));
    }

    let inputs = rows.iter()
                     .flat_map(|x| x.iter().cloned())
                     .collect::<Vec<_>>();

    Array::from_shape_vec((rows.len(), d), inputs)
          .map_err(|e| Error::invalid_dataset(e.to_string()))
}
