//! The fastout crate.
//!
//! A crate implementing FASTOUT, a randomized outlier ranking method for
//! multivariate numeric data introduced in Foss et al., "Class
//! Separation through Variance: a new application of outlier detection"
//! (Knowledge and Information Systems, 2010).
//!
//! FASTOUT splits the range of every attribute into coarse bins, then
//! repeatedly picks a random subset of attributes and groups observations
//! that are neighbors on all of them. An observation earns one point for
//! every round in which it belongs to a group; outliers rarely do, and end
//! up with the lowest scores.
//!
//! # Goals
//! * Sequential, deterministic ranking given a seed.
//! * Injectable subspace selection, so rankings can be scripted in tests.
//! * Automatic choice of the subspace size `k` and bin occupancy `q`.
//!
//! # Examples
//!
//! Rank a small dataset with a seeded ranker, sampling subspaces of
//! `k+1 = 2` attributes over 20 rounds, with one observation per bin on
//! average.
//!
//! The ranking holds every observation, sorted by ascending score: the
//! most outlying observations come first.
//!
//! ```
//! #[macro_use(array)]
//! extern crate ndarray;
//! extern crate fastout;
//!
//! # fn main() {
//! use fastout::Ranker;
//!
//! let inputs = array![[0.0, 0.1],
//!                     [0.1, 0.0],
//!                     [0.2, 0.2],
//!                     [0.1, 0.1],
//!                     [100., 100.]];
//! let seed = [0, 0];
//! let mut ranker = Ranker::new_seeded(&inputs.view(), seed)
//!                         .expect("Invalid dataset");
//!
//! let ranking = ranker.ranked_outliers(20, 1, 1);
//! assert_eq!(ranking[0].id(), 4);
//! assert_eq!(ranking[0].score(), 0);
//! assert!(ranking[1..].iter().all(|o| o.score() == 20));
//! # }
//! ```
//!
//! `Ranker::optimized_ranking()` picks `k` and `q` itself; see
//! [search](ranker/search/index.html).

pub mod bins;
pub mod error;
pub mod observation;
pub mod ranker;
pub mod sampler;

pub use crate::error::{Error, Result};
pub use crate::observation::Observation;
pub use crate::ranker::{Ranker, Search, SearchConfig, SearchStep, StopReason};
