//! Selection of the random attribute subspace used in each scoring round.
use pcg_rand::Pcg32;
use rand::{Rng, SeedableRng};

/// Chooses the attributes a scoring round clusters on.
///
/// Implemented by `RandomSubspaces` and by any
/// `FnMut(n_attributes, k) -> Vec<usize>` closure, which lets tests
/// script the exact sequence of subspaces.
pub trait SubspaceSampler {
    /// Returns the attribute indexes for one round, given the number of
    /// attributes in the dataset and the requested subspace size `k`.
    fn sample(&mut self, n_attributes: usize, k: usize) -> Vec<usize>;
}

impl<F> SubspaceSampler for F where F: FnMut(usize, usize) -> Vec<usize> {
    fn sample(&mut self, n_attributes: usize, k: usize) -> Vec<usize> {
        self(n_attributes, k)
    }
}

/// Uniformly random subspaces drawn from a pseudo random number
/// generator.
///
/// A request for `k` attributes yields `k + 1` of them (or all of them,
/// if the dataset has fewer).
pub struct RandomSubspaces<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSubspaces<R> {
    pub fn from_rng(rng: R) -> RandomSubspaces<R> {
        RandomSubspaces { rng: rng }
    }
}

impl RandomSubspaces<Pcg32> {
    /// Constructs a sampler backed by PCG32.
    ///
    /// # Arguments
    ///
    /// * `seed` - Optionally, a seed for the generator. Without one the
    ///            generator starts from PCG32's default state, so runs
    ///            are still reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastout::sampler::*;
    ///
    /// let mut sampler = RandomSubspaces::new(Some([0, 0]));
    /// assert_eq!(sampler.sample(5, 2).len(), 3);
    /// ```
    pub fn new(seed: Option<[u64; 2]>) -> RandomSubspaces<Pcg32> {
        let rng = match seed {
            Some(seed) => Pcg32::from_seed(seed),
            None => Pcg32::new_unseeded(),
        };

        RandomSubspaces::from_rng(rng)
    }
}

impl<R: Rng> SubspaceSampler for RandomSubspaces<R> {
    fn sample(&mut self, n_attributes: usize, k: usize) -> Vec<usize> {
        let mut indexes = (0..n_attributes).collect::<Vec<_>>();
        self.rng.shuffle(&mut indexes);
        indexes.truncate(k + 1);

        indexes
    }
}
