extern crate fastout;
#[macro_use(array)]
extern crate ndarray;
extern crate pcg_rand;
extern crate rand;

use ndarray::prelude::*;
use pcg_rand::Pcg32;
use rand::{Rng, SeedableRng};

fn generate_data(n: usize, d: usize, seed: [u64; 2]) -> Array2<f64> {
    let mut rng = Pcg32::from_seed(seed);

    Array::from_iter(rng.gen_iter::<f64>()
                        .take(n*d)).into_shape((n, d))
                                   .unwrap()
}

/// A tight group of four observations and one far away.
fn group_and_outlier() -> Array2<f64> {
    array![[0.0, 0.0],
           [0.1, 0.1],
           [0.2, 0.0],
           [0.1, 0.2],
           [10., 10.]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastout::*;

    #[test]
    fn target_reached() {
        let inputs = group_and_outlier();
        let mut ranker = Ranker::new_seeded(&inputs.view(), [0, 0]).unwrap();

        // Theta starts below n = 40, so the loop is entered and stops at
        // once on the target.
        let search = ranker.search(5, 40, 40);

        assert_eq!(search.stop, StopReason::TargetReached);
        assert_eq!(search.iterations, 0);
        assert_eq!((search.k, search.q), (3, 5));
        assert!(search.theta <= 5);
        assert_eq!(search.steps.len(), 1);
    }

    #[test]
    fn loop_condition_exhausted() {
        let inputs = group_and_outlier();
        let mut ranker = Ranker::new_seeded(&inputs.view(), [0, 0]).unwrap();

        // Two bins of width 5: the outlier's bin is adjacent to the
        // group's and it lies above the seed, so every observation is
        // clustered and theta equals the number of observations.
        let search = ranker.search(5, 5, 5);

        assert_eq!(search.stop, StopReason::Exhausted);
        assert_eq!(search.theta, 5);
        assert_eq!(search.ranking.len(), 5);
    }

    /// Theta never improves on this dataset, so without a cap the
    /// search would grow k and shrink q forever.
    #[test]
    fn iteration_cap() {
        let inputs = group_and_outlier();
        let mut ranker = Ranker::new_seeded(&inputs.view(), [0, 0]).unwrap();
        ranker.set_search_config(SearchConfig { max_iterations: 6, ..SearchConfig::default() });

        let search = ranker.search(4, 5, 5);

        assert_eq!(search.stop, StopReason::IterationCap);
        assert_eq!(search.iterations, 6);
        assert_eq!((search.k, search.q), (9, -55));
        assert_eq!(search.steps.len(), 7);
        assert!(search.steps.iter().all(|s| s.theta == 5));
        assert_eq!(search.ranking.len(), 5);
    }

    /// Every step follows from the previous theta: an improvement grows
    /// q, anything else grows k and shrinks q.
    #[test]
    fn trajectory_follows_theta() {
        let inputs = generate_data(80, 6, [4, 2]);
        let mut ranker = Ranker::new_seeded(&inputs.view(), [0, 0]).unwrap();
        ranker.set_search_config(SearchConfig { max_iterations: 12, ..SearchConfig::default() });
        let n = 12;

        let search = ranker.search(0, n, n);

        let mut last_theta = n;
        for w in search.steps.windows(2) {
            let (prev, next) = (w[0], w[1]);
            if prev.theta >= last_theta {
                assert_eq!((next.k, next.q), (prev.k + 1, prev.q - 10));
                last_theta = n;
            } else {
                assert_eq!((next.k, next.q), (prev.k, prev.q + 10));
                last_theta = prev.theta;
            }
        }

        let last = search.steps.last().unwrap();
        assert_eq!((last.k, last.q, last.theta), (search.k, search.q, search.theta));
        assert_eq!(search.steps.len(), search.iterations + 1);
    }

    #[test]
    fn optimized_ranking_is_sorted_permutation() {
        let inputs = generate_data(50, 4, [7, 7]);
        let mut ranker = Ranker::new_seeded(&inputs.view(), [1, 0]).unwrap();
        ranker.set_search_config(SearchConfig { max_iterations: 10, ..SearchConfig::default() });

        let ranking = ranker.optimized_ranking(3, 10, 10);

        assert_eq!(ranking.len(), 50);
        let mut ids = ranking.iter().map(|o| o.id()).collect::<Vec<_>>();
        ids.sort();
        assert_eq!(ids, (0..50).collect::<Vec<_>>());
        assert!(ranking.windows(2).all(|w| w[0].score() <= w[1].score()));
        assert!(ranking.iter().all(|o| o.score() <= 10));
    }

    /// Verify that a seeded search always takes the same path.
    #[test]
    fn seeded_search_is_reproducible() {
        let inputs = generate_data(60, 5, [2, 3]);

        let search = |seed| {
            let mut ranker = Ranker::new_seeded(&inputs.view(), seed).unwrap();
            ranker.set_search_config(SearchConfig { max_iterations: 8,
                                                    ..SearchConfig::default() });
            let search = ranker.search(2, 10, 10);
            let ids = search.ranking
                            .iter()
                            .map(|o| o.id())
                            .collect::<Vec<_>>();
            (search.steps, ids)
        };

        assert_eq!(search([5, 6]), search([5, 6]));
    }

    #[test]
    fn theta_counts_full_scores() {
        let inputs = group_and_outlier();
        let mut ranker = Ranker::new_seeded(&inputs.view(), [0, 0]).unwrap();

        // Five bins of width 2: the outlier is isolated in every round.
        let (theta, ranking) = ranker.theta(8, 1, 1, 8);

        assert_eq!(theta, 4);
        assert_eq!(ranking[0].id(), 4);
        assert_eq!(ranking[0].score(), 0);
    }
}
