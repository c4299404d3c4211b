//! One scoring round: random subspace, flood-fill clustering, score
//! update.
use tracing::trace;

use crate::sampler::SubspaceSampler;
use super::Ranker;


impl<S: SubspaceSampler> Ranker<S> {
    /// Runs one scoring round.
    ///
    /// A subspace is drawn for `k`, then observations are visited in
    /// input order: each one not yet in a cluster seeds a new cluster,
    /// which is grown to a fixed point. A seed that gathers no neighbor
    /// is released again. Finally every clustered observation is
    /// released and its score incremented.
    ///
    /// Bins must have been assigned for `widths` beforehand.
    ///
    /// # Arguments
    ///
    /// * `k` - Subspace size requested from the sampler.
    /// * `widths` - Bin width of every attribute; half of it bounds the
    ///              neighborhood on that attribute.
    pub fn score_round(&mut self, k: usize, widths: &[f64]) {
        let n_attributes = self.n_attributes();
        let attribute_indexes = self.sampler.sample(n_attributes, k);

        let mut cluster = 0;
        let mut clusters = 0;

        for i in 0..self.observations.len() {
            if self.observations[i].is_clustered() {
                continue;
            }

            cluster += 1;
            self.observations[i].set_cluster(cluster);

            let members = self.grow_cluster(i, cluster, &attribute_indexes, widths);
            if members.is_empty() {
                self.observations[i].uncluster();
            } else {
                clusters += 1;
            }
        }

        let mut scored = 0;
        for o in self.observations.iter_mut().filter(|o| o.is_clustered()) {
            o.uncluster();
            o.increment_score();
            scored += 1;
        }

        trace!(?attribute_indexes, clusters, scored, "scored round");
    }

    /// Gathers into `cluster` every unclustered observation reachable
    /// from `seed` through the neighbor relation, and returns their
    /// positions (the seed excluded) in the order they joined.
    ///
    /// Each pass scans the observations that were unclustered when it
    /// started. A candidate joins if it lies in the seed's neighborhood
    /// or if any member gathered so far, including members added earlier
    /// in the same pass, lies in its own. Passes repeat until one adds
    /// nobody.
    fn grow_cluster(&mut self, seed: usize, cluster: usize, attribute_indexes: &[usize],
                    widths: &[f64]) -> Vec<usize> {
        let mut members: Vec<usize> = vec![];

        loop {
            let mut fruitful = false;

            for i in self.unclustered() {
                let joins = {
                    let observations = &self.observations;
                    let candidate = &observations[i];

                    observations[seed].is_neighbor_of(candidate, attribute_indexes, widths)
                        || candidate.is_neighbor_of_any(members.iter().map(|&m| &observations[m]),
                                                        attribute_indexes, widths)
                };

                if joins {
                    self.observations[i].set_cluster(cluster);
                    members.push(i);
                    fruitful = true;
                }
            }

            if !fruitful {
                return members;
            }
        }
    }

    /// Positions of the observations not assigned to any cluster.
    fn unclustered(&self) -> Vec<usize> {
        self.observations.iter()
                         .enumerate()
                         .filter(|&(_, o)| !o.is_clustered())
                         .map(|(i, _)| i)
                         .collect()
    }
}
