//! A single row of the dataset, together with the scratch state that
//! FASTOUT keeps for it while ranking.
use std::ops::Index;

/// An observation (row) of a dataset.
///
/// The attribute vector never changes after construction. The bin
/// vector and cluster tag are rewritten by every scoring round, while the
/// score accumulates over all rounds of one ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    id: usize,
    attributes: Vec<f64>,
    bins: Vec<i64>,
    cluster: Option<usize>,
    score: usize,
}

impl Observation {
    pub(crate) fn new(id: usize, attributes: Vec<f64>) -> Observation {
        Observation {
            id: id,
            attributes: attributes,
            bins: vec![],
            cluster: None,
            score: 0,
        }
    }

    /// Position of the observation in the input matrix.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn attributes(&self) -> &[f64] {
        &self.attributes
    }

    /// Bin index of each attribute, as assigned by the last binning
    /// pass. Empty before the first pass.
    pub fn bins(&self) -> &[i64] {
        &self.bins
    }

    /// Number of rounds in which the observation belonged to a cluster
    /// with at least two members.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn cluster(&self) -> Option<usize> {
        self.cluster
    }

    pub fn is_clustered(&self) -> bool {
        self.cluster.is_some()
    }

    pub(crate) fn set_cluster(&mut self, cluster: usize) {
        self.cluster = Some(cluster);
    }

    pub(crate) fn uncluster(&mut self) {
        self.cluster = None;
    }

    pub(crate) fn set_bins(&mut self, bins: Vec<i64>) {
        self.bins = bins;
    }

    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Tests whether `other` lies in the neighborhood of this observation
    /// on the selected attributes.
    ///
    /// Two conditions must hold for every index in `attribute_indexes`:
    /// the bins differ by at most one, and this observation's value does
    /// not exceed `other`'s by more than half the neighborhood width.
    /// The distance condition is one-sided: `other` may exceed this
    /// observation by any amount, as long as the bins are adjacent.
    ///
    /// # Arguments
    ///
    /// * `other` - Candidate neighbor.
    /// * `attribute_indexes` - Attributes of the current subspace.
    /// * `widths` - Neighborhood width of every attribute, indexed by
    ///              attribute index.
    pub fn is_neighbor_of(&self, other: &Observation, attribute_indexes: &[usize],
                          widths: &[f64]) -> bool {
        let adjacent = attribute_indexes.iter()
                                        .all(|&i| (self.bins[i] - other.bins[i]).abs() <= 1);
        if !adjacent {
            return false;
        }

        attribute_indexes.iter()
                         .all(|&i| self.attributes[i] - other.attributes[i] <= widths[i] / 2.)
    }

    /// True if at least one of `observations` is a neighbor of this one.
    pub fn is_neighbor_of_any<'a, I>(&self, observations: I, attribute_indexes: &[usize],
                                     widths: &[f64]) -> bool
            where I: IntoIterator<Item = &'a Observation> {
        observations.into_iter()
                    .any(|o| self.is_neighbor_of(o, attribute_indexes, widths))
    }
}

impl Index<usize> for Observation {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.attributes[i]
    }
}
