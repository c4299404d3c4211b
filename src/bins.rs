//! Attribute bounds and the equal-width binning used to pre-filter
//! neighbors.
use std::cmp::max;
use ndarray::prelude::*;

/// Lowest number of bins per attribute.
pub const MIN_BINS: usize = 2;

/// Returns the per-attribute minimums and maximums of `inputs`.
///
/// `inputs` must have at least one row.
pub fn bounds(inputs: &ArrayView2<f64>) -> (Vec<f64>, Vec<f64>) {
    let mut minimums = inputs.row(0).to_vec();
    let mut maximums = minimums.clone();

    for x in inputs.outer_iter() {
        for (i, &v) in x.iter().enumerate() {
            if v < minimums[i] {
                minimums[i] = v;
            }
            if v > maximums[i] {
                maximums[i] = v;
            }
        }
    }

    (minimums, maximums)
}

/// Number of bins giving an average occupancy of `q` observations out
/// of `n`, i.e. `max(2, ceil(n / q))`.
///
/// A non-positive `q` gives `MIN_BINS`. The parameter search decrements
/// `q` and may drive it below one.
pub fn bin_count(n: usize, q: i64) -> usize {
    if q <= 0 {
        return MIN_BINS;
    }
    let q = q as usize;

    max(MIN_BINS, (n + q - 1) / q)
}

/// Width of one bin for each attribute, splitting `[minimum, maximum]`
/// into `bin_count` equal intervals.
pub fn bin_widths(minimums: &[f64], maximums: &[f64], bin_count: usize) -> Vec<f64> {
    minimums.iter()
            .zip(maximums)
            .map(|(min, max)| (max - min) / bin_count as f64)
            .collect()
}

/// Bin of `value` for an attribute with the given bounds and bin width.
///
/// The maximum itself would fall one past the last bin, so it is moved
/// down by one. On a constant attribute (`width == 0`) every value is
/// both minimum and maximum: the raw index is taken as 0 and the
/// correction puts every observation in bin -1.
pub fn bin_index(value: f64, minimum: f64, maximum: f64, width: f64) -> i64 {
    let index = if width == 0. {
        0
    } else {
        ((value - minimum) / width).floor() as i64
    };

    if value == maximum { index - 1 } else { index }
}
