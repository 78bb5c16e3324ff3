//! Uniform random selection without replacement.

use rand::Rng;

/// Select up to `amount` distinct indices from `0..population` uniformly at random.
///
/// Runs a partial Fisher-Yates shuffle over the index range: each of the first
/// `amount` slots is swapped with a candidate drawn uniformly from the
/// remaining tail, so every index is equally likely to land in the selection
/// regardless of insertion order. When `amount >= population` the whole
/// (shuffled) range is returned.
pub(crate) fn sample_indices<R: Rng + ?Sized>(
    rng: &mut R,
    population: usize,
    amount: usize,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..population).collect();
    let take = amount.min(population);
    for slot in 0..take {
        let candidate = rng.gen_range(slot..population);
        indices.swap(slot, candidate);
    }
    indices.truncate(take);
    indices
}
