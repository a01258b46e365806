//! Sampling and set-overlap helpers used by the memory challenge.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::CellId;

/// Creates the cell ids `0..size` in order.
#[instrument]
pub fn create_cells(size: usize) -> Vec<CellId> {
    (0..size).collect()
}

/// Draws `min(k, n)` distinct values from `0..n` using the thread rng.
///
/// Values come back in draw order, not sorted.
#[instrument]
pub fn sample(n: usize, k: usize) -> Vec<CellId> {
    sample_with(&mut rand::rng(), n, k)
}

/// Draws `min(k, n)` distinct values from `0..n` using the given rng.
#[instrument(skip(rng))]
pub fn sample_with<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Vec<CellId> {
    sample_from(rng, &create_cells(n), k)
}

/// Draws up to `k` elements from `items` without replacement.
///
/// Each draw is uniform over the elements not drawn yet. Duplicated
/// values in `items` are distinct draws.
pub fn sample_from<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], k: usize) -> Vec<T> {
    let mut pool = items.to_vec();
    let take = k.min(pool.len());
    let mut drawn = Vec::with_capacity(take);
    for _ in 0..take {
        let index = rng.random_range(0..pool.len());
        drawn.push(pool.swap_remove(index));
    }
    drawn
}

/// How many elements of one sequence do and do not occur in another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossCounts {
    /// Elements found in the cross sequence.
    pub include: usize,
    /// Elements missing from the cross sequence.
    pub exclude: usize,
}

impl CrossCounts {
    /// Sum of both counts; always the length of the source sequence.
    pub fn total(&self) -> usize {
        self.include + self.exclude
    }
}

impl From<CrossCounts> for (usize, usize) {
    fn from(counts: CrossCounts) -> Self {
        (counts.include, counts.exclude)
    }
}

/// Counts the elements of `src` that do and do not appear in `cross`.
///
/// Every element of `src` is checked on its own, so duplicates in `src`
/// are counted once each.
pub fn cross_counts<T: PartialEq>(src: &[T], cross: &[T]) -> CrossCounts {
    src.iter().fold(CrossCounts::default(), |mut counts, item| {
        if cross.contains(item) {
            counts.include += 1;
        } else {
            counts.exclude += 1;
        }
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_create_cells() {
        assert_eq!(create_cells(5), vec![0, 1, 2, 3, 4]);
        assert!(create_cells(0).is_empty());
    }

    #[test]
    fn test_sample_is_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..30 {
            for k in 0..=n {
                let drawn = sample_with(&mut rng, n, k);
                assert_eq!(drawn.len(), k);
                let unique: HashSet<_> = drawn.iter().copied().collect();
                assert_eq!(unique.len(), k, "duplicates in {:?}", drawn);
                assert!(drawn.iter().all(|&v| v < n));
            }
        }
    }

    #[test]
    fn test_sample_clamps_to_population() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut drawn = sample_with(&mut rng, 4, 9);
        drawn.sort_unstable();
        assert_eq!(drawn, vec![0, 1, 2, 3]);
        assert!(sample(0, 3).is_empty());
    }

    #[test]
    fn test_sample_is_reproducible_with_seed() {
        let a = sample_with(&mut StdRng::seed_from_u64(42), 25, 6);
        let b = sample_with(&mut StdRng::seed_from_u64(42), 25, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_reaches_every_value() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(sample_with(&mut rng, 10, 2));
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_sample_from_slice() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = [9, 12, 4, 7, 5];
        let drawn = sample_from(&mut rng, &items, 3);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|v| items.contains(v)));
    }

    #[test]
    fn test_cross_counts_example() {
        let counts = cross_counts(&[0, 1, 2, 3, 4], &[1, 3, 5]);
        assert_eq!(<(usize, usize)>::from(counts), (2, 3));
    }

    #[test]
    fn test_cross_counts_duplicates_counted_independently() {
        let counts = cross_counts(&[1, 1, 2, 2, 2], &[1]);
        assert_eq!(counts, CrossCounts { include: 2, exclude: 3 });
    }

    #[test]
    fn test_cross_counts_total_is_source_length() {
        let cases: [(&[u8], &[u8]); 4] = [
            (&[], &[1, 2]),
            (&[1, 2, 3], &[]),
            (&[4, 4, 4], &[4]),
            (&[1, 2, 3, 4, 5, 6], &[2, 4, 6, 8]),
        ];
        for (src, cross) in cases {
            assert_eq!(cross_counts(src, cross).total(), src.len());
        }
    }
}
