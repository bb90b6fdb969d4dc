//! Partition-exchange sort with pluggable pivot selection and comparison counting.

use crate::config::PivotStrategy;
use crate::error::{SortError, SortResult};
use crate::pivot::select_pivot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Quicksort over `i32` sequences with a fixed pivot strategy and its own random source
pub struct QuickSort<R: Rng = StdRng> {
    strategy: PivotStrategy,
    rng: R,
}

impl QuickSort<StdRng> {
    /// Sorter whose random pivots are drawn from OS entropy
    pub fn new(strategy: PivotStrategy) -> Self {
        Self::with_rng(strategy, StdRng::from_entropy())
    }

    /// Sorter with reproducible random pivots
    pub fn with_seed(strategy: PivotStrategy, seed: u64) -> Self {
        Self::with_rng(strategy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuickSort<R> {
    pub fn with_rng(strategy: PivotStrategy, rng: R) -> Self {
        Self { strategy, rng }
    }

    pub fn strategy(&self) -> PivotStrategy {
        self.strategy
    }

    /// Sort `v` ascending in place, returning the number of comparisons made
    pub fn sort(&mut self, v: &mut [i32]) -> u64 {
        quick_sort(v, self.strategy, &mut self.rng)
    }

    /// Sort the inclusive sub-range `[left, right]` of `v`
    pub fn sort_range(&mut self, v: &mut [i32], left: usize, right: usize) -> SortResult<u64> {
        quick_sort_range(v, left, right, self.strategy, &mut self.rng)
    }
}

/// Sort `v` ascending in place and return the number of comparisons made.
///
/// Each partition of a range of length `n > 1` costs `n - 1` comparisons against the pivot,
/// plus [`PivotStrategy::selection_cost`] for choosing it. Empty and single element inputs
/// cost nothing.
pub fn quick_sort<R: Rng + ?Sized>(v: &mut [i32], strategy: PivotStrategy, rng: &mut R) -> u64 {
    let mut comparisons = 0u64;
    let mut v = v;

    // Recurse into the smaller side and keep looping on the larger one, so the stack stays
    // logarithmic even when the partitions are lopsided.
    while v.len() > 1 {
        comparisons += (v.len() - 1) as u64 + strategy.selection_cost();

        let pivot_pos = partition(v, strategy, rng);
        let (left, rest) = v.split_at_mut(pivot_pos);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            comparisons += quick_sort(left, strategy, rng);
            v = right;
        } else {
            comparisons += quick_sort(right, strategy, rng);
            v = left;
        }
    }

    comparisons
}

/// Sort the inclusive sub-range `[left, right]` of `v`.
///
/// `right + 1 == left` denotes an empty range and costs nothing. Any range reaching past the
/// end of `v`, or with `left > right + 1`, is rejected.
pub fn quick_sort_range<R: Rng + ?Sized>(
    v: &mut [i32],
    left: usize,
    right: usize,
    strategy: PivotStrategy,
    rng: &mut R,
) -> SortResult<u64> {
    if right >= v.len() || left > right + 1 {
        return Err(SortError::invalid_range(left, right, v.len()));
    }
    if left > right {
        return Ok(0);
    }

    Ok(quick_sort(&mut v[left..=right], strategy, rng))
}

/// Partition `v` around a pivot chosen by `strategy`.
///
/// Returns the pivot's final index `p`: everything in `v[..p]` is less than the pivot and
/// everything in `v[p..]` is greater or equal. `v` must not be empty.
pub fn partition<R: Rng + ?Sized>(v: &mut [i32], strategy: PivotStrategy, rng: &mut R) -> usize {
    let pivot = select_pivot(v, strategy, rng);

    let mut i = 1;
    for j in 1..v.len() {
        if v[j] < pivot {
            v.swap(i, j);
            i += 1;
        }
    }
    v.swap(0, i - 1);

    i - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn random_vec(rng: &mut StdRng, len: usize, max: i32) -> Vec<i32> {
        (0..len).map(|_| rng.gen_range(-max..=max)).collect()
    }

    /// Straightforward recursive version over inclusive bounds, used to cross-check counts.
    /// Returns (comparisons, partitioned ranges).
    fn reference_sort(
        v: &mut [i32],
        left: isize,
        right: isize,
        strategy: PivotStrategy,
        rng: &mut StdRng,
    ) -> (u64, u64) {
        if right - left + 1 <= 1 {
            return (0, 0);
        }
        let (l, r) = (left as usize, right as usize);
        let p = l + partition(&mut v[l..=r], strategy, rng);

        let (lc, ln) = reference_sort(v, left, p as isize - 1, strategy, rng);
        let (rc, rn) = reference_sort(v, p as isize + 1, right, strategy, rng);
        let own = (r - l) as u64 + strategy.selection_cost();
        (own + lc + rc, 1 + ln + rn)
    }

    #[test]
    fn test_scenario_first() {
        let mut v = vec![5, 3, 8, 1, 9, 2];
        let comparisons = quick_sort(&mut v, PivotStrategy::First, &mut rng());
        assert_eq!(v, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(comparisons, 8);
    }

    #[test]
    fn test_scenario_last_and_median() {
        let mut v = vec![5, 3, 8, 1, 9, 2];
        assert_eq!(quick_sort(&mut v, PivotStrategy::Last, &mut rng()), 9);
        assert_eq!(v, vec![1, 2, 3, 5, 8, 9]);

        let mut v = vec![5, 3, 8, 1, 9, 2];
        assert_eq!(quick_sort(&mut v, PivotStrategy::Median, &mut rng()), 17);
        assert_eq!(v, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_sorted_input_worst_case() {
        let mut v = vec![1, 2, 3, 4, 5];
        let comparisons = quick_sort(&mut v, PivotStrategy::Last, &mut rng());
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
        assert_eq!(comparisons, 4 + 3 + 2 + 1);

        let mut v = vec![5, 4, 3, 2, 1];
        assert_eq!(quick_sort(&mut v, PivotStrategy::First, &mut rng()), 10);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_long_sorted_input_is_quadratic_but_does_not_overflow_stack() {
        let n = 10_000u64;
        let mut v: Vec<i32> = (0..n as i32).collect();
        let comparisons = quick_sort(&mut v, PivotStrategy::First, &mut rng());
        assert_eq!(comparisons, n * (n - 1) / 2);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_duplicates() {
        for strategy in PivotStrategy::ALL {
            let mut v = vec![4, 4, 4, 4];
            let comparisons = quick_sort(&mut v, strategy, &mut rng());
            assert_eq!(v, vec![4, 4, 4, 4]);

            let expected = if strategy == PivotStrategy::Median { 15 } else { 6 };
            assert_eq!(comparisons, expected, "strategy {strategy}");
        }
    }

    #[test]
    fn test_empty_and_single() {
        for strategy in PivotStrategy::ALL {
            let mut empty: Vec<i32> = Vec::new();
            assert_eq!(quick_sort(&mut empty, strategy, &mut rng()), 0);
            assert!(empty.is_empty());

            let mut single = vec![-3];
            assert_eq!(quick_sort(&mut single, strategy, &mut rng()), 0);
            assert_eq!(single, vec![-3]);
        }
    }

    #[test]
    fn test_random_inputs_against_reference() {
        let mut gen = StdRng::seed_from_u64(1357);
        let mut pivots = rng();

        for len in [2, 3, 7, 16, 33, 100, 257, 1000] {
            for max in [1, 10, i32::MAX] {
                let input = random_vec(&mut gen, len, max);
                let mut expected = input.clone();
                expected.sort_unstable();

                for strategy in PivotStrategy::ALL {
                    let mut v = input.clone();
                    let comparisons = quick_sort(&mut v, strategy, &mut pivots);
                    assert_eq!(v, expected, "len {len} strategy {strategy}");
                    assert!(comparisons >= (len - 1) as u64);
                }
            }
        }
    }

    #[test]
    fn test_counts_match_plain_recursion() {
        let mut gen = StdRng::seed_from_u64(2024);

        for len in [2, 5, 10, 64, 500] {
            let input = random_vec(&mut gen, len, 50);

            for strategy in [PivotStrategy::First, PivotStrategy::Last, PivotStrategy::Median] {
                let mut a = input.clone();
                let mut b = input.clone();
                let ours = quick_sort(&mut a, strategy, &mut rng());
                let (reference, internal_nodes) =
                    reference_sort(&mut b, 0, len as isize - 1, strategy, &mut rng());

                assert_eq!(ours, reference, "len {len} strategy {strategy}");
                assert_eq!(a, b);

                if strategy == PivotStrategy::Median {
                    assert!(ours >= (len - 1) as u64 + 3 * internal_nodes);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let mut gen = StdRng::seed_from_u64(7);
        for strategy in PivotStrategy::ALL {
            let mut v = random_vec(&mut gen, 300, 1000);
            quick_sort(&mut v, strategy, &mut rng());
            let once = v.clone();
            quick_sort(&mut v, strategy, &mut rng());
            assert_eq!(v, once);
        }
    }

    #[test]
    fn test_partition_invariant() {
        let mut gen = StdRng::seed_from_u64(11);
        let mut pivots = rng();

        for _ in 0..100 {
            let original = random_vec(&mut gen, 40, 20);
            for strategy in PivotStrategy::ALL {
                let mut v = original.clone();
                let p = partition(&mut v, strategy, &mut pivots);
                let pivot = v[p];

                assert!(v[..p].iter().all(|&x| x < pivot));
                assert!(v[p..].iter().all(|&x| x >= pivot));

                let mut a = v.clone();
                let mut b = original.clone();
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_sort_range() {
        let mut v = vec![9, 5, 3, 8, 1, 9, 2, 0];
        let comparisons = quick_sort_range(&mut v, 1, 6, PivotStrategy::First, &mut rng())
            .expect("valid range");
        assert_eq!(v, vec![9, 1, 2, 3, 5, 8, 9, 0]);
        assert_eq!(comparisons, 8);

        // Empty range directly after a valid index.
        assert_eq!(
            quick_sort_range(&mut v, 3, 2, PivotStrategy::First, &mut rng()).ok(),
            Some(0)
        );
        assert_eq!(v, vec![9, 1, 2, 3, 5, 8, 9, 0]);
    }

    #[test]
    fn test_sort_range_rejects_invalid() {
        let mut v = vec![3, 2, 1];
        assert!(matches!(
            quick_sort_range(&mut v, 0, 3, PivotStrategy::First, &mut rng()),
            Err(SortError::InvalidRange { left: 0, right: 3, len: 3 })
        ));
        assert!(quick_sort_range(&mut v, 2, 0, PivotStrategy::First, &mut rng()).is_err());

        let mut empty: Vec<i32> = Vec::new();
        assert!(quick_sort_range(&mut empty, 0, 0, PivotStrategy::First, &mut rng()).is_err());
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    fn test_quick_sort_struct() {
        let mut sorter = QuickSort::with_seed(PivotStrategy::Random, 42);
        assert_eq!(sorter.strategy(), PivotStrategy::Random);

        let mut v = vec![10, -4, 7, 7, 0, i32::MIN, i32::MAX];
        let comparisons = sorter.sort(&mut v);
        assert_eq!(v, vec![i32::MIN, -4, 0, 7, 7, 10, i32::MAX]);
        assert!(comparisons >= 6);

        let mut again = vec![10, -4, 7, 7, 0, i32::MIN, i32::MAX];
        let mut twin = QuickSort::with_seed(PivotStrategy::Random, 42);
        assert_eq!(twin.sort(&mut again), comparisons);

        let mut v = vec![3, 1, 2];
        assert!(sorter.sort_range(&mut v, 1, 2).is_ok());
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    fn test_quick_sort_from_entropy() {
        let mut sorter = QuickSort::new(PivotStrategy::Median);
        let mut v = vec![2, 1];
        assert_eq!(sorter.sort(&mut v), 1 + 3);
        assert_eq!(v, vec![1, 2]);
    }
}
