//! Pivot selection for the partition step.
//!
//! Every strategy leaves the chosen pivot at index 0 of the sub-range, which is where
//! [`crate::quicksort::partition`] expects it.

use crate::config::PivotStrategy;
use rand::Rng;

/// Choose a pivot for `v` according to `strategy` and move it to `v[0]`.
///
/// Returns the pivot value. `v` must not be empty. Only elements of `v` are reordered.
pub fn select_pivot<R: Rng + ?Sized>(v: &mut [i32], strategy: PivotStrategy, rng: &mut R) -> i32 {
    debug_assert!(!v.is_empty(), "pivot requested for an empty range");

    let last = v.len() - 1;
    match strategy {
        PivotStrategy::First => {}
        PivotStrategy::Last => v.swap(0, last),
        PivotStrategy::Median => {
            let idx = median_of_three(v, 0, last / 2, last);
            if idx != 0 {
                v.swap(0, idx);
            }
        }
        PivotStrategy::Random => {
            let idx = rng.gen_range(0..=last);
            v.swap(0, idx);
        }
    }

    v[0]
}

/// Index of the median value among `v[a]`, `v[b]` and `v[c]`.
///
/// Uses at most three comparisons. With ties the result still holds a value equal to the
/// median; `b` is preferred over `c`, and `a` is only returned when neither is the median.
pub fn median_of_three(v: &[i32], a: usize, b: usize, c: usize) -> usize {
    let (va, vb, vc) = (v[a], v[b], v[c]);

    if va <= vb {
        if vb <= vc {
            b
        } else if va <= vc {
            c
        } else {
            a
        }
    } else if vb > vc {
        b
    } else if va <= vc {
        a
    } else {
        c
    }
}
