//! Quicksort over integer files with selectable pivot strategies
//!
//! Reads one integer per line, sorts them in place with a partition-exchange sort whose
//! pivot is chosen by one of four strategies, and reports how many comparisons it took.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Sorting core
pub mod pivot;
pub mod quicksort;

// I/O around the core
pub mod input;
pub mod output;
pub mod core_sort;

// Re-export commonly used types
pub use config::{PivotStrategy, SortConfig};
pub use error::{SortError, SortResult};
pub use quicksort::{quick_sort, quick_sort_range, QuickSort};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Read, sort and print according to `config`
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    let core_sort = crate::core_sort::CoreSort::new(config.clone());
    core_sort.sort()?;
    Ok(EXIT_SUCCESS)
}
