//! Runs one read, sort and write pass for a configuration

use crate::config::SortConfig;
use crate::error::{SortError, SortResult};
use crate::input::{self, InputBuffer};
use crate::output::{self, VerboseReport};
use crate::quicksort::QuickSort;
use log::{debug, info};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// What one run of the tool did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSummary {
    /// Values read and sorted
    pub values: usize,
    /// Input lines that did not hold an integer
    pub skipped_lines: usize,
    /// Comparisons made by the sort
    pub comparisons: u64,
}

/// Reads the configured input, sorts it and writes the result
pub struct CoreSort {
    config: SortConfig,
}

impl CoreSort {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Run against the process's stdout
    pub fn sort(&self) -> SortResult<SortSummary> {
        let stdout = io::stdout();
        let mut console = BufWriter::new(stdout.lock());
        self.sort_to(&mut console)
    }

    /// Run with `console` taking the place of stdout
    pub fn sort_to<W: Write>(&self, console: &mut W) -> SortResult<SortSummary> {
        let input_name = self
            .config
            .input_file
            .as_deref()
            .ok_or(SortError::MissingInput)?;

        let mut input = self.read_input(input_name)?;
        debug!(
            "read {} values from {} lines ({} skipped)",
            input.len(),
            input.lines_read(),
            input.lines_skipped()
        );

        if self.config.verbose {
            let mut report = VerboseReport::new(&mut *console);
            report.opened(input_name)?;
            report.unordered(input.values())?;
            report.allocated(input.allocated_bytes())?;
        }

        let mut summary = SortSummary {
            values: input.len(),
            skipped_lines: input.lines_skipped(),
            comparisons: 0,
        };

        // Nothing is sorted or printed when the input held no integers.
        if input.is_empty() {
            console.flush()?;
            return Ok(summary);
        }

        let mut sorter = match self.config.seed {
            Some(seed) => QuickSort::with_seed(self.config.pivot, seed),
            None => QuickSort::new(self.config.pivot),
        };
        summary.comparisons = sorter.sort(input.values_mut());
        info!(
            "sorted {} values with pivot '{}': {} comparisons",
            summary.values, self.config.pivot, summary.comparisons
        );

        match &self.config.output_file {
            Some(path) => output::write_values_to_file(path, input.values())?,
            None => {
                if self.config.verbose {
                    VerboseReport::new(&mut *console).ordered()?;
                }
                output::write_values(console, input.values())?;
            }
        }

        if self.config.verbose {
            VerboseReport::new(&mut *console).comparisons(summary.comparisons)?;
        }

        console.flush()?;
        Ok(summary)
    }

    fn read_input(&self, input_name: &str) -> SortResult<InputBuffer> {
        if self.config.reading_from_stdin() {
            let stdin = io::stdin();
            Ok(input::read_from(stdin.lock())?)
        } else {
            input::read_file(Path::new(input_name))
        }
    }
}
