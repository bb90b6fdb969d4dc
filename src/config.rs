//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use log::warn;
use std::str::FromStr;

/// Initial capacity of the input buffer, in values
pub const DEFAULT_DATA_SIZE: usize = 128;

/// Pivot selection strategy used by every partition step of one sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// Use the first element of the sub-range
    #[default]
    First,
    /// Use the last element of the sub-range
    Last,
    /// Use the median of the first, middle and last elements
    Median,
    /// Use a uniformly random element of the sub-range
    Random,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 4] = [
        PivotStrategy::First,
        PivotStrategy::Last,
        PivotStrategy::Median,
        PivotStrategy::Random,
    ];

    /// Comparisons charged for choosing the pivot of one sub-range
    pub fn selection_cost(self) -> u64 {
        match self {
            PivotStrategy::Median => 3,
            _ => 0,
        }
    }
}

impl FromStr for PivotStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(PivotStrategy::First),
            "last" => Ok(PivotStrategy::Last),
            "median" => Ok(PivotStrategy::Median),
            "random" => Ok(PivotStrategy::Random),
            _ => Err(SortError::unknown_pivot(s)),
        }
    }
}

impl std::fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PivotStrategy::First => "first",
            PivotStrategy::Last => "last",
            PivotStrategy::Median => "median",
            PivotStrategy::Random => "random",
        };
        write!(f, "{name}")
    }
}

/// Main configuration structure for sort operations
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    /// Pivot selection strategy
    pub pivot: PivotStrategy,
    /// Print the unordered input, buffer size and comparison count
    pub verbose: bool,
    /// Input file path ("-" reads stdin)
    pub input_file: Option<String>,
    /// Output file path (stdout when unset)
    pub output_file: Option<String>,
    /// Seed for the random pivot generator (entropy when unset)
    pub seed: Option<u64>,
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_input_file(mut self, input_file: Option<String>) -> Self {
        self.input_file = input_file;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Apply a textual pivot flag.
    ///
    /// Unknown values are reported as a warning and leave the current strategy in place.
    /// Returns whether the flag was recognised.
    pub fn apply_pivot_flag(&mut self, value: &str) -> bool {
        match value.parse::<PivotStrategy>() {
            Ok(pivot) => {
                self.pivot = pivot;
                true
            }
            Err(e) => {
                warn!("{e}, keeping pivot strategy '{}'", self.pivot);
                false
            }
        }
    }

    /// Set the random seed from its command line text
    pub fn set_seed_from_string(&mut self, seed_str: &str) -> SortResult<()> {
        let seed = seed_str
            .trim()
            .parse::<u64>()
            .map_err(|_| SortError::parse_error(&format!("invalid seed: {seed_str}")))?;
        self.seed = Some(seed);
        Ok(())
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        match self.input_file.as_deref() {
            None | Some("") => Err(SortError::MissingInput),
            Some(_) => Ok(()),
        }
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_file.as_deref() == Some("-")
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    pub fn pivot(mut self, pivot: PivotStrategy) -> Self {
        self.config.pivot = pivot;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.config.verbose = true;
        self
    }

    pub fn input_file(mut self, file: String) -> Self {
        self.config.input_file = Some(file);
        self
    }

    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Finish and validate the configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
