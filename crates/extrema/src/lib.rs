//! Extrema - iterative vs recursive min/max search in Rust
//!
//! Find the extrema of a sequence with either strategy, or time both across
//! increasing input sizes.
//!
//! # Example
//!
//! ```rust
//! use extrema::prelude::*;
//!
//! let values = [10, 50, 20, 80, 40, 60, 30, 70];
//! let iterative = find_min_max_iterative(&values).unwrap();
//! let recursive = find_min_max_recursive(&values, 0, values.len() - 1).unwrap();
//! assert_eq!(iterative, recursive);
//! assert_eq!(iterative.into_tuple(), (10, 80));
//! ```

// Search strategies
pub use extrema_core::{
    find_min_max_iterative, find_min_max_recursive, ExtremaError, IterativeFinder,
    MinMaxFinder, RecursiveFinder, Result, Sample, SearchResult, Strategy,
};

// Benchmarking
pub use extrema_benchmark::{
    compare_prefix, run_benchmark, Benchmark, BenchmarkConfig, BenchmarkPoint, BenchmarkResult,
    Comparison, CsvExporter, MarkdownReport, TimedSearch,
};

// Configuration and data
pub use extrema_config::{ExtremaConfig, SweepConfig};
pub use extrema_data::{category_extrema, CategoryExtrema, Dataset, SampleGenerator};

#[cfg(feature = "console")]
pub use extrema_console as console;

mod sweep;
pub use sweep::{run_sweep, run_sweep_with_config};

pub mod prelude {
    pub use super::{find_min_max_iterative, find_min_max_recursive, SearchResult, Strategy};
    pub use super::{compare_prefix, run_benchmark, run_sweep, BenchmarkConfig};
    pub use super::{ExtremaError, Sample};
}
