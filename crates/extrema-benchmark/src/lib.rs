//! Benchmarking framework for Extrema.
//!
//! This crate measures the iterative and recursive min/max searches over
//! increasing prefixes of a sample sequence and reports the averaged timings.
//!
//! # Overview
//!
//! The benchmarking framework allows you to:
//! - Sweep input size in fixed steps up to a maximum
//! - Repeat each measurement and average the wall-clock time
//! - Skip the recursive search above a configured recursion ceiling
//! - Compare both strategies once at a single size
//! - Export results to CSV and Markdown
//!
//! Timing always wraps a whole search call; the searches themselves are
//! never instrumented.
//!
//! # Example
//!
//! ```
//! use extrema_benchmark::{run_benchmark, BenchmarkConfig};
//!
//! let samples: Vec<i64> = (0..1000).map(|i| (i * 37) % 1000).collect();
//! let config = BenchmarkConfig::new("Doc Benchmark")
//!     .with_max_size(1000)
//!     .with_step(100)
//!     .with_repeat_count(2);
//!
//! let result = run_benchmark(&samples, &config).unwrap();
//! assert_eq!(result.len(), 10);
//! assert_eq!(result.points[0].n, 100);
//! assert_eq!(result.points[9].n, 1000);
//! ```

mod config;
mod error;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use error::ExportError;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkPoint, BenchmarkResult, Comparison, PointRow, TimedSearch};
pub use runner::{compare_prefix, run_benchmark, Benchmark};
