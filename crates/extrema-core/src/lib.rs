//! Extrema Core - min/max search strategies
//!
//! This crate provides the searches that the rest of Extrema benchmarks:
//! - An iterative single-pass scan
//! - A divide-and-conquer recursive search over an inclusive index range
//! - The [`Sample`] bound and [`SearchResult`] type shared by both
//! - The error kinds raised on violated preconditions

pub mod error;
pub mod sample;
pub mod search;

pub use error::{ExtremaError, Result};
pub use sample::Sample;
pub use search::{
    find_min_max_iterative, find_min_max_recursive, IterativeFinder, MinMaxFinder,
    RecursiveFinder, SearchResult, Strategy,
};
