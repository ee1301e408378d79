//! Strategy types that let callers pick a search at compile time or run time.

use std::fmt;

use crate::error::{ExtremaError, Result};
use crate::sample::Sample;

use super::{find_min_max_iterative, find_min_max_recursive, SearchResult};

/// A whole-sequence min/max search strategy.
///
/// Implementors are zero-sized so benchmark code can be monomorphized over
/// the strategy instead of dispatching through a trait object.
pub trait MinMaxFinder {
    /// Human-readable strategy name used in logs and reports.
    const NAME: &'static str;

    /// Searches the entire slice.
    ///
    /// # Errors
    ///
    /// Returns [`ExtremaError::EmptyInput`] if `data` is empty.
    fn find<T: Sample>(&self, data: &[T]) -> Result<SearchResult<T>>;
}

/// Linear scan strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterativeFinder;

impl MinMaxFinder for IterativeFinder {
    const NAME: &'static str = "Iterative";

    fn find<T: Sample>(&self, data: &[T]) -> Result<SearchResult<T>> {
        find_min_max_iterative(data)
    }
}

/// Divide-and-conquer strategy over `[0, len - 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecursiveFinder;

impl MinMaxFinder for RecursiveFinder {
    const NAME: &'static str = "Recursive";

    fn find<T: Sample>(&self, data: &[T]) -> Result<SearchResult<T>> {
        if data.is_empty() {
            return Err(ExtremaError::EmptyInput);
        }
        find_min_max_recursive(data, 0, data.len() - 1)
    }
}

/// Runtime selection between the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Iterative,
    Recursive,
}

impl Strategy {
    /// Both strategies, in report order.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Returns the display name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Iterative => IterativeFinder::NAME,
            Strategy::Recursive => RecursiveFinder::NAME,
        }
    }

    /// Searches the entire slice with this strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_core::Strategy;
    ///
    /// for strategy in Strategy::ALL {
    ///     let result = strategy.find(&[3.5, -1.0, 9.25]).unwrap();
    ///     assert_eq!(result.into_tuple(), (-1.0, 9.25));
    /// }
    /// ```
    pub fn find<T: Sample>(self, data: &[T]) -> Result<SearchResult<T>> {
        match self {
            Strategy::Iterative => IterativeFinder.find(data),
            Strategy::Recursive => RecursiveFinder.find(data),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
