//! Minimum/maximum search over sample sequences.
//!
//! Two strategies are provided:
//! - [`find_min_max_iterative`]: one linear pass with running accumulators
//! - [`find_min_max_recursive`]: divide-and-conquer over an inclusive range
//!
//! Both return the same [`SearchResult`] for the same range. They differ only
//! in constant-factor overhead, which is what the benchmark crate measures.

mod finder;

#[cfg(test)]
mod tests;

pub use finder::{IterativeFinder, MinMaxFinder, RecursiveFinder, Strategy};

use crate::error::{ExtremaError, Result};
use crate::sample::Sample;

/// The minimum and maximum of a searched range.
///
/// Invariant: `minimum <= maximum`, and both values are members of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<T> {
    /// Smallest value in the range.
    pub minimum: T,
    /// Largest value in the range.
    pub maximum: T,
}

impl<T: Sample> SearchResult<T> {
    /// Result for a range holding a single value.
    pub fn single(value: T) -> Self {
        Self {
            minimum: value,
            maximum: value,
        }
    }

    /// Result for a two-element range, resolved with one comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_core::SearchResult;
    ///
    /// let result = SearchResult::from_pair(7, 3);
    /// assert_eq!((result.minimum, result.maximum), (3, 7));
    /// ```
    pub fn from_pair(a: T, b: T) -> Self {
        if b < a {
            Self {
                minimum: b,
                maximum: a,
            }
        } else {
            Self {
                minimum: a,
                maximum: b,
            }
        }
    }

    /// Merges the results of two adjacent ranges.
    pub fn combine(self, other: Self) -> Self {
        Self {
            minimum: if other.minimum < self.minimum {
                other.minimum
            } else {
                self.minimum
            },
            maximum: if other.maximum > self.maximum {
                other.maximum
            } else {
                self.maximum
            },
        }
    }

    /// Returns `(minimum, maximum)`.
    pub fn into_tuple(self) -> (T, T) {
        (self.minimum, self.maximum)
    }

    /// Returns `maximum - minimum` as `f64`.
    ///
    /// Computed after conversion, so integer ranges wider than the type
    /// cannot overflow. `None` if either value has no `f64` form.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_core::SearchResult;
    ///
    /// let result = SearchResult::from_pair(i8::MIN, i8::MAX);
    /// assert_eq!(result.spread(), Some(255.0));
    /// ```
    pub fn spread(&self) -> Option<f64> {
        Some(self.maximum.to_f64()? - self.minimum.to_f64()?)
    }
}

/// Finds the minimum and maximum with a single linear pass.
///
/// Both accumulators start at the first element. Every element is then
/// compared once against each accumulator with strict `<` and `>`.
///
/// # Errors
///
/// Returns [`ExtremaError::EmptyInput`] if `data` is empty.
///
/// # Example
///
/// ```
/// use extrema_core::find_min_max_iterative;
///
/// let data = [10, 50, 20, 80, 40, 60, 30, 70];
/// let result = find_min_max_iterative(&data).unwrap();
/// assert_eq!(result.into_tuple(), (10, 80));
/// ```
pub fn find_min_max_iterative<T: Sample>(data: &[T]) -> Result<SearchResult<T>> {
    let (&first, _) = data.split_first().ok_or(ExtremaError::EmptyInput)?;

    let mut minimum = first;
    let mut maximum = first;
    for &value in data {
        if value < minimum {
            minimum = value;
        }
        if value > maximum {
            maximum = value;
        }
    }

    Ok(SearchResult { minimum, maximum })
}

/// Finds the minimum and maximum of `data[low..=high]` by divide and conquer.
///
/// The range is halved at `(low + high) / 2` until it holds one or two
/// elements, then the halves are combined. Recursion depth is `O(log n)`.
///
/// # Errors
///
/// Returns [`ExtremaError::InvalidRange`] unless `low <= high < data.len()`.
///
/// # Example
///
/// ```
/// use extrema_core::{find_min_max_recursive, ExtremaError};
///
/// let data = [10, 50, 20, 80, 40, 60, 30, 70];
/// let result = find_min_max_recursive(&data, 0, 7).unwrap();
/// assert_eq!(result.into_tuple(), (10, 80));
///
/// assert!(matches!(
///     find_min_max_recursive(&data, 2, 1),
///     Err(ExtremaError::InvalidRange { .. })
/// ));
/// ```
pub fn find_min_max_recursive<T: Sample>(
    data: &[T],
    low: usize,
    high: usize,
) -> Result<SearchResult<T>> {
    if low > high || high >= data.len() {
        return Err(ExtremaError::InvalidRange {
            low,
            high,
            len: data.len(),
        });
    }
    Ok(search_range(data, low, high))
}

// Bounds are checked once by the caller.
fn search_range<T: Sample>(data: &[T], low: usize, high: usize) -> SearchResult<T> {
    if low == high {
        return SearchResult::single(data[low]);
    }
    if high == low + 1 {
        return SearchResult::from_pair(data[low], data[high]);
    }

    // Same as floor((low + high) / 2), without the overflow.
    let mid = low + (high - low) / 2;
    let left = search_range(data, low, mid);
    let right = search_range(data, mid + 1, high);
    left.combine(right)
}
