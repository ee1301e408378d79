//! The value bound shared by every search strategy.

use std::fmt::{Debug, Display};

use num_traits::ToPrimitive;

/// A value that can appear in a sample sequence.
///
/// Searches only need `Copy + PartialOrd`. The remaining bounds let reports
/// print the extrema and compute their spread without knowing the concrete
/// numeric type.
///
/// Implemented for every type satisfying the bounds, which covers all
/// primitive integers and floats.
///
/// # Example
///
/// ```
/// use extrema_core::Sample;
///
/// fn as_f64<T: Sample>(value: T) -> Option<f64> {
///     value.to_f64()
/// }
///
/// assert_eq!(as_f64(42u32), Some(42.0));
/// assert_eq!(as_f64(-1.5f32), Some(-1.5));
/// ```
pub trait Sample: Copy + PartialOrd + Debug + Display + ToPrimitive {}

impl<T> Sample for T where T: Copy + PartialOrd + Debug + Display + ToPrimitive {}
