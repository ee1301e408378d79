//! Benchmark result types.

use std::time::Duration;

use extrema_core::{Sample, SearchResult};
use serde::Serialize;

/// Averaged timings for one measured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkPoint {
    /// Prefix length searched.
    pub n: usize,
    /// Average iterative search time.
    pub iterative: Duration,
    /// Average recursive search time; `None` above the recursion ceiling.
    pub recursive: Option<Duration>,
}

impl BenchmarkPoint {
    /// Returns the iterative time in seconds.
    pub fn iterative_seconds(&self) -> f64 {
        self.iterative.as_secs_f64()
    }

    /// Returns the recursive time in seconds, if measured.
    pub fn recursive_seconds(&self) -> Option<f64> {
        self.recursive.map(|d| d.as_secs_f64())
    }

    /// Returns the recursive time divided by the iterative time.
    ///
    /// `None` when the recursive search was not measured or the iterative
    /// time rounds to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::BenchmarkPoint;
    /// use std::time::Duration;
    ///
    /// let point = BenchmarkPoint {
    ///     n: 100,
    ///     iterative: Duration::from_micros(2),
    ///     recursive: Some(Duration::from_micros(5)),
    /// };
    ///
    /// assert!((point.recursive_ratio().unwrap() - 2.5).abs() < 1e-9);
    /// ```
    pub fn recursive_ratio(&self) -> Option<f64> {
        let recursive = self.recursive?;
        if self.iterative.is_zero() {
            None
        } else {
            Some(recursive.as_secs_f64() / self.iterative.as_secs_f64())
        }
    }

    /// Returns the flat row written to CSV and JSON output.
    pub fn to_row(&self) -> PointRow {
        PointRow {
            n: self.n,
            iterative_seconds: self.iterative_seconds(),
            recursive_seconds: self.recursive_seconds(),
        }
    }
}

/// Serializable view of a [`BenchmarkPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointRow {
    pub n: usize,
    pub iterative_seconds: f64,
    pub recursive_seconds: Option<f64>,
}

/// Results of a complete size sweep.
///
/// Points are ordered ascending by `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Length of the sample sequence the prefixes were taken from.
    pub sample_len: usize,
    /// Measured runs per strategy and size.
    pub repeat_count: usize,
    /// Recursion ceiling in effect.
    pub recursion_ceiling: Option<usize>,
    /// Measured sizes.
    pub points: Vec<BenchmarkPoint>,
}

impl BenchmarkResult {
    /// Creates an empty result.
    pub fn new(
        name: impl Into<String>,
        sample_len: usize,
        repeat_count: usize,
        recursion_ceiling: Option<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            sample_len,
            repeat_count,
            recursion_ceiling,
            points: Vec::new(),
        }
    }

    /// Adds a point to the results.
    pub fn add_point(&mut self, point: BenchmarkPoint) {
        self.points.push(point);
    }

    /// Returns the number of measured sizes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no size was measured.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point measured at size `n`.
    pub fn point(&self, n: usize) -> Option<&BenchmarkPoint> {
        self.points
            .binary_search_by_key(&n, |p| p.n)
            .ok()
            .map(|i| &self.points[i])
    }

    /// Returns the largest size at which the recursive search was measured.
    pub fn largest_recursive_n(&self) -> Option<usize> {
        self.points
            .iter()
            .rev()
            .find(|p| p.recursive.is_some())
            .map(|p| p.n)
    }

    /// Returns the mean recursive/iterative ratio over the measured points.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::{BenchmarkPoint, BenchmarkResult};
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test", 200, 1, Some(100));
    /// result.add_point(BenchmarkPoint {
    ///     n: 100,
    ///     iterative: Duration::from_micros(1),
    ///     recursive: Some(Duration::from_micros(3)),
    /// });
    /// result.add_point(BenchmarkPoint {
    ///     n: 200,
    ///     iterative: Duration::from_micros(2),
    ///     recursive: None,
    /// });
    ///
    /// assert!((result.avg_recursive_ratio().unwrap() - 3.0).abs() < 1e-9);
    /// assert_eq!(result.largest_recursive_n(), Some(100));
    /// ```
    pub fn avg_recursive_ratio(&self) -> Option<f64> {
        let ratios: Vec<f64> = self.points.iter().filter_map(|p| p.recursive_ratio()).collect();
        if ratios.is_empty() {
            None
        } else {
            Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
        }
    }

    /// Returns the serializable rows in sweep order.
    pub fn rows(&self) -> Vec<PointRow> {
        self.points.iter().map(BenchmarkPoint::to_row).collect()
    }
}

/// A single search together with its wall-clock duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedSearch<T> {
    pub result: SearchResult<T>,
    pub elapsed: Duration,
}

/// Both strategies run once over the same prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison<T> {
    /// Prefix length searched.
    pub n: usize,
    pub iterative: TimedSearch<T>,
    /// `None` when `n` exceeds the recursion ceiling.
    pub recursive: Option<TimedSearch<T>>,
}

impl<T: Sample> Comparison<T> {
    /// Returns the extrema, taken from the iterative search.
    pub fn extrema(&self) -> SearchResult<T> {
        self.iterative.result
    }

    /// Returns true if both strategies ran and found the same extrema.
    pub fn strategies_agree(&self) -> bool {
        self.recursive
            .map_or(false, |r| r.result == self.iterative.result)
    }
}
