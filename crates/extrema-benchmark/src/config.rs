//! Benchmark configuration.

use extrema_config::SweepConfig;
use extrema_core::{ExtremaError, Result};

/// Configuration for a size sweep.
///
/// Controls the measured sizes, repetitions per size, the recursion ceiling
/// and optional output paths.
///
/// # Example
///
/// ```
/// use extrema_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("Revenue Sweep")
///     .with_max_size(1000)
///     .with_step(100)
///     .with_repeat_count(2);
///
/// assert_eq!(config.name(), "Revenue Sweep");
/// assert_eq!(config.sizes().count(), 10);
/// assert_eq!(config.recursion_ceiling(), Some(2000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    name: String,
    max_size: usize,
    step: usize,
    repeat_count: usize,
    recursion_ceiling: Option<usize>,
    warmup_count: usize,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - max_size: 5000
    /// - step: 100
    /// - repeat_count: 3
    /// - recursion_ceiling: 2000
    /// - warmup_count: 0
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.max_size(), 5000);
    /// assert_eq!(config.step(), 100);
    /// assert_eq!(config.repeat_count(), 3);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_sweep(name, &SweepConfig::default())
    }

    /// Creates a configuration from the `[sweep]` section of a config file.
    pub fn from_sweep(name: impl Into<String>, sweep: &SweepConfig) -> Self {
        Self {
            name: name.into(),
            max_size: sweep.max_size,
            step: sweep.step,
            repeat_count: sweep.repeat_count,
            recursion_ceiling: sweep.recursion_ceiling,
            warmup_count: sweep.warmup_count,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Sets the largest measured size.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the increment between measured sizes.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Sets the number of measured runs per strategy and size.
    pub fn with_repeat_count(mut self, count: usize) -> Self {
        self.repeat_count = count;
        self
    }

    /// Sets the largest size at which the recursive search is measured.
    ///
    /// `None` measures it at every size.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_recursion_ceiling(None);
    /// assert!(config.measures_recursive(1_000_000));
    ///
    /// let config = config.with_recursion_ceiling(Some(500));
    /// assert!(config.measures_recursive(500));
    /// assert!(!config.measures_recursive(501));
    /// ```
    pub fn with_recursion_ceiling(mut self, ceiling: Option<usize>) -> Self {
        self.recursion_ceiling = ceiling;
        self
    }

    /// Sets the number of unmeasured runs before each measurement.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the largest measured size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the size increment.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the number of measured runs per strategy and size.
    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Returns the recursion ceiling, if any.
    pub fn recursion_ceiling(&self) -> Option<usize> {
        self.recursion_ceiling
    }

    /// Returns the number of warmup runs.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }

    /// Returns true if the recursive search is measured at size `n`.
    pub fn measures_recursive(&self, n: usize) -> bool {
        self.recursion_ceiling.map_or(true, |ceiling| n <= ceiling)
    }

    /// Returns the measured sizes `step, 2·step, …` up to `max_size`.
    ///
    /// Yields nothing when `step` is zero.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let step = self.step;
        let count = self.max_size.checked_div(step).unwrap_or(0);
        (1..=count).map(move |k| k * step)
    }

    /// Checks the configuration against the available sample length.
    ///
    /// # Errors
    ///
    /// Returns [`ExtremaError::InvalidConfig`] if `step` or `repeat_count`
    /// is zero, `repeat_count` does not fit in a `u32`, `max_size < step`,
    /// or `max_size > sample_len`.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_max_size(1000);
    /// assert!(config.validate(1000).is_ok());
    /// assert!(config.validate(999).is_err());
    /// ```
    pub fn validate(&self, sample_len: usize) -> Result<()> {
        if self.step == 0 {
            return Err(ExtremaError::invalid_config("step must be positive"));
        }
        if self.max_size < self.step {
            return Err(ExtremaError::invalid_config(format!(
                "max_size ({}) is smaller than step ({})",
                self.max_size, self.step
            )));
        }
        if self.repeat_count == 0 {
            return Err(ExtremaError::invalid_config(
                "repeat_count must be at least 1",
            ));
        }
        if u32::try_from(self.repeat_count).is_err() {
            return Err(ExtremaError::invalid_config(format!(
                "repeat_count ({}) exceeds {}",
                self.repeat_count,
                u32::MAX
            )));
        }
        if self.max_size > sample_len {
            return Err(ExtremaError::invalid_config(format!(
                "max_size ({}) exceeds the {} available samples",
                self.max_size, sample_len
            )));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
