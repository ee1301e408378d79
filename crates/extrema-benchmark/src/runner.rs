//! Benchmark runner.

use std::hint::black_box;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use extrema_core::{
    ExtremaError, IterativeFinder, MinMaxFinder, RecursiveFinder, Result, Sample,
};
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::report::{CsvExporter, MarkdownReport};
use crate::result::{BenchmarkPoint, BenchmarkResult, Comparison, TimedSearch};
use crate::ExportError;

/// Size-sweep benchmark runner.
///
/// Measures both search strategies over increasing prefixes of one sample
/// sequence. The strategies are called through [`MinMaxFinder`], so each
/// measurement loop is monomorphized over the strategy it times.
///
/// # Example
///
/// ```
/// use extrema_benchmark::{Benchmark, BenchmarkConfig};
///
/// let samples: Vec<u32> = (0..1000).rev().collect();
/// let config = BenchmarkConfig::new("Doc Sweep")
///     .with_max_size(1000)
///     .with_step(250)
///     .with_repeat_count(1)
///     .with_recursion_ceiling(Some(500));
///
/// let result = Benchmark::new(config).run(&samples).unwrap();
/// let sizes: Vec<usize> = result.points.iter().map(|p| p.n).collect();
/// assert_eq!(sizes, vec![250, 500, 750, 1000]);
/// assert!(result.points[1].recursive.is_some());
/// assert!(result.points[2].recursive.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl Benchmark {
    /// Creates a new benchmark.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            cancel_flag: None,
        }
    }

    /// Attaches a flag that aborts the sweep when set.
    ///
    /// The flag is read once per size, before that size is measured.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the sweep and returns the averaged timings.
    ///
    /// For each size `n`, the first `n` samples are searched `repeat_count`
    /// times per strategy and the total elapsed time is averaged. The
    /// recursive search is skipped above the recursion ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ExtremaError::InvalidConfig`] if the configuration does not
    /// fit `samples`, and [`ExtremaError::Cancelled`] if the cancel flag is
    /// observed. No partial result is returned.
    pub fn run<T: Sample>(&self, samples: &[T]) -> Result<BenchmarkResult> {
        let config = &self.config;
        config.validate(samples.len())?;

        let sizes: Vec<usize> = config.sizes().collect();
        info!(
            event = "sweep_start",
            name = config.name(),
            sizes = sizes.len() as u64,
            max_size = config.max_size() as u64,
            repeat_count = config.repeat_count() as u64,
        );

        let sweep_start = Instant::now();
        let mut result = BenchmarkResult::new(
            config.name(),
            samples.len(),
            config.repeat_count(),
            config.recursion_ceiling(),
        );

        for n in sizes {
            if self.is_cancelled() {
                info!(event = "sweep_cancelled", n = n as u64);
                return Err(ExtremaError::Cancelled);
            }

            let subset = &samples[..n];
            let iterative = measure(&IterativeFinder, subset, config)?;
            let recursive = if config.measures_recursive(n) {
                Some(measure(&RecursiveFinder, subset, config)?)
            } else {
                None
            };

            let point = BenchmarkPoint {
                n,
                iterative,
                recursive,
            };
            log_point(&point);
            result.add_point(point);
        }

        info!(
            event = "sweep_end",
            name = config.name(),
            points = result.len() as u64,
            duration_ms = sweep_start.elapsed().as_millis() as u64,
        );

        Ok(result)
    }

    /// Runs the sweep and writes every configured report file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Benchmark`] if the run fails and
    /// [`ExportError::Io`] if a report cannot be written.
    pub fn run_and_export<T: Sample>(
        &self,
        samples: &[T],
    ) -> std::result::Result<BenchmarkResult, ExportError> {
        let result = self.run(samples)?;

        if let Some(path) = self.config.csv_output_path() {
            CsvExporter::to_file(&result, path)?;
            info!(event = "report_written", format = "csv", path = path);
        }
        if let Some(path) = self.config.markdown_output_path() {
            MarkdownReport::to_file(&result, path)?;
            info!(event = "report_written", format = "markdown", path = path);
        }

        Ok(result)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

/// Runs a sweep with the given configuration.
///
/// Shorthand for `Benchmark::new(config.clone()).run(samples)`.
///
/// # Example
///
/// ```
/// use extrema_benchmark::{run_benchmark, BenchmarkConfig};
/// use extrema_core::ExtremaError;
///
/// let samples = [3, 1, 4, 1, 5, 9, 2, 6];
/// let config = BenchmarkConfig::new("Tiny").with_max_size(16).with_step(4);
///
/// assert!(matches!(
///     run_benchmark(&samples, &config),
///     Err(ExtremaError::InvalidConfig(_))
/// ));
/// ```
pub fn run_benchmark<T: Sample>(samples: &[T], config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    Benchmark::new(config.clone()).run(samples)
}

/// Runs each strategy once over the first `size` samples.
///
/// The recursive search is skipped when `size` exceeds `recursion_ceiling`.
///
/// # Errors
///
/// Returns [`ExtremaError::InvalidConfig`] if `size` is zero or larger than
/// the sample sequence.
///
/// # Example
///
/// ```
/// use extrema_benchmark::compare_prefix;
///
/// let samples = [10, 50, 20, 80, 40, 60, 30, 70];
/// let comparison = compare_prefix(&samples, 8, Some(1_000_000)).unwrap();
///
/// assert_eq!(comparison.extrema().into_tuple(), (10, 80));
/// assert!(comparison.strategies_agree());
/// ```
pub fn compare_prefix<T: Sample>(
    samples: &[T],
    size: usize,
    recursion_ceiling: Option<usize>,
) -> Result<Comparison<T>> {
    if size == 0 {
        return Err(ExtremaError::invalid_config("size must be positive"));
    }
    if size > samples.len() {
        return Err(ExtremaError::invalid_config(format!(
            "size ({}) exceeds the {} available samples",
            size,
            samples.len()
        )));
    }

    let subset = &samples[..size];
    let iterative = time_once(&IterativeFinder, subset)?;
    let recursive = if recursion_ceiling.map_or(true, |ceiling| size <= ceiling) {
        Some(time_once(&RecursiveFinder, subset)?)
    } else {
        None
    };

    let comparison = Comparison {
        n: size,
        iterative,
        recursive,
    };
    let extrema = comparison.extrema();
    info!(
        event = "compare_end",
        n = size as u64,
        minimum = %extrema.minimum,
        maximum = %extrema.maximum,
        iterative_ns = iterative.elapsed.as_nanos() as u64,
        recursive_measured = recursive.is_some(),
    );

    Ok(comparison)
}

// Average over `repeat_count` runs; warmup runs are not timed.
fn measure<F: MinMaxFinder, T: Sample>(
    finder: &F,
    data: &[T],
    config: &BenchmarkConfig,
) -> Result<Duration> {
    for _ in 0..config.warmup_count() {
        black_box(finder.find(black_box(data))?);
    }

    let repeats = u32::try_from(config.repeat_count()).map_err(|_| {
        ExtremaError::invalid_config(format!(
            "repeat_count ({}) exceeds {}",
            config.repeat_count(),
            u32::MAX
        ))
    })?;

    let mut total = Duration::ZERO;
    for _ in 0..repeats {
        let start = Instant::now();
        let found = finder.find(black_box(data));
        total += start.elapsed();
        black_box(found?);
    }

    Ok(total / repeats)
}

fn time_once<F: MinMaxFinder, T: Sample>(finder: &F, data: &[T]) -> Result<TimedSearch<T>> {
    let start = Instant::now();
    let found = finder.find(black_box(data));
    let elapsed = start.elapsed();
    Ok(TimedSearch {
        result: found?,
        elapsed,
    })
}

fn log_point(point: &BenchmarkPoint) {
    match point.recursive {
        Some(recursive) => debug!(
            event = "size_measured",
            n = point.n as u64,
            iterative_ns = point.iterative.as_nanos() as u64,
            recursive_ns = recursive.as_nanos() as u64,
        ),
        None => debug!(
            event = "size_measured",
            n = point.n as u64,
            iterative_ns = point.iterative.as_nanos() as u64,
        ),
    }
}
