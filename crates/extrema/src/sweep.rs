//! Sweep entry point that reads its settings from `extrema.toml`.

use std::io::ErrorKind;
use std::path::Path;

use extrema_benchmark::{run_benchmark, BenchmarkConfig, BenchmarkResult};
use extrema_config::{ConfigError, ExtremaConfig};
use extrema_core::{ExtremaError, Result, Sample};
use tracing::debug;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "extrema.toml";

/// Runs a size sweep over `samples` with the `[sweep]` settings of
/// `extrema.toml`, or the defaults when that file does not exist.
///
/// The maximum size is capped at the number of samples.
///
/// # Errors
///
/// Returns [`ExtremaError::InvalidConfig`] if `extrema.toml` exists but
/// cannot be read or parsed, or if the sweep rejects its parameters.
///
/// # Example
///
/// ```
/// let samples: Vec<u32> = (0..1000).map(|i| (i * 7) % 1000).collect();
/// let result = extrema::run_sweep("Quick", &samples).unwrap();
/// assert_eq!(result.points.last().map(|p| p.n), Some(1000));
/// ```
pub fn run_sweep<T: Sample>(name: &str, samples: &[T]) -> Result<BenchmarkResult> {
    run_sweep_with_config(name, samples, CONFIG_FILE)
}

/// Like [`run_sweep`], reading the settings from `path`.
pub fn run_sweep_with_config<T: Sample>(
    name: &str,
    samples: &[T],
    path: impl AsRef<Path>,
) -> Result<BenchmarkResult> {
    let path = path.as_ref();
    let mut sweep = match ExtremaConfig::load(path) {
        Ok(config) => config.sweep,
        Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            debug!(event = "config_defaulted", path = %path.display());
            ExtremaConfig::default().sweep
        }
        Err(err) => {
            return Err(ExtremaError::invalid_config(format!(
                "{}: {}",
                path.display(),
                err
            )))
        }
    };
    sweep.max_size = sweep.max_size.min(samples.len());

    run_benchmark(samples, &BenchmarkConfig::from_sweep(name, &sweep))
}
