use extrema_core::ExtremaError;
use thiserror::Error;

/// Failure of a benchmark run followed by report export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Benchmark(#[from] ExtremaError),

    #[error("Report IO error: {0}")]
    Io(#[from] std::io::Error),
}
