use thiserror::Error;

/// Errors raised while loading or generating sample data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("Workbook has no worksheet with a header row")]
    EmptyWorkbook,

    #[error("Missing column '{0}' in table header")]
    MissingColumn(String),

    #[error("No usable rows: all {skipped} rows had missing or non-numeric values")]
    NoUsableRows { skipped: usize },

    #[error("Invalid sample range: min {min} exceeds max {max}")]
    InvalidSampleRange { min: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, DataError>;
