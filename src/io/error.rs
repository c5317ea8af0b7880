use std::io;
use thiserror::Error;

/// IO-level errors for reading records and writing branch outputs
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV async parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
