use std::io;
use thiserror::Error;

use super::pipeline::ParseValueError;
use crate::io::IoError;
use crate::streaming::StreamError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Record IO error: {0}")]
    RecordIo(#[from] IoError),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError<ParseValueError>),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
