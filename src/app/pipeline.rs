use std::io;
use std::num::ParseIntError;

use futures::io::AsyncWrite;
use thiserror::Error;
use tokio::fs::File;
use tokio_util::compat::TokioAsyncWriteCompatExt;
use tracing::info;

use super::config::AppConfig;
use super::error::AppError;
use crate::capture::capture_value_errors;
use crate::io::{CsvRecordStream, CsvSink, DiscardSink, IoError, JsonLinesSink};
use crate::logging::log_value_errors;
use crate::streaming::{Branch, ProcessingSession, RouteSummary, ValueBranch, split_value};

/// Why a record value could not be turned into a number
#[derive(Error, Debug)]
pub enum ParseValueError {
    #[error("Missing value")]
    Missing,

    #[error("Cannot parse {value:?} as a number")]
    Invalid {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse a record value as `i64`
pub fn parse_value(value: &Option<String>) -> Result<i64, ParseValueError> {
    let value = value.as_deref().ok_or(ParseValueError::Missing)?;
    value.parse().map_err(|source| ParseValueError::Invalid {
        value: value.to_string(),
        source,
    })
}

/// Run the parse pipeline over the configured input
///
/// Parsed records go to `output` as `key,value` CSV. With an error file
/// configured, failed records are written there as JSON dead letters;
/// otherwise they are logged and dropped.
pub async fn run_pipeline<W>(output: W, config: &AppConfig) -> Result<RouteSummary, AppError>
where
    W: AsyncWrite + Unpin + Send,
{
    let records = match CsvRecordStream::from_file(&config.input_file).await {
        Ok(stream) => stream.pairs(),
        Err(IoError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::FileNotFound(
                config.input_file.display().to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };
    let successes = CsvSink::new(output);

    let summary = match &config.error_file {
        Some(error_file) => {
            let errors = JsonLinesSink::new(File::create(error_file).await?.compat_write());
            let mapper = capture_value_errors(parse_value);
            let description = config.error_description.as_str();

            ProcessingSession::new(successes, errors)
                .process_stream(records, |key, value| {
                    Ok::<_, ParseValueError>(split_value(key, mapper.apply(value)?, description))
                })
                .await?
        }
        None => {
            let mapper = log_value_errors(parse_value);

            ProcessingSession::new(successes, DiscardSink)
                .process_stream(records, |key, value| {
                    let branches: Vec<ValueBranch<Option<String>, i64, Option<String>>> = mapper
                        .apply(value)?
                        .into_iter()
                        .map(|parsed| Branch::Success((key.clone(), parsed)))
                        .collect();
                    Ok::<_, ParseValueError>(branches)
                })
                .await?
        }
    };

    info!(
        records = summary.records,
        successes = summary.successes,
        dead_letters = summary.dead_letters,
        "Pipeline finished"
    );
    Ok(summary)
}
