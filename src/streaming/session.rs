use futures::{Stream, StreamExt};
use tracing::{debug, warn};

use super::branch::Branch;
use super::error::StreamError;
use crate::io::{IoError, RecordSink};

/// Counts of what a session routed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteSummary {
    /// Input records read from the stream
    pub records: u64,
    pub successes: u64,
    pub dead_letters: u64,
}

/// Single stream processing session
///
/// Reads `(key, value)` records, runs each through a step that returns branch
/// records, and sends every branch record to the success or error sink in
/// input order.
pub struct ProcessingSession<SS, ES> {
    successes: SS,
    errors: ES,
    summary: RouteSummary,
}

impl<SS, ES> ProcessingSession<SS, ES> {
    /// Create a new processing session
    pub fn new(successes: SS, errors: ES) -> Self {
        Self {
            successes,
            errors,
            summary: RouteSummary::default(),
        }
    }

    /// Process a stream of records
    ///
    /// Returns the running summary when the stream ends. A step error is one
    /// the adapter forwarded instead of capturing: the session stops at that
    /// record without emitting anything for it, flushes both sinks and hands
    /// the error back so the caller can retry or fail.
    pub async fn process_stream<S, K, V, KS, VS, KD, VD, E, F>(
        &mut self,
        mut stream: S,
        step: F,
    ) -> Result<RouteSummary, StreamError<E>>
    where
        S: Stream<Item = Result<(K, V), IoError>> + Unpin,
        F: Fn(K, V) -> Result<Vec<Branch<(KS, VS), (KD, VD)>>, E>,
        SS: RecordSink<KS, VS>,
        ES: RecordSink<KD, VD>,
        KS: Send + 'static,
        VS: Send + 'static,
        KD: Send + 'static,
        VD: Send + 'static,
    {
        while let Some(record) = stream.next().await {
            let (key, value) = record?;
            self.summary.records += 1;

            let branches = match step(key, value) {
                Ok(branches) => branches,
                Err(error) => {
                    warn!(record = self.summary.records, "Stopping stream on forwarded error");
                    self.flush::<KS, VS, KD, VD>().await?;
                    return Err(StreamError::Forwarded(error));
                }
            };

            for branch in branches {
                match branch {
                    Branch::Success((key, value)) => {
                        self.successes.send(key, value).await?;
                        self.summary.successes += 1;
                    }
                    Branch::DeadLetter((key, dead_letter)) => {
                        self.errors.send(key, dead_letter).await?;
                        self.summary.dead_letters += 1;
                    }
                }
            }
        }

        self.flush::<KS, VS, KD, VD>().await?;
        debug!(
            records = self.summary.records,
            successes = self.summary.successes,
            dead_letters = self.summary.dead_letters,
            "Stream processed"
        );
        Ok(self.summary)
    }

    async fn flush<KS, VS, KD, VD>(&mut self) -> Result<(), IoError>
    where
        SS: RecordSink<KS, VS>,
        ES: RecordSink<KD, VD>,
        KS: Send + 'static,
        VS: Send + 'static,
        KD: Send + 'static,
        VD: Send + 'static,
    {
        RecordSink::<KS, VS>::flush(&mut self.successes).await?;
        RecordSink::<KD, VD>::flush(&mut self.errors).await
    }

    pub fn summary(&self) -> RouteSummary {
        self.summary
    }

    pub fn successes(&self) -> &SS {
        &self.successes
    }

    pub fn errors(&self) -> &ES {
        &self.errors
    }

    /// Consume the session and return the success and error sinks
    pub fn into_sinks(self) -> (SS, ES) {
        (self.successes, self.errors)
    }
}
