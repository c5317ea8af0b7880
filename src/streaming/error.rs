use thiserror::Error;

use crate::io::IoError;

/// Reasons a processing session stops before the end of its input
#[derive(Error, Debug)]
pub enum StreamError<E> {
    /// A mapper failed with an error the classifier forwards; the record is left unprocessed
    #[error("Forwarded processing error: {0}")]
    Forwarded(#[source] E),

    #[error("Record I/O failed: {0}")]
    Io(#[from] IoError),
}

impl<E> StreamError<E> {
    /// True when the session stopped because a mapper forwarded its error
    pub fn is_forwarded(&self) -> bool {
        matches!(self, StreamError::Forwarded(_))
    }

    pub fn into_forwarded(self) -> Option<E> {
        match self {
            StreamError::Forwarded(error) => Some(error),
            StreamError::Io(_) => None,
        }
    }
}
