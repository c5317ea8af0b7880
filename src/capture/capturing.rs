use std::any::type_name;

use tracing::debug;

use crate::classify::ErrorClassifier;
use crate::outcome::{Outcome, ProcessingError};

/// Shared core of every capturing adapter
///
/// Holds the wrapped function and the classifier. Both are read-only for the
/// adapter's lifetime, so one adapter can serve many tasks concurrently.
#[derive(Debug, Clone)]
pub struct Capturing<F, C> {
    wrapped: F,
    classifier: C,
}

impl<F, C> Capturing<F, C> {
    pub fn new(wrapped: F, classifier: C) -> Self {
        Self {
            wrapped,
            classifier,
        }
    }

    pub fn wrapped(&self) -> &F {
        &self.wrapped
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Invoke the wrapped function once and classify a failure
    ///
    /// `apply` calls the wrapped function with the borrowed input and
    /// `to_sequence` turns its result into output values. A forwarded error is
    /// returned as-is. A captured error keeps ownership of the input.
    pub fn capture<I, R, O, E>(
        &self,
        input: I,
        apply: impl FnOnce(&F, &I) -> Result<R, E>,
        to_sequence: impl FnOnce(R) -> Vec<O>,
    ) -> Result<Outcome<O, ProcessingError<I, E>>, E>
    where
        C: ErrorClassifier<E>,
    {
        match apply(&self.wrapped, &input) {
            Ok(result) => Ok(Outcome::Success(to_sequence(result))),
            Err(error) if self.classifier.should_forward(&error) => {
                debug!(error_type = type_name::<E>(), "Forwarding error");
                Err(error)
            }
            Err(error) => {
                debug!(error_type = type_name::<E>(), "Capturing error");
                Ok(Outcome::Error(ProcessingError::new(input, error)))
            }
        }
    }
}
