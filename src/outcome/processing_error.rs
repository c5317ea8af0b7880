use std::backtrace::Backtrace;
use std::error::Error;
use std::sync::Arc;

use crate::dead_letter::{DeadLetter, ErrorDescription};

/// A captured per-record failure: the original input value and the error it caused
///
/// The backtrace is taken when the adapter intercepts the error, so it points
/// at the capturing call site. It is captured regardless of `RUST_BACKTRACE`;
/// capturing only happens on the failure path.
#[derive(Debug, Clone)]
pub struct ProcessingError<V, E> {
    value: V,
    error: E,
    backtrace: Arc<Backtrace>,
}

impl<V, E> ProcessingError<V, E> {
    pub fn new(value: V, error: E) -> Self {
        Self {
            value,
            error,
            backtrace: Arc::new(Backtrace::force_capture()),
        }
    }

    /// Input value exactly as it was handed to the adapter
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn into_parts(self) -> (V, E) {
        (self.value, self.error)
    }
}

impl<K, V, E> ProcessingError<(K, V), E> {
    /// Detach the key of a captured key+value input, keeping the backtrace
    pub fn split_key(self) -> (K, ProcessingError<V, E>) {
        let (key, value) = self.value;
        let captured = ProcessingError {
            value,
            error: self.error,
            backtrace: self.backtrace,
        };
        (key, captured)
    }
}

impl<V, E> ProcessingError<V, E>
where
    E: Error + 'static,
{
    /// Build a dead letter without consuming the captured error
    pub fn create_dead_letter(&self, description: impl Into<String>) -> DeadLetter<V>
    where
        V: Clone,
    {
        DeadLetter::new(
            self.value.clone(),
            description,
            ErrorDescription::from_error(&self.error, &self.backtrace),
        )
    }

    pub fn into_dead_letter(self, description: impl Into<String>) -> DeadLetter<V> {
        let cause = ErrorDescription::from_error(&self.error, &self.backtrace);
        DeadLetter::new(self.value, description, cause)
    }
}
