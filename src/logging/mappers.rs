use std::error::Error;
use std::fmt::Debug;

use tracing::error;

use super::describe::describe;
use crate::capture::Capturing;
use crate::classify::{ErrorClassifier, ForwardTransient};
use crate::dead_letter::ErrorDescription;
use crate::outcome::{Outcome, ProcessingError};

/// Wrap a value mapper, log captured errors and drop the failing record
///
/// Use this when no error branch is wired up. The result is the mapper's
/// value as a sequence, or an empty sequence after logging the failure.
#[derive(Debug, Clone)]
pub struct ErrorLoggingValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

#[derive(Debug, Clone)]
pub struct ErrorLoggingFlatValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

/// Wrap a key+value mapper, log captured errors with key and value
#[derive(Debug, Clone)]
pub struct ErrorLoggingKeyValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

#[derive(Debug, Clone)]
pub struct ErrorLoggingFlatKeyValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

pub fn log_value_errors<F, V, VR, E>(mapper: F) -> ErrorLoggingValueMapper<F>
where
    F: Fn(&V) -> Result<VR, E>,
    E: Error + 'static,
{
    log_value_errors_with(mapper, ForwardTransient)
}

pub fn log_value_errors_with<F, C, V, VR, E>(mapper: F, classifier: C) -> ErrorLoggingValueMapper<F, C>
where
    F: Fn(&V) -> Result<VR, E>,
    C: ErrorClassifier<E>,
{
    ErrorLoggingValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

pub fn log_flat_value_errors<F, I, V, E>(mapper: F) -> ErrorLoggingFlatValueMapper<F>
where
    F: Fn(&V) -> Result<I, E>,
    I: IntoIterator,
    E: Error + 'static,
{
    log_flat_value_errors_with(mapper, ForwardTransient)
}

pub fn log_flat_value_errors_with<F, C, I, V, E>(
    mapper: F,
    classifier: C,
) -> ErrorLoggingFlatValueMapper<F, C>
where
    F: Fn(&V) -> Result<I, E>,
    I: IntoIterator,
    C: ErrorClassifier<E>,
{
    ErrorLoggingFlatValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

pub fn log_key_value_errors<F, K, V, R, E>(mapper: F) -> ErrorLoggingKeyValueMapper<F>
where
    F: Fn(&K, &V) -> Result<R, E>,
    E: Error + 'static,
{
    log_key_value_errors_with(mapper, ForwardTransient)
}

pub fn log_key_value_errors_with<F, C, K, V, R, E>(
    mapper: F,
    classifier: C,
) -> ErrorLoggingKeyValueMapper<F, C>
where
    F: Fn(&K, &V) -> Result<R, E>,
    C: ErrorClassifier<E>,
{
    ErrorLoggingKeyValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

pub fn log_flat_key_value_errors<F, I, K, V, E>(mapper: F) -> ErrorLoggingFlatKeyValueMapper<F>
where
    F: Fn(&K, &V) -> Result<I, E>,
    I: IntoIterator,
    E: Error + 'static,
{
    log_flat_key_value_errors_with(mapper, ForwardTransient)
}

pub fn log_flat_key_value_errors_with<F, C, I, K, V, E>(
    mapper: F,
    classifier: C,
) -> ErrorLoggingFlatKeyValueMapper<F, C>
where
    F: Fn(&K, &V) -> Result<I, E>,
    I: IntoIterator,
    C: ErrorClassifier<E>,
{
    ErrorLoggingFlatKeyValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

impl<F, C> ErrorLoggingValueMapper<F, C> {
    pub fn apply<V, VR, E>(&self, value: V) -> Result<Vec<VR>, E>
    where
        F: Fn(&V) -> Result<VR, E>,
        C: ErrorClassifier<E>,
        V: Debug,
        E: Error + 'static,
    {
        let outcome = self.inner.capture(value, |f, v| f(v), |result| vec![result])?;
        Ok(drop_value_error(outcome))
    }
}

impl<F, C> ErrorLoggingFlatValueMapper<F, C> {
    pub fn apply<I, V, E>(&self, value: V) -> Result<Vec<I::Item>, E>
    where
        F: Fn(&V) -> Result<I, E>,
        I: IntoIterator,
        C: ErrorClassifier<E>,
        V: Debug,
        E: Error + 'static,
    {
        let outcome = self
            .inner
            .capture(value, |f, v| f(v), |results| results.into_iter().collect())?;
        Ok(drop_value_error(outcome))
    }
}

impl<F, C> ErrorLoggingKeyValueMapper<F, C> {
    pub fn apply<K, V, R, E>(&self, key: K, value: V) -> Result<Vec<R>, E>
    where
        F: Fn(&K, &V) -> Result<R, E>,
        C: ErrorClassifier<E>,
        K: Debug,
        V: Debug,
        E: Error + 'static,
    {
        let outcome = self
            .inner
            .capture((key, value), |f, (k, v)| f(k, v), |result| vec![result])?;
        Ok(drop_key_value_error(outcome))
    }
}

impl<F, C> ErrorLoggingFlatKeyValueMapper<F, C> {
    pub fn apply<I, K, V, E>(&self, key: K, value: V) -> Result<Vec<I::Item>, E>
    where
        F: Fn(&K, &V) -> Result<I, E>,
        I: IntoIterator,
        C: ErrorClassifier<E>,
        K: Debug,
        V: Debug,
        E: Error + 'static,
    {
        let outcome = self.inner.capture(
            (key, value),
            |f, (k, v)| f(k, v),
            |results| results.into_iter().collect(),
        )?;
        Ok(drop_key_value_error(outcome))
    }
}

fn drop_value_error<V, O, E>(outcome: Outcome<O, ProcessingError<V, E>>) -> Vec<O>
where
    V: Debug,
    E: Error + 'static,
{
    match outcome {
        Outcome::Success(values) => values,
        Outcome::Error(captured) => {
            let cause = ErrorDescription::from_error(captured.error(), captured.backtrace());
            error!(
                value = %describe(captured.value()),
                error = %cause.message,
                stack_trace = %cause.stack_trace,
                "Cannot process record"
            );
            Vec::new()
        }
    }
}

fn drop_key_value_error<K, V, O, E>(outcome: Outcome<O, ProcessingError<(K, V), E>>) -> Vec<O>
where
    K: Debug,
    V: Debug,
    E: Error + 'static,
{
    match outcome {
        Outcome::Success(values) => values,
        Outcome::Error(captured) => {
            let cause = ErrorDescription::from_error(captured.error(), captured.backtrace());
            let (key, value) = captured.value();
            error!(
                key = %describe(key),
                value = %describe(value),
                error = %cause.message,
                stack_trace = %cause.stack_trace,
                "Cannot process record"
            );
            Vec::new()
        }
    }
}
