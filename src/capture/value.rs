use std::error::Error;

use super::capturing::Capturing;
use crate::classify::{ErrorClassifier, ForwardTransient};
use crate::outcome::ProcessedValue;

/// Wrap a value mapper and capture its errors
///
/// The record key is untouched by value mappers, so the runtime keeps it for
/// both branches.
///
/// ```rust,ignore
/// let mapper = capture_value_errors(|value: &Option<String>| parse(value));
/// let processed = mapper.apply(value)?;
/// let values = processed.values();
/// ```
#[derive(Debug, Clone)]
pub struct ErrorCapturingValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

/// Wrap a value mapper producing zero or more values and capture its errors
#[derive(Debug, Clone)]
pub struct ErrorCapturingFlatValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

/// Wrap a value mapper that also reads the key and capture its errors
#[derive(Debug, Clone)]
pub struct ErrorCapturingValueMapperWithKey<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

/// Wrap a flat value mapper that also reads the key and capture its errors
#[derive(Debug, Clone)]
pub struct ErrorCapturingFlatValueMapperWithKey<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

/// Capture errors of a value mapper, forwarding transient failures
pub fn capture_value_errors<F, V, VR, E>(mapper: F) -> ErrorCapturingValueMapper<F>
where
    F: Fn(&V) -> Result<VR, E>,
    E: Error + 'static,
{
    capture_value_errors_with(mapper, ForwardTransient)
}

/// Capture errors of a value mapper, forwarding errors matched by `classifier`
pub fn capture_value_errors_with<F, C, V, VR, E>(
    mapper: F,
    classifier: C,
) -> ErrorCapturingValueMapper<F, C>
where
    F: Fn(&V) -> Result<VR, E>,
    C: ErrorClassifier<E>,
{
    ErrorCapturingValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

pub fn capture_flat_value_errors<F, I, V, E>(mapper: F) -> ErrorCapturingFlatValueMapper<F>
where
    F: Fn(&V) -> Result<I, E>,
    I: IntoIterator,
    E: Error + 'static,
{
    capture_flat_value_errors_with(mapper, ForwardTransient)
}

pub fn capture_flat_value_errors_with<F, C, I, V, E>(
    mapper: F,
    classifier: C,
) -> ErrorCapturingFlatValueMapper<F, C>
where
    F: Fn(&V) -> Result<I, E>,
    I: IntoIterator,
    C: ErrorClassifier<E>,
{
    ErrorCapturingFlatValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

pub fn capture_value_with_key_errors<F, K, V, VR, E>(
    mapper: F,
) -> ErrorCapturingValueMapperWithKey<F>
where
    F: Fn(&K, &V) -> Result<VR, E>,
    E: Error + 'static,
{
    capture_value_with_key_errors_with(mapper, ForwardTransient)
}

pub fn capture_value_with_key_errors_with<F, C, K, V, VR, E>(
    mapper: F,
    classifier: C,
) -> ErrorCapturingValueMapperWithKey<F, C>
where
    F: Fn(&K, &V) -> Result<VR, E>,
    C: ErrorClassifier<E>,
{
    ErrorCapturingValueMapperWithKey {
        inner: Capturing::new(mapper, classifier),
    }
}

pub fn capture_flat_value_with_key_errors<F, I, K, V, E>(
    mapper: F,
) -> ErrorCapturingFlatValueMapperWithKey<F>
where
    F: Fn(&K, &V) -> Result<I, E>,
    I: IntoIterator,
    E: Error + 'static,
{
    capture_flat_value_with_key_errors_with(mapper, ForwardTransient)
}

pub fn capture_flat_value_with_key_errors_with<F, C, I, K, V, E>(
    mapper: F,
    classifier: C,
) -> ErrorCapturingFlatValueMapperWithKey<F, C>
where
    F: Fn(&K, &V) -> Result<I, E>,
    I: IntoIterator,
    C: ErrorClassifier<E>,
{
    ErrorCapturingFlatValueMapperWithKey {
        inner: Capturing::new(mapper, classifier),
    }
}

impl<F, C> ErrorCapturingValueMapper<F, C> {
    /// Map one value; the result, even `None`, becomes the only success value
    pub fn apply<V, VR, E>(&self, value: V) -> Result<ProcessedValue<V, VR, E>, E>
    where
        F: Fn(&V) -> Result<VR, E>,
        C: ErrorClassifier<E>,
    {
        self.inner.capture(value, |f, v| f(v), |result| vec![result])
    }
}

impl<F, C> ErrorCapturingFlatValueMapper<F, C> {
    /// Map one value into any number of values, an empty result filters the record
    pub fn apply<I, V, E>(&self, value: V) -> Result<ProcessedValue<V, I::Item, E>, E>
    where
        F: Fn(&V) -> Result<I, E>,
        I: IntoIterator,
        C: ErrorClassifier<E>,
    {
        self.inner
            .capture(value, |f, v| f(v), |results| results.into_iter().collect())
    }
}

impl<F, C> ErrorCapturingValueMapperWithKey<F, C> {
    pub fn apply<K, V, VR, E>(&self, key: &K, value: V) -> Result<ProcessedValue<V, VR, E>, E>
    where
        F: Fn(&K, &V) -> Result<VR, E>,
        C: ErrorClassifier<E>,
    {
        self.inner
            .capture(value, |f, v| f(key, v), |result| vec![result])
    }
}

impl<F, C> ErrorCapturingFlatValueMapperWithKey<F, C> {
    pub fn apply<I, K, V, E>(
        &self,
        key: &K,
        value: V,
    ) -> Result<ProcessedValue<V, I::Item, E>, E>
    where
        F: Fn(&K, &V) -> Result<I, E>,
        I: IntoIterator,
        C: ErrorClassifier<E>,
    {
        self.inner
            .capture(value, |f, v| f(key, v), |results| results.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{CaptureAll, Transient};
    use std::sync::Arc;
    use thiserror::Error;

    #[derive(Error, Debug)]
    enum MapperError {
        #[error("Cannot process")]
        CannotProcess,

        #[error("Schema registry unavailable")]
        Registry(#[source] Transient),
    }

    fn registry_timeout() -> MapperError {
        MapperError::Registry(Transient::new("timed out"))
    }

    #[test]
    fn captures_value_mapper_error() {
        let mapper = capture_value_errors(|value: &Option<String>| match value.as_deref() {
            Some("foo") => Err(MapperError::CannotProcess),
            _ => Ok(2_i64),
        });

        let failed = mapper.apply(Some("foo".to_string())).unwrap();
        let succeeded = mapper.apply(Some("bar".to_string())).unwrap();

        let captured = failed.errors().unwrap();
        assert_eq!(captured.value().as_deref(), Some("foo"));
        assert!(matches!(captured.error(), MapperError::CannotProcess));
        assert_eq!(succeeded.values(), vec![2]);
    }

    #[test]
    fn forwards_transient_error() {
        let mapper = capture_value_errors(|_: &Option<String>| -> Result<i64, MapperError> {
            Err(registry_timeout())
        });

        let result = mapper.apply(Some("foo".to_string()));
        assert!(matches!(result, Err(MapperError::Registry(_))));
    }

    #[test]
    fn custom_classifier_can_capture_transient_errors() {
        let mapper = capture_value_errors_with(
            |_: &Option<String>| -> Result<i64, MapperError> { Err(registry_timeout()) },
            CaptureAll,
        );

        let outcome = mapper.apply(Some("foo".to_string())).unwrap();
        assert!(outcome.is_error());
    }

    #[test]
    fn custom_classifier_can_forward_permanent_errors() {
        let mapper = capture_value_errors_with(
            |_: &Option<String>| -> Result<i64, MapperError> { Err(MapperError::CannotProcess) },
            |_: &MapperError| true,
        );

        assert!(mapper.apply(None).is_err());
    }

    #[test]
    fn handles_none_input() {
        let mapper = capture_value_errors(|value: &Option<String>| -> Result<i64, MapperError> {
            match value {
                None => Ok(2),
                Some(_) => Err(MapperError::CannotProcess),
            }
        });

        let outcome = mapper.apply(None).unwrap();
        assert_eq!(outcome.values(), vec![2]);
    }

    #[test]
    fn handles_error_on_none_input() {
        let mapper = capture_value_errors(|_: &Option<String>| -> Result<i64, MapperError> {
            Err(MapperError::CannotProcess)
        });

        let captured = mapper.apply(None).unwrap().errors().unwrap();
        assert!(captured.value().is_none());
    }

    #[test]
    fn none_result_is_a_value() {
        let mapper =
            capture_value_errors(|_: &Option<String>| Ok::<Option<i64>, MapperError>(None));

        let outcome = mapper.apply(Some("bar".to_string())).unwrap();
        assert_eq!(outcome.values(), vec![None]);
    }

    #[test]
    #[should_panic(expected = "out of memory")]
    fn does_not_capture_panics() {
        let mapper = capture_value_errors_with(
            |_: &Option<String>| -> Result<i64, MapperError> { panic!("out of memory") },
            CaptureAll,
        );
        let _ = mapper.apply(Some("foo".to_string()));
    }

    #[test]
    fn flat_mapper_keeps_empty_result() {
        let mapper =
            capture_flat_value_errors(|_: &String| Ok::<Vec<i64>, MapperError>(Vec::new()));

        let outcome = mapper.apply("bar".to_string()).unwrap();
        assert!(outcome.is_success());
        assert!(outcome.values().is_empty());
    }

    #[test]
    fn flat_mapper_keeps_order_of_values() {
        let mapper = capture_flat_value_errors(|value: &String| {
            Ok::<_, MapperError>(value.chars().map(|c| c.to_string()).collect::<Vec<_>>())
        });

        let outcome = mapper.apply("abc".to_string()).unwrap();
        assert_eq!(outcome.values(), vec!["a", "b", "c"]);
    }

    #[test]
    fn flat_mapper_captures_error() {
        let mapper = capture_flat_value_errors(|_: &String| -> Result<Vec<i64>, MapperError> {
            Err(MapperError::CannotProcess)
        });

        let captured = mapper.apply("foo".to_string()).unwrap().errors().unwrap();
        assert_eq!(captured.value(), "foo");
    }

    #[test]
    fn flat_mapper_forwards_transient_error() {
        let mapper = capture_flat_value_errors(|_: &String| -> Result<Vec<i64>, MapperError> {
            Err(registry_timeout())
        });

        assert!(mapper.apply("foo".to_string()).is_err());
    }

    #[test]
    fn with_key_mapper_reads_key() {
        let mapper = capture_value_with_key_errors(|key: &i32, value: &String| {
            Ok::<_, MapperError>(format!("{key}:{value}"))
        });

        let outcome = mapper.apply(&1, "foo".to_string()).unwrap();
        assert_eq!(outcome.values(), vec!["1:foo".to_string()]);
    }

    #[test]
    fn with_key_mapper_captures_only_value() {
        let mapper = capture_value_with_key_errors(
            |_: &Option<i32>, _: &Option<String>| -> Result<i64, MapperError> {
                Err(MapperError::CannotProcess)
            },
        );

        let captured = mapper.apply(&None, Some("foo".to_string())).unwrap().errors().unwrap();
        assert_eq!(captured.value().as_deref(), Some("foo"));
    }

    #[test]
    fn flat_with_key_mapper_emits_all_values() {
        let mapper = capture_flat_value_with_key_errors(|key: &i32, value: &i32| {
            Ok::<_, MapperError>(vec![*key, *value])
        });

        let outcome = mapper.apply(&1, 2).unwrap();
        assert_eq!(outcome.values(), vec![1, 2]);
    }

    #[test]
    fn flat_with_key_mapper_captures_error() {
        let mapper = capture_flat_value_with_key_errors(
            |_: &i32, _: &i32| -> Result<Vec<i32>, MapperError> { Err(MapperError::CannotProcess) },
        );

        let captured = mapper.apply(&1, 2).unwrap().errors().unwrap();
        assert_eq!(*captured.value(), 2);
    }

    #[test]
    fn adapter_can_be_shared_across_threads() {
        let mapper = Arc::new(capture_value_errors(|value: &i64| {
            if *value % 2 == 0 {
                Ok(*value * 10)
            } else {
                Err(MapperError::CannotProcess)
            }
        }));

        let handles: Vec<_> = (0..4_i64)
            .map(|n| {
                let mapper = Arc::clone(&mapper);
                std::thread::spawn(move || mapper.apply(n).unwrap().is_success())
            })
            .collect();

        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, false, true, false]);
    }
}
