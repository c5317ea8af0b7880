use std::error::Error;

use super::capturing::Capturing;
use crate::classify::{ErrorClassifier, ForwardTransient};
use crate::outcome::{Outcome, ProcessedKeyValue, ProcessingError};

/// A record emitted by a key+value adapter
///
/// Successful records carry the new key. A captured error has no new key
/// because the mapper never produced one, so it is emitted under `None` and
/// carries the old key inside the outcome instead.
pub type KeyedOutcome<KR, K, V, VR, E> = (Option<KR>, ProcessedKeyValue<K, V, VR, E>);

/// Wrap a key+value mapper and capture its errors
///
/// ```rust,ignore
/// let mapper = capture_key_value_errors(|key: &i32, value: &String| rekey(key, value));
/// let (new_key, processed) = mapper.apply(key, value)?;
/// let errors = processed.errors(); // (old key, ProcessingError)
/// ```
#[derive(Debug, Clone)]
pub struct ErrorCapturingKeyValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

/// Wrap a key+value mapper producing zero or more pairs and capture its errors
#[derive(Debug, Clone)]
pub struct ErrorCapturingFlatKeyValueMapper<F, C = ForwardTransient> {
    inner: Capturing<F, C>,
}

/// Capture errors of a key+value mapper, forwarding transient failures
pub fn capture_key_value_errors<F, K, V, KR, VR, E>(mapper: F) -> ErrorCapturingKeyValueMapper<F>
where
    F: Fn(&K, &V) -> Result<(KR, VR), E>,
    E: Error + 'static,
{
    capture_key_value_errors_with(mapper, ForwardTransient)
}

/// Capture errors of a key+value mapper, forwarding errors matched by `classifier`
pub fn capture_key_value_errors_with<F, C, K, V, KR, VR, E>(
    mapper: F,
    classifier: C,
) -> ErrorCapturingKeyValueMapper<F, C>
where
    F: Fn(&K, &V) -> Result<(KR, VR), E>,
    C: ErrorClassifier<E>,
{
    ErrorCapturingKeyValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

pub fn capture_flat_key_value_errors<F, I, K, V, KR, VR, E>(
    mapper: F,
) -> ErrorCapturingFlatKeyValueMapper<F>
where
    F: Fn(&K, &V) -> Result<I, E>,
    I: IntoIterator<Item = (KR, VR)>,
    E: Error + 'static,
{
    capture_flat_key_value_errors_with(mapper, ForwardTransient)
}

pub fn capture_flat_key_value_errors_with<F, C, I, K, V, KR, VR, E>(
    mapper: F,
    classifier: C,
) -> ErrorCapturingFlatKeyValueMapper<F, C>
where
    F: Fn(&K, &V) -> Result<I, E>,
    I: IntoIterator<Item = (KR, VR)>,
    C: ErrorClassifier<E>,
{
    ErrorCapturingFlatKeyValueMapper {
        inner: Capturing::new(mapper, classifier),
    }
}

impl<F, C> ErrorCapturingKeyValueMapper<F, C> {
    pub fn apply<K, V, KR, VR, E>(
        &self,
        key: K,
        value: V,
    ) -> Result<KeyedOutcome<KR, K, V, VR, E>, E>
    where
        F: Fn(&K, &V) -> Result<(KR, VR), E>,
        C: ErrorClassifier<E>,
    {
        let outcome = self
            .inner
            .capture((key, value), |f, (k, v)| f(k, v), |pair| vec![pair])?;

        Ok(match outcome {
            Outcome::Success(pairs) => {
                let (keys, values): (Vec<KR>, Vec<VR>) = pairs.into_iter().unzip();
                (keys.into_iter().next(), Outcome::Success(values))
            }
            Outcome::Error(captured) => (None, Outcome::Error(captured.split_key())),
        })
    }
}

impl<F, C> ErrorCapturingFlatKeyValueMapper<F, C> {
    /// Map one record into any number of records, each success with its own outcome
    pub fn apply<I, K, V, KR, VR, E>(
        &self,
        key: K,
        value: V,
    ) -> Result<Vec<KeyedOutcome<KR, K, V, VR, E>>, E>
    where
        F: Fn(&K, &V) -> Result<I, E>,
        I: IntoIterator<Item = (KR, VR)>,
        C: ErrorClassifier<E>,
    {
        let outcome = self.inner.capture(
            (key, value),
            |f, (k, v)| f(k, v),
            |pairs| pairs.into_iter().collect(),
        )?;

        Ok(rekey(outcome))
    }
}

fn rekey<K, V, KR, VR, E>(
    outcome: Outcome<(KR, VR), ProcessingError<(K, V), E>>,
) -> Vec<KeyedOutcome<KR, K, V, VR, E>> {
    match outcome {
        Outcome::Success(pairs) => pairs
            .into_iter()
            .map(|(new_key, new_value)| (Some(new_key), Outcome::single(new_value)))
            .collect(),
        // New key is only relevant if no error occurs
        Outcome::Error(captured) => vec![(None, Outcome::Error(captured.split_key()))],
    }
}
