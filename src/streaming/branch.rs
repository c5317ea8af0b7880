use std::error::Error;

use tracing::warn;

use crate::dead_letter::DeadLetter;
use crate::outcome::{Outcome, ProcessedKeyValue, ProcessedValue};

/// One record routed to either the success or the dead-letter branch of a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch<S, D> {
    Success(S),
    DeadLetter(D),
}

/// Branch record of a value-only step: successes and dead letters keep the input key
pub type ValueBranch<K, VR, V> = Branch<(K, VR), (K, DeadLetter<V>)>;

/// Branch record of a key+value step: successes carry the new key, dead letters the old one
pub type KeyValueBranch<KR, VR, K, V> = Branch<(KR, VR), (K, DeadLetter<V>)>;

impl<S, D> Branch<S, D> {
    pub fn is_success(&self) -> bool {
        matches!(self, Branch::Success(_))
    }

    pub fn is_dead_letter(&self) -> bool {
        matches!(self, Branch::DeadLetter(_))
    }
}

/// Split the outcome of a value step into branch records under the unchanged key
///
/// Every successful value becomes its own record. A captured error becomes
/// a single dead letter built with `description`.
pub fn split_value<K, V, VR, E>(
    key: K,
    processed: ProcessedValue<V, VR, E>,
    description: &str,
) -> Vec<ValueBranch<K, VR, V>>
where
    K: Clone,
    E: Error + 'static,
{
    match processed {
        Outcome::Success(values) => values
            .into_iter()
            .map(|value| Branch::Success((key.clone(), value)))
            .collect(),
        Outcome::Error(captured) => {
            vec![Branch::DeadLetter((key, captured.into_dead_letter(description)))]
        }
    }
}

/// Split the outcome of a key+value step into branch records
///
/// Successes are emitted under `new_key`. A dead letter goes out under the
/// key the record had before the step. Successes without a new key have no
/// record to go into and are reported with a `warn!` event.
pub fn split_key_value<KR, K, V, VR, E>(
    new_key: Option<KR>,
    processed: ProcessedKeyValue<K, V, VR, E>,
    description: &str,
) -> Vec<KeyValueBranch<KR, VR, K, V>>
where
    KR: Clone,
    E: Error + 'static,
{
    match processed {
        Outcome::Success(values) => match new_key {
            Some(new_key) => values
                .into_iter()
                .map(|value| Branch::Success((new_key.clone(), value)))
                .collect(),
            None => {
                if !values.is_empty() {
                    warn!(dropped = values.len(), "Successful record has no key");
                }
                Vec::new()
            }
        },
        Outcome::Error((old_key, captured)) => {
            vec![Branch::DeadLetter((old_key, captured.into_dead_letter(description)))]
        }
    }
}
