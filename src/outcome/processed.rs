use super::processing_error::ProcessingError;

/// Result of applying a wrapped transformation to a single input record
///
/// Exactly one variant exists per invocation:
/// - `Success` holds the output values in order. An empty vector means the
///   record was filtered out, a single `None` element is a legitimate result.
/// - `Error` holds the captured failure together with the untouched input.
#[derive(Debug, Clone)]
pub enum Outcome<O, F> {
    Success(Vec<O>),
    Error(F),
}

/// Outcome of a value-only adapter: the failure carries the original value
pub type ProcessedValue<V, VR, E> = Outcome<VR, ProcessingError<V, E>>;

/// Outcome of a key+value adapter: the failure carries the original key next to the error
pub type ProcessedKeyValue<K, V, VR, E> = Outcome<VR, (K, ProcessingError<V, E>)>;

impl<O, F> Outcome<O, F> {
    /// Success with any number of output values
    pub fn success(values: impl IntoIterator<Item = O>) -> Self {
        Outcome::Success(values.into_iter().collect())
    }

    /// Success with exactly one output value
    pub fn single(value: O) -> Self {
        Outcome::Success(vec![value])
    }

    pub fn error(failure: F) -> Self {
        Outcome::Error(failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Output values of a success, empty for an error
    pub fn values(self) -> Vec<O> {
        match self {
            Outcome::Success(values) => values,
            Outcome::Error(_) => Vec::new(),
        }
    }

    /// Captured failure of an error, empty for a success
    pub fn errors(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(failure) => Some(failure),
        }
    }

    pub fn values_ref(&self) -> &[O] {
        match self {
            Outcome::Success(values) => values,
            Outcome::Error(_) => &[],
        }
    }

    pub fn error_ref(&self) -> Option<&F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(failure) => Some(failure),
        }
    }

    /// Transform every output value, leaving an error untouched
    pub fn map_values<P>(self, f: impl FnMut(O) -> P) -> Outcome<P, F> {
        match self {
            Outcome::Success(values) => Outcome::Success(values.into_iter().map(f).collect()),
            Outcome::Error(failure) => Outcome::Error(failure),
        }
    }
}
