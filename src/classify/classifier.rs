/// Decides whether an error is forwarded to the caller instead of captured
///
/// Forwarded errors are returned unchanged so the surrounding runtime can
/// retry the record. Captured errors become dead letters. Classifiers are
/// shared between concurrently running tasks and must not hold mutable state.
pub trait ErrorClassifier<E>: Send + Sync {
    /// Return true to forward the error, false to capture it
    fn should_forward(&self, error: &E) -> bool;
}

impl<E, F> ErrorClassifier<E> for F
where
    F: Fn(&E) -> bool + Send + Sync,
{
    fn should_forward(&self, error: &E) -> bool {
        self(error)
    }
}

/// Captures every error, nothing is forwarded
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureAll;

impl<E> ErrorClassifier<E> for CaptureAll {
    fn should_forward(&self, _error: &E) -> bool {
        false
    }
}

/// Forwards an error when either classifier forwards it
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<E, A, B> ErrorClassifier<E> for Or<A, B>
where
    A: ErrorClassifier<E>,
    B: ErrorClassifier<E>,
{
    fn should_forward(&self, error: &E) -> bool {
        self.first.should_forward(error) || self.second.should_forward(error)
    }
}

/// Combinators for building a classifier out of smaller ones
pub trait ClassifierExt: Sized {
    fn or<B>(self, other: B) -> Or<Self, B> {
        Or {
            first: self,
            second: other,
        }
    }
}

impl<T> ClassifierExt for T {}
