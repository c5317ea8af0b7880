use std::error::Error;
use std::io;

use thiserror::Error;
use tokio::time::error::Elapsed;

use super::classifier::ErrorClassifier;

/// Marks an error as a transient infrastructure failure
///
/// Wrap a failure in `Transient` (anywhere in the cause chain) to have the
/// default classifier forward it instead of turning it into a dead letter.
#[derive(Error, Debug)]
#[error("Transient failure: {source}")]
pub struct Transient {
    source: Box<dyn Error + Send + Sync>,
}

impl Transient {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Default classifier: forwards transient failures, captures everything else
///
/// An error is transient when it, or any error in its `source()` chain, is a
/// [`Transient`], a tokio timeout, or an `io::Error` of a connection or
/// timeout kind. This mirrors a registry client timing out during
/// (de)serialization: the record itself is fine and a retry may succeed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardTransient;

impl<E> ErrorClassifier<E> for ForwardTransient
where
    E: Error + 'static,
{
    fn should_forward(&self, error: &E) -> bool {
        is_transient(error)
    }
}

/// Walk the cause chain looking for a transient failure
pub fn is_transient(error: &(dyn Error + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if err.is::<Transient>() || err.is::<Elapsed>() {
            return true;
        }
        if let Some(io_err) = err.downcast_ref::<io::Error>()
            && is_transient_kind(io_err.kind())
        {
            return true;
        }
        current = err.source();
    }
    false
}

fn is_transient_kind(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::TimedOut
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::AddrNotAvailable
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Error, Debug)]
    enum SerializationError {
        #[error("Error retrieving schema")]
        Registry(#[source] io::Error),

        #[error("Unknown magic byte")]
        UnknownMagicByte,

        #[error("Error serializing record")]
        Wrapped(#[source] Transient),
    }

    fn forwards<E: Error + 'static>(error: &E) -> bool {
        ForwardTransient.should_forward(error)
    }

    #[test]
    fn forwards_registry_timeout_in_cause_chain() {
        let error = SerializationError::Registry(io::Error::new(
            io::ErrorKind::TimedOut,
            "schema registry timed out",
        ));
        assert!(forwards(&error));
    }

    #[test]
    fn forwards_connection_failures() {
        for kind in [
            io::ErrorKind::ConnectionRefused,
            io::ErrorKind::ConnectionReset,
            io::ErrorKind::BrokenPipe,
        ] {
            assert!(forwards(&io::Error::new(kind, "connection")));
        }
    }

    #[test]
    fn captures_permanent_io_errors() {
        let error = SerializationError::Registry(io::Error::new(
            io::ErrorKind::InvalidData,
            "corrupt schema",
        ));
        assert!(!forwards(&error));
    }

    #[test]
    fn captures_errors_without_transient_cause() {
        assert!(!forwards(&SerializationError::UnknownMagicByte));
    }

    #[test]
    fn forwards_explicit_transient_marker() {
        let error = SerializationError::Wrapped(Transient::new("registry unavailable"));
        assert!(forwards(&error));
        assert!(forwards(&Transient::new("throttled")));
    }

    #[tokio::test]
    async fn forwards_tokio_timeout() {
        let elapsed = tokio::time::timeout(Duration::from_millis(1), std::future::pending::<()>())
            .await
            .unwrap_err();
        assert!(forwards(&elapsed));
    }

    #[test]
    fn transient_display_includes_source() {
        let error = Transient::new("registry unavailable");
        assert_eq!(error.to_string(), "Transient failure: registry unavailable");
    }
}
