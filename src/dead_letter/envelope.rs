use std::any::type_name;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Record emitted to an error sink for a captured, permanent per-record failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadLetter<V> {
    /// Original input value, `None` inputs stay `None`
    pub input_value: V,
    /// Caller-chosen text, constant per topology edge
    pub description: String,
    pub cause: ErrorDescription,
}

impl<V> DeadLetter<V> {
    pub fn new(input_value: V, description: impl Into<String>, cause: ErrorDescription) -> Self {
        Self {
            input_value,
            description: description.into(),
            cause,
        }
    }
}

/// Rendered error: type, message and the full cause chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescription {
    pub error_type: String,
    pub message: String,
    pub stack_trace: String,
}

impl ErrorDescription {
    /// Render an error and its `source()` chain
    ///
    /// The stack trace starts with `<type>: <message>`, followed by the
    /// backtrace frames when one was captured, followed by one `Caused by:`
    /// line per source. It is never empty and never truncated.
    pub fn from_error<E>(error: &E, backtrace: &Backtrace) -> Self
    where
        E: Error + 'static,
    {
        let error_type = type_name::<E>().to_string();
        let message = error.to_string();

        let mut stack_trace = format!("{}: {}", error_type, message);
        if backtrace.status() == BacktraceStatus::Captured {
            // Writing to a String cannot fail
            let _ = write!(stack_trace, "\n{}", backtrace);
        }
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(stack_trace, "\nCaused by: {}", cause);
            source = cause.source();
        }

        Self {
            error_type,
            message,
            stack_trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use thiserror::Error;

    #[derive(Error, Debug)]
    enum ParseFailure {
        #[error("Cannot process")]
        Plain,

        #[error("Cannot read record")]
        Read(#[source] io::Error),
    }

    #[test]
    fn renders_type_and_message() {
        let description = ErrorDescription::from_error(&ParseFailure::Plain, &Backtrace::disabled());

        assert_eq!(description.message, "Cannot process");
        assert!(description.error_type.ends_with("ParseFailure"));
        assert!(description.stack_trace.starts_with(&description.error_type));
        assert!(description.stack_trace.contains("Cannot process"));
    }

    #[test]
    fn renders_cause_chain() {
        let error = ParseFailure::Read(io::Error::new(io::ErrorKind::InvalidData, "bad bytes"));
        let description = ErrorDescription::from_error(&error, &Backtrace::disabled());

        assert_eq!(description.message, "Cannot read record");
        assert!(description.stack_trace.contains("\nCaused by: bad bytes"));
    }

    #[test]
    fn includes_captured_backtrace() {
        let backtrace = Backtrace::force_capture();
        let description = ErrorDescription::from_error(&ParseFailure::Plain, &backtrace);

        assert_eq!(backtrace.status(), BacktraceStatus::Captured);
        assert!(description.stack_trace.lines().count() > 1);
    }

    #[test]
    fn serializes_to_json() {
        let dead_letter = DeadLetter::new(
            None::<String>,
            "Description",
            ErrorDescription::from_error(&ParseFailure::Plain, &Backtrace::disabled()),
        );

        let json = serde_json::to_value(&dead_letter).unwrap();
        assert!(json["input_value"].is_null());
        assert_eq!(json["description"], "Description");
        assert_eq!(json["cause"]["message"], "Cannot process");

        let parsed: DeadLetter<Option<String>> = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, dead_letter);
    }
}
