//! Error isolation for per-record stream processing
//!
//! Wrap a record mapper with one of the `capture_*_errors` adapters and every
//! error it returns becomes part of the result instead of failing the stream.
//! Errors the classifier forwards, transient ones by default, are handed back
//! unchanged so the runtime can retry. Captured errors keep the input that
//! caused them and can be turned into serializable dead letters.
//!
//! ```rust,ignore
//! use deadletter::prelude::*;
//!
//! let mapper = capture_value_errors(|value: &String| value.parse::<i64>());
//! let processed = mapper.apply("a".to_string())?;
//! if let Some(captured) = processed.errors() {
//!     let dead_letter = captured.into_dead_letter("Cannot parse value");
//! }
//! ```

pub mod app;
pub mod capture;
pub mod classify;
pub mod dead_letter;
pub mod io;
pub mod logging;
pub mod outcome;
pub mod prelude;
pub mod streaming;
