//! Prelude module for convenient imports
//!
//! Import everything you need with: `use deadletter::prelude::*;`

// Outcome types
pub use crate::outcome::{Outcome, ProcessedKeyValue, ProcessedValue, ProcessingError};

// Classifiers
pub use crate::classify::{
    CaptureAll, ClassifierExt, ErrorClassifier, ForwardTransient, Or, Transient, is_transient,
};

// Dead letters
pub use crate::dead_letter::{DeadLetter, ErrorDescription};

// Capturing adapters
pub use crate::capture::{
    ErrorCapturingFlatKeyValueMapper, ErrorCapturingFlatValueMapper,
    ErrorCapturingFlatValueMapperWithKey, ErrorCapturingKeyValueMapper, ErrorCapturingValueMapper,
    ErrorCapturingValueMapperWithKey, KeyedOutcome, capture_flat_key_value_errors,
    capture_flat_key_value_errors_with, capture_flat_value_errors, capture_flat_value_errors_with,
    capture_flat_value_with_key_errors, capture_flat_value_with_key_errors_with,
    capture_key_value_errors, capture_key_value_errors_with, capture_value_errors,
    capture_value_errors_with, capture_value_with_key_errors, capture_value_with_key_errors_with,
};

// Logging adapters
pub use crate::logging::{
    ErrorLoggingFlatKeyValueMapper, ErrorLoggingFlatValueMapper, ErrorLoggingKeyValueMapper,
    ErrorLoggingValueMapper, log_flat_key_value_errors, log_flat_key_value_errors_with,
    log_flat_value_errors, log_flat_value_errors_with, log_key_value_errors,
    log_key_value_errors_with, log_value_errors, log_value_errors_with,
};

// IO types
pub use crate::io::{
    CsvRecordStream, CsvSink, DiscardSink, IoError, JsonLinesSink, MemorySink, Record, RecordSink,
};

// Streaming types
pub use crate::streaming::{
    Branch, KeyValueBranch, ProcessingSession, RouteSummary, StreamError, ValueBranch,
    split_key_value, split_value,
};

// App types
pub use crate::app::{AppConfig, AppError, CliApp, EnvironmentArgumentsParser};
