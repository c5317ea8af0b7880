pub mod processed;
pub mod processing_error;

// Re-export commonly used types
pub use processed::{Outcome, ProcessedKeyValue, ProcessedValue};
pub use processing_error::ProcessingError;
