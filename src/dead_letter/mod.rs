pub mod envelope;

// Re-export commonly used types
pub use envelope::{DeadLetter, ErrorDescription};
