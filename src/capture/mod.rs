pub mod capturing;
pub mod key_value;
pub mod value;

// Re-export commonly used types
pub use capturing::Capturing;
pub use key_value::{
    ErrorCapturingFlatKeyValueMapper, ErrorCapturingKeyValueMapper, KeyedOutcome,
    capture_flat_key_value_errors, capture_flat_key_value_errors_with, capture_key_value_errors,
    capture_key_value_errors_with,
};
pub use value::{
    ErrorCapturingFlatValueMapper, ErrorCapturingFlatValueMapperWithKey,
    ErrorCapturingValueMapper, ErrorCapturingValueMapperWithKey, capture_flat_value_errors,
    capture_flat_value_errors_with, capture_flat_value_with_key_errors,
    capture_flat_value_with_key_errors_with, capture_value_errors, capture_value_errors_with,
    capture_value_with_key_errors, capture_value_with_key_errors_with,
};
