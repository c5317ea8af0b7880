pub mod describe;
pub mod mappers;

// Re-export commonly used types
pub use describe::{UNPRINTABLE, describe};
pub use mappers::{
    ErrorLoggingFlatKeyValueMapper, ErrorLoggingFlatValueMapper, ErrorLoggingKeyValueMapper,
    ErrorLoggingValueMapper, log_flat_key_value_errors, log_flat_key_value_errors_with,
    log_flat_value_errors, log_flat_value_errors_with, log_key_value_errors,
    log_key_value_errors_with, log_value_errors, log_value_errors_with,
};

#[cfg(test)]
pub(crate) mod test_log;
