pub mod cli;
pub mod config;
pub mod env_args;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use cli::{CliApp, exit_with_usage};
pub use config::{AppConfig, DEFAULT_ERROR_DESCRIPTION, ENV_PREFIX};
pub use env_args::EnvironmentArgumentsParser;
pub use error::AppError;
pub use pipeline::{ParseValueError, parse_value, run_pipeline};
