use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use super::env_args::EnvironmentArgumentsParser;
use super::error::AppError;

/// Prefix of environment variables that are read as command-line arguments
pub const ENV_PREFIX: &str = "APP_";

pub const DEFAULT_ERROR_DESCRIPTION: &str = "Cannot parse value";

/// Configuration of the `deadletter` pipeline
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "deadletter",
    version,
    about = "Parse key,value CSV records and route failures to a dead-letter file",
    args_override_self = true
)]
pub struct AppConfig {
    /// CSV file with `key,value` records
    #[arg(long)]
    pub input_file: PathBuf,

    /// JSON lines file receiving dead letters; failures are only logged without it
    #[arg(long)]
    pub error_file: Option<PathBuf>,

    /// Description stored in every dead letter
    #[arg(long, default_value = DEFAULT_ERROR_DESCRIPTION)]
    pub error_description: String,
}

impl AppConfig {
    /// Parse command-line arguments, the first being the program name
    pub fn from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| AppError::InvalidArguments(e.to_string()))
    }

    /// Combine environment and command-line arguments
    ///
    /// Arguments derived from `APP_*` variables are placed before the
    /// explicit ones, so a flag given on the command line wins.
    pub fn load<A, E>(cli_args: A, environment: E) -> Result<Self, AppError>
    where
        A: IntoIterator<Item = String>,
        E: IntoIterator<Item = (String, String)>,
    {
        let mut cli_args = cli_args.into_iter();
        let program = cli_args.next().unwrap_or_else(|| "deadletter".to_string());
        let env_args = EnvironmentArgumentsParser::new(ENV_PREFIX).parse_variables(environment);

        Self::from_args(std::iter::once(program).chain(env_args).chain(cli_args))
    }
}
