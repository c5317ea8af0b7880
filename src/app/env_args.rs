/// Turns prefixed environment variables into command-line arguments
///
/// `APP_INPUT_FILE=in.csv` becomes `["--input-file", "in.csv"]` for the
/// prefix `APP_`. Variables without the prefix are ignored.
#[derive(Debug, Clone)]
pub struct EnvironmentArgumentsParser {
    prefix: String,
    command_line_delimiter: String,
    environment_delimiter: String,
}

impl EnvironmentArgumentsParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_delimiters(prefix, "-", "_")
    }

    pub fn with_delimiters(
        prefix: impl Into<String>,
        command_line_delimiter: impl Into<String>,
        environment_delimiter: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            command_line_delimiter: command_line_delimiter.into(),
            environment_delimiter: environment_delimiter.into(),
        }
    }

    /// Flag/value pairs for every variable carrying the prefix, flattened
    pub fn parse_variables<I>(&self, environment: I) -> Vec<String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        environment
            .into_iter()
            .filter_map(|(name, value)| {
                let name = name.strip_prefix(&self.prefix)?;
                Some([self.to_flag(name), value])
            })
            .flatten()
            .collect()
    }

    fn to_flag(&self, name: &str) -> String {
        let words: Vec<String> = name
            .trim_end_matches(self.environment_delimiter.as_str())
            .split(self.environment_delimiter.as_str())
            .map(str::to_lowercase)
            .collect();
        format!("--{}", words.join(&self.command_line_delimiter))
    }
}
