//! Environment-driven configuration.
//!
//! | Variable              | Required | Default | Description                      |
//! |-----------------------|----------|---------|----------------------------------|
//! | `CONTRACT_FORM_PATH`  | yes*     | --      | JSON form to validate            |
//! | `CHECK_OUTPUT_FORMAT` | no       | `text`  | `text` or `json`                 |
//!
//! \* unless the path is passed as the first command-line argument, which
//! takes precedence.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CheckError;

pub const FORM_PATH_VAR: &str = "CONTRACT_FORM_PATH";
pub const OUTPUT_FORMAT_VAR: &str = "CHECK_OUTPUT_FORMAT";

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CheckError::UnknownOutputFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub form_path: PathBuf,
    pub output: OutputFormat,
}

impl CheckConfig {
    /// Read configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self, CheckError> {
        Self::from_sources(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    /// Build configuration from an optional positional argument and a
    /// variable lookup.
    pub fn from_sources<F>(arg: Option<String>, var: F) -> Result<Self, CheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let form_path = arg
            .filter(|a| !a.is_empty())
            .or_else(|| var(FORM_PATH_VAR).filter(|v| !v.is_empty()))
            .map(PathBuf::from)
            .ok_or(CheckError::MissingFormPath)?;

        let output = match var(OUTPUT_FORMAT_VAR) {
            Some(v) => v.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(Self { form_path, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn argument_takes_precedence_over_env() {
        let config = CheckConfig::from_sources(
            Some("cli.json".to_string()),
            lookup(&[(FORM_PATH_VAR, "env.json")]),
        )
        .unwrap();
        assert_eq!(config.form_path, PathBuf::from("cli.json"));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn falls_back_to_env_path() {
        let config = CheckConfig::from_sources(
            None,
            lookup(&[(FORM_PATH_VAR, "env.json"), (OUTPUT_FORMAT_VAR, "JSON")]),
        )
        .unwrap();
        assert_eq!(config.form_path, PathBuf::from("env.json"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn missing_path_is_an_error() {
        let err = CheckConfig::from_sources(None, lookup(&[])).unwrap_err();
        assert_matches!(err, CheckError::MissingFormPath);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = CheckConfig::from_sources(
            Some("form.json".to_string()),
            lookup(&[(OUTPUT_FORMAT_VAR, "yaml")]),
        )
        .unwrap_err();
        assert_matches!(err, CheckError::UnknownOutputFormat(ref f) if f == "yaml");
    }
}
