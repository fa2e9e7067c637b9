use std::env;

use anyhow::{Context, Result};

use crate::models::DEFAULT_ACCOUNT_AGE_DAYS;

/// How results are rendered by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored human-readable report (default)
    Terminal,
    /// One JSON document per result
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Account age assumed when a profile omits it (TRUSTLENS_DEFAULT_ACCOUNT_AGE).
    pub default_account_age: u32,
    /// Output format (TRUSTLENS_OUTPUT: "terminal" or "json").
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_account_age: DEFAULT_ACCOUNT_AGE_DAYS,
            output: OutputFormat::Terminal,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Everything has a default.
    pub fn load() -> Result<Self> {
        let default_account_age = match env::var("TRUSTLENS_DEFAULT_ACCOUNT_AGE") {
            Ok(raw) => parse_account_age(&raw)?,
            Err(_) => DEFAULT_ACCOUNT_AGE_DAYS,
        };

        let output = match env::var("TRUSTLENS_OUTPUT") {
            Ok(raw) => parse_output(&raw)?,
            Err(_) => OutputFormat::Terminal,
        };

        Ok(Self {
            default_account_age,
            output,
        })
    }
}

fn parse_account_age(raw: &str) -> Result<u32> {
    let days: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("TRUSTLENS_DEFAULT_ACCOUNT_AGE is not a number: {raw:?}"))?;
    if days == 0 {
        anyhow::bail!("TRUSTLENS_DEFAULT_ACCOUNT_AGE must be at least 1 day");
    }
    Ok(days)
}

fn parse_output(raw: &str) -> Result<OutputFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "terminal" => Ok(OutputFormat::Terminal),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!(
            "TRUSTLENS_OUTPUT must be \"terminal\" or \"json\", got {other:?}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_age_must_be_positive() {
        assert_eq!(parse_account_age(" 45 ").unwrap(), 45);
        assert!(parse_account_age("0").is_err());
        assert!(parse_account_age("soon").is_err());
    }

    #[test]
    fn output_format_names() {
        assert_eq!(parse_output("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output("").unwrap(), OutputFormat::Terminal);
        assert!(parse_output("yaml").is_err());
    }
}
