use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::env;

use crate::output::OutputFormat;

pub const LOG_FILTER_ENV_VAR: &str = "RECIPE_SCALER_LOG";
pub const OUTPUT_FORMAT_ENV_VAR: &str = "RECIPE_SCALER_FORMAT";

const DEFAULT_LOG_FILTER: &str = "info";

/// Defaults for the command-line front end, taken from the environment (and `.env`).
/// Command-line flags take precedence over these.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be tested without
    /// touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = AppConfig::default();

        if let Some(filter) = lookup(LOG_FILTER_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter.trim().to_string();
        }

        if let Some(format) = lookup(OUTPUT_FORMAT_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.output_format = <OutputFormat as ValueEnum>::from_str(format.trim(), true).map_err(|_| {
                anyhow!(
                    "{} must be one of text, json or csv (got '{}')",
                    OUTPUT_FORMAT_ENV_VAR,
                    format
                )
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "info");
        Ok(())
    }

    #[test]
    fn test_reads_overrides() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_ENV_VAR, "recipe_scaler=debug"),
            (OUTPUT_FORMAT_ENV_VAR, "JSON"),
        ]))?;
        assert_eq!(config.log_filter, "recipe_scaler=debug");
        assert_eq!(config.output_format, OutputFormat::Json);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = AppConfig::from_lookup(lookup_from(&[(OUTPUT_FORMAT_ENV_VAR, "yaml")]));
        assert!(result.unwrap_err().to_string().contains("must be one of text, json or csv"));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[(LOG_FILTER_ENV_VAR, "  ")]))?;
        assert_eq!(config.log_filter, "info");
        Ok(())
    }
}
