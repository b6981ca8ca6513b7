//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`IMOBI_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use imobi_core::Wei;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Name shown in the page header
    pub site_name: String,

    /// Unit appended to every amount (display only)
    pub currency_unit: String,

    /// Start with the two example listings
    pub seed_listings: bool,

    /// How the page is written to stdout
    pub output: OutputMode,
}

/// Rendering of the page after each action.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable Portuguese text
    #[default]
    Text,

    /// One JSON document per action (page view + notices)
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::InvalidValue("IMOBI_OUTPUT".to_string())),
        }
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Site: "Imobiliária Wei"
    /// - Unit: wei
    /// - Seed listings: on
    /// - Output: text
    fn default() -> Self {
        ConfigState {
            site_name: "Imobiliária Wei".to_string(),
            currency_unit: "wei".to_string(),
            seed_listings: true,
            output: OutputMode::Text,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `IMOBI_SITE_NAME`: Override the header name
    /// - `IMOBI_CURRENCY_UNIT`: Override the amount unit
    /// - `IMOBI_SEED`: `true`/`false`, start with the example listings
    /// - `IMOBI_OUTPUT`: `text`/`json`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(site_name) = lookup("IMOBI_SITE_NAME") {
            config.site_name = site_name;
        }

        if let Some(unit) = lookup("IMOBI_CURRENCY_UNIT") {
            config.currency_unit = unit;
        }

        if let Some(seed) = lookup("IMOBI_SEED") {
            config.seed_listings = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("IMOBI_SEED".to_string()))?;
        }

        if let Some(output) = lookup("IMOBI_OUTPUT") {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Formats an amount with the configured unit.
    ///
    /// ## Example
    /// ```rust
    /// use imobi_shell_lib::state::ConfigState;
    /// use imobi_core::Wei;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_wei(&Wei::from(300u64)), "300 wei");
    /// ```
    pub fn format_wei(&self, amount: &Wei) -> String {
        format!("{} {}", amount, self.currency_unit)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
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
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("IMOBI_SITE_NAME", "Aluguéis"),
            ("IMOBI_CURRENCY_UNIT", "gwei"),
            ("IMOBI_SEED", "false"),
            ("IMOBI_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.site_name, "Aluguéis");
        assert_eq!(config.currency_unit, "gwei");
        assert!(!config.seed_listings);
        assert_eq!(config.output, OutputMode::Json);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = ConfigState::from_lookup(lookup_from(&[("IMOBI_SEED", "talvez")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for IMOBI_SEED");

        let err = ConfigState::from_lookup(lookup_from(&[("IMOBI_OUTPUT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for IMOBI_OUTPUT");
    }

    #[test]
    fn test_format_wei_large() {
        let config = ConfigState::default();
        let amount: Wei = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            config.format_wei(&amount),
            "123456789012345678901234567890 wei"
        );
    }
}
