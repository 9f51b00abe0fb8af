//! Ledger configuration.

use std::env;

use medchain_core::DEFAULT_TAMPER_MARKER;

use crate::error::{LedgerError, Result};

/// Environment variable overriding [`LedgerConfig::tamper_marker`].
pub const ENV_TAMPER_MARKER: &str = "MEDCHAIN_TAMPER_MARKER";

/// Environment variable overriding [`LedgerConfig::trim_input`].
pub const ENV_TRIM_INPUT: &str = "MEDCHAIN_TRIM_INPUT";

/// Configuration for the Ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Suffix used by [`Ledger::tamper_default`](crate::Ledger::tamper_default).
    pub tamper_marker: String,
    /// Whether to trim surrounding whitespace from appended fields.
    pub trim_input: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            tamper_marker: DEFAULT_TAMPER_MARKER.to_string(),
            trim_input: true,
        }
    }
}

impl LedgerConfig {
    /// Load defaults overlaid with `MEDCHAIN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(marker) = lookup(ENV_TAMPER_MARKER) {
            config.tamper_marker = marker;
        }

        if let Some(raw) = lookup(ENV_TRIM_INPUT) {
            config.trim_input = parse_bool(&raw).ok_or_else(|| {
                LedgerError::Config(format!("{} must be true or false, got {:?}", ENV_TRIM_INPUT, raw))
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.tamper_marker, " [tampered]");
        assert!(config.trim_input);
        assert_eq!(LedgerConfig::from_lookup(lookup(&[])).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let config = LedgerConfig::from_lookup(lookup(&[
            (ENV_TAMPER_MARKER, " (edited)"),
            (ENV_TRIM_INPUT, "0"),
        ]))
        .unwrap();
        assert_eq!(config.tamper_marker, " (edited)");
        assert!(!config.trim_input);
    }

    #[test]
    fn test_invalid_bool() {
        let err = LedgerConfig::from_lookup(lookup(&[(ENV_TRIM_INPUT, "maybe")])).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
