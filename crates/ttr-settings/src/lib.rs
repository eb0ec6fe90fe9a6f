//! # ttr-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free configuration for the calculator and tokenizer layers.
//! These types mirror CLI arguments without Clap dependencies,
//! making them suitable for library consumers and config files.
//!
//! ## What belongs here
//! * `TtrConfig` and `TokenizerSettings` with their defaults
//! * Validation of numeric settings
//! * TOML loading of a `ttr.toml` settings file
//!
//! ## What does NOT belong here
//! * Clap parsing (use ttr-config)
//! * Business logic

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum token count before standardized TTR is computed.
pub const DEFAULT_MIN_WORDS_FOR_STTR: usize = 1000;

/// Default chunk length for standardized TTR.
pub const DEFAULT_STTR_CHUNK_SIZE: usize = 1000;

/// Errors from building or loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid configuration: `{field}` must be positive (got {value})")]
    InvalidConfig { field: &'static str, value: usize },

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Calculator configuration.
///
/// Always valid once built: both numeric fields are positive. Fields are
/// read-only after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTtrConfig")]
pub struct TtrConfig {
    min_words_for_sttr: usize,
    sttr_chunk_size: usize,
    return_chunk_details: bool,
}

impl TtrConfig {
    /// Build a validated configuration.
    pub fn new(
        min_words_for_sttr: usize,
        sttr_chunk_size: usize,
        return_chunk_details: bool,
    ) -> Result<Self, SettingsError> {
        if min_words_for_sttr == 0 {
            return Err(SettingsError::InvalidConfig {
                field: "min_words_for_sttr",
                value: min_words_for_sttr,
            });
        }
        if sttr_chunk_size == 0 {
            return Err(SettingsError::InvalidConfig {
                field: "sttr_chunk_size",
                value: sttr_chunk_size,
            });
        }
        Ok(Self {
            min_words_for_sttr,
            sttr_chunk_size,
            return_chunk_details,
        })
    }

    /// Minimum total tokens required to compute standardized TTR.
    pub fn min_words_for_sttr(&self) -> usize {
        self.min_words_for_sttr
    }

    /// Tokens per standardized-TTR chunk.
    pub fn sttr_chunk_size(&self) -> usize {
        self.sttr_chunk_size
    }

    /// Whether per-chunk TTR values are kept in results.
    pub fn return_chunk_details(&self) -> bool {
        self.return_chunk_details
    }

    /// Same configuration with chunk details switched on or off.
    #[must_use]
    pub fn with_chunk_details(self, return_chunk_details: bool) -> Self {
        Self {
            return_chunk_details,
            ..self
        }
    }
}

impl Default for TtrConfig {
    fn default() -> Self {
        Self {
            min_words_for_sttr: DEFAULT_MIN_WORDS_FOR_STTR,
            sttr_chunk_size: DEFAULT_STTR_CHUNK_SIZE,
            return_chunk_details: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTtrConfig {
    #[serde(default = "default_min_words_for_sttr")]
    min_words_for_sttr: usize,
    #[serde(default = "default_sttr_chunk_size")]
    sttr_chunk_size: usize,
    #[serde(default)]
    return_chunk_details: bool,
}

fn default_min_words_for_sttr() -> usize {
    DEFAULT_MIN_WORDS_FOR_STTR
}

fn default_sttr_chunk_size() -> usize {
    DEFAULT_STTR_CHUNK_SIZE
}

impl TryFrom<RawTtrConfig> for TtrConfig {
    type Error = SettingsError;

    fn try_from(raw: RawTtrConfig) -> Result<Self, Self::Error> {
        TtrConfig::new(
            raw.min_words_for_sttr,
            raw.sttr_chunk_size,
            raw.return_chunk_details,
        )
    }
}

/// Tokenizer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenizerSettings {
    /// Drop tokens made entirely of digits.
    #[serde(default)]
    pub strip_numbers: bool,
}

/// Contents of a `ttr.toml` settings file.
///
/// ```toml
/// [ttr]
/// min_words_for_sttr = 1000
/// sttr_chunk_size = 1000
/// return_chunk_details = false
///
/// [tokenizer]
/// strip_numbers = false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub ttr: TtrConfig,

    #[serde(default)]
    pub tokenizer: TokenizerSettings,
}

impl Settings {
    /// Parse settings from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_thousand_word_chunks() {
        let config = TtrConfig::default();
        assert_eq!(config.min_words_for_sttr(), 1000);
        assert_eq!(config.sttr_chunk_size(), 1000);
        assert!(!config.return_chunk_details());
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = TtrConfig::new(1000, 0, false).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidConfig {
                field: "sttr_chunk_size",
                ..
            }
        ));
    }

    #[test]
    fn zero_min_words_is_rejected() {
        let err = TtrConfig::new(0, 1000, false).unwrap_err();
        assert!(err.to_string().contains("min_words_for_sttr"));
    }

    #[test]
    fn with_chunk_details_keeps_other_fields() {
        let config = TtrConfig::new(500, 250, false)
            .unwrap()
            .with_chunk_details(true);
        assert_eq!(config.min_words_for_sttr(), 500);
        assert_eq!(config.sttr_chunk_size(), 250);
        assert!(config.return_chunk_details());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let settings = Settings::from_toml("[ttr]\nsttr_chunk_size = 500\n").unwrap();
        assert_eq!(settings.ttr.sttr_chunk_size(), 500);
        assert_eq!(settings.ttr.min_words_for_sttr(), DEFAULT_MIN_WORDS_FOR_STTR);
        assert!(!settings.tokenizer.strip_numbers);
    }

    #[test]
    fn invalid_toml_value_is_rejected() {
        let err = Settings::from_toml("[ttr]\nsttr_chunk_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("sttr_chunk_size"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_toml("[ttr]\nchunk = 5\n").is_err());
        assert!(Settings::from_toml("[other]\n").is_err());
    }
}
