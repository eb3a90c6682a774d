//! Configuration file support for hgvs-validate.
//!
//! This module loads `.hgvs-validate.toml` files, which set the error
//! handling mode, the legacy token policy and the input length limit.
//!
//! # Example Configuration
//!
//! ```toml
//! [validation]
//! mode = "lenient"
//! legacy_tokens = "accept"
//! max_length = 500
//!
//! [validation.overrides]
//! W2002 = "reject"
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.hgvs-validate.toml` in current directory
//! 2. `~/.config/hgvs-validate/config.toml`

use crate::error_handling::{Action, ErrorConfig, ErrorMode, ErrorType, LegacyTokenPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const LOCAL_CONFIG: &str = ".hgvs-validate.toml";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub validation: ValidationSection,
}

/// `[validation]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSection {
    /// Error handling mode (strict, lenient, silent, default: strict)
    #[serde(default)]
    pub mode: ErrorMode,

    /// `_wt` / `_sy` handling (reject, accept, default: reject)
    #[serde(default)]
    pub legacy_tokens: LegacyTokenPolicy,

    /// Longest accepted input in bytes
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Per warning code overrides, e.g. `W2001 = "accept"`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, Action>,
}

fn default_max_length() -> usize {
    1000
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self {
            mode: ErrorMode::default(),
            legacy_tokens: LegacyTokenPolicy::default(),
            max_length: default_max_length(),
            overrides: BTreeMap::new(),
        }
    }
}

/// Configuration loading error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown warning code '{0}' in config overrides")]
    UnknownCode(String),
}

impl ValidatorConfig {
    /// Load configuration from the default locations, or defaults when
    /// no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let cwd_config = PathBuf::from(LOCAL_CONFIG);
        if cwd_config.exists() {
            return Self::load_from_path(&cwd_config);
        }

        if let Some(home) = dirs_home() {
            let home_config = home
                .join(".config")
                .join("hgvs-validate")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_path(&home_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        info!(path = %path.display(), mode = %config.validation.mode, "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = toml::from_str(content)?;
        for code in config.validation.overrides.keys() {
            ErrorType::from_code(code).ok_or_else(|| ConfigError::UnknownCode(code.clone()))?;
        }
        Ok(config)
    }

    /// Convert this config to an ErrorConfig.
    pub fn to_error_config(&self) -> ErrorConfig {
        let mut config = ErrorConfig::new(self.validation.mode);
        for (code, action) in &self.validation.overrides {
            if let Some(error_type) = ErrorType::from_code(code) {
                config = config.with_override(error_type, *action);
            }
        }
        config
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_config() {
        let config = ValidatorConfig::parse("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.validation.max_length, 1000);
        assert_eq!(config.validation.mode, ErrorMode::Strict);
    }

    #[test]
    fn test_parse_full_section() {
        let content = r#"
[validation]
mode = "lenient"
legacy_tokens = "accept"
max_length = 200
"#;
        let config = ValidatorConfig::parse(content).unwrap();
        assert_eq!(config.validation.mode, ErrorMode::Lenient);
        assert_eq!(config.validation.legacy_tokens, LegacyTokenPolicy::Accept);
        assert_eq!(config.validation.max_length, 200);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let content = r#"
[validation]
mode = "chatty"
"#;
        assert!(matches!(
            ValidatorConfig::parse(content),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let content = r#"
[validation]
mode = "lenient"

[validation.overrides]
W2002 = "reject"
w2001 = "ignore"
"#;
        let config = ValidatorConfig::parse(content).unwrap();
        let error_config = config.to_error_config();
        assert_eq!(error_config.mode, ErrorMode::Lenient);
        assert_eq!(error_config.action_for(ErrorType::SeparatorWhitespace), Action::Reject);
        assert_eq!(error_config.action_for(ErrorType::SurroundingWhitespace), Action::Ignore);
    }

    #[test]
    fn test_unknown_override_code() {
        let content = r#"
[validation.overrides]
W9999 = "reject"
"#;
        assert!(matches!(
            ValidatorConfig::parse(content),
            Err(ConfigError::UnknownCode(code)) if code == "W9999"
        ));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[validation]\nmode = \"silent\"").unwrap();
        let config = ValidatorConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.validation.mode, ErrorMode::Silent);
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = ValidatorConfig::load_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ValidatorConfig::parse("[validation]\nmode = \"lenient\"\n").unwrap();
        let text = config.to_toml().unwrap();
        assert_eq!(ValidatorConfig::parse(&text).unwrap(), config);
    }
}
