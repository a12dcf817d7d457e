//! Retrieval configuration.
//!
//! Compile-time defaults live here as constants; [`RetrievalConfig`] is the
//! runtime value, optionally overridden from environment variables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of top documents whose sentences are considered for the answer.
pub const DEFAULT_FILE_MATCHES: usize = 1;

/// Number of sentences returned as the answer.
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;

/// Environment variable overriding [`RetrievalConfig::file_matches`].
pub const ENV_FILE_MATCHES: &str = "PASSAGE_FILE_MATCHES";

/// Environment variable overriding [`RetrievalConfig::sentence_matches`].
pub const ENV_SENTENCE_MATCHES: &str = "PASSAGE_SENTENCE_MATCHES";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("{0} must be at least 1")]
    ZeroMatches(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    pub file_matches: usize,
    pub sentence_matches: usize,
}

impl RetrievalConfig {
    pub fn v0() -> Self {
        Self {
            file_matches: DEFAULT_FILE_MATCHES,
            sentence_matches: DEFAULT_SENTENCE_MATCHES,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::v0();

        if let Some(value) = lookup(ENV_FILE_MATCHES) {
            config.file_matches = parse_count(ENV_FILE_MATCHES, &value)?;
        }
        if let Some(value) = lookup(ENV_SENTENCE_MATCHES) {
            config.sentence_matches = parse_count(ENV_SENTENCE_MATCHES, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_matches == 0 {
            return Err(ConfigError::ZeroMatches("file_matches"));
        }
        if self.sentence_matches == 0 {
            return Err(ConfigError::ZeroMatches("sentence_matches"));
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self::v0()
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}
