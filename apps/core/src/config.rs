//! Engine configuration.
//!
//! One toggle per optional signal, all enabled by default, plus the bound
//! of the raw-score cache. Can be built in code, deserialized, or read from
//! `SENTIMENT_*` environment variables (a `.env` file is honoured).

use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

use crate::error::Result;

/// Default number of raw scores kept in the per-engine LRU cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Prefix shared by every configuration environment variable.
const ENV_PREFIX: &str = "SENTIMENT_";

/// Flag set controlling which signals contribute to the raw score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EngineConfig {
    /// Memoize raw scores per exact input text.
    pub cache: bool,
    /// Add emoji table weights.
    pub emoji: bool,
    /// Add exclamation, question mark and all-caps amplification.
    pub punctuation: bool,
    /// Add elongated-word (character run) bonuses and penalties.
    pub repetition: bool,
    /// Add structural reinforcement from adjacent sentiment-bearing tokens.
    pub context: bool,
    /// Apply the irony veto.
    pub irony: bool,
    /// Let connector words modify the next sentiment-bearing token.
    pub connectors: bool,
    /// Emphasize the closing sentiment-bearing token.
    pub position_weighting: bool,
    /// Maximum number of cached raw scores.
    #[validate(range(min = 1))]
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache: true,
            emoji: true,
            punctuation: true,
            repetition: true,
            context: true,
            irony: true,
            connectors: true,
            position_weighting: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Build a config from the process environment.
    ///
    /// Loads `.env` first if one exists. Variables that are absent keep their
    /// default; variables that cannot be parsed are logged and ignored.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (keys carry the `SENTIMENT_` prefix).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let toggles: [(&str, &mut bool); 8] = [
            ("CACHE", &mut config.cache),
            ("EMOJI", &mut config.emoji),
            ("PUNCTUATION", &mut config.punctuation),
            ("REPETITION", &mut config.repetition),
            ("CONTEXT", &mut config.context),
            ("IRONY", &mut config.irony),
            ("CONNECTORS", &mut config.connectors),
            ("POSITION_WEIGHTING", &mut config.position_weighting),
        ];

        for (name, slot) in toggles {
            let key = format!("{}{}", ENV_PREFIX, name);
            if let Some(raw) = lookup(&key) {
                match parse_flag(&raw) {
                    Some(value) => *slot = value,
                    None => warn!("Ignoring {}={:?}: expected a boolean", key, raw),
                }
            }
        }

        let capacity_key = format!("{}CACHE_CAPACITY", ENV_PREFIX);
        if let Some(raw) = lookup(&capacity_key) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config.cache_capacity = capacity,
                Err(e) => warn!("Ignoring {}={:?}: {}", capacity_key, raw, e),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Config with every optional signal switched off (lexicon score only).
    pub fn lexicon_only() -> Self {
        Self {
            cache: false,
            emoji: false,
            punctuation: false,
            repetition: false,
            context: false,
            irony: false,
            connectors: false,
            position_weighting: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Parse the usual spellings of a boolean flag.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
