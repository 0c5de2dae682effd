//! Configuration Tests
//!
//! `EngineConfig::from_env` against real process environment variables.

use crate::config::{EngineConfig, DEFAULT_CACHE_CAPACITY};
use crate::sentiment::{Sentiment, SentimentEngine};

const ALL_KEYS: &[&str] = &[
    "SENTIMENT_CACHE",
    "SENTIMENT_EMOJI",
    "SENTIMENT_PUNCTUATION",
    "SENTIMENT_REPETITION",
    "SENTIMENT_CONTEXT",
    "SENTIMENT_IRONY",
    "SENTIMENT_CONNECTORS",
    "SENTIMENT_POSITION_WEIGHTING",
    "SENTIMENT_CACHE_CAPACITY",
];

/// Every known key unset, then the given overrides.
fn env(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
    ALL_KEYS
        .iter()
        .map(|key| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| *v);
            (*key, value)
        })
        .collect()
}

#[test]
fn test_from_env_defaults() {
    let config = temp_env::with_vars(env(&[]), EngineConfig::from_env).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_from_env_overrides() {
    let config = temp_env::with_vars(
        env(&[
            ("SENTIMENT_CACHE", "off"),
            ("SENTIMENT_IRONY", "false"),
            ("SENTIMENT_CACHE_CAPACITY", "64"),
        ]),
        EngineConfig::from_env,
    )
    .unwrap();

    assert!(!config.cache);
    assert!(!config.irony);
    assert!(config.emoji);
    assert_eq!(config.cache_capacity, 64);
}

#[test]
fn test_from_env_bad_values_fall_back() {
    let config = temp_env::with_vars(
        env(&[("SENTIMENT_EMOJI", "sometimes"), ("SENTIMENT_CACHE_CAPACITY", "-3")]),
        EngineConfig::from_env,
    )
    .unwrap();

    assert!(config.emoji);
    assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
}

#[test]
fn test_from_env_zero_capacity_is_error() {
    let result = temp_env::with_vars(
        env(&[("SENTIMENT_CACHE_CAPACITY", "0")]),
        EngineConfig::from_env,
    );
    assert!(result.is_err());
}

#[test]
fn test_env_config_drives_engine() {
    let config = temp_env::with_vars(env(&[("SENTIMENT_IRONY", "0")]), EngineConfig::from_env)
        .unwrap();
    let mut engine = SentimentEngine::with_config(config).unwrap();

    // irony off: the laughter marker no longer vetoes
    assert_eq!(
        engine.analyze("produto excelente rs").sentiment,
        Sentiment::Positive
    );
}
