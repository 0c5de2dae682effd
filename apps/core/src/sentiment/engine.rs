//! Sentiment Engine - orchestrates the scoring pipeline.
//!
//! Tokenize -> lexicon score -> optional signals (emoji, punctuation,
//! repetition, structural pairs, closing position) -> irony veto -> cache
//! -> classify.
//!
//! The raw-score cache is a bounded LRU owned by the engine. `analyze`
//! takes `&mut self`, so sharing one engine across threads requires the
//! caller to wrap it in a lock.

use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info, trace};

use super::classifier::{classify, SentimentResult};
use super::lexicon::LexiconScorer;
use super::tokenizer::tokenize;
use super::{emoji, irony, punctuation, repetition, structural};
use crate::config::EngineConfig;
use crate::error::{Result, SentimentError};
use crate::resources::Resources;

/// Every contribution to one raw score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalBreakdown {
    pub text: String,
    pub tokens: Vec<String>,
    /// Lexicon score, rounded to 3 decimals
    pub base: f64,
    pub emoji: f64,
    pub punctuation: f64,
    pub repetition: f64,
    /// Adjacent sentiment-bearing pairs
    pub structural: f64,
    /// Closing sentiment word emphasis
    pub positional: f64,
    /// 0 when an irony indicator vetoed the score, else 1
    pub irony_multiplier: f64,
    /// Combined score after the veto; this is what gets cached
    pub raw: f64,
    pub result: SentimentResult,
}

/// Lexicon sentiment engine with a per-instance score cache.
pub struct SentimentEngine {
    config: EngineConfig,
    resources: Arc<Resources>,
    cache: Option<LruCache<String, f64>>,
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::build(
            EngineConfig::default(),
            Arc::new(Resources::bundled()),
            Self::DEFAULT_CAPACITY,
        )
    }
}

impl SentimentEngine {
    // NOTE: NonZeroUsize::new(1000) is always Some since 1000 > 0.
    const DEFAULT_CAPACITY: NonZeroUsize =
        match NonZeroUsize::new(crate::config::DEFAULT_CACHE_CAPACITY) {
            Some(size) => size,
            None => panic!("Cache size must be non-zero"),
        };

    /// Create an engine from a config and shared resources.
    ///
    /// Fails only if the config does not validate (zero cache capacity).
    pub fn new(config: EngineConfig, resources: Arc<Resources>) -> Result<Self> {
        validator::Validate::validate(&config)?;
        let capacity = NonZeroUsize::new(config.cache_capacity).ok_or_else(|| {
            SentimentError::Config("cache capacity must be at least 1".to_string())
        })?;
        Ok(Self::build(config, resources, capacity))
    }

    /// Engine over the bundled resources.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::new(config, Arc::new(Resources::bundled()))
    }

    fn build(config: EngineConfig, resources: Arc<Resources>, capacity: NonZeroUsize) -> Self {
        info!(
            "Sentiment engine ready ({} lexicon entries, cache: {})",
            resources.lexicon_len(),
            if config.cache {
                capacity.to_string()
            } else {
                "off".to_string()
            }
        );

        let cache = config.cache.then(|| LruCache::new(capacity));
        Self {
            config,
            resources,
            cache,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a text. Never fails; empty text is neutral with zero intensity.
    pub fn analyze(&mut self, text: &str) -> SentimentResult {
        if text.is_empty() {
            return SentimentResult::NEUTRAL;
        }

        if let Some(raw) = self.cache.as_mut().and_then(|cache| cache.get(text).copied()) {
            trace!("Sentiment cache hit ({} chars)", text.len());
            return classify(raw);
        }

        let breakdown = self.compute(text);
        debug!(
            "Scored text: base={:.3} raw={:.3} -> {}",
            breakdown.base, breakdown.raw, breakdown.result.sentiment
        );

        if let Some(cache) = self.cache.as_mut() {
            cache.put(text.to_string(), breakdown.raw);
        }

        breakdown.result
    }

    /// Analyze text that may be absent.
    pub fn analyze_opt(&mut self, text: Option<&str>) -> SentimentResult {
        match text {
            Some(text) => self.analyze(text),
            None => SentimentResult::NEUTRAL,
        }
    }

    /// Score a text without touching the cache and report every signal.
    pub fn explain(&self, text: &str) -> SignalBreakdown {
        if text.is_empty() {
            return SignalBreakdown {
                text: String::new(),
                tokens: Vec::new(),
                base: 0.0,
                emoji: 0.0,
                punctuation: 0.0,
                repetition: 0.0,
                structural: 0.0,
                positional: 0.0,
                irony_multiplier: 1.0,
                raw: 0.0,
                result: SentimentResult::NEUTRAL,
            };
        }
        self.compute(text)
    }

    /// Drop every memoized raw score.
    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        debug!("Sentiment cache cleared");
    }

    /// Number of raw scores currently memoized.
    pub fn cached_entries(&self) -> usize {
        self.cache.as_ref().map_or(0, LruCache::len)
    }

    fn compute(&self, text: &str) -> SignalBreakdown {
        let resources = self.resources.as_ref();
        let config = &self.config;

        let tokens = tokenize(text);
        let lexicon = LexiconScorer::new(resources, config.connectors).score(&tokens);

        let emoji = if config.emoji {
            emoji::score(text, resources)
        } else {
            0.0
        };
        let repetition = if config.repetition {
            repetition::score(text)
        } else {
            0.0
        };
        let structural = if config.context {
            structural::pair_score(&tokens, resources)
        } else {
            0.0
        };
        let positional = if config.position_weighting {
            structural::closing_score(&lexicon, tokens.len())
        } else {
            0.0
        };
        // Punctuation amplifies whatever direction the other signals point
        let direction = lexicon.base + emoji + repetition + structural + positional;
        let punctuation = if config.punctuation {
            punctuation::analyze(text).amplify(direction)
        } else {
            0.0
        };
        let irony_multiplier = if config.irony {
            irony::multiplier(text, resources)
        } else {
            1.0
        };

        let combined = lexicon.base + emoji + punctuation + repetition + structural + positional;
        let raw = combined * irony_multiplier;

        SignalBreakdown {
            text: text.to_string(),
            tokens,
            base: lexicon.base,
            emoji,
            punctuation,
            repetition,
            structural,
            positional,
            irony_multiplier,
            raw,
            result: classify(raw),
        }
    }
}
