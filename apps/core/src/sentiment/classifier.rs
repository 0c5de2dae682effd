//! Raw score classification and intensity normalization.
//!
//! The label is decided on the unbounded raw score; the intensity is an
//! independent saturating transform of the same score, bounded to ±0.9.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::round3;

/// Raw scores strictly beyond this magnitude carry a polarity.
pub const LABEL_THRESHOLD: f64 = 0.05;

/// Discrete sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Sentiment {
    /// Returns the lowercase label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Label for a raw combined score.
    pub fn from_raw(score: f64) -> Self {
        if score > LABEL_THRESHOLD {
            Sentiment::Positive
        } else if score < -LABEL_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Result of analyzing one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Bounded intensity in [-0.9, 0.9]
    pub intensity: f64,
    pub sentiment: Sentiment,
}

impl SentimentResult {
    /// The result for absent or empty text.
    pub const NEUTRAL: Self = Self {
        intensity: 0.0,
        sentiment: Sentiment::Neutral,
    };
}

/// Map a raw score onto the bounded intensity scale, rounded to 3 decimals.
///
/// Any non-negative score, zero included, lands at 0.4 or above.
pub fn intensity(score: f64) -> f64 {
    let value = if score.abs() <= 1.0 {
        if score >= 0.0 {
            (0.4 + score * 0.5).clamp(0.1, 0.9)
        } else {
            (-0.4 + score * 0.5).clamp(-0.9, -0.1)
        }
    } else if score > 0.0 {
        (1.0 - 1.0 / (1.0 + score)).clamp(0.1, 0.9)
    } else {
        (-1.0 / (1.0 + score.abs())).clamp(-0.9, -0.1)
    };

    round3(value)
}

/// Classify a raw combined score.
pub fn classify(score: f64) -> SentimentResult {
    SentimentResult {
        intensity: intensity(score),
        sentiment: Sentiment::from_raw(score),
    }
}
