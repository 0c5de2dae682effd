//! # Sentiment Module
//!
//! Heuristic, lexicon-driven sentiment scoring for short informal text.
//! No trained model: every signal is a hand-tuned rule over the raw text or
//! its tokens.
//!
//! ## Components
//! - `tokenizer`: accent folding, lowercasing and word splitting
//! - `lexicon`: base score with negation / intensifier / connector state
//! - `emoji`, `punctuation`, `repetition`: raw-text signal analyzers
//! - `structural`: adjacent-pair and closing-word reinforcement
//! - `irony`: binary veto
//! - `classifier`: label thresholds and intensity normalization
//! - `engine`: main orchestrator with the raw-score cache

pub mod classifier;
pub mod emoji;
pub mod engine;
pub mod irony;
pub mod lexicon;
pub mod punctuation;
pub mod repetition;
pub mod structural;
pub mod tokenizer;

pub use classifier::{Sentiment, SentimentResult};
pub use engine::{SentimentEngine, SignalBreakdown};
pub use lexicon::{LexiconHit, LexiconScore, LexiconScorer};
pub use punctuation::PunctuationSignals;
