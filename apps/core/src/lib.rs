//! Multi-signal lexicon sentiment engine.
//!
//! Classifies short, informal text (posts, comments) as positive, negative
//! or neutral with a bounded intensity, from a hand-built lexicon plus
//! emoji, punctuation, elongation, structural and irony signals.
//!
//! ```rust,ignore
//! use sentiment_core::SentimentEngine;
//!
//! let mut engine = SentimentEngine::default();
//! let result = engine.analyze("produto muito bom!");
//! println!("{} ({})", result.sentiment, result.intensity);
//! ```

pub mod config;
pub mod error;
pub mod resources;
pub mod sentiment;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use error::{Result, SentimentError};
pub use resources::{Connector, ResourceTables, Resources};
pub use sentiment::{Sentiment, SentimentEngine, SentimentResult, SignalBreakdown};
