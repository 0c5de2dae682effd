//! Punctuation signal.
//!
//! Exclamation marks, question marks and shouting (mostly uppercase text)
//! are unsigned amplifiers: their sum takes the direction of the score
//! they are added to, so shouting makes negative text more negative.

use serde::Serialize;

const EXCLAMATION_STEP: f64 = 0.12;
const EXCLAMATION_CAP: f64 = 0.5;
const QUESTION_STEP: f64 = 0.026;
const QUESTION_CAP: f64 = 0.15;
/// Uppercase share of alphabetic characters above which text counts as shouting
const CAPS_RATIO_THRESHOLD: f64 = 0.3;
const CAPS_BONUS: f64 = 0.21;

/// Individual punctuation contributions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PunctuationSignals {
    pub exclamation: f64,
    pub question: f64,
    pub caps: f64,
}

impl PunctuationSignals {
    pub fn total(&self) -> f64 {
        self.exclamation + self.question + self.caps
    }

    /// Signed contribution that amplifies `score`. A zero score counts as positive.
    pub fn amplify(&self, score: f64) -> f64 {
        if score < 0.0 {
            -self.total()
        } else {
            self.total()
        }
    }
}

/// Fraction of alphabetic characters that are uppercase (0 when there are none).
fn caps_ratio(text: &str) -> f64 {
    let (letters, upper) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(letters, upper), c| {
            (letters + 1, upper + usize::from(c.is_uppercase()))
        });

    if letters == 0 {
        0.0
    } else {
        upper as f64 / letters as f64
    }
}

pub fn analyze(text: &str) -> PunctuationSignals {
    let exclamations = text.chars().filter(|c| *c == '!').count() as f64;
    let questions = text.chars().filter(|c| *c == '?').count() as f64;

    PunctuationSignals {
        exclamation: (exclamations * EXCLAMATION_STEP).min(EXCLAMATION_CAP),
        question: (questions * QUESTION_STEP).min(QUESTION_CAP),
        caps: if caps_ratio(text) > CAPS_RATIO_THRESHOLD {
            CAPS_BONUS
        } else {
            0.0
        },
    }
}
