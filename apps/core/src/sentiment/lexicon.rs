//! Lexicon-weighted base score.
//!
//! Walks the token sequence once, carrying negation parity, an intensity
//! multiplier and a context modifier. Modifiers only ever affect the next
//! lexicon-bearing token: the state returns to neutral right after it.

use serde::Serialize;

use crate::resources::Resources;

/// A lexicon-bearing token and what it added to the base score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LexiconHit {
    /// Position in the token sequence
    pub index: usize,
    /// Raw lexicon weight
    pub weight: f64,
    /// Signed contribution after negation, intensity and context
    pub contribution: f64,
}

/// Output of the lexicon pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LexiconScore {
    /// Sum of contributions, rounded to 3 decimals
    pub base: f64,
    pub hits: Vec<LexiconHit>,
}

impl LexiconScore {
    /// The closing sentiment-bearing token, if any.
    pub fn last_hit(&self) -> Option<&LexiconHit> {
        self.hits.last()
    }
}

/// How a single token participates in scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TokenRole {
    Negation,
    Intensifier(f64),
    Connector { multiplier: f64, adversative: bool },
    Sentiment(f64),
    Unknown,
}

/// Running modifier state, folded over the tokens.
#[derive(Debug, Clone, Copy)]
struct ScoringState {
    intensity: f64,
    negations: u32,
    context: f64,
    total: f64,
}

impl ScoringState {
    const NEUTRAL: Self = Self {
        intensity: 1.0,
        negations: 0,
        context: 1.0,
        total: 0.0,
    };

    /// Drop pending modifiers, keep the running total.
    fn reset(self) -> Self {
        Self {
            total: self.total,
            ..Self::NEUTRAL
        }
    }
}

/// Scores token sequences against a lexicon.
pub struct LexiconScorer<'a> {
    resources: &'a Resources,
    connectors_enabled: bool,
}

impl<'a> LexiconScorer<'a> {
    pub fn new(resources: &'a Resources, connectors_enabled: bool) -> Self {
        Self {
            resources,
            connectors_enabled,
        }
    }

    /// Negation, then intensifier, then connector, then lexicon weight.
    fn role(&self, token: &str) -> TokenRole {
        if let Some(value) = self.resources.modifier(token) {
            return if value < 0.0 {
                TokenRole::Negation
            } else {
                TokenRole::Intensifier(value)
            };
        }

        if self.connectors_enabled {
            if let Some(connector) = self.resources.connector(token) {
                return TokenRole::Connector {
                    multiplier: connector.multiplier,
                    adversative: connector.adversative,
                };
            }
        }

        match self.resources.weight(token) {
            Some(weight) => TokenRole::Sentiment(weight),
            None => TokenRole::Unknown,
        }
    }

    /// Compute the base score of a token sequence.
    pub fn score(&self, tokens: &[String]) -> LexiconScore {
        let mut hits = Vec::new();

        let state = tokens
            .iter()
            .enumerate()
            .fold(ScoringState::NEUTRAL, |state, (index, token)| {
                match self.role(token) {
                    TokenRole::Negation => ScoringState {
                        negations: state.negations + 1,
                        ..state
                    },
                    TokenRole::Intensifier(factor) => ScoringState {
                        intensity: state.intensity * factor,
                        ..state
                    },
                    TokenRole::Connector {
                        multiplier,
                        adversative,
                    } => ScoringState {
                        context: if adversative {
                            multiplier
                        } else {
                            state.context * multiplier
                        },
                        ..state
                    },
                    TokenRole::Sentiment(weight) => {
                        let mut contribution = weight * state.intensity;
                        if state.negations % 2 == 1 {
                            contribution = -contribution;
                        }
                        contribution *= state.context;

                        hits.push(LexiconHit {
                            index,
                            weight,
                            contribution,
                        });
                        ScoringState {
                            total: state.total + contribution,
                            ..state
                        }
                        .reset()
                    }
                    TokenRole::Unknown => state,
                }
            });

        LexiconScore {
            base: round3(state.total),
            hits,
        }
    }
}

/// Round half away from zero to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Resources;
    use crate::sentiment::tokenizer::tokenize;

    fn resources() -> Resources {
        Resources::from_json(
            r#"{
                "lexicon": {"bom": 0.5, "ruim": -0.4, "produto": 0.0},
                "modifiers": {"nao": -1, "nunca": -1, "muito": 2.0},
                "connectors": {
                    "mas": {"multiplier": 0.5, "adversative": true},
                    "tambem": {"multiplier": 1.5}
                }
            }"#,
        )
        .unwrap()
    }

    fn score(text: &str) -> f64 {
        let resources = resources();
        LexiconScorer::new(&resources, true).score(&tokenize(text)).base
    }

    #[test]
    fn test_plain_weights_sum() {
        assert_eq!(score("bom"), 0.5);
        assert_eq!(score("bom ruim"), 0.1);
        assert_eq!(score("coisa qualquer"), 0.0);
    }

    #[test]
    fn test_negation_parity() {
        assert_eq!(score("nao bom"), -0.5);
        assert_eq!(score("nao nunca bom"), 0.5);
        assert_eq!(score("nao nao nao ruim"), 0.4);
    }

    #[test]
    fn test_modifiers_apply_only_to_next_hit() {
        assert_eq!(score("nao bom bom"), 0.0);
        assert_eq!(score("muito bom bom"), 1.5);
    }

    #[test]
    fn test_intensifiers_compound() {
        assert_eq!(score("muito muito bom"), 2.0);
        assert_eq!(score("nao muito bom"), -1.0);
    }

    #[test]
    fn test_unknown_tokens_keep_state() {
        assert_eq!(score("nao e um bom"), -0.5);
    }

    #[test]
    fn test_adversative_replaces_context() {
        // tambem compounds to 2.25, mas discards it
        assert_eq!(score("tambem tambem mas bom"), 0.25);
        assert_eq!(score("tambem tambem bom"), 1.125);
    }

    #[test]
    fn test_adversative_keeps_intensity_and_negation() {
        assert_eq!(score("nao muito mas bom"), -0.5);
    }

    #[test]
    fn test_connectors_disabled() {
        let resources = resources();
        let result = LexiconScorer::new(&resources, false).score(&tokenize("mas bom"));
        assert_eq!(result.base, 0.5);
    }

    #[test]
    fn test_zero_weight_word_resets_state() {
        assert_eq!(score("nao produto bom"), 0.5);
    }

    #[test]
    fn test_hits_record_positions() {
        let resources = resources();
        let result = LexiconScorer::new(&resources, true).score(&tokenize("bom coisa nao ruim"));
        assert_eq!(result.hits.len(), 2);
        assert_eq!(result.hits[1].index, 3);
        assert_eq!(result.hits[1].weight, -0.4);
        assert_eq!(result.hits[1].contribution, 0.4);
        assert_eq!(result.last_hit().map(|h| h.index), Some(3));
    }

    #[test]
    fn test_base_rounded() {
        let resources = Resources::from_json(r#"{"lexicon": {"x": 0.12345}}"#).unwrap();
        let result = LexiconScorer::new(&resources, true).score(&tokenize("x"));
        assert_eq!(result.base, 0.123);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.2346), 1.235);
        assert_eq!(round3(-2.0004), -2.0);
        assert_eq!(round3(1.23449), 1.234);
    }
}
