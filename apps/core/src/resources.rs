//! Immutable lexical resources consumed by the sentiment engine.
//!
//! Tables are loaded once (from JSON or from the bundled defaults),
//! validated, keyed by normalized tokens and then shared read-only between
//! engines through an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::info;
use validator::{Validate, ValidationError};

use crate::error::{Result, SentimentError};
use crate::sentiment::tokenizer::normalize_word;

/// Bundled sentiment lexicon (Portuguese first, common English below)
const LEXICON: &[(&str, f64)] = &[
    ("bom", 0.2),
    ("boa", 0.2),
    ("ótimo", 0.3),
    ("ótima", 0.3),
    ("excelente", 0.25),
    ("maravilhoso", 0.3),
    ("maravilhosa", 0.3),
    ("incrível", 0.3),
    ("perfeito", 0.3),
    ("perfeita", 0.3),
    ("fantástico", 0.3),
    ("adorei", 0.3),
    ("amei", 0.3),
    ("gostei", 0.2),
    ("feliz", 0.2),
    ("lindo", 0.2),
    ("linda", 0.2),
    ("legal", 0.15),
    ("recomendo", 0.2),
    ("rápido", 0.1),
    ("barato", 0.1),
    ("ruim", -0.2),
    ("péssimo", -0.3),
    ("péssima", -0.3),
    ("horrível", -0.3),
    ("terrível", -0.3),
    ("odiei", -0.3),
    ("detestei", -0.3),
    ("triste", -0.2),
    ("decepcionante", -0.25),
    ("decepção", -0.25),
    ("lixo", -0.3),
    ("problema", -0.15),
    ("defeito", -0.2),
    ("quebrado", -0.2),
    ("caro", -0.1),
    ("lento", -0.15),
    ("atraso", -0.15),
    ("good", 0.2),
    ("great", 0.25),
    ("excellent", 0.25),
    ("love", 0.3),
    ("bad", -0.2),
    ("terrible", -0.3),
    ("awful", -0.3),
    ("worst", -0.3),
    ("hate", -0.3),
];

/// Negation words (negative) and intensifiers/diminishers (positive)
const MODIFIERS: &[(&str, f64)] = &[
    ("não", -1.0),
    ("nem", -1.0),
    ("nunca", -1.0),
    ("jamais", -1.0),
    ("nenhum", -1.0),
    ("nada", -1.0),
    ("not", -1.0),
    ("never", -1.0),
    ("dont", -1.0),
    ("muito", 1.5),
    ("muita", 1.5),
    ("super", 1.6),
    ("mega", 1.5),
    ("demais", 1.4),
    ("bastante", 1.3),
    ("extremamente", 1.8),
    ("totalmente", 1.4),
    ("pouco", 0.5),
    ("very", 1.5),
    ("really", 1.3),
];

/// Connectors: (word, multiplier, adversative)
const CONNECTORS: &[(&str, f64, bool)] = &[
    ("mas", 1.3, true),
    ("porém", 1.3, true),
    ("contudo", 1.3, true),
    ("entretanto", 1.3, true),
    ("todavia", 1.3, true),
    ("but", 1.3, true),
    ("however", 1.3, true),
    ("também", 1.1, false),
    ("ainda", 1.1, false),
    ("inclusive", 1.1, false),
    ("also", 1.1, false),
];

const EMOJI: &[(&str, f64)] = &[
    ("😀", 0.3),
    ("😃", 0.3),
    ("😄", 0.3),
    ("😊", 0.3),
    ("😍", 0.4),
    ("🥰", 0.4),
    ("❤", 0.35),
    ("👍", 0.25),
    ("👏", 0.25),
    ("🎉", 0.3),
    ("😢", -0.3),
    ("😭", -0.35),
    ("😡", -0.4),
    ("😠", -0.35),
    ("👎", -0.3),
    ("💔", -0.35),
    ("🤮", -0.4),
];

/// Irony markers: laughter, winks and explicit irony words
const IRONY: &[&str] = &[
    "rs",
    "kkk",
    "haha",
    "hehe",
    "sqn",
    "só que não",
    "ironia",
    "irônico",
    "lol",
    ":p",
    ";)",
    "😏",
    "🙃",
];

/// Multiplier attached to a connector word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Factor applied to (or replacing) the running context modifier.
    pub multiplier: f64,
    /// Adversative connectors reset the context instead of compounding it.
    #[serde(default)]
    pub adversative: bool,
}

/// Raw resource tables as supplied by the caller or read from JSON.
///
/// Ordered maps keep normalization (and therefore collisions such as
/// `não`/`nao`) deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ResourceTables {
    #[validate(custom(function = "validate_weights"))]
    pub lexicon: BTreeMap<String, f64>,
    #[validate(custom(function = "validate_modifiers"))]
    pub modifiers: BTreeMap<String, f64>,
    #[validate(custom(function = "validate_connectors"))]
    pub connectors: BTreeMap<String, Connector>,
    #[validate(custom(function = "validate_emoji"))]
    pub emoji: BTreeMap<String, f64>,
    #[validate(custom(function = "validate_indicators"))]
    pub irony: Vec<String>,
}

fn validate_weights(table: &BTreeMap<String, f64>) -> std::result::Result<(), ValidationError> {
    if table.values().all(|w| w.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_weight"))
    }
}

fn validate_emoji(table: &BTreeMap<String, f64>) -> std::result::Result<(), ValidationError> {
    if table.keys().any(|glyph| glyph.trim().is_empty()) {
        return Err(ValidationError::new("empty_emoji_glyph"));
    }
    validate_weights(table)
}

fn validate_modifiers(table: &BTreeMap<String, f64>) -> std::result::Result<(), ValidationError> {
    if table.values().all(|m| m.is_finite() && *m != 0.0) {
        Ok(())
    } else {
        Err(ValidationError::new("modifier_must_be_non_zero"))
    }
}

fn validate_connectors(
    table: &BTreeMap<String, Connector>,
) -> std::result::Result<(), ValidationError> {
    if table
        .values()
        .all(|c| c.multiplier.is_finite() && c.multiplier > 0.0)
    {
        Ok(())
    } else {
        Err(ValidationError::new("connector_multiplier_must_be_positive"))
    }
}

fn validate_indicators(indicators: &[String]) -> std::result::Result<(), ValidationError> {
    if indicators.iter().all(|i| !i.trim().is_empty()) {
        Ok(())
    } else {
        Err(ValidationError::new("empty_irony_indicator"))
    }
}

impl ResourceTables {
    /// The tables shipped with the crate.
    pub fn bundled() -> Self {
        Self {
            lexicon: LEXICON.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            modifiers: MODIFIERS.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            connectors: CONNECTORS
                .iter()
                .map(|(w, multiplier, adversative)| {
                    (
                        w.to_string(),
                        Connector {
                            multiplier: *multiplier,
                            adversative: *adversative,
                        },
                    )
                })
                .collect(),
            emoji: EMOJI.iter().map(|(g, v)| (g.to_string(), *v)).collect(),
            irony: IRONY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Validated, normalized resources ready for scoring.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    lexicon: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    connectors: HashMap<String, Connector>,
    emoji: BTreeMap<String, f64>,
    irony: Vec<String>,
}

impl Resources {
    /// Validate and normalize caller-supplied tables.
    ///
    /// Fails if any value is out of range or any word key does not
    /// normalize to exactly one token.
    pub fn from_tables(tables: ResourceTables) -> Result<Self> {
        tables.validate()?;

        let (resources, rejected) = Self::assemble(tables);
        if !rejected.is_empty() {
            return Err(SentimentError::Resource(format!(
                "keys do not normalize to a single token: {}",
                rejected.join(", ")
            )));
        }

        info!(
            "Loaded sentiment resources: {} lexicon, {} modifiers, {} connectors, {} emoji, {} irony indicators",
            resources.lexicon.len(),
            resources.modifiers.len(),
            resources.connectors.len(),
            resources.emoji.len(),
            resources.irony.len()
        );
        Ok(resources)
    }

    /// Parse tables from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: ResourceTables = serde_json::from_str(json)?;
        Self::from_tables(tables)
    }

    /// Read a JSON resource file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading sentiment resources from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The bundled Portuguese/English resources.
    pub fn bundled() -> Self {
        Self::assemble(ResourceTables::bundled()).0
    }

    /// Normalize every word key; returns the keys that could not be used.
    fn assemble(tables: ResourceTables) -> (Self, Vec<String>) {
        let mut rejected = Vec::new();

        let mut normalize_keys = |table: BTreeMap<String, f64>| -> HashMap<String, f64> {
            table
                .into_iter()
                .filter_map(|(word, value)| match normalize_word(&word) {
                    Some(key) => Some((key, value)),
                    None => {
                        rejected.push(word);
                        None
                    }
                })
                .collect()
        };

        let lexicon = normalize_keys(tables.lexicon);
        let modifiers = normalize_keys(tables.modifiers);

        let connectors = tables
            .connectors
            .into_iter()
            .filter_map(|(word, connector)| match normalize_word(&word) {
                Some(key) => Some((key, connector)),
                None => {
                    rejected.push(word);
                    None
                }
            })
            .collect();

        let irony = tables.irony.iter().map(|i| i.to_lowercase()).collect();

        let resources = Self {
            lexicon,
            modifiers,
            connectors,
            emoji: tables.emoji,
            irony,
        };
        (resources, rejected)
    }

    /// Sentiment weight of a normalized token.
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.lexicon.get(token).copied()
    }

    /// Negation (negative) or intensifier (positive) value of a normalized token.
    pub fn modifier(&self, token: &str) -> Option<f64> {
        self.modifiers.get(token).copied()
    }

    /// Connector multiplier of a normalized token.
    pub fn connector(&self, token: &str) -> Option<Connector> {
        self.connectors.get(token).copied()
    }

    /// Emoji glyphs and weights, in a stable order.
    pub fn emoji(&self) -> impl Iterator<Item = (&str, f64)> {
        self.emoji.iter().map(|(glyph, weight)| (glyph.as_str(), *weight))
    }

    /// Lowercased irony indicator substrings.
    pub fn irony_indicators(&self) -> &[String] {
        &self.irony
    }

    /// Number of lexicon entries after normalization.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }
}
