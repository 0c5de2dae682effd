//! Character repetition signal ("bommmm", "pessimooo", "!!!").
//!
//! Every run of three or more identical characters is scored against the
//! whole text: if an elongation-tolerant negative stem appears anywhere the
//! run is a penalty, otherwise if a positive stem appears it is a bonus.

use regex::Regex;
use std::sync::LazyLock;

use super::tokenizer::fold;

const MIN_RUN: usize = 3;
const NEGATIVE_STEP: f64 = 0.15;
const NEGATIVE_CAP: f64 = 0.4;
const POSITIVE_STEP: f64 = 0.12;
const POSITIVE_CAP: f64 = 0.5;

/// Accent-folded stems whose elongated forms signal negativity
const NEGATIVE_STEMS: &[&str] = &[
    "terrible", "awful", "bad", "worst", "ruim", "pessimo", "horrivel", "terrivel", "odiei",
    "lixo", "nojo",
];

/// Accent-folded stems whose elongated forms signal positivity
const POSITIVE_STEMS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "fantastic",
    "incredible",
    "bom",
    "otimo",
    "excelente",
    "fantastico",
    "incrivel",
    "maravilhoso",
    "perfeito",
    "lindo",
    "amei",
    "adorei",
];

// NOTE: the stems are compile-time constants, so a failed build here is a bug
static NEGATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&family_pattern(NEGATIVE_STEMS)).expect("Invalid regex: negative elongation stems")
});

static POSITIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&family_pattern(POSITIVE_STEMS)).expect("Invalid regex: positive elongation stems")
});

/// Turn a stem into a pattern that tolerates repeated letters: `good` -> `g+o{2,}d+`.
fn elongation_pattern(stem: &str) -> String {
    let mut pattern = String::new();
    let mut chars = stem.chars().peekable();

    while let Some(c) = chars.next() {
        let mut count = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            count += 1;
        }

        pattern.push_str(&regex::escape(&c.to_string()));
        if count == 1 {
            pattern.push('+');
        } else {
            pattern.push_str(&format!("{{{},}}", count));
        }
    }

    pattern
}

fn family_pattern(stems: &[&str]) -> String {
    let alternatives: Vec<String> = stems.iter().map(|s| elongation_pattern(s)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

/// Lengths of every run of at least three identical characters.
fn runs(text: &str) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut length = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            length += 1;
        }
        if length >= MIN_RUN {
            runs.push(length);
        }
    }

    runs
}

/// Which stem family the text belongs to, negative first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Negative,
    Positive,
    Unmatched,
}

fn polarity(text: &str) -> Polarity {
    let folded = fold(text);
    if NEGATIVE_PATTERN.is_match(&folded) {
        Polarity::Negative
    } else if POSITIVE_PATTERN.is_match(&folded) {
        Polarity::Positive
    } else {
        Polarity::Unmatched
    }
}

/// Signed repetition contribution for the whole text.
pub fn score(text: &str) -> f64 {
    let runs = runs(text);
    if runs.is_empty() {
        return 0.0;
    }

    let polarity = polarity(text);
    runs.iter()
        .map(|&length| {
            let extra = (length - 2) as f64;
            match polarity {
                Polarity::Negative => -(extra * NEGATIVE_STEP).min(NEGATIVE_CAP),
                Polarity::Positive => (extra * POSITIVE_STEP).min(POSITIVE_CAP),
                Polarity::Unmatched => 0.0,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elongation_pattern() {
        assert_eq!(elongation_pattern("bom"), "b+o+m+");
        assert_eq!(elongation_pattern("good"), "g+o{2,}d+");
    }

    #[test]
    fn test_runs() {
        assert_eq!(runs("bommmmmm"), vec![6]);
        assert_eq!(runs("aa bb"), Vec::<usize>::new());
        assert_eq!(runs("sooo goood!!!"), vec![3, 3, 3]);
    }

    #[test]
    fn test_positive_elongation() {
        // run of six: extra 4 -> 0.48
        assert!((score("produto bommmmmm") - 0.48).abs() < 1e-12);
        assert!((score("goooood") - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_positive_cap() {
        assert_eq!(score("bommmmmmmmmmmmm"), 0.5);
    }

    #[test]
    fn test_negative_elongation_with_accents() {
        // "péssimooo": run of three -> extra 1
        assert!((score("Péssimooo") + 0.15).abs() < 1e-12);
        assert_eq!(score("ruiiiiiiiiiim"), -0.4);
    }

    #[test]
    fn test_negative_takes_precedence() {
        assert!(score("bom mas ruimmm") < 0.0);
    }

    #[test]
    fn test_runs_accumulate_on_whole_text() {
        // stem match anywhere qualifies every run, including punctuation runs
        let expected = 2.0 * 0.12;
        assert!((score("bom!!! sim!!!") - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unmatched_runs_contribute_nothing() {
        assert_eq!(score("zzzzz"), 0.0);
        assert_eq!(score("bom demais"), 0.0);
    }

    #[test]
    fn test_stem_needs_word_boundary() {
        assert_eq!(score("bombom!!!"), 0.0);
    }
}
