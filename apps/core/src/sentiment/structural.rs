//! Positional and structural reinforcement.

use super::lexicon::LexiconScore;
use crate::resources::Resources;

const PAIR_FACTOR: f64 = 0.1;
const CLOSING_FACTOR: f64 = 0.1;

/// Reinforcement from adjacent sentiment-bearing tokens.
///
/// Each neighbouring pair with lexicon weights adds `|wA + wB| * 0.1`,
/// whatever the signs, so clusters of loaded vocabulary push the magnitude up.
pub fn pair_score(tokens: &[String], resources: &Resources) -> f64 {
    tokens
        .windows(2)
        .filter_map(|pair| {
            let a = resources.weight(&pair[0])?;
            let b = resources.weight(&pair[1])?;
            Some((a + b).abs() * PAIR_FACTOR)
        })
        .sum()
}

/// Extra weight for the sentiment word a post closes on.
///
/// Applies when the last lexicon hit lies in the second half of the tokens;
/// scales that hit's signed contribution.
pub fn closing_score(lexicon: &LexiconScore, token_count: usize) -> f64 {
    match lexicon.last_hit() {
        Some(hit) if hit.index * 2 >= token_count => hit.contribution * CLOSING_FACTOR,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::lexicon::LexiconScorer;
    use crate::sentiment::tokenizer::tokenize;

    fn resources() -> Resources {
        Resources::from_json(
            r#"{"lexicon": {"bom": 0.5, "lindo": 0.3, "ruim": -0.4}, "modifiers": {"nao": -1}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_adjacent_pairs() {
        let resources = resources();
        let score = pair_score(&tokenize("bom lindo"), &resources);
        assert!((score - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_pairs_ignore_sign() {
        let resources = resources();
        let score = pair_score(&tokenize("ruim ruim"), &resources);
        assert!((score - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_chain_counts_each_pair() {
        let resources = resources();
        let score = pair_score(&tokenize("bom lindo ruim"), &resources);
        assert!((score - (0.08 + 0.01)).abs() < 1e-12);
    }

    #[test]
    fn test_separated_words_do_not_pair() {
        let resources = resources();
        assert_eq!(pair_score(&tokenize("bom produto lindo"), &resources), 0.0);
        assert_eq!(pair_score(&tokenize("bom"), &resources), 0.0);
    }

    #[test]
    fn test_closing_word_in_second_half() {
        let resources = resources();
        let tokens = tokenize("produto muito nao bom");
        let lexicon = LexiconScorer::new(&resources, true).score(&tokens);
        assert!((closing_score(&lexicon, tokens.len()) + 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_closing_word_in_first_half() {
        let resources = resources();
        let tokens = tokenize("bom produto da loja");
        let lexicon = LexiconScorer::new(&resources, true).score(&tokens);
        assert_eq!(closing_score(&lexicon, tokens.len()), 0.0);
    }

    #[test]
    fn test_no_hits() {
        assert_eq!(closing_score(&LexiconScore::default(), 3), 0.0);
    }
}
