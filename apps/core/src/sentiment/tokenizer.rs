//! Text normalization and tokenization.
//!
//! Lowercases, folds accents through a fixed substitution table (not
//! locale-aware), replaces punctuation and symbols with whitespace and
//! splits into word tokens. Emoji never reach the token stream.

/// Map an accented lowercase letter to its unaccented base letter.
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Lowercase and accent-fold `text`, keeping every other character as is.
///
/// Used both for tokenization and for whole-text pattern matching.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

/// Split text into normalized word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Normalize a single resource-table key.
///
/// Returns `None` unless the key is exactly one token after normalization,
/// since multi-word keys could never match a token.
pub fn normalize_word(word: &str) -> Option<String> {
    let mut tokens = tokenize(word);
    if tokens.len() == 1 {
        tokens.pop()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_accents_and_case() {
        assert_eq!(fold("NÃO É Ótimo"), "nao e otimo");
        assert_eq!(fold("Ação!"), "acao!");
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("Não é bom, produto!!!"), vec!["nao", "e", "bom", "produto"]);
        assert_eq!(tokenize("bom,ruim"), vec!["bom", "ruim"]);
    }

    #[test]
    fn test_tokenize_drops_emoji() {
        assert_eq!(tokenize("amei 😍😍 demais"), vec!["amei", "demais"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ?! ...").is_empty());
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Péssimo"), Some("pessimo".to_string()));
        assert_eq!(normalize_word("muito bom"), None);
        assert_eq!(normalize_word("!!"), None);
    }
}
