//! Emoji signal: table weight times literal occurrence count.

use crate::resources::Resources;

/// Sum `weight * occurrences` over the emoji table. Unknown glyphs add nothing.
pub fn score(text: &str, resources: &Resources) -> f64 {
    resources
        .emoji()
        .map(|(glyph, weight)| weight * text.matches(glyph).count() as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> Resources {
        Resources::from_json(r#"{"emoji": {"😍": 0.4, "😡": -0.5}}"#).unwrap()
    }

    #[test]
    fn test_occurrences_scale_linearly() {
        let resources = resources();
        assert_eq!(score("amei 😍", &resources), 0.4);
        assert_eq!(score("😍😍 amei 😍", &resources), 0.4 * 3.0);
    }

    #[test]
    fn test_mixed_glyphs() {
        let resources = resources();
        assert_eq!(score("😍 😡", &resources), 0.4 - 0.5);
    }

    #[test]
    fn test_unknown_emoji_ignored() {
        let resources = resources();
        assert_eq!(score("🚀🚀 :)", &resources), 0.0);
        assert_eq!(score("", &resources), 0.0);
    }
}
