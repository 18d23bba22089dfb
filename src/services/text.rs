// src/services/text.rs

/// Strips everything except ASCII letters, digits and spaces, then lowercases.
///
/// Runs of spaces are kept as they are; tokenization downstream splits on
/// whitespace so they never produce empty tokens.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_punctuation() {
        assert_eq!(
            clean_text("MIT - Massachusetts Institute of Technology"),
            "mit  massachusetts institute of technology"
        );
        assert_eq!(clean_text("St. John's College!"), "st johns college");
    }

    #[test]
    fn test_clean_text_drops_non_ascii() {
        assert_eq!(clean_text("Example University — Home"), "example university  home");
        assert_eq!(clean_text("Universität Zürich"), "universitt zrich");
    }

    #[test]
    fn test_clean_text_keeps_only_plain_spaces() {
        assert_eq!(clean_text("a\tb\nc  d"), "abc  d");
        assert_eq!(clean_text(""), "");
    }
}
