//! Answer normalization

use unicode_normalization::UnicodeNormalization;

/// Canonical form used for every answer comparison: NFC, trimmed, lowercased
pub fn normalize(value: &str) -> String {
    value.trim().nfc().collect::<String>().to_lowercase()
}

/// Compare two answers after normalization
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_fold() {
        assert_eq!(normalize("  Me Gusta EL fernet \n"), "me gusta el fernet");
        assert!(answers_match("HOLA", "hola "));
        assert!(!answers_match("hola mundo", "holamundo"));
    }

    #[test]
    fn test_composed_and_decomposed_accents_match() {
        // "canción" with a precomposed ó vs o + combining acute
        assert!(answers_match("canci\u{f3}n", "cancio\u{301}n"));
    }

    #[test]
    fn test_non_ascii_symbols_survive() {
        assert_eq!(normalize(" π "), "π");
    }
}
