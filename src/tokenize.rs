//! Whitespace tokenization and comparison-only token normalization.

/// Split text into tokens on runs of whitespace.
///
/// Empty or whitespace-only text yields an empty sequence; the aligner
/// reports that as [`AlignError::EmptyInput`](crate::align::AlignError).
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Strip a single trailing period from a token.
///
/// Used only for comparisons. Display always uses the original token.
#[inline]
pub fn normalize_token(token: &str) -> &str {
    token.strip_suffix('.').unwrap_or(token)
}

/// Key used for equality comparisons: normalized and lowercased.
#[inline]
pub fn comparison_key(token: &str) -> String {
    normalize_token(token).to_lowercase()
}

/// Case-insensitive equality of two tokens after normalization.
#[inline]
pub fn tokens_match(a: &str, b: &str) -> bool {
    comparison_key(a) == comparison_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize("the quick brown fox"), vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        assert_eq!(tokenize("the  quick\t\tbrown \n fox"), tokenize("the quick brown fox"));
    }

    #[test]
    fn test_tokenize_trims_edges() {
        assert_eq!(tokenize("  leading and trailing  "), vec!["leading", "and", "trailing"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_normalize_strips_one_period() {
        assert_eq!(normalize_token("dog."), "dog");
        assert_eq!(normalize_token("etc.."), "etc.");
        assert_eq!(normalize_token("dog"), "dog");
        assert_eq!(normalize_token("."), "");
        assert_eq!(normalize_token("dog!"), "dog!");
    }

    #[test]
    fn test_comparison_key() {
        assert_eq!(comparison_key("Fox."), "fox");
        assert_eq!(comparison_key("."), "");
    }

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("Dog.", "dog"));
        assert!(tokens_match("HELLO", "hello"));
        assert!(!tokens_match("dog", "dogs"));
        assert!(!tokens_match("dog,", "dog"));
        assert!(tokens_match(".", ""));
        assert!(!tokens_match("dog..", "dog"));
    }
}
