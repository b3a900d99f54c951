//! Text normalization for the legacy token-overlap scoring mode.
//!
//! The canonical skill pipeline bypasses this entirely and matches against
//! the vocabulary directly.

use std::collections::HashSet;

/// Lowercases `text`, replaces every character that is not an ASCII letter,
/// digit, or whitespace with a space, then splits on whitespace runs and
/// de-duplicates into a set. Empty input yields an empty set.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = tokenize("Must know Python, SQL and Docker.");
        assert!(tokens.contains("python"));
        assert!(tokens.contains("sql"));
        assert!(tokens.contains("docker"));
        assert!(!tokens.contains("docker."));
    }

    #[test]
    fn test_deduplicates_tokens() {
        let tokens = tokenize("rust rust RUST Rust");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_non_ascii_characters_become_separators() {
        let tokens = tokenize("naïve résumé");
        // 'ï' and 'é' are not ASCII, so the words split around them.
        assert!(tokens.contains("na"));
        assert!(tokens.contains("ve"));
        assert!(tokens.contains("r"));
        assert!(tokens.contains("sum"));
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let first = tokenize("C++ & Rust, 10+ years; team-lead.");
        let rejoined = first.iter().cloned().collect::<Vec<_>>().join(" ");
        let second = tokenize(&rejoined);
        assert_eq!(first, second);
    }
}
