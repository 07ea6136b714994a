//! String utilities for display components.

/// Derive avatar initials from a display name.
///
/// Takes the first letter of the first two whitespace-separated tokens,
/// upper-cased. Single-word names yield one initial; empty or all-whitespace
/// names yield an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("Ada Lovelace"), "AL");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("Plato"), "P");
    }

    #[test]
    fn test_initials_extra_words_ignored() {
        assert_eq!(initials("Jean Luc Picard"), "JL");
    }

    #[test]
    fn test_initials_lowercase_upcased() {
        assert_eq!(initials("ada lovelace"), "AL");
    }

    #[test]
    fn test_initials_collapses_whitespace() {
        assert_eq!(initials("  Ada   Lovelace  "), "AL");
    }

    #[test]
    fn test_initials_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }
}
