//! Search text normalization and matching.
//!
//! Matching is plain substring containment over accent-folded, lowercased
//! text: "cafe" finds "Café". No tokenization, no ranking, no fuzziness.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, decompose (NFD) and drop combining marks.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Containment of the normalized query in the normalized text. The empty
/// query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    normalize(text).contains(&normalize(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("GÊNOVA"), "genova");
        assert_eq!(normalize("già visto"), "gia visto");
    }

    #[test]
    fn empty_query_matches_anything() {
        assert!(matches("anything at all", ""));
        assert!(matches("", ""));
    }

    #[test]
    fn containment_is_accent_insensitive_both_ways() {
        assert!(matches("Café de la Gare", "cafe"));
        assert!(matches("cafe all'angolo", "café"));
    }

    #[test]
    fn matching_is_containment_not_fuzzy() {
        assert!(matches("Café de la Gare", "de la"));
        assert!(!matches("Café de la Gare", "gare cafe"));
        assert!(!matches("Roma", "milano"));
    }
}
