/// Characters trimmed from both ends of a name before matching.
fn is_edge_punctuation(c: char) -> bool {
    matches!(c, '.' | '-' | '\'')
}

/// Normalizes free-text input before any matching.
///
/// Lower-cases the input, then strips leading and trailing periods, hyphens
/// and apostrophes. Embedded punctuation is kept, so "Ha-Ha Clinton-Dix"
/// keeps both hyphens.
///
/// # Examples
/// ```
/// use gridiron_lookup::names::sanitize;
///
/// assert_eq!(sanitize("T.J."), "t.j");
/// assert_eq!(sanitize("'Tom Brady-"), "tom brady");
/// assert_eq!(sanitize("Le'Veon Bell"), "le'veon bell");
/// ```
pub fn sanitize(text: &str) -> String {
    text.to_lowercase()
        .trim_matches(is_edge_punctuation)
        .to_string()
}

/// Splits a sanitized name on whitespace into its name tokens.
pub fn tokens(sanitized: &str) -> Vec<&str> {
    sanitized.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_lowercases() {
        assert_eq!(sanitize("Tom Brady"), "tom brady");
        assert_eq!(sanitize("PATRIOTS"), "patriots");
    }

    #[test]
    fn test_sanitize_strips_edge_punctuation() {
        assert_eq!(sanitize("...niners..."), "niners");
        assert_eq!(sanitize("-pats-"), "pats");
        assert_eq!(sanitize("'bucs'"), "bucs");
    }

    #[test]
    fn test_sanitize_strips_mixed_edge_punctuation() {
        assert_eq!(sanitize("-.'gb'.-"), "gb");
        assert_eq!(sanitize(".-a"), "a");
    }

    #[test]
    fn test_sanitize_keeps_embedded_punctuation() {
        assert_eq!(sanitize("Ha-Ha Clinton-Dix"), "ha-ha clinton-dix");
        assert_eq!(sanitize("D'Brickashaw Ferguson"), "d'brickashaw ferguson");
        assert_eq!(sanitize("T.J. Watt"), "t.j. watt");
    }

    #[test]
    fn test_sanitize_empty_and_punctuation_only() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("...'--"), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "",
            "Tom Brady",
            "-.'x'.-",
            "'-.A.-'",
            "Ha-Ha Clinton-Dix",
            "zz九",
            "ÅSA-LISA.",
            "  spaced  ",
            ".'-",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("tom brady"), vec!["tom", "brady"]);
        assert_eq!(tokens("  odell   beckham jr "), vec!["odell", "beckham", "jr"]);
        assert!(tokens("").is_empty());
    }
}
