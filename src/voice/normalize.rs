//! Transcript normalization.

/// Canonical form of a raw transcript: lower-cased, surrounding whitespace removed.
///
/// Every comparison against command names and the wake word goes through this
/// function, so it must stay idempotent.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Strip `prefix` from the start of `text` when it is followed by a word
/// boundary (end of text or whitespace). Returns the trimmed rest.
///
/// Both arguments are expected to be normalized already.
pub(crate) fn strip_word_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let rest = text.strip_prefix(prefix)?;
    match rest.chars().next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  BLADE time "), "blade time");
        assert_eq!(normalize("  BLADE time "), normalize("blade time"));
        assert_eq!(normalize("\tSearch Cats\n"), "search cats");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  Open Notes ", "HELP", "", "   ", "Ünïcode WORDS "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_strip_word_prefix_requires_boundary() {
        assert_eq!(strip_word_prefix("blade time", "blade"), Some("time"));
        assert_eq!(strip_word_prefix("blade", "blade"), Some(""));
        assert_eq!(strip_word_prefix("blade    help  ", "blade"), Some("help"));
        assert_eq!(strip_word_prefix("bladerunner", "blade"), None);
        assert_eq!(strip_word_prefix("time", "blade"), None);
        assert_eq!(strip_word_prefix("time", ""), None);
    }
}
