//! Full-name splitting.

/// A name split into first and last parts, both lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    /// Every token after the first, joined with single spaces.
    pub last: String,
}

/// Split a full name on whitespace.
///
/// Requires at least two tokens; the first is the first name and the rest
/// form the last name.
pub fn split_name(full: &str) -> Option<NameParts> {
    let mut tokens = full.split_whitespace();
    let first = tokens.next()?.to_lowercase();
    let last = tokens.collect::<Vec<_>>().join(" ").to_lowercase();
    if last.is_empty() {
        return None;
    }
    Some(NameParts { first, last })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tokens() {
        let parts = split_name("Jane Doe").unwrap();
        assert_eq!(parts.first, "jane");
        assert_eq!(parts.last, "doe");
    }

    #[test]
    fn test_multi_token_surname_collapses_whitespace() {
        let parts = split_name("  Jane   Mary\tDOE ").unwrap();
        assert_eq!(parts.first, "jane");
        assert_eq!(parts.last, "mary doe");
    }

    #[test]
    fn test_single_token_rejected() {
        assert!(split_name("Jane").is_none());
        assert!(split_name("   ").is_none());
        assert!(split_name("").is_none());
    }
}
