//! Free-text grammars for identity references.
//!
//! Three patterns are tried in fixed priority order and the first match
//! wins:
//!
//! 1. ID with separator: `050028449/00` (or `\`)
//! 2. Bare 11-digit ID: `05002844900`, split 9/2 by position
//! 3. Name and date: `Jane Doe, 04-05-1990` (comma required)

use regex::Regex;

const ID_SLASH_PATTERN: &str = r"^\s*([0-9]{9})[/\\]([0-9]{2})\s*$";
const ID_ELEVEN_PATTERN: &str = r"^\s*([0-9]{11})\s*$";
const NAME_DOB_PATTERN: &str = r"^\s*(?P<name>.+?)\s*,\s*(?P<date>.+?)\s*$";

const SUBSCRIBER_DIGITS: usize = 9;

/// Which grammar matched a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch<'a> {
    /// ID shape, already split into subscriber and member parts.
    Id { subscriber: &'a str, member: &'a str },
    /// Name and date segments, both trimmed and not yet normalized.
    NameDob { name: &'a str, date: &'a str },
}

/// Compiled identity grammars.
///
/// Built once and shared by reference; matching never mutates it.
#[derive(Debug, Clone)]
pub struct IdentityPatterns {
    id_slash: Regex,
    id_eleven: Regex,
    name_dob: Regex,
}

impl Default for IdentityPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityPatterns {
    pub fn new() -> Self {
        Self {
            id_slash: Regex::new(ID_SLASH_PATTERN).expect("Invalid ID slash regex"),
            id_eleven: Regex::new(ID_ELEVEN_PATTERN).expect("Invalid 11-digit ID regex"),
            name_dob: Regex::new(NAME_DOB_PATTERN).expect("Invalid name/DOB regex"),
        }
    }

    /// Match text against all three grammars in priority order.
    pub fn classify<'a>(&self, text: &'a str) -> Option<TextMatch<'a>> {
        self.match_id(text).or_else(|| self.match_name_dob(text))
    }

    /// Match only the two ID grammars.
    pub fn match_id<'a>(&self, text: &'a str) -> Option<TextMatch<'a>> {
        if let Some(caps) = self.id_slash.captures(text) {
            let (_, [subscriber, member]) = caps.extract();
            return Some(TextMatch::Id { subscriber, member });
        }
        if let Some(caps) = self.id_eleven.captures(text) {
            let (_, [digits]) = caps.extract();
            let (subscriber, member) = digits.split_at(SUBSCRIBER_DIGITS);
            return Some(TextMatch::Id { subscriber, member });
        }
        None
    }

    fn match_name_dob<'a>(&self, text: &'a str) -> Option<TextMatch<'a>> {
        let caps = self.name_dob.captures(text)?;
        let name = caps.name("name")?.as_str();
        let date = caps.name("date")?.as_str();
        Some(TextMatch::NameDob { name, date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id<'a>(subscriber: &'a str, member: &'a str) -> Option<TextMatch<'a>> {
        Some(TextMatch::Id { subscriber, member })
    }

    #[test]
    fn test_slash_and_backslash_separators() {
        let patterns = IdentityPatterns::new();
        assert_eq!(patterns.classify("050028449/00"), id("050028449", "00"));
        assert_eq!(patterns.classify(" 050028449\\07 "), id("050028449", "07"));
    }

    #[test]
    fn test_eleven_digits_split_by_position() {
        let patterns = IdentityPatterns::new();
        assert_eq!(patterns.classify("05002844900"), id("050028449", "00"));
    }

    #[test]
    fn test_wrong_digit_counts_do_not_match_id() {
        let patterns = IdentityPatterns::new();
        assert!(patterns.match_id("05002844/00").is_none());
        assert!(patterns.match_id("050028449/0").is_none());
        assert!(patterns.match_id("0500284490").is_none());
        assert!(patterns.match_id("050028449000").is_none());
        assert!(patterns.match_id("subscriber 050028449/00").is_none());
    }

    #[test]
    fn test_name_dob_splits_at_first_comma() {
        let patterns = IdentityPatterns::new();
        assert_eq!(
            patterns.classify("Jane Mary Doe ,  04-05-1990 "),
            Some(TextMatch::NameDob {
                name: "Jane Mary Doe",
                date: "04-05-1990"
            })
        );
        assert_eq!(
            patterns.classify("Raja,Panda,04/22/1980"),
            Some(TextMatch::NameDob {
                name: "Raja",
                date: "Panda,04/22/1980"
            })
        );
    }

    #[test]
    fn test_no_comma_no_match() {
        let patterns = IdentityPatterns::new();
        assert!(patterns.classify("Jane Doe 04-05-1990").is_none());
        assert!(patterns.classify("").is_none());
    }
}
