//! Defensive text handling for externally supplied values.

use serde_json::Value;

/// Characters that are dropped from free text before matching.
const INVISIBLE_CHARS: [char; 2] = ['\u{200B}', '\u{FEFF}'];

/// Slash look-alikes that are mapped to `/`.
const SLASH_LOOKALIKES: [char; 2] = ['\u{2215}', '\u{2044}'];

/// Render a JSON value as trimmed text.
///
/// Strings, numbers and booleans yield their textual form. Values with no
/// scalar rendering (null, arrays, objects) yield an empty string, which
/// callers treat the same as an absent field.
pub fn safe_stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Strip zero-width characters, unify slash look-alikes and trim.
pub fn cleanse_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !INVISIBLE_CHARS.contains(c))
        .map(|c| if SLASH_LOOKALIKES.contains(&c) { '/' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(safe_stringify(&json!("  050028449 ")), "050028449");
        assert_eq!(safe_stringify(&json!(50028449)), "50028449");
        assert_eq!(safe_stringify(&json!(true)), "true");
    }

    #[test]
    fn test_stringify_non_scalars_is_empty() {
        assert_eq!(safe_stringify(&json!(null)), "");
        assert_eq!(safe_stringify(&json!(["050028449"])), "");
        assert_eq!(safe_stringify(&json!({"id": "050028449"})), "");
    }

    #[test]
    fn test_cleanse_hidden_characters() {
        assert_eq!(cleanse_text("\u{FEFF}050028449/00\u{200B}"), "050028449/00");
        assert_eq!(cleanse_text(" 050028449\u{2215}00 "), "050028449/00");
        assert_eq!(cleanse_text("050028449\u{2044}00"), "050028449/00");
    }

    #[test]
    fn test_cleanse_keeps_backslash() {
        assert_eq!(cleanse_text("050028449\\00"), "050028449\\00");
    }
}
