//! Property-based tests for the transforms
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use unicode_cleaner::core::models::TAG_TABLE;
use unicode_cleaner::core::services::{escape, is_kept, needs_escape, strip, tags};

/// Parse the output of `escape` back into characters
fn unescape(escaped: &str) -> Vec<char> {
    let mut out = Vec::new();
    let mut rest = escaped;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("U+") {
            let len = after.chars().take_while(char::is_ascii_hexdigit).count();
            let code = u32::from_str_radix(&after[..len], 16).unwrap();
            out.push(char::from_u32(code).unwrap());
            rest = &after[len..];
        } else {
            let c = rest.chars().next().unwrap();
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

proptest! {
    /// Strip output only contains allowed characters
    #[test]
    fn strip_output_is_allowed(text in any::<String>()) {
        let out = strip(&text);
        prop_assert!(out.chars().all(|c| matches!(c, '\n' | '\r' | '\t' | ' '..='~')));
    }

    /// Strip is idempotent
    #[test]
    fn strip_is_idempotent(text in any::<String>()) {
        let once = strip(&text);
        prop_assert_eq!(strip(&once), once);
    }

    /// Strip keeps exactly the allowed characters in order
    #[test]
    fn strip_preserves_order(text in any::<String>()) {
        let expected: String = text.chars().filter(|&c| is_kept(c)).collect();
        prop_assert_eq!(strip(&text), expected);
    }

    /// Escape output is pure ASCII
    #[test]
    fn escape_output_is_ascii(text in any::<String>()) {
        prop_assert!(escape(&text).chars().all(|c| u32::from(c) <= 127));
    }

    /// Escape is idempotent on its own output
    #[test]
    fn escape_is_idempotent(text in any::<String>()) {
        let once = escape(&text);
        prop_assert_eq!(escape(&once), once);
    }

    /// Escaped codepoints decode back to the original characters
    ///
    /// ASCII input is limited to non-hex letters and punctuation so token
    /// boundaries are unambiguous.
    #[test]
    fn escape_tokens_recover_codepoints(
        text in "[g-zG-Z .,!\\p{Cc}\\x{80}-\\x{10FFFF}]{0,40}"
    ) {
        let escaped_chars: Vec<char> = text.chars().filter(|&c| needs_escape(c)).collect();
        let recovered: Vec<char> = unescape(&escape(&text))
            .into_iter()
            .filter(|&c| needs_escape(c))
            .collect();
        prop_assert_eq!(recovered, escaped_chars);
    }

    /// Tags never shrink the text
    #[test]
    fn tags_never_shrink(text in any::<String>()) {
        prop_assert!(tags(&text).chars().count() >= text.chars().count());
    }

    /// Text without any table key is returned unchanged
    #[test]
    fn tags_identity_without_keys(text in any::<String>()) {
        prop_assume!(!text.chars().any(|c| TAG_TABLE.iter().any(|&(k, _)| k == c)));
        prop_assert_eq!(tags(&text), text);
    }

    /// Inserting a key always yields its tag
    #[test]
    fn tags_replace_inserted_key(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        index in 0..TAG_TABLE.len()
    ) {
        let (key, tag) = TAG_TABLE[index];
        let input = format!("{prefix}{key}{suffix}");
        prop_assert_eq!(tags(&input), format!("{prefix}{tag}{suffix}"));
    }
}
