//! Escape transform
//!
//! Rewrites every non-ASCII or non-printable character as `U+` followed by
//! its codepoint in uppercase hex, at least four digits wide.

use std::fmt::Write;

use super::is_printable;

/// Whether `c` must be written as a `U+XXXX` escape
#[must_use]
pub fn needs_escape(c: char) -> bool {
    !is_printable(c) || u32::from(c) > 0x7f
}

/// Format a single character as its `U+XXXX` escape
#[must_use]
pub fn escape_char(c: char) -> String {
    format!("U+{:04X}", u32::from(c))
}

/// Escape every non-ASCII and non-printable character in `text`
///
/// # Examples
///
/// ```
/// use unicode_cleaner::core::services::escape;
///
/// assert_eq!(escape("\u{e9}"), "U+00E9");
/// assert_eq!(escape("ok\u{1F525}"), "okU+1F525");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if needs_escape(c) {
            // Writing to a String cannot fail
            let _ = write!(out, "U+{:04X}", u32::from(c));
        } else {
            out.push(c);
        }
    }
    out
}
