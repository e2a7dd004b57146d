//! Strip transform
//!
//! Keeps printable ASCII plus space, newline, carriage return and tab.
//! This is a plain codepoint filter and does not use [`is_printable`].
//!
//! [`is_printable`]: super::is_printable

/// Whether `c` survives [`strip`]
#[must_use]
pub const fn is_kept(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | ' '..='~')
}

/// Remove every character that is not printable ASCII or basic whitespace
///
/// # Examples
///
/// ```
/// use unicode_cleaner::core::services::strip;
///
/// assert_eq!(strip("caf\u{e9} \u{2705}\n"), "caf \n");
/// ```
#[must_use]
pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| is_kept(c)).collect()
}
