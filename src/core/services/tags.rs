//! Tag transform
//!
//! Replaces each character found in [`TAG_TABLE`] with its tag. Lookup is
//! per codepoint; multi-codepoint emoji sequences are not matched as a unit.
//!
//! [`TAG_TABLE`]: crate::core::models::TAG_TABLE

use crate::core::models::tag_for;

/// Replace known symbols in `text` with bracketed tags
///
/// # Examples
///
/// ```
/// use unicode_cleaner::core::services::tags;
///
/// assert_eq!(tags("Build passed \u{2705}"), "Build passed [CHECK]");
/// ```
#[must_use]
pub fn tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match tag_for(c) {
            Some(tag) => out.push_str(tag),
            None => out.push(c),
        }
    }
    out
}
