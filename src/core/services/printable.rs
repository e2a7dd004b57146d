//! Printability predicate
//!
//! A character is printable when it is not in any Other (`C*`) category and
//! not a separator (`Z*`), with the ASCII space as the one allowed separator.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Whether `c` is printable and not a control, format, surrogate,
/// private-use, or unassigned character
///
/// # Examples
///
/// ```
/// use unicode_cleaner::core::services::is_printable;
///
/// assert!(is_printable('a'));
/// assert!(is_printable(' '));
/// assert!(is_printable('é'));
/// assert!(!is_printable('\n'));
/// assert!(!is_printable('\u{7f}'));
/// ```
#[must_use]
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}
