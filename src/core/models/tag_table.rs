//! Built-in symbol to tag mapping
//!
//! Keys are single codepoints. Emoji that are usually written with a trailing
//! variation selector (U+FE0F) are keyed on the base codepoint only.

/// Symbol to tag pairs used by the tags transform
pub static TAG_TABLE: &[(char, &str)] = &[
    ('\u{2705}', "[CHECK]"),
    ('\u{26A0}', "[WARNING]"),
    ('\u{2B06}', "[UP]"),
    ('\u{1F50D}', "[SEARCH]"),
    ('\u{1F4E6}', "[PACKAGE]"),
    ('\u{274C}', "[ERROR]"),
    ('\u{1F525}', "[HOT]"),
    ('\u{1F552}', "[TIME]"),
    ('\u{1F4C1}', "[FOLDER]"),
    ('\u{1F4C4}', "[FILE]"),
];

/// Look up the tag for a single character
#[must_use]
pub fn tag_for(c: char) -> Option<&'static str> {
    TAG_TABLE
        .iter()
        .find_map(|&(key, tag)| (key == c).then_some(tag))
}
