//! Text transform services
//!
//! Each transform is a pure single-pass map over the characters of its
//! input. None of them can fail.
//!
//! - [`printable`] - Printability predicate
//! - [`strip`] - Drop everything outside printable ASCII and basic whitespace
//! - [`escape`] - Replace non-ASCII and non-printable characters with `U+XXXX`
//! - [`tags`] - Replace known symbols with bracketed tags

pub mod escape;
pub mod printable;
pub mod strip;
pub mod tags;

pub use escape::{escape, escape_char, needs_escape};
pub use printable::is_printable;
pub use strip::{is_kept, strip};
pub use tags::tags;
