//! Domain models for unicode-cleaner
//!
//! Pure data with no I/O dependencies.
//!
//! - [`Mode`] - Which transform to run
//! - [`TAG_TABLE`] - Built-in symbol to tag mapping

mod mode;
mod tag_table;

pub use mode::Mode;
pub use tag_table::{TAG_TABLE, tag_for};
