//! unicode-cleaner - Strip, escape, or tag non-ASCII characters in text files
//!
//! This library provides the character classification and the three text
//! transforms, plus the thin driver that applies one of them to a file.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod core;
pub mod driver;
pub mod error;

pub use crate::core::models::Mode;
pub use driver::{Job, process};
pub use error::CleanError;
