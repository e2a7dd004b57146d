//! Errors raised at the file I/O boundary
//!
//! The transforms themselves cannot fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while processing a file
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input file missing or unreadable
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input bytes are not valid UTF-8
    #[error(
        "{} is not valid UTF-8 (invalid byte sequence at offset {})",
        path.display(),
        source.utf8_error().valid_up_to()
    )]
    Decode {
        /// Input path
        path: PathBuf,
        /// Underlying decoding error
        source: std::string::FromUtf8Error,
    },

    /// Output file could not be created or written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl CleanError {
    /// The path the failing operation was working on
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
