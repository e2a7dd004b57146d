//! File driver
//!
//! Reads the whole input, runs one transform over it, and writes the whole
//! result. The input is fully read and decoded before the output path is
//! touched, so a failed read never creates the output file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::Mode;
use crate::error::CleanError;

/// One unit of work: which file to read, which to write, and how to transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Input file path
    pub input: PathBuf,
    /// Output file path (created or truncated)
    pub output: PathBuf,
    /// Transform to apply
    pub mode: Mode,
}

impl Job {
    /// Create a new job
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode,
        }
    }
}

/// Read a file and decode it as UTF-8
pub fn read_text(path: &Path) -> Result<String, CleanError> {
    let bytes = fs::read(path).map_err(|source| CleanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| CleanError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` as UTF-8, replacing any existing file
pub fn write_text(path: &Path, text: &str) -> Result<(), CleanError> {
    fs::write(path, text).map_err(|source| CleanError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Run a job end to end
pub fn process(job: &Job) -> Result<(), CleanError> {
    log::debug!("mode: {}", job.mode);
    let input = read_text(&job.input)?;
    let output = job.mode.apply(&input);
    log::debug!(
        "transformed {} chars into {} chars",
        input.chars().count(),
        output.chars().count()
    );
    write_text(&job.output, &output)
}
