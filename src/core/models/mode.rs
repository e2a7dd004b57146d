//! Transform modes
//!
//! Selects which of the three transforms runs over the input.

use clap::ValueEnum;

use crate::core::services::{escape, strip, tags};

/// Transform mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Drop every character outside printable ASCII and basic whitespace
    Strip,
    /// Replace non-ASCII and non-printable characters with `U+XXXX`
    #[value(name = "unicode")]
    Escape,
    /// Replace known symbols with bracketed tags
    Tags,
}

impl Mode {
    /// All modes, in CLI order
    pub const ALL: [Self; 3] = [Self::Strip, Self::Escape, Self::Tags];

    /// Run this mode's transform over `text`
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Strip => strip(text),
            Self::Escape => escape(text),
            Self::Tags => tags(text),
        }
    }

    /// The spelling used on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strip => "strip",
            Self::Escape => "unicode",
            Self::Tags => "tags",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strip" => Ok(Self::Strip),
            "unicode" => Ok(Self::Escape),
            "tags" => Ok(Self::Tags),
            _ => Err(format!("Invalid mode: {s}. Use: strip, unicode, tags")),
        }
    }
}
