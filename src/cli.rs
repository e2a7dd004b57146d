//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::core::models::Mode;
use crate::driver::{self, Job};

/// unicode-cleaner - Strip, escape, or tag non-ASCII characters
#[derive(Parser, Debug)]
#[command(
    name = "unicode-cleaner",
    version,
    about = "Unicode Cleaner Utility",
    long_about = "Rewrite the characters of a UTF-8 text file.\n\n\
                  strip:   drop everything except printable ASCII, space, \\n, \\r, \\t\n\
                  unicode: replace non-ASCII and non-printable characters with U+XXXX\n\
                  tags:    replace known emoji with plain tags such as [CHECK]"
)]
pub struct Cli {
    /// Input file path
    pub infile: PathBuf,

    /// Output file path
    pub outfile: PathBuf,

    /// Mode: 'strip', 'unicode', or 'tags'
    #[arg(long, value_enum)]
    pub mode: Mode,
}

impl From<Cli> for Job {
    fn from(cli: Cli) -> Self {
        Self::new(cli.infile, cli.outfile, cli.mode)
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let job = Job::from(cli);
    driver::process(&job)
        .with_context(|| format!("failed to process {}", job.input.display()))?;

    println!("Processed file saved to: {}", job.output.display());
    Ok(())
}
