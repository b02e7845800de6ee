//! scrub — redact PII from text files.
//!
//! ```bash
//! # Write input_redacted.txt next to the input
//! scrub input.txt
//!
//! # Explicit destination
//! scrub input.txt -o cleaned.txt
//!
//! # Regex patterns only, skip the name heuristics
//! scrub input.txt --engine pattern
//! ```
//!
//! Always review the output manually; detection is best-effort and
//! carries no recall guarantee.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use scrub_cli::process;
use scrub_core::{EngineKind, ScrubConfig};

#[derive(Debug, Parser)]
#[command(name = "scrub", version, about = "Redact PII from text files")]
struct Cli {
    /// Path to the input file to be redacted.
    input: PathBuf,

    /// Output file (default: <input-stem>_redacted.txt next to the input).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Which detection engine(s) to run.
    #[arg(long, value_enum, default_value_t = EngineArg::All)]
    engine: EngineArg,

    /// Analysis language tag.
    #[arg(long, default_value = "en")]
    language: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    /// Regex pattern registry (emails, phones, card numbers, ...).
    Pattern,
    /// Capitalization-based person-name heuristics.
    Heuristic,
    /// Both engines, pattern first.
    All,
}

impl EngineArg {
    fn engines(self) -> Vec<EngineKind> {
        match self {
            EngineArg::Pattern => vec![EngineKind::Pattern],
            EngineArg::Heuristic => vec![EngineKind::Heuristic],
            EngineArg::All => vec![EngineKind::Pattern, EngineKind::Heuristic],
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = ScrubConfig {
        engines: cli.engine.engines(),
        language: cli.language.clone(),
    };

    let report = process::run(&cli.input, cli.output.as_deref(), &config)?;

    tracing::info!(
        output = %report.output_path.display(),
        redactions = report.redactions,
        "redaction complete"
    );
    for (label, count) in &report.counts {
        tracing::info!(label = %label, count = *count, "redacted");
    }
    Ok(())
}
