use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sirna_ranker::{score_and_rank, OutputMode};

/// siRNA target-site scoring per Reynolds et al., 2004, Nat Biotechnol
/// 22(3):326-330.
#[derive(Parser, Debug)]
#[command(name = "sirna_ranker")]
struct Args {
    /// Input DNA sequence to analyze
    #[arg(short, long, conflicts_with = "fasta")]
    sequence: Option<String>,

    /// Read in sequence from a file, either raw or FASTA
    #[arg(short, long)]
    fasta: Option<PathBuf>,

    /// Output as pure CSV
    #[arg(short, long)]
    csv: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let raw_sequence = match (&args.sequence, &args.fasta) {
        (Some(sequence), _) => sequence.clone(),
        (None, Some(path)) => {
            info!("reading sequence from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("reading sequence file {}", path.display()))?
        }
        (None, None) => {
            bail!("you need to provide a sequence, using either the -s or -f flag")
        }
    };

    let mode = if args.csv {
        OutputMode::Csv
    } else {
        OutputMode::Table
    };

    let report = score_and_rank(&raw_sequence, mode)?;
    print!("{report}");

    Ok(())
}
