//! Scoring and ranking of candidate siRNA target sites.
//!
//! Implements the empirical design rules of Reynolds et al., 2004,
//! Nat Biotechnol 22(3):326-330: every 19-base window of a sense-strand
//! cDNA sequence is scored against eight criteria, bucketed by clamped
//! score, and rendered as a ranked table or CSV. The whole pipeline is a
//! pure function over an in-memory string; acquiring the sequence and
//! writing the report are the caller's job.

use anyhow::Result;
use tracing::info;

pub mod models;
pub mod normalize;
pub mod ranking;
pub mod report;
pub mod scoring;

pub use models::{Candidate, OutputMode, ScoreBuckets};

/// Run the full pipeline: normalize the raw sequence text, score and
/// bucket every 19-base window, and render the report in the requested
/// output mode.
///
/// Malformed characters and too-short sequences are not errors; they yield
/// low-scoring windows and a header-only report respectively. The `Result`
/// only surfaces CSV writer plumbing failures.
pub fn score_and_rank(raw_sequence: &str, mode: OutputMode) -> Result<String> {
    let sequence = normalize::normalize(raw_sequence);
    let buckets = ranking::rank_candidates(&sequence);
    info!(
        "scored {} candidate windows over {} bases",
        buckets.total_candidates(),
        sequence.len()
    );

    match mode {
        OutputMode::Table => Ok(report::render_table(&buckets)),
        OutputMode::Csv => report::render_csv(&buckets),
    }
}
