use tracing::debug;

use crate::models::{Candidate, ScoreBuckets};
use crate::scoring::{reynolds_score, WINDOW_LEN};

/// Slide a 19-base window over the normalized sequence, score every
/// position, and bucket the candidates by clamped score.
///
/// Offsets are 1-based, so a sequence of length `n >= 19` produces exactly
/// the candidates at offsets `1 ..= n - 18`. Anything shorter produces an
/// empty bucket set rather than an error; the renderers then emit a
/// header-only report.
pub fn rank_candidates(sequence: &str) -> ScoreBuckets {
    let mut buckets = ScoreBuckets::new();
    if sequence.len() < WINDOW_LEN {
        debug!(
            "sequence of {} bases is shorter than one {}-base window, nothing to score",
            sequence.len(),
            WINDOW_LEN
        );
        return buckets;
    }

    // The normalizer only emits A/T/C/G/X, so byte slicing is safe here
    for start in 0..=(sequence.len() - WINDOW_LEN) {
        let window = &sequence[start..start + WINDOW_LEN];
        let score = reynolds_score(window);
        buckets.insert(
            score,
            Candidate {
                window: window.to_string(),
                offset: start + 1,
            },
        );
    }

    debug!("bucketed {} candidate windows", buckets.total_candidates());
    buckets
}
