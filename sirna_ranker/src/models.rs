/// Number of score buckets. Bucket index equals the clamped Reynolds score,
/// so candidates land in 0 (worst) through 9 (best).
pub const BUCKET_COUNT: usize = 10;

/// A scored 19-mer target site on the sense-strand cDNA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The 19-base window as it appears in the normalized sequence
    pub window: String,
    /// 1-based start position of the window within the full sequence
    pub offset: usize,
}

/// Output format selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tab-delimited fixed-width table
    Table,
    /// Comma-delimited, one (offset, window) field pair per bucket column
    Csv,
}

/// Candidates grouped by clamped score, 0 through 9.
///
/// Within a bucket, candidates keep the order they were inserted in; the
/// scanner walks the sequence left to right, so that order is ascending
/// start offset. The renderers depend on it.
#[derive(Debug, Default)]
pub struct ScoreBuckets {
    buckets: [Vec<Candidate>; BUCKET_COUNT],
}

impl ScoreBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a candidate according to its raw score. Negative scores fall
    /// into bucket 0 and scores above 9 into bucket 9. Out-of-range scores
    /// are clamped, never discarded, so bucket totals always account for
    /// every scanned window.
    pub fn insert(&mut self, raw_score: i32, candidate: Candidate) {
        let idx = raw_score.clamp(0, BUCKET_COUNT as i32 - 1) as usize;
        self.buckets[idx].push(candidate);
    }

    /// Candidates in the given bucket, ascending start offset.
    pub fn bucket(&self, idx: usize) -> &[Candidate] {
        &self.buckets[idx]
    }

    /// Size of the largest bucket; the renderers use this as the row count.
    pub fn max_rows(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of candidates across all buckets.
    pub fn total_candidates(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}
