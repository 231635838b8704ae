use std::sync::LazyLock;

use regex::Regex;

/// Matches a FASTA header line together with its terminator, anywhere in a
/// multi-record input.
static FASTA_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>[^\n]*\n?").expect("header pattern compiles"));

/// Convert raw sequence text into the scanner's working alphabet.
///
/// Header lines are removed outright; every remaining character is kept at
/// its position: uppercased, `U` coerced to `T`, and anything outside
/// `{A, T, C, G}` (including line terminators left in the body) replaced
/// with the sentinel `X`. An `X` never matches any scoring rule, so
/// malformed stretches simply score low instead of erroring.
///
/// Empty and degenerate inputs pass through; the scanner produces zero
/// windows for them.
pub fn normalize(raw: &str) -> String {
    let body = FASTA_HEADER.replace_all(raw, "");
    body.chars()
        .map(|c| match c.to_ascii_uppercase() {
            'A' => 'A',
            'T' | 'U' => 'T',
            'C' => 'C',
            'G' => 'G',
            _ => 'X',
        })
        .collect()
}
