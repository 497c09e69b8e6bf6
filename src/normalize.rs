//! Line normalization for FASTA/FASTQ-like text.
//!
//! Turns raw lines into uppercase sequence records. Every non-header line is
//! its own record; multi-line FASTA records are not joined.
//!
//! # Example
//!
//! ```rust
//! use kmernext::normalize::normalize_lines;
//!
//! let lines = [">read1", "acgt", "@read2", "GGa", "+", "IIII"];
//! assert_eq!(normalize_lines(lines), vec!["ACGT", "GGA", "IIII"]);
//! ```
//!
//! Note the last record: a FASTQ quality line is not a header, so it is kept
//! as sequence data.

/// First characters that mark a header or metadata line.
pub const HEADER_MARKERS: [char; 3] = ['>', '@', '+'];

/// Returns `true` if `line` is a FASTA header, FASTQ header, or FASTQ
/// separator line.
#[must_use]
pub fn is_header(line: &str) -> bool {
    line.starts_with(HEADER_MARKERS)
}

/// Normalizes a single raw line.
///
/// Returns `None` for blank lines and header lines, otherwise the trimmed,
/// uppercased sequence.
#[must_use]
pub fn normalize_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || is_header(line) {
        return None;
    }
    Some(line.to_uppercase())
}

/// Normalizes raw lines into sequence records, preserving input order.
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| normalize_line(line.as_ref()))
        .collect()
}
