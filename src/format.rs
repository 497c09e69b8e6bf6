//! Output formats for k-mer tables.
//!
//! The text format writes one line per k-mer:
//!
//! ```text
//! AT: 5 total, next {G: 3, T: 2}
//! ```
//!
//! with empty braces when the k-mer never had a following character. Lines
//! are ordered lexicographically by k-mer, successors by character.

use clap::ValueEnum;
use std::fmt::Write as _;

use crate::{
    error::KmerNextError,
    tables::{KmerRow, KmerTables},
};

/// Output format for k-mer tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<kmer>: <total> total, next {<char>: <count>, ...}` per line
    #[default]
    Text,
    /// Pretty-printed JSON array of `{kmer, total, next}` objects
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Formats one row in the text format, without a trailing newline.
///
/// ```rust
/// use kmernext::{format::format_row, tabulate::tabulate};
///
/// let tables = tabulate(["ATG"], 2);
/// let lines: Vec<_> = tables.rows().map(|row| format_row(&row)).collect();
/// assert_eq!(lines, ["AT: 1 total, next {G: 1}", "TG: 1 total, next {}"]);
/// ```
pub fn format_row(row: &KmerRow<'_>) -> String {
    let next = row
        .next
        .iter()
        .map(|(c, count)| format!("{c}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {} total, next {{{next}}}", row.kmer, row.total)
}

/// Renders `tables` in `format`, newline-terminated.
pub fn render(tables: &KmerTables, format: OutputFormat) -> Result<String, KmerNextError> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for row in tables.rows() {
                // Writing to a String cannot fail
                let _ = writeln!(out, "{}", format_row(&row));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let rows: Vec<KmerRow<'_>> = tables.rows().collect();
            let mut out = serde_json::to_string_pretty(&rows)?;
            out.push('\n');
            Ok(out)
        }
    }
}
