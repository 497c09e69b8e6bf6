//! Command-line interface definition.

use clap::Parser;
use std::{num::IntErrorKind, path::PathBuf};

use crate::{config::DEFAULT_OUTPUT, format::OutputFormat};

/// Tabulates k-mer counts and next-character frequencies for DNA sequences.
///
/// Header lines starting with '>', '@' or '+' are skipped; every other line
/// is one sequence.
#[derive(Parser, Debug)]
#[command(name = "kmernext")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA/FASTQ-like file, or '-' for stdin
    pub input: PathBuf,

    /// K-mer length (k <= 0 yields an empty table)
    #[arg(value_parser = parse_k, allow_negative_numbers = true)]
    pub k: i64,

    /// Output file
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Tabulate sequences in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parses k, saturating integers outside the `i64` range.
///
/// A huge k is still an integer; it simply matches no sequence.
pub(crate) fn parse_k(s: &str) -> Result<i64, String> {
    match s.trim().parse::<i64>() {
        Ok(k) => Ok(k),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("'{s}' is not a valid integer")),
        },
    }
}
