//! # kmernext
//!
//! Counts overlapping k-mers across DNA sequences and, for every k-mer,
//! tabulates which characters immediately follow it.
//!
//! ## Pipeline
//!
//! 1. [`reader`] reads raw lines from a file or stdin.
//! 2. [`normalize`] drops `>`, `@` and `+` header lines and uppercases the rest;
//!    each remaining line is one sequence.
//! 3. [`tabulate`] slides a window of `k` characters over every sequence,
//!    producing [`KmerTables`](tables::KmerTables).
//! 4. [`format`] renders the tables as text or JSON.
//!
//! ## Example
//!
//! ```rust
//! use kmernext::{normalize::normalize_lines, tabulate::tabulate};
//!
//! let sequences = normalize_lines([">read", "atgcg"]);
//! let tables = tabulate(&sequences, 3);
//!
//! assert_eq!(tables.total("TGC"), Some(1));
//! // The last window ends the sequence, so nothing follows it
//! assert_eq!(tables.total("GCG"), Some(1));
//! assert!(tables.next_for("GCG").is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod normalize;
pub mod reader;
pub mod run;
pub mod tables;
pub mod tabulate;
