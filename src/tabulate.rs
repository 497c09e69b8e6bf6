//! Sliding-window k-mer tabulation.
//!
//! Every window of `k` characters is counted, and the character right after
//! the window (if any) is counted as that k-mer's successor. The window that
//! ends exactly at the end of a sequence is counted but has no successor.
//!
//! No case folding happens here; keys keep whatever case they arrive with.
//! Run input through [`normalize`](crate::normalize) first.
//!
//! # Example
//!
//! ```rust
//! use kmernext::tabulate::tabulate;
//!
//! let tables = tabulate(["AAAAA"], 2);
//! assert_eq!(tables.total("AA"), Some(4));
//! assert_eq!(tables.next_for("AA").and_then(|next| next.get(&'A')), Some(&3));
//! ```

use rayon::prelude::*;

use crate::tables::KmerTables;

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

/// Tabulates k-mers of a fixed length.
///
/// Cheap to copy; useful when the same `k` is applied to several batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerTabulator {
    k: i64,
}

impl KmerTabulator {
    /// Creates a tabulator for k-mers of length `k`.
    #[must_use]
    pub const fn new(k: i64) -> Self {
        Self { k }
    }

    /// The requested k-mer length, as given.
    pub const fn k(&self) -> i64 {
        self.k
    }

    /// Window length, or `None` when `k <= 0` and no k-mer can exist.
    fn window(self) -> Option<usize> {
        usize::try_from(self.k).ok().filter(|&k| k > 0)
    }

    /// Tabulates `sequences` one after another.
    pub fn tabulate<I, S>(self, sequences: I) -> KmerTables
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tables = KmerTables::new();
        let Some(k) = self.window() else {
            return tables;
        };

        #[cfg(feature = "tracing")]
        let _span = info_span!("tabulate", k = k).entered();

        for seq in sequences {
            add_sequence(&mut tables, seq.as_ref(), k);
        }

        #[cfg(feature = "tracing")]
        debug!(
            total_kmers = tables.total_kmers(),
            distinct_kmers = tables.distinct(),
            "Tabulated sequences"
        );

        tables
    }

    /// Tabulates `sequences` across the rayon thread pool.
    ///
    /// Each worker folds its share into private tables which are then merged,
    /// so the result is identical to [`tabulate`](Self::tabulate).
    pub fn tabulate_parallel<S>(self, sequences: &[S]) -> KmerTables
    where
        S: AsRef<str> + Sync,
    {
        let Some(k) = self.window() else {
            return KmerTables::new();
        };

        #[cfg(feature = "tracing")]
        let _span = info_span!("tabulate_parallel", k = k, sequences = sequences.len()).entered();

        let tables = sequences
            .par_iter()
            .fold(KmerTables::new, |mut tables, seq| {
                add_sequence(&mut tables, seq.as_ref(), k);
                tables
            })
            .reduce(KmerTables::new, KmerTables::merge);

        #[cfg(feature = "tracing")]
        debug!(
            sequences = sequences.len(),
            distinct_kmers = tables.distinct(),
            "Tabulated sequences in parallel"
        );

        tables
    }
}

/// Tabulates all k-mers of length `k` in `sequences`.
///
/// Returns empty tables when `k <= 0` or no sequence is at least `k` long.
pub fn tabulate<I, S>(sequences: I, k: i64) -> KmerTables
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    KmerTabulator::new(k).tabulate(sequences)
}

/// Parallel counterpart of [`tabulate`].
pub fn tabulate_parallel<S>(sequences: &[S], k: i64) -> KmerTables
where
    S: AsRef<str> + Sync,
{
    KmerTabulator::new(k).tabulate_parallel(sequences)
}

/// Slides a window of `k` characters over `seq`.
///
/// Offsets are character boundaries, so multi-byte characters are never split.
fn add_sequence(tables: &mut KmerTables, seq: &str, k: usize) {
    if seq.is_ascii() {
        add_ascii_sequence(tables, seq, k);
    } else {
        add_char_sequence(tables, seq, k);
    }
}

fn add_char_sequence(tables: &mut KmerTables, seq: &str, k: usize) {
    let bounds: Vec<usize> = seq
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(seq.len()))
        .collect();
    let n = bounds.len() - 1;
    if n < k {
        return;
    }

    for i in 0..=n - k {
        let end = bounds[i + k];
        let kmer = &seq[bounds[i]..end];
        // Empty at the last window
        let next = seq[end..].chars().next();
        tables.record(kmer, next);
    }
}

/// Byte windows; only valid when every character is one byte.
fn add_ascii_sequence(tables: &mut KmerTables, seq: &str, k: usize) {
    let bytes = seq.as_bytes();
    if bytes.len() < k {
        return;
    }

    for i in 0..=bytes.len() - k {
        let next = bytes.get(i + k).map(|&b| char::from(b));
        tables.record(&seq[i..i + k], next);
    }
}
