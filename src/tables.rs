//! K-mer count and next-character tables.
//!
//! Both tables are ordered maps, so iteration (and therefore output) is
//! lexicographic by k-mer, and by character within a k-mer's successors.

use serde::Serialize;
use std::collections::BTreeMap;

/// Total occurrences of each k-mer.
pub type KmerCountTable = BTreeMap<String, u64>;

/// Successor counts of each k-mer: k-mer -> following character -> count.
pub type NextCharTable = BTreeMap<String, BTreeMap<char, u64>>;

/// The two aggregate tables produced by one tabulation.
///
/// A k-mer present in [`counts`](Self::counts) may be absent from
/// [`next_chars`](Self::next_chars) when every occurrence ended its sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerTables {
    counts: KmerCountTable,
    next: NextCharTable,
}

static NO_SUCCESSORS: BTreeMap<char, u64> = BTreeMap::new();

/// One k-mer with its total count and successor counts, in output order.
///
/// `next` is empty when the k-mer only ever ended a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KmerRow<'a> {
    pub kmer: &'a str,
    pub total: u64,
    pub next: &'a BTreeMap<char, u64>,
}

impl KmerTables {
    /// Creates empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `kmer`, followed by `next` if the occurrence
    /// did not end its sequence.
    pub fn record(&mut self, kmer: &str, next: Option<char>) {
        // Avoid allocating a key for k-mers we've already seen
        if let Some(count) = self.counts.get_mut(kmer) {
            *count += 1;
        } else {
            self.counts.insert(kmer.to_owned(), 1);
        }

        if let Some(c) = next {
            let successors = match self.next.get_mut(kmer) {
                Some(successors) => successors,
                None => self.next.entry(kmer.to_owned()).or_default(),
            };
            *successors.entry(c).or_insert(0) += 1;
        }
    }

    /// Adds every count in `other` to `self`.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (kmer, count) in other.counts {
            *self.counts.entry(kmer).or_insert(0) += count;
        }
        for (kmer, successors) in other.next {
            let mine = self.next.entry(kmer).or_default();
            for (c, count) in successors {
                *mine.entry(c).or_insert(0) += count;
            }
        }
        self
    }

    /// Total occurrence counts.
    pub const fn counts(&self) -> &KmerCountTable {
        &self.counts
    }

    /// Next-character counts.
    pub const fn next_chars(&self) -> &NextCharTable {
        &self.next
    }

    /// Total occurrences of `kmer`, or `None` if it was never seen.
    pub fn total(&self, kmer: &str) -> Option<u64> {
        self.counts.get(kmer).copied()
    }

    /// Successor counts of `kmer`, or `None` if it never had a successor.
    pub fn next_for(&self, kmer: &str) -> Option<&BTreeMap<char, u64>> {
        self.next.get(kmer)
    }

    /// Number of distinct k-mers.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all k-mer occurrences.
    pub fn total_kmers(&self) -> u64 {
        self.counts.values().sum()
    }

    /// True when no k-mer has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates k-mers in lexicographic order with their totals and successors.
    pub fn rows(&self) -> impl Iterator<Item = KmerRow<'_>> {
        self.counts.iter().map(|(kmer, &total)| KmerRow {
            kmer,
            total,
            next: self.next.get(kmer).unwrap_or(&NO_SUCCESSORS),
        })
    }

    /// Splits into the count table and the next-character table.
    pub fn into_parts(self) -> (KmerCountTable, NextCharTable) {
        (self.counts, self.next)
    }
}
