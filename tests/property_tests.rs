//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold across all inputs,
//! catching edge cases that might be missed by example-based tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kmernext::normalize::normalize_lines;
use kmernext::tabulate::{tabulate, tabulate_parallel};
use proptest::prelude::*;

/// Strategy for generating DNA sequences, occasionally with an `N`.
fn dna_sequence(min_len: usize, max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![Just('A'), Just('C'), Just('G'), Just('T'), Just('N')],
        min_len..=max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn sequences() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(dna_sequence(0, 40), 0..8)
}

proptest! {
    /// Total occurrences equal the number of windows across all sequences.
    #[test]
    fn total_equals_window_count(seqs in sequences(), k in 1i64..=12) {
        let tables = tabulate(&seqs, k);
        let k = usize::try_from(k).unwrap();
        let expected: u64 = seqs
            .iter()
            .map(|s| (s.len() + 1).saturating_sub(k) as u64)
            .sum();

        prop_assert_eq!(tables.total_kmers(), expected);
    }

    /// Successor counts never exceed the total, and fall short by exactly the
    /// number of times the k-mer ended a sequence.
    #[test]
    fn successors_account_for_terminal_windows(seqs in sequences(), k in 1i64..=12) {
        let tables = tabulate(&seqs, k);
        let k_len = usize::try_from(k).unwrap();

        for (kmer, &total) in tables.counts() {
            let successors: u64 = tables
                .next_for(kmer)
                .map_or(0, |next| next.values().sum());
            let terminal = seqs
                .iter()
                .filter(|s| s.len() >= k_len && s.ends_with(kmer.as_str()))
                .count() as u64;

            prop_assert!(successors <= total);
            prop_assert_eq!(total - successors, terminal);
        }
    }

    /// Every successor entry belongs to a counted k-mer of length k.
    #[test]
    fn next_table_keys_are_counted(seqs in sequences(), k in 1i64..=12) {
        let tables = tabulate(&seqs, k);
        for kmer in tables.next_chars().keys() {
            prop_assert!(tables.total(kmer).is_some());
        }
        for kmer in tables.counts().keys() {
            prop_assert_eq!(kmer.chars().count() as i64, k);
        }
    }

    /// Tabulation keeps no state between calls.
    #[test]
    fn tabulation_is_idempotent(seqs in sequences(), k in 1i64..=12) {
        prop_assert_eq!(tabulate(&seqs, k), tabulate(&seqs, k));
    }

    /// Sequence order does not matter.
    #[test]
    fn order_does_not_matter(seqs in sequences(), k in 1i64..=12) {
        let mut reversed = seqs.clone();
        reversed.reverse();
        prop_assert_eq!(tabulate(&seqs, k), tabulate(&reversed, k));
    }

    /// The parallel path gives the same tables as the sequential one.
    #[test]
    fn parallel_equals_sequential(seqs in sequences(), k in 1i64..=12) {
        prop_assert_eq!(tabulate_parallel(&seqs, k), tabulate(&seqs, k));
    }

    /// Non-positive k never produces k-mers.
    #[test]
    fn non_positive_k_is_empty(seqs in sequences(), k in -10i64..=0) {
        let tables = tabulate(&seqs, k);
        prop_assert!(tables.is_empty());
        prop_assert!(tables.next_chars().is_empty());
    }

    /// Normalizing lowercase input gives the same tables as uppercase input.
    #[test]
    fn case_is_normalized(seq in dna_sequence(1, 40), k in 1i64..=8) {
        let lower = normalize_lines([seq.to_lowercase()]);
        prop_assert_eq!(tabulate(&lower, k), tabulate([seq], k));
    }

    /// Header lines contribute nothing, whatever follows the marker.
    #[test]
    fn headers_contribute_nothing(
        seq in dna_sequence(1, 40),
        marker in prop_oneof![Just('>'), Just('@'), Just('+')],
        k in 1i64..=8,
    ) {
        let header = format!("{marker}{seq}");
        let tables = tabulate(normalize_lines([header]), k);
        prop_assert!(tables.is_empty());
    }
}
