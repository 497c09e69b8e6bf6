//! Basic k-mer tabulation example.
//!
//! Prints the k-mers of a file with their most common successor.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_tabulate -- reads.fq 3
//! ```

use std::env;
use std::process;

use kmernext::run::tabulate_file;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <sequence_file> [k]", args[0]);
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  sequence_file  Path to a FASTA/FASTQ-like file");
        eprintln!("  k              K-mer length (default: 3)");
        process::exit(1);
    }

    let path = &args[1];
    let k: i64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3);

    let tables = match tabulate_file(path, k) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Error tabulating k-mers: {e}");
            process::exit(1);
        }
    };

    println!("K-mer tabulation complete!");
    println!("  K-mer length: {k}");
    println!("  Distinct k-mers: {}", tables.distinct());
    println!("  Total k-mers: {}", tables.total_kmers());

    println!("\nMost likely successor of each k-mer:");
    for row in tables.rows() {
        match row.next.iter().max_by_key(|(_, count)| **count) {
            Some((c, count)) => println!("  {} -> {c} ({count}/{})", row.kmer, row.total),
            None => println!("  {} -> (end of sequence)", row.kmer),
        }
    }
}
