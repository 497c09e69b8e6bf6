//! End-to-end tabulation: read, normalize, tabulate, write.
//!
//! The input is read completely before the output file is opened, so an
//! unreadable input never leaves a partial output file behind.

use std::{fs, path::Path};

use crate::{
    config::Config,
    error::KmerNextError,
    format::{render, OutputFormat},
    input::Input,
    normalize::normalize_lines,
    reader::read_lines,
    tables::KmerTables,
    tabulate::KmerTabulator,
};

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

/// What a run produced, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Sequence records after header and blank lines were dropped.
    pub sequences: usize,
    pub distinct_kmers: usize,
    pub total_kmers: u64,
}

/// Tabulates `config.input` and writes the result to `config.output`.
pub fn run(config: &Config) -> Result<RunSummary, KmerNextError> {
    #[cfg(feature = "tracing")]
    info!(input = %config.input, k = config.k, output = ?config.output, "Starting k-mer tabulation");

    let (sequences, tables) = tabulate_input(&config.input, config.k, config.parallel)?;
    write_output(&tables, &config.output, config.format)?;

    let summary = RunSummary {
        sequences,
        distinct_kmers: tables.distinct(),
        total_kmers: tables.total_kmers(),
    };

    #[cfg(feature = "tracing")]
    info!(
        sequences = summary.sequences,
        distinct_kmers = summary.distinct_kmers,
        total_kmers = summary.total_kmers,
        "K-mer tabulation complete"
    );

    Ok(summary)
}

/// Reads and tabulates `input`, returning the number of sequence records
/// alongside the tables.
pub fn tabulate_input(
    input: &Input,
    k: i64,
    parallel: bool,
) -> Result<(usize, KmerTables), KmerNextError> {
    let sequences = normalize_lines(read_lines(input)?);
    let tabulator = KmerTabulator::new(k);
    let tables = if parallel {
        tabulator.tabulate_parallel(&sequences)
    } else {
        tabulator.tabulate(&sequences)
    };
    Ok((sequences.len(), tables))
}

/// Reads and tabulates the file at `path`.
///
/// # Example
///
/// ```rust,no_run
/// use kmernext::run::tabulate_file;
///
/// let tables = tabulate_file("reads.fq", 3)?;
/// for row in tables.rows() {
///     println!("{}: {}", row.kmer, row.total);
/// }
/// # Ok::<(), kmernext::error::KmerNextError>(())
/// ```
pub fn tabulate_file<P: AsRef<Path>>(path: P, k: i64) -> Result<KmerTables, KmerNextError> {
    let input = Input::File(path.as_ref().to_path_buf());
    tabulate_input(&input, k, false).map(|(_, tables)| tables)
}

/// Renders `tables` and writes them to `path`, replacing any existing file.
pub fn write_output(
    tables: &KmerTables,
    path: &Path,
    format: OutputFormat,
) -> Result<(), KmerNextError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("write_output", path = ?path, format = %format).entered();

    let rendered = render(tables, format)?;
    fs::write(path, rendered).map_err(|source| KmerNextError::OutputWrite {
        source,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn temp_input(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn run_writes_text_output() {
        let input = temp_input(">header1\nATGTCTGTCTGAA\n>header2\nTCTGAA\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let config = Config {
            input: Input::File(input.path().to_path_buf()),
            k: 2,
            output: output.clone(),
            format: OutputFormat::Text,
            parallel: false,
        };
        let summary = run(&config).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                sequences: 2,
                distinct_kmers: 7,
                total_kmers: 17,
            }
        );
        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert!(lines.contains(&"AT: 1 total, next {G: 1}"));
        assert!(lines.contains(&"TG: 4 total, next {A: 2, T: 2}"));
        assert!(lines.contains(&"AA: 2 total, next {}"));
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let config = Config {
            input: Input::File(dir.path().join("missing.fa")),
            k: 3,
            output: output.clone(),
            format: OutputFormat::Text,
            parallel: false,
        };

        let err = run(&config).unwrap_err();
        assert!(matches!(err, KmerNextError::InputRead { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_reported() {
        let input = temp_input("ACGT\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("no_such_dir").join("out.txt");

        let config = Config {
            input: Input::File(input.path().to_path_buf()),
            k: 2,
            output,
            format: OutputFormat::Text,
            parallel: false,
        };

        let err = run(&config).unwrap_err();
        assert!(matches!(err, KmerNextError::OutputWrite { .. }));
    }

    #[test]
    fn tabulate_input_normalizes_case_and_headers() {
        let input = temp_input("@read1\natgc\n+\n");
        let (sequences, tables) =
            tabulate_input(&Input::File(input.path().to_path_buf()), 2, false).unwrap();

        assert_eq!(sequences, 1);
        assert_eq!(tables.total("AT"), Some(1));
        assert_eq!(tables.total("TG"), Some(1));
        assert_eq!(tables.total("GC"), Some(1));
        assert!(tables.total("at").is_none());
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let input = temp_input(">a\nACGTACGTTT\n>b\nGGGACGT\n>c\nTTAC\n");
        let path = Input::File(input.path().to_path_buf());

        let (_, sequential) = tabulate_input(&path, 3, false).unwrap();
        let (_, parallel) = tabulate_input(&path, 3, true).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn empty_input_writes_empty_file() {
        let input = temp_input("");
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");

        write_output(&tabulate_file(input.path(), 3).unwrap(), &output, OutputFormat::Text)
            .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }
}
