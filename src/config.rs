use std::path::{Path, PathBuf};

use crate::{cli::Args, error::KmerNextError, format::OutputFormat, input::Input};

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "kmer_output.txt";

/// Everything one tabulation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub k: i64,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub parallel: bool,
}

impl Config {
    /// Builds a text-format, sequential configuration from raw arguments.
    pub fn new(input: &str, k: &str, output: Option<&str>) -> Result<Self, KmerNextError> {
        let k = crate::cli::parse_k(k).map_err(|_| KmerNextError::InvalidKmerLength {
            value: k.to_string(),
        })?;

        Ok(Self {
            input: Input::from_path(Path::new(input)),
            k,
            output: PathBuf::from(output.unwrap_or(DEFAULT_OUTPUT)),
            format: OutputFormat::default(),
            parallel: false,
        })
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables or disables parallel tabulation.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: Input::from_path(&args.input),
            k: args.k,
            output: args.output,
            format: args.format,
            parallel: args.parallel,
        }
    }
}
