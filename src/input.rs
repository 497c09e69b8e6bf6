//! Input source: a file path, or standard input when the path is `-`.
//!
//! ```rust
//! use kmernext::input::Input;
//! use std::path::Path;
//!
//! assert!(Input::from_path(Path::new("-")).is_stdin());
//! assert_eq!(
//!     Input::from_path(Path::new("reads.fq")).as_path(),
//!     Some(Path::new("reads.fq"))
//! );
//! ```

use std::path::{Path, PathBuf};

/// Where raw sequence lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A file on disk, possibly gzip-compressed.
    File(PathBuf),
    /// Standard input, selected with `-`.
    Stdin,
}

impl Input {
    /// `-` selects stdin; anything else is a file path.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// True when reading from standard input.
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// The file path, or `None` for stdin.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }

    /// Path used in error messages.
    pub(crate) fn display_path(&self) -> PathBuf {
        match self {
            Self::File(path) => path.clone(),
            Self::Stdin => PathBuf::from("<stdin>"),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}
