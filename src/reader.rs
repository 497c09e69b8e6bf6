//! Reading raw lines from an [`Input`].
//!
//! Lines are returned untouched; classification and cleanup belong to
//! [`normalize`](crate::normalize).

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{error::KmerNextError, input::Input};

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

#[cfg(feature = "gzip")]
fn open_file(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzip_path(path) {
        Ok(Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(
            file,
        ))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(not(feature = "gzip"))]
fn open_file(path: &Path) -> io::Result<Box<dyn BufRead>> {
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Reads every line of `input` into memory.
///
/// The whole input is read before anything is returned, so a failure part
/// way through never leaves callers with a partial sequence set.
pub fn read_lines(input: &Input) -> Result<Vec<String>, KmerNextError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("read_lines", input = %input).entered();

    let to_error = |source: io::Error| KmerNextError::InputRead {
        source,
        path: input.display_path(),
    };

    let reader: Box<dyn BufRead> = match input {
        Input::File(path) => open_file(path).map_err(to_error)?,
        Input::Stdin => Box::new(io::stdin().lock()),
    };
    let lines = read_from(reader).map_err(to_error)?;

    #[cfg(feature = "tracing")]
    debug!(lines = lines.len(), "Read input lines");

    Ok(lines)
}

/// Reads every line from an already open reader.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD instead of failing the whole read.
pub fn read_from<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
        buf.clear();
    }
    Ok(lines)
}
