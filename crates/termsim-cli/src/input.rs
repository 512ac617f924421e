//! Candidate loading from files or stdin

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Read one candidate per line from `path`, or from stdin when `path` is `-`.
pub fn load_candidates(path: &Path) -> Result<Vec<String>> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let candidates = if path == Path::new("-") {
        read_lines(io::stdin().lock()).map_err(io_err)?
    } else {
        let file = File::open(path).map_err(io_err)?;
        read_lines(BufReader::new(file)).map_err(io_err)?
    };

    debug!(path = %path.display(), count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

/// Collect non-blank lines, dropping the line terminator (`\n` or `\r\n`).
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}

/// Positional candidates first, then file lines in order.
pub fn gather_candidates(positional: Vec<String>, file: Option<&PathBuf>) -> Result<Vec<String>> {
    let mut candidates = positional;
    if let Some(path) = file {
        candidates.extend(load_candidates(path)?);
    }
    Ok(candidates)
}
