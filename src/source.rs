//! Loading source files for the front end.
//!
//! The lexer works on an in-memory buffer; this module is the loader that produces it, with a size guard so an
//! accidental multi-gigabyte input fails fast instead of exhausting memory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Maximum source file size (100 MiB)
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Failure to produce a source buffer.
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("Cannot access file '{}': {source}", .path.display())]
    #[diagnostic(code(viper::io))]
    Access { path: PathBuf, source: io::Error },

    #[error("Source file '{}' is too large ({size} bytes, max {max} bytes)", .path.display(), max = MAX_SOURCE_SIZE)]
    #[diagnostic(code(viper::too_large), help("split the program into smaller files"))]
    TooLarge { path: PathBuf, size: u64 },

    #[error("Error reading file '{}': {source}", .path.display())]
    #[diagnostic(code(viper::io))]
    Read { path: PathBuf, source: io::Error },
}

/// Read a source file into memory.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read, or is not valid UTF-8
/// - The file exceeds [`MAX_SOURCE_SIZE`]
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let metadata = fs::metadata(path).map_err(|source| SourceError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
        });
    }

    let source = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}
