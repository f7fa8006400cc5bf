//! Error types.
//!
//! Parsing itself never fails; these errors describe the I/O around it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a config file could not be turned into source text.
///
/// `parse` logs these and reports absence instead of returning them.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file is missing or could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("File is not valid UTF-8: {}", .path.display())]
    NotUtf8 { path: PathBuf },
}

impl ReadError {
    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            ReadError::NotUtf8 { path }
        } else {
            ReadError::Io { path, source }
        }
    }
}

/// Error type for template rendering.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template file does not exist.
    #[error("Template not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The template exists but could not be read.
    #[error("Failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for saving meeting notes.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The rendered notes could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
