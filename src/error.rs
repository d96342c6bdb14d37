//! Error types for the deckgen library.

use std::io;
use thiserror::Error;

/// Result type alias for deckgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error producing XML content.
    #[error("XML write error: {0}")]
    Xml(String),

    /// Invalid or inconsistent data in the document model.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
