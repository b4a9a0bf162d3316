//! Error types for pdftoc.

use std::io;
use thiserror::Error;

/// Result type alias for pdftoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not carry a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The document could not be parsed (corrupt or malformed structure).
    #[error("Unreadable document: {0}")]
    Unreadable(String),

    /// The document is encrypted and cannot be opened.
    #[error("Document is encrypted")]
    Encrypted,

    /// A user-supplied ignore pattern failed to compile.
    #[error("Invalid ignore pattern: {0}")]
    InvalidPattern(String),

    /// Error serializing the outline.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Unreadable(err.to_string()),
        }
    }
}
