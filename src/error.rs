// src/error.rs
use std::io;

use crate::model::Source;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network failure or non-success status while fetching one source.
    #[error("{site}: fetch failed: {reason}")]
    Fetch { site: Source, reason: String },

    /// The page arrived but the expected table/container was not in it.
    #[error("{site}: {what} not found in page")]
    Structure { site: Source, what: &'static str },

    /// The HTTP client itself could not be built. Nothing can be fetched.
    #[error("HTTP client unavailable: {0}")]
    Client(String),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// Workbook could not be built (bad sheet name, size limits).
    #[error("xlsx: {0}")]
    Xlsx(String),
}

impl Error {
    /// Per-source failures degrade that source to an empty list; everything else is fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::Structure { .. })
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        Error::Xlsx(e.to_string())
    }
}
