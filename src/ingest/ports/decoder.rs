//! Port contract for spreadsheet decoding.

use crate::ingest::domain::SheetRow;
use std::path::Path;
use thiserror::Error;

/// A lazy, finite, non-restartable sequence of decoded rows, in file order.
pub type RowStream = Box<dyn Iterator<Item = SheetRow> + Send>;

/// Decodes a staged spreadsheet into rows.
///
/// Only the first worksheet is read; its first row supplies the header
/// labels that key every following row.
pub trait SheetDecoder: Send + Sync {
    /// Decodes the spreadsheet at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the file cannot be parsed; the pipeline
    /// marks the job `FAILED` in response.
    fn decode(&self, path: &Path) -> Result<RowStream, DecodeError>;
}

/// Errors returned by spreadsheet decoder implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The file could not be opened as a spreadsheet.
    #[error("spreadsheet {path} could not be opened: {message}")]
    Open {
        /// Path that was probed.
        path: String,
        /// Decoder-reported reason.
        message: String,
    },

    /// The workbook contains no worksheets.
    #[error("spreadsheet {path} has no worksheets")]
    NoWorksheets {
        /// Path that was probed.
        path: String,
    },

    /// The first worksheet could not be read.
    #[error("spreadsheet {path} could not be read: {message}")]
    Read {
        /// Path that was probed.
        path: String,
        /// Decoder-reported reason.
        message: String,
    },
}
