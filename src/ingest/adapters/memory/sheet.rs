//! Canned spreadsheet decoder for tests and embedding.

use std::path::Path;

use crate::ingest::{
    domain::SheetRow,
    ports::{DecodeError, RowStream, SheetDecoder},
};

#[derive(Debug, Clone)]
enum Canned {
    Rows(Vec<SheetRow>),
    Failure(String),
}

/// Decoder that replays canned rows, or a canned decode failure, for any
/// path.
#[derive(Debug, Clone)]
pub struct InMemorySheetDecoder {
    canned: Canned,
}

impl InMemorySheetDecoder {
    /// Creates a decoder that yields the given rows in order.
    #[must_use]
    pub fn with_rows(rows: Vec<SheetRow>) -> Self {
        Self {
            canned: Canned::Rows(rows),
        }
    }

    /// Creates a decoder that fails every decode with the given reason.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            canned: Canned::Failure(message.into()),
        }
    }
}

impl SheetDecoder for InMemorySheetDecoder {
    fn decode(&self, path: &Path) -> Result<RowStream, DecodeError> {
        match &self.canned {
            Canned::Rows(rows) => Ok(Box::new(rows.clone().into_iter())),
            Canned::Failure(message) => Err(DecodeError::Read {
                path: path.display().to_string(),
                message: message.clone(),
            }),
        }
    }
}
