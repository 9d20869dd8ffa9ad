//! Spreadsheet decoder backed by calamine.

use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

use crate::ingest::{
    domain::{CellValue, SheetRow},
    ports::{DecodeError, RowStream, SheetDecoder},
};

/// Decoder for Excel-family workbooks (`.xlsx`, `.xls`, `.ods`).
///
/// Reads the first worksheet only. The first row supplies header labels;
/// every following row becomes a [`SheetRow`] keyed by those labels, with
/// empty cells omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxDecoder;

impl XlsxDecoder {
    /// Creates a workbook decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SheetDecoder for XlsxDecoder {
    fn decode(&self, path: &Path) -> Result<RowStream, DecodeError> {
        let display = path.display().to_string();
        let mut workbook = open_workbook_auto(path).map_err(|err| DecodeError::Open {
            path: display.clone(),
            message: err.to_string(),
        })?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DecodeError::NoWorksheets {
                path: display.clone(),
            })?
            .map_err(|err| DecodeError::Read {
                path: display,
                message: err.to_string(),
            })?;

        let mut rows = range.rows();
        let headers: Vec<Option<String>> = rows
            .next()
            .map(|cells| cells.iter().map(header_label).collect())
            .unwrap_or_default();

        let mut decoded = Vec::new();
        for (offset, cells) in rows.enumerate() {
            let mut fields = Vec::new();
            for (header, cell) in headers.iter().zip(cells) {
                let Some(label) = header else {
                    continue;
                };
                let value = cell_value(cell);
                if !matches!(value, CellValue::Empty) {
                    fields.push((label.clone(), value));
                }
            }
            decoded.push(SheetRow::new(offset + 1, fields));
        }
        Ok(Box::new(decoded.into_iter()))
    }
}

/// Renders a header cell as a trimmed label, skipping blank headers.
fn header_label(cell: &Data) -> Option<String> {
    match cell {
        Data::String(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Data::Float(value) => Some(value.to_string()),
        Data::Int(value) => Some(value.to_string()),
        Data::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

/// Converts a calamine cell into the domain cell model.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => CellValue::Number(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::Text(value.clone()),
        Data::Empty | Data::Error(_) => CellValue::Empty,
    }
}
