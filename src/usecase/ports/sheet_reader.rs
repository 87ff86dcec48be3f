use thiserror::Error;

use crate::domain::entities::value::CellValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("The Excel file appears to be empty.")]
    EmptyFile,
    #[error("Error processing the file: {0}")]
    ParseFailure(String),
}

/// Cell grid of a single worksheet, header row included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub cells: Vec<Vec<CellValue>>,
}

pub trait SheetReader: Send + Sync {
    /// Decode a workbook payload and return its first worksheet.
    fn read_first_sheet(&self, payload: &[u8]) -> Result<RawSheet, IngestError>;
}
