use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Range, Reader};
use tracing::debug;

use crate::domain::entities::value::CellValue;
use crate::usecase::ports::sheet_reader::{IngestError, RawSheet, SheetReader};

/// Reads xlsx, xls, xlsb and ods payloads through calamine's format sniffing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineSheetReader;

impl SheetReader for CalamineSheetReader {
    fn read_first_sheet(&self, payload: &[u8]) -> Result<RawSheet, IngestError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(payload.to_vec()))
            .map_err(|err| IngestError::ParseFailure(err.to_string()))?;

        let name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::ParseFailure("workbook has no worksheets".into()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| IngestError::ParseFailure("workbook has no worksheets".into()))?
            .map_err(|err| IngestError::ParseFailure(err.to_string()))?;

        debug!(sheet = %name, height = range.height(), width = range.width(), "read worksheet");
        Ok(RawSheet {
            name,
            cells: range_to_cells(&range),
        })
    }
}

pub fn range_to_cells(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    range
        .rows()
        .map(|r| r.iter().map(cell_to_value).collect())
        .collect()
}

pub fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::from(v.as_str()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Boolean(*v),
        Data::DateTime(v) => cell
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(v.to_string())),
        Data::DateTimeIso(v) => cell
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::from(v.as_str())),
        Data::DurationIso(v) => CellValue::from(v.as_str()),
        Data::Error(v) => CellValue::Text(v.to_string()),
        Data::Empty => CellValue::Missing,
    }
}
