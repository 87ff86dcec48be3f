use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::dataset::{Dataset, Row};
use crate::domain::entities::value::CellValue;
use crate::usecase::ports::sheet_reader::{IngestError, RawSheet, SheetReader};
use crate::usecase::services::viewer::LoadedSheet;

const EMPTY_HEADER: &str = "__EMPTY";

pub struct ImportService {
    reader: Arc<dyn SheetReader>,
}

impl ImportService {
    pub fn new(reader: Arc<dyn SheetReader>) -> Self {
        Self { reader }
    }

    /// Parse a workbook payload into a fresh sheet with every filter cleared.
    pub fn import(&self, payload: &[u8]) -> Result<LoadedSheet, IngestError> {
        let sheet = self.reader.read_first_sheet(payload)?;
        let sheet_name = sheet.name.clone();
        let dataset = dataset_from_sheet(sheet)?;
        info!(
            sheet = %sheet_name,
            rows = dataset.row_count(),
            columns = dataset.columns.len(),
            "imported worksheet"
        );
        Ok(LoadedSheet::new(sheet_name, dataset))
    }
}

/// Header names from the first grid row. Blank headers become `__EMPTY` and
/// repeats get a numeric suffix so every column name is unique.
pub fn header_names(header_row: &[CellValue]) -> Vec<String> {
    let mut seen = HashSet::new();
    header_row
        .iter()
        .map(|cell| {
            let base = match cell {
                CellValue::Missing => EMPTY_HEADER.to_string(),
                other => other.to_string(),
            };
            let mut name = base.clone();
            let mut counter = 0;
            while seen.contains(&name) {
                counter += 1;
                name = format!("{base}_{counter}");
            }
            seen.insert(name.clone());
            name
        })
        .collect()
}

/// Turn a cell grid into row records keyed by header. Blank rows are skipped.
pub fn dataset_from_sheet(sheet: RawSheet) -> Result<Dataset, IngestError> {
    let mut grid = sheet.cells.into_iter();
    let Some(header_row) = grid.next() else {
        return Err(IngestError::EmptyFile);
    };
    let columns = header_names(&header_row);

    let mut rows = Vec::new();
    let mut skipped = 0_usize;
    for cells in grid {
        let row: Row = columns.iter().cloned().zip(cells).collect();
        if row.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }

    if skipped > 0 {
        debug!(skipped, "skipped blank rows");
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    Ok(Dataset::new(columns, rows))
}
