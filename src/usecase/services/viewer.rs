use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::dataset::{ColumnType, ColumnTypes, Dataset, Row};
use crate::domain::entities::filter::FilterState;
use crate::usecase::ports::sheet_reader::IngestError;
use crate::usecase::services::filter_service::apply_filters;
use crate::usecase::services::inference::infer_column_types;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("no spreadsheet is loaded")]
    NoDataLoaded,
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

/// Everything derived from one successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSheet {
    pub sheet_name: String,
    pub dataset: Dataset,
    pub column_types: ColumnTypes,
    pub filters: FilterState,
    /// Indices into `dataset.rows` that pass the current filters.
    pub visible: Vec<usize>,
}

impl LoadedSheet {
    pub fn new(sheet_name: impl Into<String>, dataset: Dataset) -> Self {
        let column_types = match dataset.first_row() {
            Some(first) => infer_column_types(&dataset.columns, first),
            None => ColumnTypes::new(),
        };
        let filters = FilterState::for_columns(&dataset.columns);
        let visible = (0..dataset.row_count()).collect();
        Self {
            sheet_name: sheet_name.into(),
            dataset,
            column_types,
            filters,
            visible,
        }
    }

    pub fn column_type(&self, column: &str) -> ColumnType {
        self.column_types
            .get(column)
            .copied()
            .unwrap_or(ColumnType::Undefined)
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.visible.iter().map(|&idx| &self.dataset.rows[idx])
    }

    pub fn total_rows(&self) -> usize {
        self.dataset.row_count()
    }

    /// Store the filter text and recompute the visible rows from scratch.
    pub fn update_filter(&mut self, column: &str, text: &str) -> Result<(), ViewerError> {
        if !self.dataset.has_column(column) {
            return Err(ViewerError::UnknownColumn(column.to_string()));
        }
        self.filters.set(column, text);
        self.visible = apply_filters(&self.dataset, &self.filters);
        debug!(
            column,
            cleared = self.filters.is_empty(),
            shown = self.visible.len(),
            total = self.total_rows(),
            "filters applied"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewerState {
    #[default]
    NoDataLoaded,
    DataLoaded(LoadedSheet),
}

impl ViewerState {
    pub fn loaded(&self) -> Option<&LoadedSheet> {
        match self {
            ViewerState::DataLoaded(sheet) => Some(sheet),
            ViewerState::NoDataLoaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded().is_some()
    }

    /// Replace everything on success; keep the current state on failure.
    pub fn apply_import(
        &mut self,
        outcome: Result<LoadedSheet, IngestError>,
    ) -> Result<(), IngestError> {
        match outcome {
            Ok(sheet) => {
                info!(
                    sheet = %sheet.sheet_name,
                    rows = sheet.total_rows(),
                    replaced = self.is_loaded(),
                    "sheet loaded"
                );
                *self = ViewerState::DataLoaded(sheet);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "import failed, keeping current data");
                Err(err)
            }
        }
    }

    pub fn update_filter(&mut self, column: &str, text: &str) -> Result<(), ViewerError> {
        match self {
            ViewerState::DataLoaded(sheet) => sheet.update_filter(column, text),
            ViewerState::NoDataLoaded => Err(ViewerError::NoDataLoaded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::value::CellValue;

    fn alice_and_bob() -> LoadedSheet {
        let columns = vec!["Name".to_string(), "Date".to_string()];
        let rows: Vec<Row> = vec![
            [
                ("Name", CellValue::from("Alice")),
                ("Date", CellValue::from("01-02-2023")),
            ]
            .into_iter()
            .collect(),
            [
                ("Name", CellValue::from("Bob")),
                ("Date", CellValue::from("2023-05-01")),
            ]
            .into_iter()
            .collect(),
        ];
        LoadedSheet::new("People", Dataset::new(columns, rows))
    }

    fn single_column(name: &str, values: &[&str]) -> LoadedSheet {
        let rows = values
            .iter()
            .map(|v| [(name, CellValue::from(*v))].into_iter().collect::<Row>())
            .collect();
        LoadedSheet::new("Other", Dataset::new(vec![name.to_string()], rows))
    }

    #[test]
    fn starts_without_data() {
        let mut state = ViewerState::default();

        assert!(!state.is_loaded());
        assert_eq!(
            state.update_filter("Name", "x"),
            Err(ViewerError::NoDataLoaded)
        );
    }

    #[test]
    fn name_filter_keeps_alice() {
        let mut state = ViewerState::default();
        state
            .apply_import(Ok(alice_and_bob()))
            .expect("import should apply");

        state.update_filter("Name", "ali").expect("known column");
        let sheet = state.loaded().expect("data loaded");

        let names: Vec<String> = sheet
            .visible_rows()
            .filter_map(|row| row.get("Name").map(|v| v.to_string()))
            .collect();
        assert_eq!(names, ["Alice"]);
        assert_eq!(sheet.column_type("Date"), ColumnType::Date);
        assert_eq!(sheet.column_type("Name"), ColumnType::Text);
    }

    #[test]
    fn year_filter_keeps_both_rows() {
        let mut sheet = alice_and_bob();

        sheet.update_filter("Date", "2023").expect("known column");

        assert_eq!(sheet.visible, vec![0, 1]);
    }

    #[test]
    fn clearing_filters_restores_full_view() {
        let mut sheet = alice_and_bob();
        sheet.update_filter("Name", "bob").expect("known column");
        assert_eq!(sheet.visible, vec![1]);

        sheet.update_filter("Name", "").expect("known column");

        assert_eq!(sheet.visible, vec![0, 1]);
    }

    #[test]
    fn unknown_column_is_rejected_without_side_effects() {
        let mut sheet = alice_and_bob();
        sheet.update_filter("Name", "ali").expect("known column");
        let before = sheet.clone();

        let result = sheet.update_filter("Missing", "x");

        assert_eq!(result, Err(ViewerError::UnknownColumn("Missing".to_string())));
        assert_eq!(sheet, before);
    }

    #[test]
    fn failed_import_keeps_previous_data() {
        let mut state = ViewerState::default();
        state
            .apply_import(Ok(alice_and_bob()))
            .expect("import should apply");
        state.update_filter("Name", "bob").expect("known column");
        let before = state.clone();

        let empty = state.apply_import(Err(IngestError::EmptyFile));
        let broken = state.apply_import(Err(IngestError::ParseFailure("corrupt".into())));

        assert_eq!(empty, Err(IngestError::EmptyFile));
        assert!(matches!(broken, Err(IngestError::ParseFailure(_))));
        assert_eq!(state, before, "state must be untouched after failures");
    }

    #[test]
    fn new_import_replaces_columns_and_filters() {
        let mut state = ViewerState::default();
        state
            .apply_import(Ok(alice_and_bob()))
            .expect("import should apply");
        state.update_filter("Name", "bob").expect("known column");

        state
            .apply_import(Ok(single_column("City", &["Paris", "Rome", "Oslo"])))
            .expect("second import should apply");
        let sheet = state.loaded().expect("data loaded");

        assert_eq!(sheet.dataset.columns, ["City"]);
        assert!(sheet.filters.is_empty(), "no filter survives a reload");
        assert_eq!(sheet.filters.get("Name"), "");
        assert_eq!(sheet.visible, vec![0, 1, 2]);
        assert_eq!(
            state.update_filter("Name", "bob"),
            Err(ViewerError::UnknownColumn("Name".to_string()))
        );
    }
}
