use crate::domain::entities::dataset::ColumnType;
use crate::domain::entities::value::CellValue;

pub const EMPTY_VIEW_MESSAGE: &str = "No matching data found. Try adjusting your filters.";

/// Display text for a cell. Text in date columns is shown as stored.
pub fn format_cell_value(value: Option<&CellValue>, column_type: ColumnType) -> String {
    match (value, column_type) {
        (None | Some(CellValue::Missing), _) => String::new(),
        (Some(CellValue::Text(text)), ColumnType::Date) => text.clone(),
        (Some(other), _) => other.to_string(),
    }
}

pub fn row_count_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} rows")
}

pub fn loaded_message(total: usize) -> String {
    format!("Data loaded successfully! ({total} rows)")
}

pub fn filter_placeholder(column: &str) -> String {
    format!("Filter by {column}...")
}

pub fn row_class(idx: usize) -> &'static str {
    if idx % 2 == 0 {
        "row-even"
    } else {
        "row-odd"
    }
}
