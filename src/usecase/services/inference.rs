use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::dataset::{ColumnType, ColumnTypes, Row};
use crate::domain::entities::value::CellValue;

/// Checked in order; the first match wins.
const DATE_PATTERNS: [&str; 3] = [
    // DD-MM-YYYY or DD/MM/YYYY
    r"^[0-9]{2}[-/][0-9]{2}[-/][0-9]{4}$",
    // YYYY-MM-DD or YYYY/MM/DD
    r"^[0-9]{4}[-/][0-9]{2}[-/][0-9]{2}$",
    r"^[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{2,4}$",
];

fn date_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        DATE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("valid regex"))
            .collect()
    })
}

pub fn looks_like_date(text: &str) -> bool {
    date_patterns().iter().any(|re| re.is_match(text))
}

pub fn classify_value(value: &CellValue) -> ColumnType {
    match value {
        CellValue::Text(text) if looks_like_date(text) => ColumnType::Date,
        CellValue::Text(_) => ColumnType::Text,
        CellValue::Number(_) => ColumnType::Number,
        CellValue::Boolean(_) => ColumnType::Boolean,
        CellValue::Date(_) => ColumnType::Date,
        CellValue::Missing => ColumnType::Undefined,
    }
}

/// Types every column from the sample row only; later rows are never consulted.
pub fn infer_column_types(columns: &[String], sample: &Row) -> ColumnTypes {
    columns
        .iter()
        .map(|column| {
            let column_type = sample
                .get(column)
                .map(classify_value)
                .unwrap_or(ColumnType::Undefined);
            (column.clone(), column_type)
        })
        .collect()
}
