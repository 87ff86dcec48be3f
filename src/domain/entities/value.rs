use std::fmt;

use chrono::{NaiveDateTime, Timelike};

/// A single worksheet cell, tagged at ingestion time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDateTime),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(v) => write!(f, "{v}"),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Boolean(v) => write!(f, "{v}"),
            CellValue::Date(v) => {
                if v.time().num_seconds_from_midnight() == 0 {
                    write!(f, "{}", v.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn numbers_render_without_trailing_zero_fraction() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Number(-0.125).to_string(), "-0.125");
    }

    #[test]
    fn dates_render_time_only_when_present() {
        let midnight = NaiveDate::from_ymd_opt(2023, 5, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date");
        let afternoon = NaiveDate::from_ymd_opt(2023, 5, 1)
            .and_then(|d| d.and_hms_opt(14, 30, 5))
            .expect("valid date");

        assert_eq!(CellValue::Date(midnight).to_string(), "2023-05-01");
        assert_eq!(
            CellValue::Date(afternoon).to_string(),
            "2023-05-01 14:30:05"
        );
    }

    #[test]
    fn empty_text_is_missing() {
        assert!(CellValue::from("").is_missing());
        assert_eq!(CellValue::from("x"), CellValue::Text("x".to_string()));
        assert_eq!(CellValue::Missing.to_string(), "");
    }
}
