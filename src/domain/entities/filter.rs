use std::collections::BTreeMap;

/// Free-text filter per column. An empty string means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    /// One empty filter for every column.
    pub fn for_columns(columns: &[String]) -> Self {
        Self {
            values: columns
                .iter()
                .map(|column| (column.clone(), String::new()))
                .collect(),
        }
    }

    pub fn set(&mut self, column: &str, text: impl Into<String>) {
        self.values.insert(column.to_string(), text.into());
    }

    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Columns with a non-empty filter, paired with the lowercased needle.
    pub fn active(&self) -> Vec<(&str, String)> {
        self.values
            .iter()
            .map(|(column, text)| (column.as_str(), text.to_lowercase()))
            .filter(|(_, needle)| !needle.is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}
