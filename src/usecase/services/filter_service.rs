use crate::domain::entities::dataset::{Dataset, Row};
use crate::domain::entities::filter::FilterState;

/// A row passes when every active filter is a substring of its cell, ignoring case.
/// A row without a value in a filtered column never passes.
pub fn row_matches(row: &Row, active: &[(&str, String)]) -> bool {
    active.iter().all(|(column, needle)| match row.get(column) {
        Some(value) => value.to_string().to_lowercase().contains(needle.as_str()),
        None => false,
    })
}

/// Indices of the rows that pass every filter, in dataset order.
pub fn apply_filters(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    let active = filters.active();
    if active.is_empty() {
        return (0..dataset.row_count()).collect();
    }

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, &active))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::value::CellValue;

    fn people() -> Dataset {
        let columns = vec!["Name".to_string(), "City".to_string(), "Age".to_string()];
        let rows: Vec<Row> = vec![
            [
                ("Name", CellValue::from("Alice")),
                ("City", CellValue::from("Paris")),
                ("Age", CellValue::Number(31.0)),
            ]
            .into_iter()
            .collect(),
            [
                ("Name", CellValue::from("Bob")),
                ("City", CellValue::from("Tokyo")),
            ]
            .into_iter()
            .collect(),
            [
                ("Name", CellValue::from("Alicia")),
                ("City", CellValue::from("Lisbon")),
                ("Age", CellValue::Number(27.5)),
            ]
            .into_iter()
            .collect(),
        ];
        Dataset::new(columns, rows)
    }

    fn filters(dataset: &Dataset, pairs: &[(&str, &str)]) -> FilterState {
        let mut state = FilterState::for_columns(&dataset.columns);
        for (column, text) in pairs {
            state.set(column, *text);
        }
        state
    }

    #[test]
    fn empty_filters_keep_every_row() {
        let dataset = people();
        let state = FilterState::for_columns(&dataset.columns);

        assert_eq!(apply_filters(&dataset, &state), vec![0, 1, 2]);
    }

    #[test]
    fn substring_match_ignores_case() {
        let dataset = people();

        let lower = apply_filters(&dataset, &filters(&dataset, &[("Name", "ali")]));
        let upper = apply_filters(&dataset, &filters(&dataset, &[("Name", "ALI")]));

        assert_eq!(lower, vec![0, 2]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn filters_combine_with_and() {
        let dataset = people();
        let state = filters(&dataset, &[("Name", "ali"), ("City", "lis")]);

        assert_eq!(apply_filters(&dataset, &state), vec![2]);
    }

    #[test]
    fn missing_value_excludes_row_under_active_filter() {
        let dataset = people();
        let state = filters(&dataset, &[("Age", "")]);
        assert_eq!(apply_filters(&dataset, &state), vec![0, 1, 2]);

        let state = filters(&dataset, &[("Age", "3")]);
        assert_eq!(
            apply_filters(&dataset, &state),
            vec![0],
            "Bob has no age and must be excluded"
        );
    }

    #[test]
    fn numbers_match_on_their_display_form() {
        let dataset = people();
        let state = filters(&dataset, &[("Age", "27.5")]);

        assert_eq!(apply_filters(&dataset, &state), vec![2]);
    }

    #[test]
    fn repeated_application_is_stable() {
        let dataset = people();
        let state = filters(&dataset, &[("City", "o")]);

        let first = apply_filters(&dataset, &state);
        let second = apply_filters(&dataset, &state);

        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]), "order must be preserved");
    }
}
