use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infra::import::xlsx::CalamineSheetReader;
use crate::platform::desktop::dialogs::{pick_spreadsheet, read_payload, show_error};
use crate::ui::format::{
    filter_placeholder, format_cell_value, loaded_message, row_class, row_count_summary,
    EMPTY_VIEW_MESSAGE,
};
use crate::ui::state::app_state::AppState;
use crate::usecase::services::import_service::ImportService;

const PAGE_STYLE: &str = "max-width: 1200px; margin: 0 auto; padding: 24px; font-family: sans-serif;";
const UPLOAD_BUTTON_STYLE: &str = "border: 1px solid #2563eb; background: #2563eb; color: #fff; padding: 8px 16px; border-radius: 6px; cursor: pointer;";
const FILTER_GRID_STYLE: &str = "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;";
const FILTER_INPUT_STYLE: &str = "width: 100%; padding: 6px 8px; border: 1px solid #bbb; border-radius: 6px; box-sizing: border-box;";
const TABLE_CONTAINER_STYLE: &str = "overflow: auto; max-height: 60vh; border: 1px solid #ddd; border-radius: 8px; margin-top: 16px;";
const HEADER_CELL_STYLE: &str = "position: sticky; top: 0; background: #f3f4f6; text-align: left; padding: 8px; border-bottom: 1px solid #ddd;";
const CELL_STYLE: &str = "padding: 6px 8px; border-bottom: 1px solid #eee; white-space: nowrap;";

/// One rendered table row: stripe class plus formatted cells.
struct RenderedRow {
    class: &'static str,
    style: &'static str,
    cells: Vec<String>,
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut viewer,
        mut busy,
        mut status,
    } = AppState::new();

    let import_service = Arc::new(ImportService::new(Arc::new(CalamineSheetReader)));
    let accepted_extensions = use_context::<AppConfig>().accepted_extensions;

    let (columns, filter_values, rendered_rows, shown, total) = {
        let state = viewer.read();
        match state.loaded() {
            Some(sheet) => {
                let columns = sheet.dataset.columns.clone();
                let filter_values: Vec<String> = columns
                    .iter()
                    .map(|column| sheet.filters.get(column).to_string())
                    .collect();
                let rendered_rows: Vec<RenderedRow> = sheet
                    .visible_rows()
                    .enumerate()
                    .map(|(idx, row)| RenderedRow {
                        class: row_class(idx),
                        style: if idx % 2 == 0 { "" } else { "background: #f9fafb;" },
                        cells: columns
                            .iter()
                            .map(|column| format_cell_value(row.get(column), sheet.column_type(column)))
                            .collect(),
                    })
                    .collect();
                let shown = rendered_rows.len();
                (columns, filter_values, rendered_rows, shown, sheet.total_rows())
            }
            None => (Vec::new(), Vec::new(), Vec::new(), 0, 0),
        }
    };
    let is_loaded = viewer.read().is_loaded();
    let column_count = columns.len();
    let summary = row_count_summary(shown, total);

    rsx! {
        div {
            class: "container",
            style: PAGE_STYLE,
            h1 { class: "main-title", "Excel Data Filter" }

            div {
                class: "upload-section",
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                button {
                    class: "upload-button",
                    style: UPLOAD_BUTTON_STYLE,
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = pick_spreadsheet(&accepted_extensions) else {
                            if !viewer.peek().is_loaded() {
                                *status.write() = "Upload cancelled".to_string();
                            }
                            return;
                        };

                        *busy.write() = true;
                        info!(path = %file_path.display(), "reading spreadsheet");

                        let outcome = match read_payload(&file_path) {
                            Ok(payload) => viewer.write().apply_import(import_service.import(&payload)),
                            Err(err) => {
                                warn!(error = %format!("{err:#}"), "failed to read spreadsheet");
                                show_error(&format!("Error processing the file: {err:#}"));
                                *busy.write() = false;
                                return;
                            }
                        };

                        match outcome {
                            Ok(()) => {
                                let total = viewer.read().loaded().map(|s| s.total_rows()).unwrap_or(0);
                                *status.write() = loaded_message(total);
                            }
                            Err(err) => show_error(&err.to_string()),
                        }

                        *busy.write() = false;
                    },
                    "Upload Excel File"
                }
                if is_loaded {
                    p { class: "success-message", style: "color: #15803d;", "{status}" }
                } else {
                    span { "{status}" }
                }
            }

            if is_loaded {
                div {
                    class: "filter-section",
                    h2 { class: "section-title", "Filter Data" }
                    div {
                        class: "filter-grid",
                        style: FILTER_GRID_STYLE,
                        {columns.iter().zip(filter_values.iter()).map(|(column, value)| {
                            let column = column.clone();
                            let label = column.clone();
                            let placeholder = filter_placeholder(&column);
                            let value = value.clone();
                            rsx!(
                                div {
                                    key: "{label}",
                                    class: "filter-item",
                                    label { class: "filter-label", "{label}" }
                                    input {
                                        r#type: "text",
                                        class: "filter-input",
                                        style: FILTER_INPUT_STYLE,
                                        value: "{value}",
                                        placeholder: "{placeholder}",
                                        oninput: move |event| {
                                            if let Err(err) = viewer.write().update_filter(&column, &event.value()) {
                                                warn!(error = %err, "filter update rejected");
                                            }
                                        },
                                    }
                                }
                            )
                        })}
                    }
                }

                div {
                    class: "table-container",
                    style: TABLE_CONTAINER_STYLE,
                    table {
                        class: "data-table",
                        style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                for column in columns.iter() {
                                    th { class: "table-header", style: HEADER_CELL_STYLE, "{column}" }
                                }
                            }
                        }
                        tbody {
                            if rendered_rows.is_empty() {
                                tr {
                                    td {
                                        class: "empty-message",
                                        colspan: "{column_count}",
                                        style: "padding: 16px; text-align: center; color: #6b7280;",
                                        "{EMPTY_VIEW_MESSAGE}"
                                    }
                                }
                            } else {
                                for (row_idx, row) in rendered_rows.iter().enumerate() {
                                    tr {
                                        key: "{row_idx}",
                                        class: row.class,
                                        style: row.style,
                                        for cell in row.cells.iter() {
                                            td { class: "table-cell", style: CELL_STYLE, "{cell}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "results-count",
                    style: "margin-top: 8px; color: #4b5563;",
                    "{summary}"
                }
            }
        }
    }
}
