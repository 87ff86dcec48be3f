use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::viewer::ViewerState;

pub const READY_STATUS: &str = "Choose an .xlsx or .xls file to begin.";

pub struct AppState {
    pub viewer: Signal<ViewerState>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            viewer: use_signal(ViewerState::default),
            busy: use_signal(|| false),
            status: use_signal(|| READY_STATUS.to_string()),
        }
    }
}
