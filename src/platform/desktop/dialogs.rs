use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

pub fn pick_spreadsheet(extensions: &[String]) -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Excel", extensions)
        .pick_file()
}

pub fn read_payload(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Blocks until the user dismisses the dialog.
pub fn show_error(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Excel Data Filter")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
