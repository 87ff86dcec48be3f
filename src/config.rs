use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

pub const WINDOW_TITLE: &str = "Excel Data Filter";
pub const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub accepted_extensions: Vec<String>,
    pub webview_data_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            window_title: WINDOW_TITLE.to_string(),
            accepted_extensions: SPREADSHEET_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            webview_data_dir: default_webview_data_dir()?,
        })
    }
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "sheet-filter")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
