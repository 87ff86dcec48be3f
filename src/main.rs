mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use config::AppConfig;

fn main() {
    let config = AppConfig::load().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(&config.window_title))
                .with_data_directory(config.webview_data_dir.clone()),
        )
        .with_context(config)
        .launch(app::App);
}
