//! Transport Counter
//!
//! A local-first desktop tool for counting road users against video time.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod hotkeys;
mod logger;
mod state;
mod storage;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::config::AppConfig;
use crate::core::paths::{app_data_root, settings_path, DataDir};
use crate::core::protocol::{handle_request, PROTOCOL_NAME};

fn main() {
    logger::init_logging();

    let data_root = app_data_root();
    let app_config = AppConfig::load(&settings_path(&data_root));
    tracing::info!(data_root = ?data_root, "Starting Transport Counter");

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Transport Counter")
                .with_inner_size(LogicalSize::new(app_config.window_width, app_config.window_height))
                .with_resizable(true)
        )
        .with_menu(None) // Disable default menu bar
        .with_custom_protocol(PROTOCOL_NAME, |_webview_id, request| handle_request(&request));

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(app_config)
        .with_context(DataDir(data_root))
        .launch(app::App);
}
