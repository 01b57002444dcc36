#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lazy_desktop::{App, DesktopApp, init_logging};
use lazy_settings::AppConfig;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(std::env::args_os().nth(1))?;
    let _logger = init_logging(env!("CARGO_PKG_NAME"), &config.logging)?;

    info!(delay_ms = config.loader.delay_ms, "Starting host");

    DesktopApp::from_config(&config.window).launch(App, config);

    Ok(())
}
