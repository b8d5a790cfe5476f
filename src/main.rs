//! LibreChat Desktop - Main Entry Point
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use librechat_desktop::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting LibreChat Desktop...");

    // Run the GPUI application
    run_app();
}
