//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// TOML configuration persistence.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// Remote sentiment service client.
pub mod sentiment_api;

mod http_client;
