//! Library exports for the dashboard binary, benchmarks and tests.
/// Product filtering and sentiment distribution.
pub mod aggregate;
/// Application directory helpers.
pub mod app_dirs;
/// Persisted TOML settings.
pub mod config;
/// Review table and CSV loader.
pub mod dataset;
/// egui controller, state and renderer.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Lexicon sentiment scoring and classification.
pub mod sentiment;
/// Session context driving load, analyze and filter actions.
pub mod session;
