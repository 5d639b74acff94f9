/// Action handlers that drive the session.
pub mod controller;
/// UI model types.
pub mod state;
/// egui renderer.
pub mod ui;
/// Domain-to-view conversions.
pub mod view_model;
