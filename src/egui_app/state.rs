//! Shared state types for the egui UI.

mod dashboard;
mod status;

pub use dashboard::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub status: StatusBarState,
    pub dashboard: DashboardState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            dashboard: DashboardState::default(),
        }
    }
}
