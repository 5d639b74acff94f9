//! Maps button presses and dropdown changes onto the session and refreshes
//! the UI model consumed by the renderer.

use std::path::PathBuf;

use crate::aggregate::ProductFilter;
use crate::config;
use crate::dataset::DatasetError;
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model;
use crate::session::{AnalyzeError, Session};

pub const LOAD_SUCCESS_MESSAGE: &str = "Dataset loaded successfully!";
pub const LOAD_NOT_FOUND_MESSAGE: &str = "Dataset not found. Please check the file path.";
pub const ANALYZE_SUCCESS_MESSAGE: &str = "Sentiment analysis completed!";
pub const ANALYZE_NO_DATASET_MESSAGE: &str = "Please load the dataset first.";

/// Owns the session and keeps `ui` in sync with it.
pub struct EguiController {
    pub ui: UiState,
    session: Session,
    /// Overrides the file next to the executable.
    dataset_path: Option<PathBuf>,
}

impl EguiController {
    pub fn new(session: Session) -> Self {
        Self {
            ui: UiState::default(),
            session,
            dataset_path: None,
        }
    }

    /// Build from `config.toml`, falling back to defaults with a warning.
    pub fn from_config() -> Self {
        match config::load_or_default() {
            Ok(config) => Self::new(Session::from_config(&config)),
            Err(err) => {
                tracing::warn!("Using default settings: {err}");
                let mut controller = Self::new(Session::default());
                controller.set_status(
                    format!("Failed to load config, using defaults: {err}"),
                    StatusTone::Warning,
                );
                controller
            }
        }
    }

    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = Some(path.into());
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle the "Load Dataset" button.
    pub fn load_dataset(&mut self) {
        let result = match &self.dataset_path {
            Some(path) => self.session.load_from(path),
            None => self.session.load_default(),
        };
        match result {
            Ok(_) => {
                self.set_status(LOAD_SUCCESS_MESSAGE, StatusTone::Info);
                self.refresh_dashboard();
            }
            Err(DatasetError::NotFound { path }) => {
                tracing::warn!("Dataset missing at {}", path.display());
                self.set_status(LOAD_NOT_FOUND_MESSAGE, StatusTone::Error);
            }
            Err(err) => {
                tracing::error!("Dataset load failed: {err}");
                self.set_status(
                    format!("Unexpected error loading dataset: {err}"),
                    StatusTone::Error,
                );
            }
        }
    }

    /// Handle the "Analyze Sentiment" button.
    pub fn analyze_sentiment(&mut self) {
        match self.session.analyze() {
            Ok(report) if report.warnings.is_empty() => {
                self.set_status(ANALYZE_SUCCESS_MESSAGE, StatusTone::Info);
                self.refresh_dashboard();
            }
            Ok(report) => {
                let rows: Vec<String> = report
                    .warnings
                    .iter()
                    .map(|warning| warning.row.to_string())
                    .collect();
                self.set_status(
                    format!(
                        "{ANALYZE_SUCCESS_MESSAGE} {} review(s) could not be scored and were marked Neutral (rows {}).",
                        report.warnings.len(),
                        rows.join(", ")
                    ),
                    StatusTone::Warning,
                );
                self.refresh_dashboard();
            }
            Err(AnalyzeError::NoDataset) => {
                self.set_status(ANALYZE_NO_DATASET_MESSAGE, StatusTone::Warning);
            }
        }
    }

    /// Handle a dropdown change; `option` is the entry text.
    pub fn select_product(&mut self, option: &str) {
        if self.session.dataset().is_none() {
            return;
        }
        self.session.select_product(ProductFilter::from_option(option));
        self.refresh_dashboard();
    }

    fn refresh_dashboard(&mut self) {
        let dashboard = &mut self.ui.dashboard;
        let Some(dataset) = self.session.dataset() else {
            *dashboard = Default::default();
            return;
        };
        let filter = self.session.filter();
        dashboard.product_options = view_model::product_options(self.session.products());
        dashboard.selected_product = filter.label().to_string();
        dashboard.table = Some(view_model::review_table(dataset, filter));
        dashboard.chart = self.session.chart().as_ref().map(view_model::chart);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
