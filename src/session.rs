//! Session context shared by every dashboard action.
//!
//! The session owns the loaded dataset, the product selection and the
//! classifier with its cache. UI code and tests drive it through the same
//! methods; nothing here touches egui.

use std::path::Path;

use thiserror::Error;

use crate::aggregate::{self, ChartSpec, ProductFilter, SentimentCount};
use crate::config::{self, AppConfig};
use crate::dataset::{self, Dataset, DatasetError, ReviewRow};
use crate::sentiment::lexicon::LEXICON_VERSION;
use crate::sentiment::{Classifier, ScoringError};

/// Precondition failures of the analyze action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please load the dataset first")]
    NoDataset,
}

/// A row whose scoring failed and was labeled Neutral.
#[derive(Debug, Clone, PartialEq)]
pub struct RowWarning {
    pub row: usize,
    pub error: ScoringError,
}

/// Outcome of one analyze action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    pub labeled: usize,
    pub cache_hits: usize,
    pub warnings: Vec<RowWarning>,
}

/// Outcome of one load action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
}

#[derive(Debug)]
pub struct Session {
    dataset: Option<Dataset>,
    filter: ProductFilter,
    classifier: Classifier,
    preview_rows: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Classifier::default(), config::DEFAULT_PREVIEW_ROWS)
    }
}

impl Session {
    pub fn new(classifier: Classifier, preview_rows: usize) -> Self {
        Self {
            dataset: None,
            filter: ProductFilter::All,
            classifier,
            preview_rows: config::clamp_preview_rows(preview_rows),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Classifier::lexicon(config.classifier.cache_capacity),
            config.dataset.preview_rows,
        )
    }

    /// Load the review file next to the executable.
    pub fn load_default(&mut self) -> Result<LoadReport, DatasetError> {
        let path = dataset::default_dataset_path()?;
        self.load_from(&path)
    }

    /// Replace the current dataset with the preview of `path`.
    ///
    /// On failure the previous dataset and product selection stay as they were.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadReport, DatasetError> {
        let loaded = dataset::load_dataset(path, self.preview_rows)?;
        let report = LoadReport { rows: loaded.len() };
        self.dataset = Some(loaded);
        self.filter = ProductFilter::All;
        Ok(report)
    }

    /// Label every row of the current dataset.
    pub fn analyze(&mut self) -> Result<AnalysisReport, AnalyzeError> {
        let dataset = self.dataset.as_mut().ok_or(AnalyzeError::NoDataset)?;
        let classifier = &mut self.classifier;
        let mut report = AnalysisReport::default();
        dataset.label_rows(|row, summary| {
            let outcome = classifier.classify(summary);
            if outcome.cached {
                report.cache_hits += 1;
            }
            if let Some(error) = outcome.warning {
                report.warnings.push(RowWarning { row, error });
            }
            outcome.label
        });
        report.labeled = dataset.len();
        let stats = self.classifier.cache().stats();
        tracing::info!(
            "Classified {} rows with lexicon v{LEXICON_VERSION} ({} cached, {} warnings)",
            report.labeled,
            report.cache_hits,
            report.warnings.len()
        );
        tracing::debug!(
            "Sentiment cache: {} entries, {} hits, {} misses, {} evictions",
            self.classifier.cache().len(),
            stats.hits,
            stats.misses,
            stats.evictions
        );
        Ok(report)
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn preview_rows(&self) -> usize {
        self.preview_rows
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn select_product(&mut self, filter: ProductFilter) {
        self.filter = filter;
    }

    /// Distinct products of the loaded dataset, without the "All" entry.
    pub fn products(&self) -> Vec<String> {
        self.dataset
            .as_ref()
            .map(|dataset| aggregate::product_options(dataset.rows()))
            .unwrap_or_default()
    }

    /// Rows matching the current product selection.
    pub fn filtered_rows(&self) -> Vec<&ReviewRow> {
        self.dataset
            .as_ref()
            .map(|dataset| aggregate::filter_rows(dataset.rows(), &self.filter))
            .unwrap_or_default()
    }

    pub fn sentiment_counts(&self) -> Vec<SentimentCount> {
        aggregate::aggregate(self.filtered_rows())
    }

    /// Chart for the current selection, once the dataset has been classified.
    pub fn chart(&self) -> Option<ChartSpec> {
        let dataset = self.dataset.as_ref()?;
        if !dataset.is_classified() {
            return None;
        }
        Some(ChartSpec::new(&self.filter, self.sentiment_counts()))
    }
}
