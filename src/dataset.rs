//! In-memory review table.
//!
//! A [`Dataset`] is the bounded preview of the source CSV: the original header
//! row, every cell for table display, and the two columns the dashboard
//! works with (`PRODUCT` and `SUMMARY`). Classification writes one label per
//! row in place; nothing else mutates a loaded dataset.

pub mod loader;

pub use loader::{
    DEFAULT_DATASET_FILE, DatasetError, LoadFailure, default_dataset_path, load_dataset,
};

use std::path::{Path, PathBuf};

use crate::sentiment::SentimentLabel;

/// Column holding the product identifier.
pub const PRODUCT_COLUMN: &str = "PRODUCT";
/// Column holding the free-text review summary.
pub const SUMMARY_COLUMN: &str = "SUMMARY";
/// Derived column written by classification.
pub const SENTIMENT_COLUMN: &str = "Sentiment";

/// One review; identity is its position in the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRow {
    /// Raw cells in header order, padded to the header width.
    pub cells: Vec<String>,
    pub product: String,
    /// `None` when the cell is empty or a null marker.
    pub summary: Option<String>,
    /// Set for every row once classification has run.
    pub sentiment: Option<SentimentLabel>,
}

/// Loaded preview of the review file.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    source: PathBuf,
    headers: Vec<String>,
    rows: Vec<ReviewRow>,
    /// Index of a source column already named `Sentiment`, overwritten on display.
    sentiment_column: Option<usize>,
    classified: bool,
}

impl Dataset {
    pub(crate) fn new(source: PathBuf, headers: Vec<String>, rows: Vec<ReviewRow>) -> Self {
        let sentiment_column = headers.iter().position(|name| name == SENTIMENT_COLUMN);
        Self {
            source,
            headers,
            rows,
            sentiment_column,
            classified: false,
        }
    }

    /// Build a dataset from `(product, summary)` pairs, mainly for tests and benches.
    pub fn from_reviews<'a>(
        reviews: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    ) -> Self {
        let rows = reviews
            .into_iter()
            .map(|(product, summary)| ReviewRow {
                cells: vec![product.to_string(), summary.unwrap_or_default().to_string()],
                product: product.to_string(),
                summary: summary.map(str::to_string),
                sentiment: None,
            })
            .collect();
        Self::new(
            PathBuf::new(),
            vec![PRODUCT_COLUMN.to_string(), SUMMARY_COLUMN.to_string()],
            rows,
        )
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[ReviewRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the Sentiment column has been derived.
    pub fn is_classified(&self) -> bool {
        self.classified
    }

    /// Label every row from its summary, replacing earlier labels.
    pub fn label_rows(&mut self, mut label: impl FnMut(usize, Option<&str>) -> SentimentLabel) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.sentiment = Some(label(index, row.summary.as_deref()));
        }
        self.classified = true;
    }

    /// Header row as shown in the table, including the derived column.
    pub fn display_headers(&self) -> Vec<&str> {
        let mut headers: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        if self.classified && self.sentiment_column.is_none() {
            headers.push(SENTIMENT_COLUMN);
        }
        headers
    }

    /// Cells of `row` as shown in the table, aligned with [`Self::display_headers`].
    pub fn display_cells<'a>(&self, row: &'a ReviewRow) -> Vec<&'a str> {
        let mut cells: Vec<&str> = row.cells.iter().map(String::as_str).collect();
        if !self.classified {
            return cells;
        }
        let label = row.sentiment.map(SentimentLabel::as_str).unwrap_or_default();
        match self.sentiment_column {
            Some(index) => cells[index] = label,
            None => cells.push(label),
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeling_marks_every_row_and_appends_display_column() {
        let mut dataset = Dataset::from_reviews([("A", Some("good")), ("B", None)]);
        assert_eq!(dataset.display_headers(), vec!["PRODUCT", "SUMMARY"]);
        dataset.label_rows(|_, summary| match summary {
            Some(_) => SentimentLabel::Positive,
            None => SentimentLabel::Neutral,
        });
        assert!(dataset.is_classified());
        assert!(dataset.rows().iter().all(|row| row.sentiment.is_some()));
        assert_eq!(
            dataset.display_headers(),
            vec!["PRODUCT", "SUMMARY", "Sentiment"]
        );
        let row = &dataset.rows()[1];
        assert_eq!(dataset.display_cells(row), vec!["B", "", "Neutral"]);
    }

    #[test]
    fn existing_sentiment_column_is_overwritten_on_display() {
        let headers = vec![
            PRODUCT_COLUMN.to_string(),
            SENTIMENT_COLUMN.to_string(),
            SUMMARY_COLUMN.to_string(),
        ];
        let row = ReviewRow {
            cells: vec!["A".into(), "stale".into(), "awful".into()],
            product: "A".into(),
            summary: Some("awful".into()),
            sentiment: None,
        };
        let mut dataset = Dataset::new(PathBuf::from("reviews.csv"), headers, vec![row]);
        assert_eq!(
            dataset.display_cells(&dataset.rows()[0]),
            vec!["A", "stale", "awful"]
        );
        dataset.label_rows(|_, _| SentimentLabel::Negative);
        assert_eq!(dataset.display_headers().len(), 3);
        assert_eq!(
            dataset.display_cells(&dataset.rows()[0]),
            vec!["A", "Negative", "awful"]
        );
    }
}
