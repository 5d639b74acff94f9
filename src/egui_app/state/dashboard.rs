use crate::aggregate::ALL_PRODUCTS_LABEL;
use crate::sentiment::SentimentLabel;
use egui::Color32;

/// Everything rendered below the action buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    /// Dropdown entries, "All Products" first.
    pub product_options: Vec<String>,
    pub selected_product: String,
    /// `None` until a dataset has been loaded.
    pub table: Option<ReviewTableView>,
    /// `None` until the loaded dataset has been classified.
    pub chart: Option<ChartView>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            product_options: Vec::new(),
            selected_product: ALL_PRODUCTS_LABEL.to_string(),
            table: None,
            chart: None,
        }
    }
}

impl DashboardState {
    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn table_heading(&self) -> String {
        format!("Reviews for {}", self.selected_product)
    }

    pub fn chart_heading(&self) -> String {
        format!("Sentiment Breakdown for {}", self.selected_product)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewTableView {
    /// File the rows were loaded from.
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<ReviewRowView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRowView {
    /// Position in the loaded dataset.
    pub index: usize,
    pub cells: Vec<String>,
    /// Column of `cells` holding the label, when classified.
    pub sentiment_cell: Option<usize>,
    pub sentiment: Option<SentimentLabel>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub bars: Vec<ChartBarView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartBarView {
    pub label: String,
    pub count: usize,
    pub color: Color32,
}
