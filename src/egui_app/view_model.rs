//! Helpers to convert domain data into egui-facing view structs.

use crate::aggregate::{ALL_PRODUCTS_LABEL, ChartSpec, ProductFilter};
use crate::dataset::{Dataset, SENTIMENT_COLUMN};
use crate::egui_app::state::{ChartBarView, ChartView, ReviewRowView, ReviewTableView};
use crate::egui_app::ui::style;

/// Dropdown entries: "All Products" followed by the distinct products.
pub fn product_options(products: Vec<String>) -> Vec<String> {
    std::iter::once(ALL_PRODUCTS_LABEL.to_string())
        .chain(products)
        .collect()
}

/// Table rows matching `filter`, keeping each row's dataset position.
pub fn review_table(dataset: &Dataset, filter: &ProductFilter) -> ReviewTableView {
    let headers: Vec<String> = dataset
        .display_headers()
        .into_iter()
        .map(str::to_string)
        .collect();
    let sentiment_cell = if dataset.is_classified() {
        headers.iter().position(|name| name == SENTIMENT_COLUMN)
    } else {
        None
    };
    let rows = dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| filter.matches(row))
        .map(|(index, row)| ReviewRowView {
            index,
            cells: dataset
                .display_cells(row)
                .into_iter()
                .map(str::to_string)
                .collect(),
            sentiment_cell,
            sentiment: row.sentiment,
        })
        .collect();
    ReviewTableView {
        source: dataset.source().display().to_string(),
        headers,
        rows,
    }
}

pub fn chart(spec: &ChartSpec) -> ChartView {
    ChartView {
        title: spec.title.clone(),
        x_axis_title: spec.x_axis_title.to_string(),
        y_axis_title: spec.y_axis_title.to_string(),
        bars: spec
            .bars
            .iter()
            .map(|bar| ChartBarView {
                label: bar.label.to_string(),
                count: bar.count,
                color: style::bar_fill(bar.color),
            })
            .collect(),
    }
}
