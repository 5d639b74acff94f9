//! Product filtering and sentiment distribution for the chart.

use crate::dataset::ReviewRow;
use crate::sentiment::SentimentLabel;

/// Dropdown entry meaning "do not filter".
pub const ALL_PRODUCTS_LABEL: &str = "All Products";
/// Horizontal axis title of the distribution chart.
pub const CHART_X_AXIS_TITLE: &str = "Sentiment Category";
/// Vertical axis title of the distribution chart.
pub const CHART_Y_AXIS_TITLE: &str = "Number of Reviews";
const CHART_TITLE_PREFIX: &str = "Distribution of Sentiment Classifications";

/// Fixed bar colors, independent of any UI toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarColor {
    Red,
    LightGray,
    Green,
}

impl BarColor {
    /// CSS color value as RGB.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            BarColor::Red => [255, 0, 0],
            BarColor::LightGray => [211, 211, 211],
            BarColor::Green => [0, 128, 0],
        }
    }
}

/// Color associated with each sentiment in the chart, in canonical order.
pub const SENTIMENT_COLORS: [(SentimentLabel, BarColor); 3] = [
    (SentimentLabel::Negative, BarColor::Red),
    (SentimentLabel::Neutral, BarColor::LightGray),
    (SentimentLabel::Positive, BarColor::Green),
];

pub fn color_for(label: SentimentLabel) -> BarColor {
    SENTIMENT_COLORS[canonical_index(label)].1
}

/// Current product selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProductFilter {
    #[default]
    All,
    Product(String),
}

impl ProductFilter {
    /// Map a dropdown entry back to a filter.
    pub fn from_option(option: &str) -> Self {
        if option == ALL_PRODUCTS_LABEL {
            ProductFilter::All
        } else {
            ProductFilter::Product(option.to_string())
        }
    }

    /// Text shown in the dropdown and the headings.
    pub fn label(&self) -> &str {
        match self {
            ProductFilter::All => ALL_PRODUCTS_LABEL,
            ProductFilter::Product(product) => product,
        }
    }

    pub fn matches(&self, row: &ReviewRow) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Product(product) => &row.product == product,
        }
    }
}

/// Rows matching `filter`, in dataset order.
pub fn filter_rows<'a>(rows: &'a [ReviewRow], filter: &ProductFilter) -> Vec<&'a ReviewRow> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}

/// Distinct product identifiers in order of first appearance.
pub fn product_options(rows: &[ReviewRow]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.product.as_str()))
        .map(|row| row.product.clone())
        .collect()
}

/// One chart bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentimentCount {
    pub label: SentimentLabel,
    /// Always at least 1; absent labels are omitted.
    pub count: usize,
    pub color: BarColor,
}

/// Count labels in canonical order, omitting labels that do not occur.
pub fn aggregate_labels(labels: impl IntoIterator<Item = SentimentLabel>) -> Vec<SentimentCount> {
    let mut counts = [0usize; 3];
    for label in labels {
        counts[canonical_index(label)] += 1;
    }
    SentimentLabel::CANONICAL_ORDER
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| SentimentCount {
            label,
            count,
            color: color_for(label),
        })
        .collect()
}

/// Count the labels of `rows`; unlabeled rows are skipped.
pub fn aggregate<'a>(rows: impl IntoIterator<Item = &'a ReviewRow>) -> Vec<SentimentCount> {
    aggregate_labels(rows.into_iter().filter_map(|row| row.sentiment))
}

fn canonical_index(label: SentimentLabel) -> usize {
    match label {
        SentimentLabel::Negative => 0,
        SentimentLabel::Neutral => 1,
        SentimentLabel::Positive => 2,
    }
}

/// Everything the chart painter needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub show_legend: bool,
    pub bars: Vec<SentimentCount>,
}

impl ChartSpec {
    pub fn new(filter: &ProductFilter, bars: Vec<SentimentCount>) -> Self {
        Self {
            title: format!("{CHART_TITLE_PREFIX} - {}", filter.label()),
            x_axis_title: CHART_X_AXIS_TITLE,
            y_axis_title: CHART_Y_AXIS_TITLE,
            show_legend: false,
            bars,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use SentimentLabel::*;

    fn labeled(reviews: &[(&'static str, SentimentLabel)]) -> Dataset {
        let mut dataset =
            Dataset::from_reviews(reviews.iter().map(|(product, _)| (*product, Some("text"))));
        dataset.label_rows(|index, _| reviews[index].1);
        dataset
    }

    #[test]
    fn orders_canonically_and_omits_absent_labels() {
        let counts = aggregate_labels([Positive, Neutral, Positive, Neutral, Positive]);
        assert_eq!(
            counts,
            vec![
                SentimentCount {
                    label: Neutral,
                    count: 2,
                    color: BarColor::LightGray
                },
                SentimentCount {
                    label: Positive,
                    count: 3,
                    color: BarColor::Green
                },
            ]
        );
    }

    #[test]
    fn order_ignores_count_magnitude_and_insertion_order() {
        let counts = aggregate_labels([Positive, Positive, Positive, Neutral, Negative]);
        let labels: Vec<_> = counts.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![Negative, Neutral, Positive]);
        assert_eq!(counts[0].color, BarColor::Red);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_labels(Vec::<SentimentLabel>::new()).is_empty());
        assert!(aggregate(&[] as &[ReviewRow]).is_empty());
    }

    #[test]
    fn counts_sum_to_filtered_row_count() {
        let dataset = labeled(&[
            ("A", Positive),
            ("B", Negative),
            ("A", Neutral),
            ("A", Positive),
            ("C", Negative),
        ]);
        for filter in [
            ProductFilter::All,
            ProductFilter::Product("A".into()),
            ProductFilter::Product("C".into()),
        ] {
            let rows = filter_rows(dataset.rows(), &filter);
            let total: usize = aggregate(rows.iter().copied()).iter().map(|c| c.count).sum();
            assert_eq!(total, rows.len(), "filter {filter:?}");
        }
    }

    #[test]
    fn unknown_product_filters_to_nothing() {
        let dataset = labeled(&[("A", Positive), ("B", Negative)]);
        let rows = filter_rows(dataset.rows(), &ProductFilter::Product("Z".into()));
        assert!(rows.is_empty());
        assert!(aggregate(rows).is_empty());
    }

    #[test]
    fn unlabeled_rows_are_skipped() {
        let dataset = Dataset::from_reviews([("A", Some("x")), ("B", None)]);
        assert!(aggregate(dataset.rows()).is_empty());
    }

    #[test]
    fn product_options_keep_first_appearance_order() {
        let dataset = labeled(&[
            ("Kettle", Positive),
            ("Blender", Negative),
            ("Kettle", Neutral),
            ("Toaster", Neutral),
        ]);
        assert_eq!(
            product_options(dataset.rows()),
            vec!["Kettle", "Blender", "Toaster"]
        );
    }

    #[test]
    fn dropdown_labels_round_trip_to_filters() {
        assert_eq!(ProductFilter::from_option("All Products"), ProductFilter::All);
        let kettle = ProductFilter::from_option("Kettle");
        assert_eq!(kettle, ProductFilter::Product("Kettle".into()));
        assert_eq!(kettle.label(), "Kettle");
    }

    #[test]
    fn chart_spec_uses_fixed_titles_and_no_legend() {
        let spec = ChartSpec::new(
            &ProductFilter::Product("Kettle".into()),
            aggregate_labels([Negative, Negative]),
        );
        assert_eq!(spec.title, "Distribution of Sentiment Classifications - Kettle");
        assert_eq!(spec.x_axis_title, "Sentiment Category");
        assert_eq!(spec.y_axis_title, "Number of Reviews");
        assert!(!spec.show_legend);
        assert_eq!(spec.bars.len(), 1);
        assert_eq!(spec.bars[0].count, 2);
    }

    #[test]
    fn colors_match_css_values() {
        let labels: Vec<_> = SENTIMENT_COLORS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, SentimentLabel::CANONICAL_ORDER);
        assert_eq!(color_for(Negative), BarColor::Red);
        assert_eq!(color_for(Neutral), BarColor::LightGray);
        assert_eq!(color_for(Positive), BarColor::Green);
        assert_eq!(BarColor::Red.rgb(), [255, 0, 0]);
        assert_eq!(BarColor::LightGray.rgb(), [211, 211, 211]);
        assert_eq!(BarColor::Green.rgb(), [0, 128, 0]);
    }
}
