use super::style;
use crate::egui_app::state::ChartView;
use eframe::egui::{
    Align2, FontId, Rect, Sense, Stroke, StrokeKind, Ui, epaint::TextShape, pos2, vec2,
};

const CHART_HEIGHT: f32 = 340.0;
const MIN_CHART_WIDTH: f32 = 320.0;
const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 36.0;
const MARGIN_BOTTOM: f32 = 52.0;
/// Share of each category slot covered by its bar.
const BAR_FILL_RATIO: f32 = 0.6;
const TARGET_TICKS: usize = 5;

/// Screen geometry of one chart frame.
#[derive(Debug, PartialEq)]
pub(super) struct ChartLayout {
    pub plot: Rect,
    pub bars: Vec<Rect>,
    /// Whole-number gridline values, starting at 0.
    pub ticks: Vec<usize>,
    pub y_max: usize,
}

impl ChartLayout {
    pub fn y_for(&self, value: usize) -> f32 {
        let ratio = value as f32 / self.y_max as f32;
        self.plot.bottom() - ratio * self.plot.height()
    }
}

/// Integer gridline values covering `max_count` in roughly five steps.
pub(super) fn tick_values(max_count: usize) -> Vec<usize> {
    let step = max_count.div_ceil(TARGET_TICKS).max(1);
    let top = max_count.div_ceil(step).max(1) * step;
    (0..=top).step_by(step).collect()
}

pub(super) fn layout(outer: Rect, counts: &[usize]) -> ChartLayout {
    let plot = Rect::from_min_max(
        pos2(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
        pos2(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
    );
    let ticks = tick_values(counts.iter().copied().max().unwrap_or(0));
    let y_max = ticks.last().copied().unwrap_or(1);
    let slot = plot.width() / counts.len().max(1) as f32;
    let bar_width = slot * BAR_FILL_RATIO;
    let bars = counts
        .iter()
        .enumerate()
        .map(|(index, count)| {
            let center_x = plot.left() + slot * (index as f32 + 0.5);
            let height = plot.height() * *count as f32 / y_max as f32;
            Rect::from_min_max(
                pos2(center_x - bar_width / 2.0, plot.bottom() - height),
                pos2(center_x + bar_width / 2.0, plot.bottom()),
            )
        })
        .collect();
    ChartLayout {
        plot,
        bars,
        ticks,
        y_max,
    }
}

/// Paint the vertical bar chart; no legend, the bar colors carry the labels.
pub(super) fn render_sentiment_chart(ui: &mut Ui, chart: &ChartView) {
    let palette = style::palette();
    let width = ui.available_width().max(MIN_CHART_WIDTH);
    let (outer, response) = ui.allocate_exact_size(vec2(width, CHART_HEIGHT), Sense::hover());
    let counts: Vec<usize> = chart.bars.iter().map(|bar| bar.count).collect();
    let layout = layout(outer, &counts);
    let plot = layout.plot;
    let painter = ui.painter_at(outer);

    painter.rect_filled(outer, 0.0, palette.bg_primary);
    painter.rect_stroke(outer, 0.0, style::section_stroke(), StrokeKind::Inside);
    painter.text(
        pos2(outer.center().x, outer.top() + 10.0),
        Align2::CENTER_TOP,
        &chart.title,
        FontId::proportional(15.0),
        palette.text_primary,
    );

    for tick in &layout.ticks {
        let y = layout.y_for(*tick);
        painter.line_segment(
            [pos2(plot.left(), y), pos2(plot.right(), y)],
            Stroke::new(1.0, palette.grid_soft),
        );
        painter.text(
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            tick.to_string(),
            FontId::proportional(11.0),
            palette.text_muted,
        );
    }

    for (bar, rect) in chart.bars.iter().zip(&layout.bars) {
        painter.rect_filled(*rect, 0.0, bar.color);
        painter.text(
            pos2(rect.center().x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            &bar.label,
            FontId::proportional(12.0),
            palette.text_primary,
        );
    }
    if chart.bars.is_empty() {
        painter.text(
            plot.center(),
            Align2::CENTER_CENTER,
            "No reviews match this product",
            FontId::proportional(12.0),
            palette.text_muted,
        );
    }

    let axis = Stroke::new(1.0, palette.grid_strong);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);

    painter.text(
        pos2(plot.center().x, outer.bottom() - 6.0),
        Align2::CENTER_BOTTOM,
        &chart.x_axis_title,
        FontId::proportional(12.0),
        palette.text_muted,
    );
    let galley = painter.layout_no_wrap(
        chart.y_axis_title.clone(),
        FontId::proportional(12.0),
        palette.text_muted,
    );
    let anchor = pos2(outer.left() + 6.0, plot.center().y + galley.size().x / 2.0);
    painter.add(
        TextShape::new(anchor, galley, palette.text_muted)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );

    if let Some(pointer) = response.hover_pos()
        && let Some(bar) = chart
            .bars
            .iter()
            .zip(&layout.bars)
            .find_map(|(bar, rect)| rect.contains(pointer).then_some(bar))
    {
        response.on_hover_text_at_pointer(format!("{}: {}", bar.label, bar.count));
    }
}
