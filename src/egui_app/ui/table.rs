use super::style;
use crate::aggregate::color_for;
use crate::egui_app::state::ReviewTableView;
use eframe::egui::{self, RichText, Ui};

const MAX_TABLE_HEIGHT: f32 = 320.0;

/// Striped grid of the filtered reviews; the first column is the row position.
pub(super) fn render_review_table(ui: &mut Ui, table: &ReviewTableView) {
    let palette = style::palette();
    if table.rows.is_empty() {
        ui.label(RichText::new("No reviews for this product.").color(palette.text_muted));
        return;
    }
    egui::ScrollArea::both()
        .id_salt("reviews_table_scroll")
        .max_height(MAX_TABLE_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("reviews_table")
                .striped(true)
                .min_col_width(48.0)
                .spacing(egui::vec2(16.0, 6.0))
                .show(ui, |ui| {
                    ui.label("");
                    for header in &table.headers {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();
                    for row in &table.rows {
                        ui.label(RichText::new(row.index.to_string()).color(palette.text_muted));
                        for (column, cell) in row.cells.iter().enumerate() {
                            let mut text = RichText::new(cell);
                            if row.sentiment_cell == Some(column)
                                && let Some(label) = row.sentiment
                            {
                                text = text.color(style::bar_fill(color_for(label)));
                            }
                            ui.label(text);
                        }
                        ui.end_row();
                    }
                });
        });
}
