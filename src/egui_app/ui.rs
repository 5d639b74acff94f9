//! egui renderer for the dashboard.

mod chart;
mod chrome;
pub mod style;
mod table;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, RichText, Ui, Vec2};

/// Smallest window that keeps the buttons and chart readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(720.0, 480.0);
pub const APP_TITLE: &str = "Local Sentiment Analysis Dashboard";
const APP_SUBTITLE: &str =
    "This is your local model powered sentiment analysis app using a static lexicon.";

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    /// Create the app from persisted configuration.
    pub fn from_config() -> Self {
        Self::new(EguiController::from_config())
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_dashboard(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new(APP_TITLE).color(palette.text_primary));
        ui.label(RichText::new(APP_SUBTITLE).color(palette.text_muted));
        ui.add_space(12.0);
        self.render_actions(ui);
        ui.add_space(12.0);

        if !self.controller.ui.dashboard.is_loaded() {
            return;
        }
        self.render_product_filter(ui);
        ui.add_space(12.0);

        let dashboard = self.controller.ui.dashboard.clone();
        ui.label(RichText::new(dashboard.table_heading()).strong().size(16.0));
        if let Some(table) = &dashboard.table {
            ui.label(RichText::new(format!("Source: {}", table.source)).color(palette.text_muted));
            table::render_review_table(ui, table);
        }
        if let Some(chart) = &dashboard.chart {
            ui.add_space(16.0);
            ui.label(RichText::new(dashboard.chart_heading()).strong().size(16.0));
            chart::render_sentiment_chart(ui, chart);
        }
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        let mut load = false;
        let mut analyze = false;
        ui.columns(2, |columns| {
            let size = egui::vec2(columns[0].available_width(), 32.0);
            load = columns[0]
                .add_sized(size, egui::Button::new("Load Dataset"))
                .clicked();
            analyze = columns[1]
                .add_sized(size, egui::Button::new("Analyze Sentiment"))
                .clicked();
        });
        if load {
            self.controller.load_dataset();
        }
        if analyze {
            self.controller.analyze_sentiment();
        }
    }

    fn render_product_filter(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Filter by Product").strong().size(16.0));
        let options = self.controller.ui.dashboard.product_options.clone();
        let selected = self.controller.ui.dashboard.selected_product.clone();
        let mut picked = None;
        egui::ComboBox::from_id_salt("product_filter")
            .width(260.0)
            .selected_text(&selected)
            .show_ui(ui, |ui| {
                for option in &options {
                    if ui.selectable_label(option == &selected, option).clicked() {
                        picked = Some(option.clone());
                    }
                }
            });
        if let Some(option) = picked.filter(|option| option != &selected) {
            self.controller.select_product(&option);
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| self.render_dashboard(ui));
        });
    }
}
