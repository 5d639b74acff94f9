use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Oldest entries are dropped past this many log lines.
pub const MAX_STATUS_LOG: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    pub tone: StatusTone,
    /// Rolling status log entries.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Default status shown before any dataset is loaded.
    pub fn idle() -> Self {
        let (label, color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Load the dataset to get started".into(),
            badge_label: label.into(),
            badge_color: color,
            tone: StatusTone::Idle,
            log: Vec::new(),
        }
    }

    /// Replace the message and append it to the rolling log.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = style::status_badge(tone);
        self.text = text.into();
        self.badge_label = label.into();
        self.badge_color = color;
        self.tone = tone;
        self.log.push(format!("[{label}] {}", self.text));
        if self.log.len() > MAX_STATUS_LOG {
            let overflow = self.log.len() - MAX_STATUS_LOG;
            self.log.drain(..overflow);
        }
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}
