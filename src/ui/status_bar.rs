//! Status bar UI rendering
//!
//! Bottom bar showing the active layout, the data endpoint and record count.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let width = state
            .viewport
            .width()
            .map(|w| format!("{:.0}px", w))
            .unwrap_or_else(|| "?".to_string());
        ui.label(RichText::new(format!("Window: {}", width)).strong());

        let Some(view) = &state.view else {
            ui.label(RichText::new("| No data source").strong());
            return;
        };

        let layout = view.layout();
        ui.label(RichText::new(format!("| Layout: {} {}", layout.css_width(), layout.mode)).strong());

        let records = match view.dataset() {
            Some(dataset) => format!("{} records", dataset.len()),
            None => "loading".to_string(),
        };
        ui.label(RichText::new(format!("| {} | {}", view.endpoint(), records)).strong());
        ui.label(RichText::new(format!("| Theme: {}", state.theme.current_theme_name())).strong());
    });
}
