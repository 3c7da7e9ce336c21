//! Panel orchestration and layout management.
//!
//! Coordinates the navigation bar, the education section and the status bar.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::{education_panel, header, status_bar};
use folio::theme::color_or_fallback;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User picked a local dataset file
    OpenFileRequested(std::path::PathBuf),
    /// User toggled between light and dark
    ThemeToggled,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme = state.theme.descriptor();
        let navbar = color_mapping::navbar_colors(theme);

        let navbar_frame = egui::Frame::default()
            .inner_margin(egui::Margin::symmetric(12, 6))
            .fill(navbar.background);

        egui::TopBottomPanel::top("navbar").frame(navbar_frame).show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(
                ui,
                &state.config.header,
                state.theme.current_theme_name(),
                &navbar,
            ) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::ThemeToggled => PanelInteraction::ThemeToggled,
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let content_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(color_or_fallback(theme.background));

        egui::CentralPanel::default().frame(content_frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("education_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| match &state.view {
                    Some(view) => {
                        let viewport_width = state
                            .viewport
                            .width()
                            .unwrap_or_else(|| ctx.content_rect().width());
                        education_panel::render_education(ui, view, theme, viewport_width);
                    }
                    None => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(48.0);
                            ui.label("No education data source configured.");
                        });
                    }
                });
        });

        interaction
    }
}
