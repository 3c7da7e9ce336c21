//! Navigation bar rendering
//!
//! Top bar with the section link, the dataset picker and the theme toggle.

use eframe::egui;
use egui::{Align, Align2, FontId, Layout, Sense};
use std::path::PathBuf;

use crate::presentation::color_mapping::NavbarColors;
use folio::ThemeName;

/// Result of user interaction with the navigation bar
pub enum HeaderInteraction {
    /// User picked a local dataset file
    OpenFileRequested(PathBuf),
    /// User clicked the theme toggle
    ThemeToggled,
}

/// Renders the navigation bar
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `title` - Section title shown as the active link
/// * `theme` - Currently active theme, decides the toggle glyph
/// * `colors` - Navbar colours for the active theme
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(
    ui: &mut egui::Ui,
    title: &str,
    theme: ThemeName,
    colors: &NavbarColors,
) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        nav_link(ui, title, true, colors);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let glyph = match theme {
                ThemeName::Light => "🌙",
                ThemeName::Dark => "☀",
            };
            if nav_link(ui, glyph, false, colors)
                .on_hover_text("Toggle theme")
                .clicked()
            {
                interaction = Some(HeaderInteraction::ThemeToggled);
            }

            if nav_link(ui, "📂 Open", false, colors)
                .on_hover_text("Load education data from a JSON file")
                .clicked()
            {
                let mut dialog = rfd::FileDialog::new().add_filter("JSON", &["json"]);
                if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }
                if let Some(path) = dialog.pick_file() {
                    interaction = Some(HeaderInteraction::OpenFileRequested(path));
                }
            }
        });
    });

    interaction
}

/// Draws a text link in the navbar colours: active, hovered or idle.
fn nav_link(ui: &mut egui::Ui, text: &str, active: bool, colors: &NavbarColors) -> egui::Response {
    let font = FontId::proportional(15.0);
    let size = ui
        .painter()
        .layout_no_wrap(text.to_string(), font.clone(), colors.link)
        .size();

    let (rect, response) = ui.allocate_exact_size(size + egui::vec2(12.0, 6.0), Sense::click());
    let color = if active {
        colors.link_active
    } else if response.hovered() {
        colors.link_hover
    } else {
        colors.link
    };

    ui.painter().text(rect.center(), Align2::CENTER_CENTER, text, font, color);
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
