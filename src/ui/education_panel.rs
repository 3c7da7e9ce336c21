//! Education section rendering
//!
//! Page header followed by either the loading spinner or the timeline,
//! centred in a container sized by the view's current layout.

use eframe::egui;
use egui::{Align, Layout, RichText};
use std::time::Duration;

use crate::presentation::color_mapping;
use crate::rendering::timeline_renderer::{self, TimelineOptions};
use folio::theme::color_or_fallback;
use folio::{icon_uri, EducationView, IconElement, ThemeDescriptor};

const FADE_DURATION: Duration = Duration::from_millis(500);

/// Renders the education section of a mounted view
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `view` - The mounted view
/// * `theme` - Active theme, passed explicitly
/// * `viewport_width` - Window width the layout percentage applies to
pub fn render_education(
    ui: &mut egui::Ui,
    view: &EducationView,
    theme: &ThemeDescriptor,
    viewport_width: f32,
) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(view.header())
                .size(32.0)
                .strong()
                .color(color_or_fallback(theme.color)),
        );
    });
    ui.add_space(24.0);

    if view.is_loading() {
        render_spinner(ui, theme);
        return;
    }

    let opacity = fade_opacity(view.loaded_for());
    if opacity < 1.0 {
        ui.ctx().request_repaint();
    }

    let layout = view.layout();
    let width = layout.width_px(viewport_width).min(ui.available_width());
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    let colors = color_mapping::timeline_colors(theme);
    let icons: Vec<IconElement> = view
        .icon_elements()
        .into_iter()
        .map(|icon| IconElement {
            src: icon_uri(view.endpoint(), &icon.src),
            ..icon
        })
        .collect();

    ui.horizontal_top(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.set_opacity(opacity);
            timeline_renderer::render_timeline(
                ui,
                view.items(),
                &icons,
                layout.mode,
                &colors,
                &TimelineOptions::default(),
            );
        });
    });
    ui.add_space(24.0);
}

/// Placeholder shown while the dataset is not there yet.
fn render_spinner(ui: &mut egui::Ui, theme: &ThemeDescriptor) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(48.0);
        ui.add(
            egui::Spinner::new()
                .size(40.0)
                .color(color_or_fallback(theme.accent_color)),
        );
    });
}

/// Opacity for the fade-in after loading.
fn fade_opacity(loaded_for: Option<Duration>) -> f32 {
    match loaded_for {
        Some(elapsed) => (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0),
        None => 1.0,
    }
}
