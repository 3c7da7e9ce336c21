//! Vertical timeline widget.
//!
//! Draws an ordered sequence of education records as cards hanging off a
//! vertical line. In [`TimelineMode::Vertical`] every card sits to the right
//! of the line; in [`TimelineMode::VerticalAlternating`] cards alternate
//! sides, starting on the left, and the record's title sits opposite its card.
//!
//! Icons replace timeline points by position: icon `i` is drawn on point `i`.
//! Points past the end of the icon list, or whose icon has no source, get a
//! plain dot.

use eframe::egui;
use egui::{pos2, vec2, FontId, Pos2, Rect, RichText, Sense, Stroke};
use folio::{EducationRecord, IconElement, TimelineMode};

use crate::presentation::color_mapping::TimelineColors;
use crate::rendering::text_utils;

/// Height of every card, matching the site's fixed card height.
pub const CARD_HEIGHT: f32 = 250.0;

const ROW_GAP: f32 = 24.0;
const LINE_WIDTH: f32 = 3.0;
const POINT_RADIUS: f32 = 9.0;
const ICON_SIZE: f32 = 30.0;
/// Width reserved for the line in single-sided mode
const SIDE_GUTTER: f32 = 48.0;
/// Width reserved around the line in alternating mode
const CENTER_GUTTER: f32 = 56.0;
const TITLE_HEIGHT: f32 = 26.0;
const TITLE_SPACING: f32 = 4.0;
/// Distance from a card's top edge to its point
const POINT_OFFSET: f32 = 28.0;
const PILL_PADDING: f32 = 8.0;
const CARD_MARGIN: i8 = 12;

/// Widget options.
#[derive(Debug, Clone, Copy)]
pub struct TimelineOptions {
    pub card_height: f32,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            card_height: CARD_HEIGHT,
        }
    }
}

/// Where one row's parts are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub card: Rect,
    pub title: Rect,
    pub point: Pos2,
    /// Title sits left of the line and hugs it with its right edge
    pub title_on_left: bool,
}

/// Height of one row, excluding the gap to the next.
pub fn row_height(mode: TimelineMode, card_height: f32) -> f32 {
    match mode {
        TimelineMode::Vertical => TITLE_HEIGHT + TITLE_SPACING + card_height,
        TimelineMode::VerticalAlternating => card_height,
    }
}

/// Lays out row `index` inside `row`.
pub fn row_geometry(row: Rect, index: usize, mode: TimelineMode, card_height: f32) -> RowGeometry {
    match mode {
        TimelineMode::Vertical => {
            let content_left = row.left() + SIDE_GUTTER;
            let content_width = (row.width() - SIDE_GUTTER).max(0.0);
            let title = Rect::from_min_size(pos2(content_left, row.top()), vec2(content_width, TITLE_HEIGHT));
            let card = Rect::from_min_size(
                pos2(content_left, title.bottom() + TITLE_SPACING),
                vec2(content_width, card_height),
            );
            RowGeometry {
                card,
                title,
                point: pos2(row.left() + SIDE_GUTTER / 2.0, card.top() + POINT_OFFSET),
                title_on_left: false,
            }
        }
        TimelineMode::VerticalAlternating => {
            let center_x = row.center().x;
            let half = ((row.width() - CENTER_GUTTER) / 2.0).max(0.0);
            let left_x = row.left();
            let right_x = center_x + CENTER_GUTTER / 2.0;
            let card_on_left = index % 2 == 0;
            let (card_x, title_x) = if card_on_left { (left_x, right_x) } else { (right_x, left_x) };

            let point = pos2(center_x, row.top() + POINT_OFFSET);
            RowGeometry {
                card: Rect::from_min_size(pos2(card_x, row.top()), vec2(half, card_height)),
                title: Rect::from_min_size(
                    pos2(title_x, point.y - TITLE_HEIGHT / 2.0),
                    vec2(half, TITLE_HEIGHT),
                ),
                point,
                title_on_left: !card_on_left,
            }
        }
    }
}

/// Renders the timeline into the available width.
///
/// # Arguments
/// * `ui` - The egui UI to draw into
/// * `items` - Records in display order
/// * `icons` - Images for the timeline points, matched by position
/// * `mode` - Orientation
/// * `colors` - Widget theme
/// * `options` - Card geometry
pub fn render_timeline(
    ui: &mut egui::Ui,
    items: &[EducationRecord],
    icons: &[IconElement],
    mode: TimelineMode,
    colors: &TimelineColors,
    options: &TimelineOptions,
) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 0.0;

        let width = ui.available_width();
        let height = row_height(mode, options.card_height);

        for (index, record) in items.iter().enumerate() {
            let (row, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
            let geometry = row_geometry(row, index, mode, options.card_height);
            let is_last = index + 1 == items.len();

            // Line runs from the first point to the last one.
            let line_top = if index == 0 { geometry.point.y } else { row.top() };
            let line_bottom = if is_last { geometry.point.y } else { row.bottom() + ROW_GAP };
            ui.painter().line_segment(
                [pos2(geometry.point.x, line_top), pos2(geometry.point.x, line_bottom)],
                Stroke::new(LINE_WIDTH, colors.line),
            );

            render_title(ui, record, &geometry, colors);
            render_card(ui, record, index, geometry.card, colors);
            render_point(ui, icons.get(index), geometry.point, colors);

            if !is_last {
                ui.add_space(ROW_GAP);
            }
        }
    });
}

fn render_title(ui: &egui::Ui, record: &EducationRecord, geometry: &RowGeometry, colors: &TimelineColors) {
    let Some(title) = record.title() else {
        return;
    };

    let font = FontId::proportional(13.0);
    let painter = ui.painter();
    let text = text_utils::truncate_text_to_fit(
        title,
        geometry.title.width() - 2.0 * PILL_PADDING,
        &font,
        painter,
    );
    if text.is_empty() {
        return;
    }

    let galley = painter.layout_no_wrap(text, font, colors.title);
    let pill_width = galley.size().x + 2.0 * PILL_PADDING;
    let x = if geometry.title_on_left {
        geometry.title.right() - pill_width
    } else {
        geometry.title.left()
    };
    let pill = Rect::from_min_size(pos2(x, geometry.title.top()), vec2(pill_width, geometry.title.height()));

    painter.rect_filled(pill, 4.0, colors.secondary);
    let text_pos = pill.center() - galley.size() / 2.0;
    painter.galley(text_pos, galley, colors.title);
}

fn render_card(
    ui: &mut egui::Ui,
    record: &EducationRecord,
    index: usize,
    rect: Rect,
    colors: &TimelineColors,
) {
    let frame = egui::Frame::default()
        .fill(colors.card_bg)
        .stroke(Stroke::new(1.0, colors.card_border))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(CARD_MARGIN));
    let inner = rect.shrink(f32::from(CARD_MARGIN) + 1.0);

    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        frame.show(ui, |ui| {
            ui.set_min_size(inner.size());
            ui.set_max_size(inner.size());

            egui::ScrollArea::vertical()
                .id_salt(("timeline_card", index))
                .auto_shrink([false; 2])
                .max_height(inner.height())
                .show(ui, |ui| card_contents(ui, record, colors));
        });
    });
}

fn card_contents(ui: &mut egui::Ui, record: &EducationRecord, colors: &TimelineColors) {
    ui.spacing_mut().item_spacing.y = 4.0;

    if let Some(title) = record.card_title() {
        ui.label(RichText::new(title).strong().size(16.0).color(colors.primary));
    }
    if let Some(subtitle) = record.card_subtitle() {
        ui.label(RichText::new(subtitle).italics().color(colors.card_fore));
    }

    for paragraph in record.card_detailed_text() {
        ui.label(RichText::new(paragraph).color(colors.card_fore));
    }

    if let Some(url) = record.url() {
        egui::Frame::default()
            .fill(colors.card_footer)
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.hyperlink_to(RichText::new(url).color(colors.primary), url);
            });
    }
}

fn render_point(ui: &mut egui::Ui, icon: Option<&IconElement>, center: Pos2, colors: &TimelineColors) {
    match icon {
        Some(icon) if !icon.src.is_empty() => {
            ui.painter().circle_filled(center, ICON_SIZE / 2.0 + 2.0, colors.icon_bg);
            let rect = Rect::from_center_size(center, vec2(ICON_SIZE, ICON_SIZE));
            // Keyed by source; records sharing a source collide here.
            ui.push_id(&icon.key, |ui| {
                ui.put(rect, egui::Image::new(icon.src.as_str()).fit_to_exact_size(rect.size()))
                    .on_hover_text(icon.alt.as_str());
            });
        }
        _ => {
            ui.painter().circle_filled(center, POINT_RADIUS, colors.primary);
            ui.painter().circle_stroke(
                center,
                POINT_RADIUS + 1.5,
                Stroke::new(2.0, colors.card_bg),
            );
        }
    }
}
