//! Maps theme tokens onto the colours the timeline widget and navbar use.

use egui::Color32;
use folio::theme::{color_or_fallback, Variant};
use folio::{ThemeDescriptor, DARK_THEME, LIGHT_THEME};

/// Resolved colours for the timeline widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineColors {
    /// Timeline points
    pub primary: Color32,
    /// Title pill background
    pub secondary: Color32,
    pub card_bg: Color32,
    pub card_fore: Color32,
    pub title: Color32,
    pub line: Color32,
    pub card_border: Color32,
    pub card_footer: Color32,
    /// Backdrop behind icon images
    pub icon_bg: Color32,
}

/// Builds the widget theme from the page theme.
///
/// Both primary and secondary use the accent colour.
pub fn timeline_colors(theme: &ThemeDescriptor) -> TimelineColors {
    let accent = color_or_fallback(theme.accent_color);
    TimelineColors {
        primary: accent,
        secondary: accent,
        card_bg: color_or_fallback(theme.chrono_theme.card_bg_color),
        card_fore: color_or_fallback(theme.chrono_theme.card_fore_color),
        title: color_or_fallback(theme.chrono_theme.title_color),
        line: color_or_fallback(theme.timeline_line_color),
        card_border: color_or_fallback(theme.card_border_color),
        card_footer: color_or_fallback(theme.card_footer_background),
        icon_bg: color_or_fallback(theme.social_icon_bg_color),
    }
}

/// Resolved colours for the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarColors {
    pub background: Color32,
    pub link: Color32,
    pub link_hover: Color32,
    pub link_active: Color32,
}

/// The navbar is drawn in the theme's secondary variant.
pub fn navbar_colors(theme: &ThemeDescriptor) -> NavbarColors {
    let base = match theme.bs_secondary_variant {
        Variant::Light => &LIGHT_THEME,
        Variant::Dark => &DARK_THEME,
    };
    NavbarColors {
        background: color_or_fallback(base.background),
        link: color_or_fallback(theme.navbar_theme.link_color),
        link_hover: color_or_fallback(theme.navbar_theme.link_hover_color),
        link_active: color_or_fallback(theme.navbar_theme.link_active_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_drives_primary_and_secondary() {
        let colors = timeline_colors(&LIGHT_THEME);
        assert_eq!(colors.primary, Color32::from_rgb(0xD2, 0x04, 0x2D));
        assert_eq!(colors.primary, colors.secondary);
        assert_eq!(colors.card_bg, Color32::WHITE);
        assert_eq!(colors.title, Color32::WHITE);
    }

    #[test]
    fn test_dark_card_colors() {
        let colors = timeline_colors(&DARK_THEME);
        assert_eq!(colors.card_bg, Color32::from_rgb(0x1B, 0x1B, 0x1B));
        assert_eq!(colors.title, Color32::BLACK);
    }

    #[test]
    fn test_light_theme_gets_dark_navbar() {
        let navbar = navbar_colors(&LIGHT_THEME);
        assert_eq!(navbar.background, Color32::from_rgb(0x12, 0x12, 0x12));
        assert_eq!(navbar.link, Color32::from_rgb(0xde, 0xde, 0xde));
    }
}
