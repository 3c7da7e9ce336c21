//! Theme tables for the education view.
//!
//! Two immutable palettes (light and dark) keyed by semantic token name.
//! Tokens are kept as CSS colour strings and converted to [`Color32`] on
//! demand, so the tables read exactly like the site's stylesheet values.
//!
//! # Examples
//!
//! ```
//! use folio::theme::{ThemeName, parse_color};
//!
//! let dark = ThemeName::Dark.descriptor();
//! assert_eq!(dark.background, "#121212");
//! assert_eq!(parse_color(dark.accent_color), Some(egui::Color32::from_rgb(0xD2, 0x04, 0x2D)));
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colours handed to the timeline widget's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoTheme {
    pub card_bg_color: &'static str,
    pub card_fore_color: &'static str,
    pub title_color: &'static str,
}

/// Colours for the navigation links in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarTheme {
    pub link_color: &'static str,
    pub link_hover_color: &'static str,
    pub link_active_color: &'static str,
}

/// Which base widget palette a theme builds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Light,
    Dark,
}

/// A complete set of colour tokens for the rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub background: &'static str,
    pub color: &'static str,
    pub accent_color: &'static str,
    pub chrono_theme: ChronoTheme,
    pub timeline_line_color: &'static str,
    pub card_background: &'static str,
    pub card_footer_background: &'static str,
    pub card_border_color: &'static str,
    pub navbar_theme: NavbarTheme,
    pub bs_primary_variant: Variant,
    pub bs_secondary_variant: Variant,
    pub social_icon_bg_color: &'static str,
}

pub const LIGHT_THEME: ThemeDescriptor = ThemeDescriptor {
    background: "#fff",
    color: "#121212",
    accent_color: "#D2042D",
    chrono_theme: ChronoTheme {
        card_bg_color: "white",
        card_fore_color: "black",
        title_color: "white",
    },
    timeline_line_color: "#ccc",
    card_background: "#fff",
    card_footer_background: "#f7f7f7",
    card_border_color: "#00000020",
    navbar_theme: NavbarTheme {
        link_color: "#dedede",
        link_hover_color: "#fefefe",
        link_active_color: "#fefefe",
    },
    bs_primary_variant: Variant::Light,
    bs_secondary_variant: Variant::Dark,
    social_icon_bg_color: "#121212",
};

pub const DARK_THEME: ThemeDescriptor = ThemeDescriptor {
    background: "#121212",
    color: "#eee",
    accent_color: "#D2042D",
    chrono_theme: ChronoTheme {
        card_bg_color: "#1B1B1B",
        card_fore_color: "#eee",
        title_color: "black",
    },
    timeline_line_color: "#444",
    card_background: "#060606",
    card_footer_background: "#181818",
    card_border_color: "#ffffff20",
    navbar_theme: NavbarTheme {
        link_color: "#dedede",
        link_hover_color: "#fefefe",
        link_active_color: "#fefefe",
    },
    bs_primary_variant: Variant::Dark,
    bs_secondary_variant: Variant::Light,
    social_icon_bg_color: "#fefefe",
};

/// Selector between the two built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// Returns the constant descriptor for this theme.
    pub fn descriptor(self) -> &'static ThemeDescriptor {
        match self {
            ThemeName::Light => &LIGHT_THEME,
            ThemeName::Dark => &DARK_THEME,
        }
    }

    /// Returns the other theme; used by the header toggle.
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            other => Err(format!("Theme '{}' not found", other)),
        }
    }
}

/// Converts a CSS colour token to [`Color32`].
///
/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and the keywords `white`, `black`
/// and `transparent`. Returns `None` for anything else.
pub fn parse_color(token: &str) -> Option<Color32> {
    let token = token.trim();
    match token.to_ascii_lowercase().as_str() {
        "white" => return Some(Color32::WHITE),
        "black" => return Some(Color32::BLACK),
        "transparent" => return Some(Color32::TRANSPARENT),
        _ => {}
    }

    let hex = token.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Like [`parse_color`], but falls back to magenta so a bad token is visible.
pub fn color_or_fallback(token: &str) -> Color32 {
    parse_color(token).unwrap_or_else(|| {
        log::warn!("unrecognised colour token {:?}", token);
        Color32::from_rgb(255, 0, 255)
    })
}

/// Applies a theme's page tokens to egui visuals.
///
/// The base palette is chosen from `bs_primary_variant`, then background,
/// text, link and border colours are overridden from the descriptor.
pub fn apply_theme(theme: &ThemeDescriptor, visuals: &mut egui::Visuals) {
    *visuals = match theme.bs_primary_variant {
        Variant::Light => egui::Visuals::light(),
        Variant::Dark => egui::Visuals::dark(),
    };

    let background = color_or_fallback(theme.background);
    let text = color_or_fallback(theme.color);
    let accent = color_or_fallback(theme.accent_color);

    visuals.panel_fill = background;
    visuals.window_fill = background;
    visuals.extreme_bg_color = color_or_fallback(theme.card_background);
    visuals.faint_bg_color = color_or_fallback(theme.card_footer_background);
    visuals.override_text_color = Some(text);

    visuals.selection.bg_fill = accent;
    visuals.selection.stroke.color = text;
    visuals.hyperlink_color = accent;

    visuals.widgets.noninteractive.bg_stroke.color = color_or_fallback(theme.card_border_color);
}
