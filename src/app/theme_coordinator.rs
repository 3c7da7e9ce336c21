//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.

use crate::app::AppState;
use folio::ThemeName;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference from persistent storage during startup.
    ///
    /// Falls back to `default` when nothing (or something unreadable) is stored.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>, default: ThemeName) -> ThemeName {
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .and_then(|name| match name.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("ignoring stored theme preference: {}", e);
                    None
                }
            })
            .unwrap_or(default)
    }

    /// Saves the current theme preference to persistent storage.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: ThemeName) {
        storage.set_string(THEME_KEY, theme.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let mut visuals = ctx.style().visuals.clone();
        folio::apply_theme(state.theme.descriptor(), &mut visuals);
        ctx.set_visuals(visuals);
    }
}
