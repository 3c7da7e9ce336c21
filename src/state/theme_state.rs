//! Theme selection state.
//!
//! Owns which of the two built-in themes is active. The selected descriptor
//! is handed explicitly to every renderer that needs colours.

use folio::{ThemeDescriptor, ThemeName};

/// State related to visual theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeState {
    /// Currently selected theme
    current: ThemeName,
}

impl ThemeState {
    /// Creates a theme state with a specific theme.
    pub fn with_theme(theme: ThemeName) -> Self {
        Self { current: theme }
    }

    // ===== Theme Queries =====

    pub fn current_theme_name(&self) -> ThemeName {
        self.current
    }

    /// Returns the active theme's colour tokens.
    pub fn descriptor(&self) -> &'static ThemeDescriptor {
        self.current.descriptor()
    }

    // ===== Theme Mutations =====

    /// Switches between light and dark.
    pub fn toggle(&mut self) {
        self.current = self.current.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut state = ThemeState::default();
        assert_eq!(state.current_theme_name(), ThemeName::Light);
        state.toggle();
        assert_eq!(state.current_theme_name(), ThemeName::Dark);
        assert_eq!(state.descriptor(), &folio::DARK_THEME);
    }
}
