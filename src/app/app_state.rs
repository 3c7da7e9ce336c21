//! Centralized application state for the education viewer.
//!
//! Composes the focused state components with the mounted view and the
//! window's resize bus.

use crate::state::{ThemeState, ViewportState};
use folio::{AppConfig, EducationView, ResizeBus};

/// Main application state.
pub struct AppState {
    /// Theme selection
    pub theme: ThemeState,

    /// Last sampled window width
    pub viewport: ViewportState,

    /// Resize events for mounted views
    pub window: ResizeBus,

    /// The mounted education view, if any
    pub view: Option<EducationView>,

    /// Configuration the app was started with
    pub config: AppConfig,
}

impl AppState {
    /// Creates the application state with the given theme and configuration.
    pub fn new(theme: ThemeState, config: AppConfig) -> Self {
        Self {
            theme,
            viewport: ViewportState::default(),
            window: ResizeBus::new(),
            view: None,
            config,
        }
    }

    /// Drops the mounted view, releasing its resize listener.
    pub fn unmount_view(&mut self) {
        if let Some(view) = self.view.take() {
            log::debug!("unmounting education view for {}", view.endpoint());
        }
    }
}
