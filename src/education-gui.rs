//! Education Timeline Viewer
//!
//! Desktop rendition of a portfolio's education section using the egui framework.
//! The viewer features:
//! - One fetch of the education dataset per mount, from HTTP or a local file
//! - A responsive vertical timeline whose width and orientation follow the window width

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Light and dark themes with a persistent preference
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Theme token to widget colour mapping
//! - `ui/` - Navigation bar, education section and status bar
//! - `rendering/` - The timeline widget
//! - `state/` - Theme selection and window width tracking

use anyhow::Context as _;
use eframe::egui;

mod app;
mod presentation;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use folio::AppConfig;
use state::ThemeState;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the viewer.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config().unwrap_or_else(|e| {
        log::error!("{:#}", e);
        AppConfig::default()
    });

    // First argument overrides the configured education endpoint
    let endpoint_override = std::env::args().nth(1);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title(config.header.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        "Education Timeline",
        options,
        Box::new(move |cc| Ok(Box::new(EducationApp::new(cc, config, endpoint_override)))),
    )
}

/// Reads the config file (if any) and applies environment overrides.
fn load_config() -> anyhow::Result<AppConfig> {
    let config = match AppConfig::default_path() {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AppConfig::default(),
    };
    Ok(config.apply_env(|key| std::env::var(key).ok()))
}

/// The education viewer application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` mounts views, publishes resizes and polls the fetch
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct EducationApp {
    /// Centralized application state
    state: AppState,
    /// Mount the view on the first frame, once the window width is known
    pending_mount: bool,
    /// Endpoint given on the command line
    endpoint_override: Option<String>,
}

impl EducationApp {
    /// Creates the viewer with the theme preference loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, config: AppConfig, endpoint_override: Option<String>) -> Self {
        let theme = ThemeCoordinator::load_theme_from_storage(cc.storage, config.theme);
        ApplicationCoordinator::install_image_loaders(&cc.egui_ctx);

        Self {
            state: AppState::new(ThemeState::with_theme(theme), config),
            pending_mount: true,
            endpoint_override,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, path, ctx);
            }
            PanelInteraction::ThemeToggled => {
                self.state.theme.toggle();
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for EducationApp {
    /// Called when the app is being shut down - saves the theme preference.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
    }

    /// Main update loop.
    ///
    /// 1. Publish the window width if it changed
    /// 2. Mount the view on the first frame
    /// 3. Check for fetch completion
    /// 4. Apply theme
    /// 5. Render all panels and handle interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::publish_viewport_width(&mut self.state, ctx.content_rect().width());

        if std::mem::take(&mut self.pending_mount) {
            ApplicationCoordinator::mount_configured(&mut self.state, self.endpoint_override.as_deref(), ctx);
        }

        if ApplicationCoordinator::check_loading_completion(&mut self.state) {
            // Keep frames coming for the fade-in
            ctx.request_repaint();
        }

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
