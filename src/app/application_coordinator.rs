//! Application-level coordination and workflow management.
//!
//! Mounts and remounts the education view, forwards window width changes to
//! the resize bus and polls the view's fetch.

use crate::app::AppState;
use folio::{DynEducationSource, EducationView, Endpoint, FetchOutcome};
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Installs the loaders icons are drawn through: `file://` and
    /// `http(s)://` bytes, decoded as PNG or JPEG.
    pub fn install_image_loaders(ctx: &egui::Context) {
        egui_extras::install_image_loaders(ctx);
    }

    /// Mounts a fresh view on the configured (or overridden) endpoint.
    ///
    /// An endpoint that cannot be resolved is logged and nothing is mounted.
    pub fn mount_configured(state: &mut AppState, endpoint_override: Option<&str>, ctx: &egui::Context) {
        let raw = endpoint_override.unwrap_or(&state.config.endpoints.education);
        match Endpoint::resolve(raw, state.config.base_url.as_deref()) {
            Ok(endpoint) => Self::mount(state, endpoint.into_source(), ctx),
            Err(e) => log::error!("cannot resolve education endpoint {:?}: {}", raw, e),
        }
    }

    /// Remounts the view on a local JSON file.
    pub fn open_file(state: &mut AppState, path: PathBuf, ctx: &egui::Context) {
        Self::mount(state, Endpoint::File(path).into_source(), ctx);
    }

    /// Unmounts the current view (if any) and mounts a new one on `source`.
    fn mount(state: &mut AppState, source: DynEducationSource, ctx: &egui::Context) {
        state.unmount_view();
        let view = EducationView::mount(
            state.config.header.clone(),
            source,
            &state.window,
            Some(ctx.clone()),
        );
        state.view = Some(view);
    }

    /// Publishes the window width if it changed since the last frame.
    pub fn publish_viewport_width(state: &mut AppState, width: f32) {
        if state.viewport.observe(width) {
            state.window.publish(width);
        }
    }

    /// Polls the mounted view's fetch.
    ///
    /// Called once per frame. Returns true if the view just became loaded.
    pub fn check_loading_completion(state: &mut AppState) -> bool {
        match state.view.as_mut().map(EducationView::poll) {
            Some(FetchOutcome::Loaded) => true,
            Some(FetchOutcome::Failed) | Some(FetchOutcome::Pending) | None => false,
        }
    }
}
