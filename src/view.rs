//! The education view: fetch-on-mount plus responsive layout.
//!
//! A view is mounted with [`EducationView::mount`] and unmounted by dropping
//! it. Mounting subscribes one resize listener and starts exactly one fetch.
//! Dropping releases the listener; an in-flight fetch is left to finish and
//! its result is thrown away.
//!
//! The fetch and the layout are independent: resizes update the layout in
//! both the loading and the loaded state, and never touch the dataset.

use crate::dataset::{self, EducationDataset, EducationRecord, IconElement};
use crate::layout::{self, LayoutDescriptor};
use crate::loader::{AsyncLoader, LoadResult};
use crate::resize::{ResizeBus, ResizeSubscription};
use crate::source::DynEducationSource;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Fetch state of a mounted view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No dataset yet; a spinner is shown
    Loading,
    /// Dataset received (possibly empty)
    Loaded(EducationDataset),
}

/// What a call to [`EducationView::poll`] observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Nothing new
    Pending,
    /// Just transitioned to [`ViewState::Loaded`]
    Loaded,
    /// The fetch finished without a usable body; the view stays loading
    Failed,
}

/// A mounted education view.
pub struct EducationView {
    header: String,
    endpoint: String,
    state: ViewState,
    layout: Rc<Cell<LayoutDescriptor>>,
    loader: AsyncLoader,
    loaded_at: Option<Instant>,
    _resize: ResizeSubscription,
}

impl std::fmt::Debug for EducationView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EducationView")
            .field("header", &self.header)
            .field("endpoint", &self.endpoint)
            .field("layout", &self.layout.get())
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}

impl EducationView {
    /// Mounts a view.
    ///
    /// # Arguments
    /// * `header` - Page header title; callers must pass non-empty text
    /// * `source` - Where the dataset is fetched from
    /// * `window` - Resize events and current inner width
    /// * `repaint` - egui context woken when the fetch completes
    pub fn mount(
        header: impl Into<String>,
        source: DynEducationSource,
        window: &ResizeBus,
        repaint: Option<egui::Context>,
    ) -> Self {
        let header = header.into();
        debug_assert!(!header.is_empty(), "education view needs a header title");

        let initial = window
            .inner_width()
            .map(layout::classify)
            .unwrap_or_default();
        let layout = Rc::new(Cell::new(initial));

        let handler_layout = Rc::clone(&layout);
        let resize = window.subscribe(move |width| handler_layout.set(layout::classify(width)));

        let endpoint = source.endpoint().to_string();
        let mut loader = AsyncLoader::new();
        loader.start(source, repaint);

        log::debug!("mounted education view ({}), layout {}", endpoint, initial);

        Self {
            header,
            endpoint,
            state: ViewState::Loading,
            layout,
            loader,
            loaded_at: None,
            _resize: resize,
        }
    }

    // ===== Queries =====

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Current layout, as last computed from the window width.
    pub fn layout(&self) -> LayoutDescriptor {
        self.layout.get()
    }

    pub fn dataset(&self) -> Option<&EducationDataset> {
        match &self.state {
            ViewState::Loaded(dataset) => Some(dataset),
            ViewState::Loading => None,
        }
    }

    /// Records handed to the timeline widget, in dataset order.
    pub fn items(&self) -> &[EducationRecord] {
        self.dataset().map(|d| d.education.as_slice()).unwrap_or(&[])
    }

    /// Icon images for the timeline points.
    pub fn icon_elements(&self) -> Vec<IconElement> {
        dataset::icon_elements(self.items())
    }

    /// Time since the dataset arrived, for the fade-in.
    pub fn loaded_for(&self) -> Option<Duration> {
        self.loaded_at.map(|t| t.elapsed())
    }

    // ===== Mutations =====

    /// Applies a finished fetch, if any. Call once per frame.
    pub fn poll(&mut self) -> FetchOutcome {
        if !self.is_loading() {
            return FetchOutcome::Pending;
        }

        match self.loader.check_completion() {
            LoadResult::Success(body) => {
                if dataset::is_falsy(&body) {
                    log::warn!(
                        "education response from {} is {}, staying in loading state",
                        self.endpoint,
                        body
                    );
                    return FetchOutcome::Failed;
                }

                let dataset = EducationDataset::from_value(body);
                log::info!("loaded {} education records from {}", dataset.len(), self.endpoint);
                self.state = ViewState::Loaded(dataset);
                self.loaded_at = Some(Instant::now());
                FetchOutcome::Loaded
            }
            LoadResult::Error(e) => {
                log::error!("Error fetching education data: {}", e);
                FetchOutcome::Failed
            }
            LoadResult::None => FetchOutcome::Pending,
        }
    }
}

impl Drop for EducationView {
    fn drop(&mut self) {
        if self.loader.is_loading() {
            log::debug!("unmounting education view with fetch from {} still running", self.endpoint);
        }
    }
}
