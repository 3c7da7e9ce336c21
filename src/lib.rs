pub mod theme;
pub mod layout;
pub mod dataset;
pub mod error;
pub mod source;
pub mod resize;
pub mod loader;
pub mod view;
pub mod config;

// Export theme tables
pub use theme::{
    ThemeDescriptor, ThemeName, ChronoTheme, NavbarTheme, Variant,
    LIGHT_THEME, DARK_THEME, parse_color, apply_theme
};

// Export layout policy
pub use layout::{classify, LayoutDescriptor, TimelineMode};

// Export data model and sources
pub use dataset::{EducationDataset, EducationRecord, Icon, IconElement, icon_elements};
pub use source::{icon_uri, EducationSource, DynEducationSource, Endpoint, HttpSource, FileSource};
pub use error::{FetchError, ConfigError};

// Export view lifecycle
pub use resize::{ResizeBus, ResizeSubscription};
pub use loader::{AsyncLoader, LoadResult};
pub use view::{EducationView, ViewState, FetchOutcome};

pub use config::AppConfig;
