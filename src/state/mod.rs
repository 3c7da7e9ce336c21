//! State management modules for the education viewer.
//!
//! State-only logic, no UI concerns:
//! - Theme state (which built-in theme is active)
//! - Viewport state (last sampled window width)

mod theme_state;
mod viewport;

pub use theme_state::ThemeState;
pub use viewport::ViewportState;
