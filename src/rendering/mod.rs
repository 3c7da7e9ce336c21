//! Rendering subsystem for drawing the education timeline
//!
//! - Timeline widget (line, points, title pills, cards)
//! - Text utilities (title truncation)

pub mod timeline_renderer;
pub mod text_utils;
