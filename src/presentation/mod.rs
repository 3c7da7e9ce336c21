//! Presentation layer for visual styling and color mapping.
//!
//! Turns theme tokens into the concrete colours each widget paints with.

pub mod color_mapping;
