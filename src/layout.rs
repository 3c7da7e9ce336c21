//! Responsive layout policy.
//!
//! Maps a viewport width in logical pixels to the width of the timeline
//! container and its orientation.

use std::fmt;

/// Breakpoint below which the timeline collapses to a single column.
pub const SMALL_BREAKPOINT: f32 = 576.0;
/// Breakpoint below which the container takes 90% of the viewport.
pub const MEDIUM_BREAKPOINT: f32 = 768.0;
/// Breakpoint below which the container takes 75% of the viewport.
pub const LARGE_BREAKPOINT: f32 = 1024.0;

/// Orientation of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineMode {
    /// All cards on one side of the line
    Vertical,
    /// Cards alternate between the two sides of the line
    VerticalAlternating,
}

impl TimelineMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineMode::Vertical => "VERTICAL",
            TimelineMode::VerticalAlternating => "VERTICAL_ALTERNATING",
        }
    }
}

impl fmt::Display for TimelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render width (as a percentage of the viewport) and timeline orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor {
    /// Container width in percent of viewport width
    pub width_vw: u8,
    pub mode: TimelineMode,
}

impl Default for LayoutDescriptor {
    /// Desktop assumption used before the first measurement.
    fn default() -> Self {
        Self {
            width_vw: 50,
            mode: TimelineMode::VerticalAlternating,
        }
    }
}

impl LayoutDescriptor {
    /// Returns the container width in pixels for a viewport of `viewport_px`.
    pub fn width_px(&self, viewport_px: f32) -> f32 {
        viewport_px * f32::from(self.width_vw) / 100.0
    }

    /// CSS-style width string, e.g. `"90vw"`.
    pub fn css_width(&self) -> String {
        format!("{}vw", self.width_vw)
    }
}

impl fmt::Display for LayoutDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}vw {}", self.width_vw, self.mode)
    }
}

/// Classifies a viewport width into a layout descriptor.
///
/// Ranges are half-open and checked in ascending order. Any width that is
/// not below a breakpoint (including NaN) falls through to the desktop layout.
pub fn classify(viewport_width_px: f32) -> LayoutDescriptor {
    let (width_vw, mode) = if viewport_width_px < SMALL_BREAKPOINT {
        (90, TimelineMode::Vertical)
    } else if viewport_width_px < MEDIUM_BREAKPOINT {
        (90, TimelineMode::VerticalAlternating)
    } else if viewport_width_px < LARGE_BREAKPOINT {
        (75, TimelineMode::VerticalAlternating)
    } else {
        (50, TimelineMode::VerticalAlternating)
    };

    LayoutDescriptor { width_vw, mode }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TimelineMode::*;

    fn layout(width_vw: u8, mode: TimelineMode) -> LayoutDescriptor {
        LayoutDescriptor { width_vw, mode }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(0.0), layout(90, Vertical));
        assert_eq!(classify(575.0), layout(90, Vertical));
        assert_eq!(classify(575.9), layout(90, Vertical));
        assert_eq!(classify(576.0), layout(90, VerticalAlternating));
        assert_eq!(classify(767.0), layout(90, VerticalAlternating));
        assert_eq!(classify(768.0), layout(75, VerticalAlternating));
        assert_eq!(classify(1023.0), layout(75, VerticalAlternating));
        assert_eq!(classify(1024.0), layout(50, VerticalAlternating));
        assert_eq!(classify(3840.0), layout(50, VerticalAlternating));
    }

    #[test]
    fn test_degenerate_widths() {
        assert_eq!(classify(-10.0), layout(90, Vertical));
        assert_eq!(classify(f32::NAN), layout(50, VerticalAlternating));
        assert_eq!(classify(f32::INFINITY), layout(50, VerticalAlternating));
    }

    #[test]
    fn test_default_is_desktop() {
        assert_eq!(LayoutDescriptor::default(), classify(1280.0));
        assert_eq!(LayoutDescriptor::default().css_width(), "50vw");
    }

    #[test]
    fn test_width_px() {
        assert_eq!(classify(800.0).width_px(800.0), 600.0);
        assert_eq!(classify(400.0).css_width(), "90vw");
        assert_eq!(classify(400.0).mode.to_string(), "VERTICAL");
    }
}
