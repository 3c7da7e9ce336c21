//! Window width tracking.
//!
//! egui has no resize callback, so the shell samples the content width every
//! frame. This state filters those samples down to actual changes, which are
//! then published as resize events.

/// Widths closer than this are treated as unchanged.
const WIDTH_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Last width published to the resize bus
    last_width: Option<f32>,
}

impl ViewportState {
    /// Returns the last published width, if any.
    pub fn width(&self) -> Option<f32> {
        self.last_width
    }

    /// Records a sampled width; returns true if it differs from the last one.
    pub fn observe(&mut self, width: f32) -> bool {
        if !width.is_finite() {
            return false;
        }
        let changed = match self.last_width {
            Some(last) => (last - width).abs() >= WIDTH_EPSILON,
            None => true,
        };
        if changed {
            self.last_width = Some(width);
        }
        changed
    }
}
