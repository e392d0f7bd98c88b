//! Split-pane divider math for the side-by-side layout.
//!
//! Purely visual: converts a pointer position into a clamped left-pane
//! percentage. Carries no data contract with the guided engine.

/// Resizable two-pane split, tracked as the left pane's width percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    left_percent: f64,
    min_percent: f64,
    max_percent: f64,
}

impl SplitLayout {
    /// `initial` is clamped into `[min, max]` up front.
    pub fn new(initial: f64, min: f64, max: f64) -> Self {
        Self {
            left_percent: initial.clamp(min, max),
            min_percent: min,
            max_percent: max,
        }
    }

    pub fn left_percent(&self) -> f64 {
        self.left_percent
    }

    pub fn right_percent(&self) -> f64 {
        100.0 - self.left_percent
    }

    /// Drag the divider to an absolute pointer x within the container.
    /// Returns the new left percentage; a degenerate container is a no-op.
    pub fn drag_to(&mut self, pointer_x: f64, container_left: f64, container_width: f64) -> f64 {
        if container_width > 0.0 {
            let raw = (pointer_x - container_left) / container_width * 100.0;
            self.left_percent = raw.clamp(self.min_percent, self.max_percent);
        }
        self.left_percent
    }
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::new(50.0, 20.0, 80.0)
    }
}
