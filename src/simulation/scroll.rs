//! Scroll position → morph progress.

/// Fraction of a pinned section that has been scrolled through, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// `scrolled` is how far the section's top has moved above the viewport.
    /// A section no taller than the viewport has nothing to scroll and
    /// reports 0.
    pub fn from_scroll(scrolled: f64, content_height: f64, viewport_height: f64) -> Self {
        let scrollable = content_height - viewport_height;
        if !(scrollable > 0.0) || scrolled.is_nan() {
            return Self(0.0);
        }
        Self((scrolled / scrollable).clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Wheel-driven scroll offset clamped to the scrollable range
#[derive(Debug, Clone)]
pub struct ScrollState {
    pub offset: f64,
    pub content_height: f64,
    pub wheel_step: f64,
}

impl ScrollState {
    pub fn new(content_height: f64, wheel_step: f64) -> Self {
        Self { offset: 0.0, content_height, wheel_step }
    }

    /// Apply wheel `lines` (positive scrolls down) for a viewport of `viewport_height`
    pub fn wheel(&mut self, lines: f64, viewport_height: f64) -> ScrollProgress {
        let max = (self.content_height - viewport_height).max(0.0);
        self.offset = (self.offset + lines * self.wheel_step).clamp(0.0, max);
        self.progress(viewport_height)
    }

    pub fn progress(&self, viewport_height: f64) -> ScrollProgress {
        ScrollProgress::from_scroll(self.offset, self.content_height, viewport_height)
    }
}
