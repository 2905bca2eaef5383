//! "Has this element been on screen yet?"

/// Fraction of a section that must be inside the viewport before it counts
/// as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// A latch that flips from hidden to visible at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilitySignal {
    visible: bool,
}

impl VisibilitySignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one observation. Returns true only for the observation that
    /// flipped the latch.
    pub fn observe(&mut self, in_view: bool) -> bool {
        if in_view && !self.visible {
            self.visible = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A vertical window onto the page, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Share of the span `[start, start + len)` that lies inside the viewport.
    pub fn intersection_ratio(&self, start: usize, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }
        let end = start + len;
        let overlap_start = start.max(self.top);
        let overlap_end = end.min(self.bottom());
        if overlap_end <= overlap_start {
            return 0.0;
        }
        (overlap_end - overlap_start) as f64 / len as f64
    }

    /// True when the span is visible enough to count, or when it fills the
    /// whole viewport (tall sections can never reach the ratio otherwise).
    pub fn is_in_view(&self, start: usize, len: usize) -> bool {
        if len > 0 && start <= self.top && start + len >= self.bottom() && self.height > 0 {
            return true;
        }
        self.intersection_ratio(start, len) >= VISIBILITY_THRESHOLD
    }
}
