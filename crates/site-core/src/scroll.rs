//! Scroll progress for a pinned section. The scroll budget is the part of
//! the track that does not fit on screen.

use crate::constants::PIN_START_TOLERANCE_PX;

/// Geometry of a pinned section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedSection {
    /// Document scroll offset at which pinning begins.
    pub start: f32,
    pub track_width: f32,
    pub viewport_width: f32,
}

impl PinnedSection {
    pub fn new(start: f32, track_width: f32, viewport_width: f32) -> Self {
        Self {
            start,
            track_width,
            viewport_width,
        }
    }

    /// Track width minus viewport width, never negative.
    pub fn total_scrollable_distance(&self) -> f32 {
        let d = self.track_width - self.viewport_width;
        if d.is_finite() {
            d.max(0.0)
        } else {
            0.0
        }
    }

    pub fn end(&self) -> f32 {
        self.start + self.total_scrollable_distance()
    }

    /// `clamp((offset - start) / distance, 0, 1)`; a section with nothing to
    /// scroll is always complete.
    pub fn progress(&self, scroll_offset: f32) -> f32 {
        let distance = self.total_scrollable_distance();
        if distance <= 0.0 {
            return 1.0;
        }
        let p = (scroll_offset - self.start) / distance;
        if p.is_nan() {
            return 0.0;
        }
        p.clamp(0.0, 1.0)
    }

    /// Pinned while progress is strictly between 0 and 1.
    pub fn is_pinned(&self, scroll_offset: f32) -> bool {
        let p = self.progress(scroll_offset);
        p > 0.0 && p < 1.0
    }

    /// Vertical shift that holds the section in place while pinned.
    pub fn pin_offset(&self, scroll_offset: f32) -> f32 {
        if !scroll_offset.is_finite() {
            return 0.0;
        }
        (scroll_offset - self.start).clamp(0.0, self.total_scrollable_distance())
    }

    /// Extra page height the pinned section needs so the whole track can be
    /// scrolled through.
    pub fn spacer_height(&self, viewport_height: f32) -> f32 {
        viewport_height.max(0.0) + self.total_scrollable_distance()
    }

    /// True when `start` no longer matches the recorded section top, e.g.
    /// after images above the section finished loading.
    pub fn has_moved(&self, start: f32) -> bool {
        start.is_finite() && (start - self.start).abs() > PIN_START_TOLERANCE_PX
    }

    pub fn resize(&mut self, start: f32, track_width: f32, viewport_width: f32) {
        self.start = start;
        self.track_width = track_width;
        self.viewport_width = viewport_width;
    }
}

/// Live scroll state for one mounted pinned section.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSession {
    section: PinnedSection,
    offset: f32,
    progress: f32,
}

impl ScrollSession {
    pub fn new(section: PinnedSection) -> Self {
        Self {
            section,
            offset: 0.0,
            progress: section.progress(0.0),
        }
    }

    pub fn section(&self) -> &PinnedSection {
        &self.section
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn on_scroll(&mut self, offset: f32) -> f32 {
        if offset.is_finite() {
            self.offset = offset;
        }
        self.progress = self.section.progress(self.offset);
        self.progress
    }

    pub fn on_resize(&mut self, start: f32, track_width: f32, viewport_width: f32) -> f32 {
        self.section.resize(start, track_width, viewport_width);
        self.progress = self.section.progress(self.offset);
        self.progress
    }
}
