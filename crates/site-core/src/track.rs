//! Horizontal row of equal-width stage panels driven by scroll progress.

use crate::scroll::PinnedSection;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageTrack {
    panel_count: usize,
    panel_width: f32,
}

impl StageTrack {
    pub fn new(panel_count: usize, panel_width: f32) -> Self {
        Self {
            panel_count,
            panel_width: panel_width.max(0.0),
        }
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    pub fn set_panel_width(&mut self, width: f32) {
        self.panel_width = width.max(0.0);
    }

    pub fn track_width(&self) -> f32 {
        self.panel_count as f32 * self.panel_width
    }

    /// Left edge of panel `index` inside the track.
    pub fn panel_left(&self, index: usize) -> f32 {
        index as f32 * self.panel_width
    }

    pub fn section(&self, start: f32, viewport_width: f32) -> PinnedSection {
        PinnedSection::new(start, self.track_width(), viewport_width)
    }

    /// Horizontal offset of the track, `-progress * distance`, within
    /// `[-distance, 0]`.
    pub fn translation(&self, progress: f32, distance: f32) -> f32 {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        -p * distance.max(0.0)
    }

    /// Panel closest to filling the viewport at `progress`.
    pub fn centered_index(&self, progress: f32, distance: f32) -> usize {
        if self.panel_count == 0 || self.panel_width <= 0.0 {
            return 0;
        }
        let shift = -self.translation(progress, distance);
        let idx = (shift / self.panel_width).round() as usize;
        idx.min(self.panel_count - 1)
    }
}

/// Position marker state for the dot row under each stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Completed,
    Current,
    Upcoming,
}

impl Indicator {
    pub fn for_dot(dot: usize, panel: usize) -> Self {
        use std::cmp::Ordering;
        match dot.cmp(&panel) {
            Ordering::Less => Indicator::Completed,
            Ordering::Equal => Indicator::Current,
            Ordering::Greater => Indicator::Upcoming,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Indicator::Completed => "is-complete",
            Indicator::Current => "is-current",
            Indicator::Upcoming => "is-upcoming",
        }
    }
}
