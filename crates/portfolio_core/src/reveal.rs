//! Reveal-once visibility and entrance timing for page sections.
//!
//! A section owns one [`RevealLatch`]. Each frame the renderer reports the
//! section's vertical extent and the visible part of the page; the latch flips
//! the first time they overlap and never flips back. Items inside the section
//! derive their entrance state from the time elapsed since that flip, delayed by
//! their index through a [`Stagger`].

/// Inset applied to the viewport before testing intersection, in logical
/// pixels. A section must be this far inside the visible area to reveal.
pub const DEFAULT_TRIGGER_MARGIN: f32 = 100.0;

/// Vertical extent in page coordinates (top < bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSpan {
    top: f32,
    bottom: f32,
}

impl ViewportSpan {
    pub fn new(top: f32, bottom: f32) -> Self {
        if bottom < top {
            Self {
                top: bottom,
                bottom: top,
            }
        } else {
            Self { top, bottom }
        }
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    /// Shrinks both edges by `margin`; a negative margin grows the span. A span
    /// shrunk past its own height collapses onto its midpoint.
    pub fn inset(self, margin: f32) -> Self {
        let top = self.top + margin;
        let bottom = self.bottom - margin;
        if top > bottom {
            let mid = (self.top + self.bottom) / 2.0;
            Self {
                top: mid,
                bottom: mid,
            }
        } else {
            Self { top, bottom }
        }
    }

    pub fn overlaps(self, other: ViewportSpan) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    margin: f32,
    revealed_at: Option<f64>,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::with_margin(DEFAULT_TRIGGER_MARGIN)
    }
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(margin: f32) -> Self {
        Self {
            margin,
            revealed_at: None,
        }
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Feeds one intersection sample. Returns `true` only for the sample that
    /// reveals the section.
    pub fn observe(&mut self, region: ViewportSpan, viewport: ViewportSpan, now: f64) -> bool {
        if self.revealed_at.is_some() {
            return false;
        }
        if !region.overlaps(viewport.inset(self.margin)) {
            return false;
        }
        self.revealed_at = Some(now);
        tracing::trace!(
            region_top = region.top(),
            viewport_top = viewport.top(),
            "section revealed"
        );
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn revealed_at(&self) -> Option<f64> {
        self.revealed_at
    }

    /// Seconds since the reveal, or `None` while still hidden.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.revealed_at.map(|at| (now - at).max(0.0))
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Per-item entrance schedule, in seconds after the owning section revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base_delay: f32,
    pub increment: f32,
    pub duration: f32,
}

impl Stagger {
    pub const fn new(base_delay: f32, increment: f32, duration: f32) -> Self {
        Self {
            base_delay,
            increment,
            duration,
        }
    }

    pub fn delay(&self, index: usize) -> f32 {
        self.base_delay + index as f32 * self.increment
    }

    /// Eased entrance progress in `0.0..=1.0` for item `index`.
    pub fn progress(&self, index: usize, elapsed: Option<f64>) -> f32 {
        let Some(elapsed) = elapsed else {
            return 0.0;
        };
        let local = elapsed as f32 - self.delay(index);
        if local <= 0.0 {
            0.0
        } else if self.duration <= 0.0 || local >= self.duration {
            1.0
        } else {
            ease_out_cubic(local / self.duration)
        }
    }

    /// Whether every one of `count` items has finished entering.
    pub fn settled(&self, count: usize, elapsed: Option<f64>) -> bool {
        let last = count.saturating_sub(1);
        self.progress(last, elapsed) >= 1.0
    }
}

/// Pre-reveal pose of an item: where it starts relative to its natural place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_x: f32,
    pub offset_y: f32,
    pub start_scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Entrance {
    pub const fn rise(distance: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: distance,
            start_scale: 1.0,
        }
    }

    pub const fn slide(distance: f32) -> Self {
        Self {
            offset_x: distance,
            offset_y: 0.0,
            start_scale: 1.0,
        }
    }

    pub const fn grow(start_scale: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            start_scale,
        }
    }

    pub fn at(&self, progress: f32) -> EntranceFrame {
        let p = progress.clamp(0.0, 1.0);
        let remaining = 1.0 - p;
        EntranceFrame {
            opacity: p,
            offset_x: self.offset_x * remaining,
            offset_y: self.offset_y * remaining,
            scale: self.start_scale + (1.0 - self.start_scale) * p,
        }
    }
}

impl EntranceFrame {
    pub fn is_settled(&self) -> bool {
        self.opacity >= 1.0
    }
}

/// Entrance timings used by the page sections.
pub mod presets {
    use super::{Entrance, Stagger};

    pub const HEADING: Stagger = Stagger::new(0.0, 0.0, 0.6);
    pub const HEADING_ENTRANCE: Entrance = Entrance::rise(30.0);

    pub const EXPERTISE_CARDS: Stagger = Stagger::new(0.0, 0.1, 0.6);
    pub const STATS: Stagger = Stagger::new(0.5, 0.0, 0.6);
    pub const CARD_ENTRANCE: Entrance = Entrance::rise(30.0);

    pub const JOBS: Stagger = Stagger::new(0.0, 0.15, 0.6);
    pub const JOB_ENTRANCE: Entrance = Entrance::rise(40.0);

    pub const DEGREES: Stagger = Stagger::new(0.0, 0.2, 0.6);

    pub const SKILL_CATEGORIES: Stagger = Stagger::new(0.0, 0.1, 0.6);
    pub const CERTIFICATION_BLOCK: Stagger = Stagger::new(0.4, 0.0, 0.6);
    pub const CERTIFICATIONS: Stagger = Stagger::new(0.5, 0.1, 0.5);
    pub const CERTIFICATION_ENTRANCE: Entrance = Entrance::grow(0.9);

    pub const FILTER_BAR: Stagger = Stagger::new(0.2, 0.0, 0.6);
    pub const FILTER_BAR_ENTRANCE: Entrance = Entrance::rise(20.0);
    pub const PROJECT_CARDS: Stagger = Stagger::new(0.0, 0.1, 0.5);

    /// Index 0 is the info column, index 1 the form.
    pub const CONTACT_COLUMNS: Stagger = Stagger::new(0.2, 0.1, 0.6);
    pub const CONTACT_INFO_ENTRANCE: Entrance = Entrance::slide(-30.0);
    pub const CONTACT_FORM_ENTRANCE: Entrance = Entrance::slide(30.0);

    pub const FOOTER_ITEMS: Stagger = Stagger::new(0.0, 0.1, 0.5);
    pub const FOOTER_ENTRANCE: Entrance = Entrance::rise(20.0);

    /// Timeline entries alternate sides, even indices entering from the left.
    pub fn degree_entrance(index: usize) -> Entrance {
        if index % 2 == 0 {
            Entrance::slide(-50.0)
        } else {
            Entrance::slide(50.0)
        }
    }

    /// Bars of one category fill one after another, offset by the category's
    /// own position in the grid.
    pub fn skill_bars(category_index: usize) -> Stagger {
        Stagger::new(category_index as f32 * 0.1, 0.1, 1.0)
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
