//! Scroll-extent to progress mapping and activation edge tracking.
//!
//! Progress is absolute, never a delta: a trigger fed samples at any rate
//! (momentum flicks included) reports correct values, and the sample that
//! crosses out of an extent still reports the clamped endpoint before the
//! deactivation edge, so a fast scroll-through cannot strand an effect
//! mid-animation.

use smallvec::SmallVec;

/// A span of absolute page scroll, in pixels (virtual pixels for pinned
/// regions, where the extent length is scroll distance absorbed by the pin
/// rather than real page travel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExtent {
    pub start: f32,
    pub end: f32,
}

impl ScrollExtent {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    /// Clamped, monotonic progress for an absolute scroll position.
    ///
    /// A zero or negative-length extent degenerates to 0.0 instead of
    /// dividing through; a NaN here would poison every pose downstream
    /// with no visible error.
    pub fn progress(&self, scroll: f32) -> f32 {
        let len = self.length();
        if !(len > 0.0) || !scroll.is_finite() {
            return 0.0;
        }
        ((scroll - self.start) / len).clamp(0.0, 1.0)
    }

    pub fn contains(&self, scroll: f32) -> bool {
        scroll >= self.start && scroll <= self.end
    }
}

/// Edge and progress events produced by feeding scroll samples to a trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEvent {
    Activated,
    Progress(f32),
    Deactivated,
}

/// Tracks whether one scroll extent is active and turns absolute scroll
/// samples into `Activated` / `Progress` / `Deactivated` events.
#[derive(Clone, Debug)]
pub struct RegionTrigger {
    extent: ScrollExtent,
    active: bool,
}

impl RegionTrigger {
    pub fn new(extent: ScrollExtent) -> Self {
        Self {
            extent,
            active: false,
        }
    }

    pub fn extent(&self) -> ScrollExtent {
        self.extent
    }

    /// Replace the extent after a layout change. Keeps the active flag;
    /// the next sample re-evaluates it against the new geometry.
    pub fn set_extent(&mut self, extent: ScrollExtent) {
        self.extent = extent;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one absolute scroll sample. At most three events come back:
    /// an activation edge, a clamped progress value, a deactivation edge.
    pub fn sample(&mut self, scroll: f32) -> SmallVec<[TriggerEvent; 3]> {
        let mut out = SmallVec::new();
        let inside = scroll.is_finite() && self.extent.contains(scroll);
        if inside {
            if !self.active {
                self.active = true;
                out.push(TriggerEvent::Activated);
            }
            out.push(TriggerEvent::Progress(self.extent.progress(scroll)));
        } else if self.active {
            // Final clamped sample so the boundary lands exactly on 0 or 1
            // before ownership is handed off.
            out.push(TriggerEvent::Progress(self.extent.progress(scroll)));
            self.active = false;
            out.push(TriggerEvent::Deactivated);
        }
        out
    }
}
