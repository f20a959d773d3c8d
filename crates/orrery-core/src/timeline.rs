//! Scrub timeline: keyed sub-animations sharing one local time axis.
//!
//! A timeline is a flat list of `(window, ease, callback)` entries evaluated
//! unconditionally on every tick, not a stateful sequence of steps. That
//! keeps replay trivially correct: evaluation is a function of the playhead
//! alone, so scrubbing backward on scroll-up needs no special casing.

use smallvec::SmallVec;

use crate::ease::Ease;

/// Placement of one tween on the timeline's time axis. Units are whatever
/// the timeline's total duration uses (the page uses plain virtual units).
#[derive(Clone, Copy, Debug)]
pub struct TweenSpec {
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl TweenSpec {
    pub fn new(start: f32, duration: f32, ease: Ease) -> Self {
        Self {
            start,
            duration,
            ease,
        }
    }

    /// A zero-duration step: fires on every evaluation with 0.0 before
    /// `at` and 1.0 at or after it. Used for discrete flips (panel
    /// visibility) that must survive scrubbing in both directions.
    pub fn step(at: f32) -> Self {
        Self {
            start: at,
            duration: 0.0,
            ease: Ease::None,
        }
    }
}

struct Entry {
    spec: TweenSpec,
    on_update: Box<dyn FnMut(f32)>,
}

/// Ordered set of tweens scrubbed by a single playhead.
pub struct Timeline {
    total: f32,
    entries: SmallVec<[Entry; 8]>,
}

impl Timeline {
    /// `total` is the timeline's duration in local units; `scrub` maps a
    /// normalized region progress onto it.
    pub fn new(total: f32) -> Self {
        Self {
            total: total.max(f32::EPSILON),
            entries: SmallVec::new(),
        }
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a tween. Entries may overlap freely; all overlapping entries
    /// fire on every evaluation, in insertion order.
    pub fn add(&mut self, spec: TweenSpec, on_update: impl FnMut(f32) + 'static) {
        if spec.duration > 0.0 && spec.start + spec.duration > self.total {
            log::warn!(
                "timeline tween [{:.2}, {:.2}] extends past total {:.2}; tail is unreachable",
                spec.start,
                spec.start + spec.duration,
                self.total
            );
        }
        self.entries.push(Entry {
            spec,
            on_update: Box::new(on_update),
        });
    }

    /// Evaluate at an absolute playhead time in `[0, total]`.
    ///
    /// Entries whose window contains `time` receive their eased local
    /// progress; entries outside their window are skipped, which is what
    /// sequences discrete sub-effects (a mask that only exists during
    /// `[0.2, 0.4]` of a hero region, say). Zero-duration steps always
    /// fire with the side of the playhead they are on.
    pub fn evaluate(&mut self, time: f32) {
        let time = if time.is_finite() {
            time.clamp(0.0, self.total)
        } else {
            0.0
        };
        for entry in self.entries.iter_mut() {
            let spec = entry.spec;
            if spec.duration <= 0.0 {
                let local = if time >= spec.start { 1.0 } else { 0.0 };
                (entry.on_update)(spec.ease.apply(local));
                continue;
            }
            if time < spec.start || time > spec.start + spec.duration {
                continue;
            }
            let local = ((time - spec.start) / spec.duration).clamp(0.0, 1.0);
            (entry.on_update)(spec.ease.apply(local));
        }
    }

    /// Evaluate at a normalized progress in `[0, 1]`, scaled onto the
    /// timeline's total duration.
    pub fn scrub(&mut self, progress: f32) {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.evaluate(p * self.total);
    }
}
