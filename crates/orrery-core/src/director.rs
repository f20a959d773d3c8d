//! Region sequencing and the shared camera target slot.
//!
//! The director owns the ordered region list for the whole page and the one
//! piece of shared state in the system: the target slot that scroll-driven
//! writers publish into and the frame loop reads out of. Single-writer
//! discipline is enforced with an owner tag rather than convention — a
//! progress sample from a region that is not the current owner is dropped,
//! which is what protects the slot from scroll callbacks that fire after
//! their region lost relevance during a fast flick.

use fnv::FnvHashMap;

use crate::constants::CONTINUITY_TOLERANCE;
use crate::pose::Pose;
use crate::segment::{Segment, SpecError};
use crate::timeline::Timeline;
use crate::trigger::{ScrollExtent, TriggerEvent};

/// Identifier handed back by [`Director::add_region`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(u32);

/// Registration payload for one scroll-extent-bound unit of choreography.
pub struct RegionSpec {
    pub name: String,
    pub extent: ScrollExtent,
    /// Pinned regions freeze their page section while the extent length is
    /// absorbed as virtual scroll. The pin itself is a DOM concern; the
    /// director only needs the flag to report it back to the page layer.
    pub pinned: bool,
    pub segment: Segment,
    /// DOM sub-effects (reveal masks, panel paging) scrubbed with the same
    /// progress as the camera segment so they stay frame-exact with it.
    pub effects: Timeline,
}

impl RegionSpec {
    pub fn new(name: impl Into<String>, extent: ScrollExtent, pinned: bool, segment: Segment) -> Self {
        Self {
            name: name.into(),
            extent,
            pinned,
            segment,
            effects: Timeline::new(1.0),
        }
    }

    pub fn with_effects(mut self, effects: Timeline) -> Self {
        self.effects = effects;
        self
    }
}

struct Region {
    name: String,
    extent: ScrollExtent,
    pinned: bool,
    segment: Segment,
    effects: Timeline,
}

/// The one shared slot between scroll-driven writers and the per-frame
/// reader. `owner` tags which region may currently write; writes from
/// anyone else are dropped.
#[derive(Clone, Copy, Debug)]
pub struct TargetSlot {
    pub pose: Pose,
    pub owner: Option<RegionId>,
}

/// Owns the region list, the target slot, and the activation guard.
pub struct Director {
    regions: Vec<Region>,
    index: FnvHashMap<RegionId, usize>,
    slot: Option<TargetSlot>,
}

impl Director {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            index: FnvHashMap::default(),
            slot: None,
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.slot.is_some()
    }

    /// Register a region. Fails fast on a malformed segment spec so a bad
    /// constant surfaces at startup, not as a silently wrong pose mid-page.
    pub fn add_region(&mut self, spec: RegionSpec) -> Result<RegionId, SpecError> {
        if self.is_sealed() {
            return Err(SpecError::PlanSealed);
        }
        spec.segment.validate()?;
        let id = RegionId(self.regions.len() as u32);
        self.index.insert(id, self.regions.len());
        self.regions.push(Region {
            name: spec.name,
            extent: spec.extent,
            pinned: spec.pinned,
            segment: spec.segment,
            effects: spec.effects,
        });
        Ok(id)
    }

    /// Finalize registration: initialize the slot to the first region's
    /// starting pose and check joint continuity between adjacent segments.
    ///
    /// Continuity stays an authoring contract — a mismatched joint is
    /// reported, not rewritten, because some cuts are authored on purpose.
    /// Returns the number of joints outside tolerance.
    pub fn seal(&mut self) -> Result<usize, SpecError> {
        let first = self.regions.first().ok_or(SpecError::EmptyPlan)?;
        self.slot = Some(TargetSlot {
            pose: first.segment.start_pose(),
            owner: None,
        });

        let mut hard_cuts = 0;
        for pair in self.regions.windows(2) {
            let gap = pair[0].segment.end_pose().distance(&pair[1].segment.start_pose());
            if gap > CONTINUITY_TOLERANCE {
                hard_cuts += 1;
                log::warn!(
                    "hard cut between '{}' and '{}': endpoints differ by {:.2} units",
                    pair[0].name,
                    pair[1].name,
                    gap
                );
            }
        }
        Ok(hard_cuts)
    }

    /// Iterate registered ids in page order.
    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        (0..self.regions.len() as u32).map(RegionId)
    }

    pub fn region_name(&self, id: RegionId) -> Option<&str> {
        self.region(id).map(|r| r.name.as_str())
    }

    pub fn region_extent(&self, id: RegionId) -> Option<ScrollExtent> {
        self.region(id).map(|r| r.extent)
    }

    pub fn region_pinned(&self, id: RegionId) -> Option<bool> {
        self.region(id).map(|r| r.pinned)
    }

    /// Update an extent after the page layout is (re)measured.
    pub fn set_region_extent(&mut self, id: RegionId, extent: ScrollExtent) {
        if let Some(i) = self.index.get(&id).copied() {
            self.regions[i].extent = extent;
        }
    }

    /// Make `id` the sole writer of the target slot. At a region boundary
    /// this is a plain owner swap: latest activation wins, and the
    /// previous owner's late samples are dropped by the guard.
    pub fn activate(&mut self, id: RegionId) {
        let Some(slot) = self.slot.as_mut() else {
            log::warn!("activate before seal; ignoring");
            return;
        };
        if self.index.contains_key(&id) {
            slot.owner = Some(id);
        }
    }

    /// Release ownership, but only if `id` still holds it — a stale
    /// deactivation must not strip the region that took over at the
    /// boundary.
    pub fn deactivate(&mut self, id: RegionId) {
        if let Some(slot) = self.slot.as_mut() {
            if slot.owner == Some(id) {
                slot.owner = None;
            }
        }
    }

    /// Publish the pose for progress `p` of region `id` and scrub the
    /// region's effect timeline. Returns whether the write landed; a call
    /// from a non-owner is dropped.
    pub fn progress(&mut self, id: RegionId, p: f32) -> bool {
        let Some(slot) = self.slot.as_mut() else {
            return false;
        };
        if slot.owner != Some(id) {
            return false;
        }
        // Defensive clamp: a NaN progress (zero-length extent upstream)
        // becomes 0 rather than a NaN pose that breaks rendering silently.
        let p = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        let i = match self.index.get(&id).copied() {
            Some(i) => i,
            None => return false,
        };
        slot.pose = self.regions[i].segment.evaluate(p);
        self.regions[i].effects.scrub(p);
        true
    }

    /// Dispatch a batch of trigger events for one region, in order.
    pub fn handle(&mut self, id: RegionId, events: &[TriggerEvent]) {
        for ev in events {
            match ev {
                TriggerEvent::Activated => self.activate(id),
                TriggerEvent::Progress(p) => {
                    self.progress(id, *p);
                }
                TriggerEvent::Deactivated => self.deactivate(id),
            }
        }
    }

    /// The latest published target pose; the frame loop's single read.
    /// `None` until the plan is sealed.
    pub fn target(&self) -> Option<Pose> {
        self.slot.map(|s| s.pose)
    }

    /// Current slot owner, exposed for tests asserting the write guard.
    pub fn owner(&self) -> Option<RegionId> {
        self.slot.and_then(|s| s.owner)
    }

    fn region(&self, id: RegionId) -> Option<&Region> {
        self.index.get(&id).map(|&i| &self.regions[i])
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}
