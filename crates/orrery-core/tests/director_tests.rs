// Host-side tests for region sequencing, the activation guard and the
// shared target slot.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use orrery_core::{
    Director, Ease, OrbitSpec, RegionSpec, RegionTrigger, ScrollExtent, Segment, SpecError,
    Timeline, TransitSpec, TweenSpec,
};

fn orbit_a() -> OrbitSpec {
    OrbitSpec {
        center: Vec3::ZERO,
        radius: 20.0,
        height: 0.0,
        angle_start: 0.0,
        angle_end: std::f32::consts::FRAC_PI_4,
    }
}

fn orbit_b() -> OrbitSpec {
    OrbitSpec {
        center: Vec3::new(100.0, 0.0, -50.0),
        radius: 50.0,
        height: 0.0,
        angle_start: std::f32::consts::PI,
        angle_end: 0.0,
    }
}

/// Three contiguous regions with structurally matching joints.
fn three_region_plan() -> (Director, Vec<orrery_core::RegionId>) {
    let mut director = Director::new();
    let a = orbit_a();
    let b = orbit_b();
    let transit = TransitSpec::between(a.evaluate(1.0), b.evaluate(0.0), Ease::None);

    let ids = vec![
        director
            .add_region(RegionSpec::new(
                "orbit-a",
                ScrollExtent::new(0.0, 1000.0),
                true,
                Segment::Orbit(a),
            ))
            .unwrap(),
        director
            .add_region(RegionSpec::new(
                "travel",
                ScrollExtent::new(1000.0, 1500.0),
                false,
                Segment::Transit(transit),
            ))
            .unwrap(),
        director
            .add_region(RegionSpec::new(
                "orbit-b",
                ScrollExtent::new(1500.0, 3000.0),
                true,
                Segment::Orbit(b),
            ))
            .unwrap(),
    ];
    (director, ids)
}

#[test]
fn registration_rejects_malformed_segments() {
    let mut director = Director::new();
    let bad = OrbitSpec {
        center: Vec3::ZERO,
        radius: -1.0,
        height: 0.0,
        angle_start: 0.0,
        angle_end: 1.0,
    };
    let err = director.add_region(RegionSpec::new(
        "broken",
        ScrollExtent::new(0.0, 100.0),
        false,
        Segment::Orbit(bad),
    ));
    assert!(matches!(err, Err(SpecError::NonPositiveRadius(_))));
    assert!(director.is_empty());
}

#[test]
fn sealing_an_empty_plan_fails() {
    let mut director = Director::new();
    assert!(matches!(director.seal(), Err(SpecError::EmptyPlan)));
    assert!(director.target().is_none());
}

#[test]
fn registration_after_seal_fails() {
    let (mut director, _) = three_region_plan();
    director.seal().unwrap();
    let err = director.add_region(RegionSpec::new(
        "late",
        ScrollExtent::new(3000.0, 4000.0),
        false,
        Segment::Orbit(orbit_a()),
    ));
    assert!(matches!(err, Err(SpecError::PlanSealed)));
}

#[test]
fn slot_initializes_to_the_first_regions_start_pose() {
    let (mut director, _) = three_region_plan();
    director.seal().unwrap();
    let target = director.target().unwrap();
    assert_eq!(target, orbit_a().evaluate(0.0));
}

#[test]
fn matched_joints_pass_the_continuity_check() {
    let (mut director, _) = three_region_plan();
    assert_eq!(director.seal().unwrap(), 0);
}

#[test]
fn mismatched_joints_are_counted_as_hard_cuts() {
    let mut director = Director::new();
    director
        .add_region(RegionSpec::new(
            "orbit-a",
            ScrollExtent::new(0.0, 1000.0),
            true,
            Segment::Orbit(orbit_a()),
        ))
        .unwrap();
    // Starts nowhere near orbit-a's end pose.
    director
        .add_region(RegionSpec::new(
            "orbit-b",
            ScrollExtent::new(1000.0, 2000.0),
            true,
            Segment::Orbit(orbit_b()),
        ))
        .unwrap();
    assert_eq!(director.seal().unwrap(), 1);
}

#[test]
fn only_the_owner_writes_the_slot() {
    let (mut director, ids) = three_region_plan();
    director.seal().unwrap();

    director.activate(ids[0]);
    assert!(director.progress(ids[0], 0.5));
    let mid = director.target().unwrap();

    // A region that never activated cannot write.
    assert!(!director.progress(ids[2], 0.9));
    assert_eq!(director.target().unwrap(), mid);
}

#[test]
fn deactivated_region_cannot_write_stale_progress() {
    let (mut director, ids) = three_region_plan();
    director.seal().unwrap();

    director.activate(ids[0]);
    assert!(director.progress(ids[0], 1.0));
    director.deactivate(ids[0]);
    let held = director.target().unwrap();

    // Out-of-order events from a fast flick: stray samples after the
    // deactivation edge must not move the target.
    assert!(!director.progress(ids[0], 0.2));
    assert!(!director.progress(ids[0], 0.7));
    assert_eq!(director.target().unwrap(), held);
}

#[test]
fn boundary_handover_drops_the_previous_owner() {
    let (mut director, ids) = three_region_plan();
    director.seal().unwrap();

    director.activate(ids[0]);
    director.activate(ids[1]); // latest activation wins
    assert_eq!(director.owner(), Some(ids[1]));
    assert!(!director.progress(ids[0], 0.4));
    assert!(director.progress(ids[1], 0.0));

    // A stale deactivation from the old owner must not strip the new one.
    director.deactivate(ids[0]);
    assert_eq!(director.owner(), Some(ids[1]));
}

#[test]
fn non_finite_progress_clamps_to_region_start() {
    let (mut director, ids) = three_region_plan();
    director.seal().unwrap();
    director.activate(ids[0]);
    assert!(director.progress(ids[0], f32::NAN));
    assert_eq!(director.target().unwrap(), orbit_a().evaluate(0.0));
}

#[test]
fn effects_timeline_is_scrubbed_with_region_progress() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut effects = Timeline::new(1.0);
    effects.add(TweenSpec::new(0.2, 0.2, Ease::None), move |t| {
        sink.borrow_mut().push(t)
    });

    let mut director = Director::new();
    let id = director
        .add_region(
            RegionSpec::new(
                "hero",
                ScrollExtent::new(0.0, 1500.0),
                true,
                Segment::Orbit(orbit_a()),
            )
            .with_effects(effects),
        )
        .unwrap();
    director.seal().unwrap();
    director.activate(id);

    director.progress(id, 0.1); // before the mask window
    director.progress(id, 0.3); // halfway through it
    assert_eq!(seen.borrow().len(), 1);
    assert!((seen.borrow()[0] - 0.5).abs() < 1e-6);
}

#[test]
fn continuous_sweep_produces_no_discontinuous_jumps() {
    // Scroll 0 -> 3000 in 1-unit steps across all three regions; no jump
    // between consecutive target samples may exceed a small epsilon
    // (there are no authored hard cuts in this plan).
    let (mut director, ids) = three_region_plan();
    director.seal().unwrap();

    let mut triggers: Vec<RegionTrigger> = ids
        .iter()
        .map(|id| RegionTrigger::new(director.region_extent(*id).unwrap()))
        .collect();

    let mut prev = director.target().unwrap();
    for step in 0..=3000 {
        let scroll = step as f32;
        for (id, trigger) in ids.iter().zip(triggers.iter_mut()) {
            let events = trigger.sample(scroll);
            director.handle(*id, &events);
        }
        let pose = director.target().unwrap();
        let jump = pose.distance(&prev);
        assert!(
            jump < 0.5,
            "discontinuity of {jump} at scroll={scroll} ({:?} -> {:?})",
            prev.position,
            pose.position
        );
        prev = pose;
    }

    // The sweep must have ended on orbit-b's final framing.
    assert!(prev.distance(&orbit_b().evaluate(1.0)) < 1e-3);
}
