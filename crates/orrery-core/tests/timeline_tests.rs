// Host-side tests for the scrub timeline.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_core::{Ease, Timeline, TweenSpec};

fn recorder() -> (Rc<RefCell<Vec<f32>>>, impl FnMut(f32)) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |v: f32| sink.borrow_mut().push(v))
}

#[test]
fn entry_fires_only_inside_its_window() {
    let mut tl = Timeline::new(1.0);
    let (seen, rec) = recorder();
    tl.add(TweenSpec::new(0.2, 0.2, Ease::None), rec);

    tl.evaluate(0.1);
    assert!(seen.borrow().is_empty(), "fired before window");

    tl.evaluate(0.3);
    assert_eq!(seen.borrow().len(), 1);
    assert!((seen.borrow()[0] - 0.5).abs() < 1e-6);

    tl.evaluate(0.9);
    assert_eq!(seen.borrow().len(), 1, "fired after window");
}

#[test]
fn window_endpoints_are_inclusive() {
    let mut tl = Timeline::new(1.0);
    let (seen, rec) = recorder();
    tl.add(TweenSpec::new(0.2, 0.2, Ease::None), rec);

    tl.evaluate(0.2);
    tl.evaluate(0.4);
    assert_eq!(seen.borrow().as_slice(), &[0.0, 1.0]);
}

#[test]
fn overlapping_entries_all_fire() {
    let mut tl = Timeline::new(1.0);
    let (a_seen, a_rec) = recorder();
    let (b_seen, b_rec) = recorder();
    // Simultaneous angle sweep + UI reveal: both cover 0.5, no exclusion.
    tl.add(TweenSpec::new(0.0, 1.0, Ease::None), a_rec);
    tl.add(TweenSpec::new(0.4, 0.4, Ease::None), b_rec);

    tl.evaluate(0.5);
    assert_eq!(a_seen.borrow().as_slice(), &[0.5]);
    assert_eq!(b_seen.borrow().len(), 1);
    assert!((b_seen.borrow()[0] - 0.25).abs() < 1e-6);
}

#[test]
fn ease_is_applied_to_local_progress() {
    let mut tl = Timeline::new(1.0);
    let (seen, rec) = recorder();
    tl.add(TweenSpec::new(0.0, 1.0, Ease::QuadOut), rec);

    tl.evaluate(0.5);
    let expected = Ease::QuadOut.apply(0.5);
    assert!((seen.borrow()[0] - expected).abs() < 1e-6);
}

#[test]
fn step_reports_the_side_of_the_playhead() {
    let mut tl = Timeline::new(16.0);
    let (seen, rec) = recorder();
    tl.add(TweenSpec::step(2.4), rec);

    tl.evaluate(1.0);
    tl.evaluate(3.0);
    tl.evaluate(2.4);
    // Scrub back below the step: the flip must revert.
    tl.evaluate(0.5);
    assert_eq!(seen.borrow().as_slice(), &[0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn evaluation_is_deterministic_for_scrubbing() {
    let mut tl = Timeline::new(1.0);
    let (seen, rec) = recorder();
    tl.add(TweenSpec::new(0.2, 0.6, Ease::QuadInOut), rec);

    // Forward, backward, forward again over the same playhead positions.
    let playhead = [0.3_f32, 0.5, 0.7, 0.5, 0.3, 0.5, 0.7];
    for t in playhead {
        tl.evaluate(t);
    }
    let seen = seen.borrow();
    assert_eq!(seen[0], seen[4], "same playhead, different output");
    assert_eq!(seen[1], seen[3]);
    assert_eq!(seen[1], seen[5]);
    assert_eq!(seen[2], seen[6]);
}

#[test]
fn scrub_maps_normalized_progress_onto_the_total() {
    // 16 virtual units, like the portfolio panel track.
    let mut tl = Timeline::new(16.0);
    let (seen, rec) = recorder();
    tl.add(TweenSpec::new(4.5, 1.5, Ease::None), rec);

    tl.scrub(0.5); // playhead 8.0 -> outside [4.5, 6.0]
    assert!(seen.borrow().is_empty());

    tl.scrub(5.25 / 16.0); // playhead 5.25 -> halfway through the window
    assert_eq!(seen.borrow().len(), 1);
    assert!((seen.borrow()[0] - 0.5).abs() < 1e-5);
}

#[test]
fn non_finite_playhead_clamps_to_zero() {
    let mut tl = Timeline::new(1.0);
    let (seen, rec) = recorder();
    tl.add(TweenSpec::new(0.0, 1.0, Ease::None), rec);

    tl.evaluate(f32::NAN);
    assert_eq!(seen.borrow().as_slice(), &[0.0]);
}
