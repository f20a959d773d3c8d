// Host-side tests for the per-frame output smoother.

use glam::{Vec2, Vec3};
use orrery_core::{
    CameraRig, FrameInput, Pose, BOB_AMPLITUDE, BOB_RATE, PARALLAX_GAIN, SMOOTH_TAU_SEC,
};

fn still(elapsed: f32) -> FrameInput {
    FrameInput {
        elapsed,
        dt: 1.0 / 60.0,
        pointer: Vec2::ZERO,
    }
}

/// Expected perturbed goal for a given input, mirroring the rig's layering.
fn perturbed(target: Pose, input: FrameInput) -> Pose {
    let mut goal = target;
    goal.position.y += (input.elapsed * BOB_RATE).sin() * BOB_AMPLITUDE;
    goal.position.x += input.pointer.x * PARALLAX_GAIN;
    goal.position.y += input.pointer.y * PARALLAX_GAIN;
    goal
}

#[test]
fn first_frame_snaps_to_the_target() {
    let mut rig = CameraRig::new();
    let target = Pose::new(Vec3::new(-25.0, -5.0, 418.8), Vec3::new(-40.0, -5.0, 405.0));
    let input = still(10.0);
    let pose = rig.step(target, input);
    assert_eq!(pose, perturbed(target, input), "no lerp chase on first frame");
}

#[test]
fn bootstrap_window_keeps_snapping() {
    let mut rig = CameraRig::new();
    let a = Pose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let b = Pose::new(Vec3::new(50.0, 0.0, 10.0), Vec3::ZERO);
    rig.step(a, still(0.0));
    let input = still(0.1);
    let pose = rig.step(b, input);
    assert_eq!(pose, perturbed(b, input), "inside bootstrap window");
}

#[test]
fn convergence_is_geometric_and_never_overshoots() {
    let mut rig = CameraRig::with_smoothing(SMOOTH_TAU_SEC);
    // dt chosen so the per-step blend is exactly 0.03.
    let dt = -SMOOTH_TAU_SEC * 0.97_f32.ln();
    // Freeze the wall clock so the bob offset is constant and the goal is a
    // fixed point; convergence is then purely the damping.
    let elapsed = 10.0;
    let input = FrameInput {
        elapsed,
        dt,
        pointer: Vec2::ZERO,
    };

    let a = Pose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let b = Pose::new(Vec3::new(100.0, 0.0, 10.0), Vec3::ZERO);
    rig.step(a, input); // snap to a
    let goal = perturbed(b, input);

    let d0 = rig.current().distance(&goal);
    assert!((d0 - 100.0).abs() < 1e-3);

    let mut prev = d0;
    for n in 1..=60 {
        let pose = rig.step(b, input);
        let d = pose.distance(&goal);
        assert!(d < prev, "distance grew at step {n}");
        assert!(pose.position.x <= goal.position.x + 1e-3, "overshot at step {n}");
        let expected = d0 * 0.97_f32.powi(n);
        assert!(
            (d / expected - 1.0).abs() < 1e-2,
            "step {n}: distance {d} vs geometric {expected}"
        );
        prev = d;
    }
    // Converging toward, never reaching, the goal.
    assert!(prev > 0.0);
    assert!(prev < 20.0);
}

#[test]
fn look_at_is_smoothed_but_never_perturbed() {
    let mut rig = CameraRig::new();
    let target = Pose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 2.0, 3.0));
    let input = FrameInput {
        elapsed: 0.0,
        dt: 1.0 / 60.0,
        pointer: Vec2::new(1.0, -0.5),
    };
    let pose = rig.step(target, input);
    // Bob and parallax land on the position only.
    assert_eq!(pose.look_at, target.look_at);
    assert!((pose.position.x - (target.position.x + PARALLAX_GAIN)).abs() < 1e-6);
}

#[test]
fn parallax_and_bob_are_additive_on_the_target() {
    let mut rig = CameraRig::new();
    let target = Pose::new(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO);
    let input = FrameInput {
        elapsed: 0.0,
        dt: 1.0 / 60.0,
        pointer: Vec2::new(0.5, 0.25),
    };
    let pose = rig.step(target, input);
    let expected = perturbed(target, input);
    assert_eq!(pose, expected);
    assert!((pose.position.x - 6.0).abs() < 1e-6);
    assert!((pose.position.y - 5.5).abs() < 1e-6);
}
