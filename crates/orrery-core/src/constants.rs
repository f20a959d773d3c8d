/// Rig and director tuning constants.
///
/// These express intended behavior (time constants, amplitudes, tolerances)
/// and keep magic numbers out of the code.
// Camera smoothing time constant (seconds). Reproduces a 0.03-per-frame
// lerp at 60 Hz: alpha = 1 - exp(-dt / tau).
pub const SMOOTH_TAU_SEC: f32 = 0.55;

// Snap window after scene start; inside it the rig copies the target
// directly instead of chasing it from whatever pose it woke up with.
pub const BOOTSTRAP_WINDOW_SEC: f32 = 0.2;

// Ambient vertical bob applied to the target position each frame.
pub const BOB_RATE: f32 = 0.5; // radians per second inside sin()
pub const BOB_AMPLITUDE: f32 = 2.0; // world units

// Pointer parallax gain, world units per normalized pointer unit.
pub const PARALLAX_GAIN: f32 = 2.0;

// Max positional gap between adjacent segment endpoints before seal()
// reports the joint as a hard cut (world units).
pub const CONTINUITY_TOLERANCE: f32 = 0.25;
