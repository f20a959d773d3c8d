use glam::Vec3;
use std::f32::consts::PI;

// Flight plan constants, hardcoded to match the planet layout in render.rs.

// Hero moon: the opening shot orbits it at close range.
pub const HERO_MOON_CENTER: Vec3 = Vec3::new(-40.0, -5.0, 405.0);
pub const HERO_MOON_RADIUS: f32 = 15.0;
pub const HERO_START_ANGLE: f32 = PI * 0.45; // just a touch off-center
pub const HERO_END_ANGLE: f32 = PI * 0.6; // sweeps the opposite way

// Portfolio planet: a slow half-orbit while the work panels page through.
pub const PORTFOLIO_CENTER: Vec3 = Vec3::new(150.0, 20.0, -100.0);
pub const PORTFOLIO_RADIUS: f32 = 50.0;

// Ringed giant, seen from a high vantage during the manifesto.
pub const VANTAGE_CENTER: Vec3 = Vec3::new(-15.0, 0.0, -45.0);
pub const VANTAGE_RADIUS: f32 = 120.0;
pub const VANTAGE_HEIGHT: f32 = 35.0;

// Outpost planet framing the contact section.
pub const OUTPOST_CENTER: Vec3 = Vec3::new(-150.0, -30.0, 50.0);
pub const OUTPOST_RADIUS: f32 = 60.0;

// Virtual scroll absorbed by each pinned section (px).
pub const HERO_PIN_LEN: f32 = 1500.0;
pub const PORTFOLIO_PIN_LEN: f32 = 12000.0;
pub const MANIFESTO_PIN_LEN: f32 = 1500.0;
pub const CONTACT_PIN_LEN: f32 = 1500.0;

// Portfolio panel track: 4 panels on a 16-unit local time axis, each panel
// owning a 4-unit slot (inner scroll, then swipe to the next).
pub const PANEL_COUNT: usize = 4;
pub const PANEL_TRACK_UNITS: f32 = 16.0;
pub const PANEL_SLOT_UNITS: f32 = 4.0;
pub const PANEL_INNER_SCROLL_OFFSET: f32 = 0.5;
pub const PANEL_SWIPE_OFFSET: f32 = 2.5;
pub const PANEL_SHOW_LEAD: f32 = 0.1; // incoming panel becomes visible just before the swipe
pub const PANEL_TWEEN_DURATION: f32 = 1.5;
pub const PANEL_OFFSCREEN_VW: f32 = 105.0;

// Subtitle reveal mask windows on a unit timeline.
pub const MASK_REVEAL_START: f32 = 0.2;
pub const MASK_HIDE_START: f32 = 0.8;
pub const MASK_DURATION: f32 = 0.2;

// Navbar condenses past this scroll depth (px).
pub const NAV_SCROLLED_AT: f32 = 50.0;

// Rendering.
pub const CAMERA_FOV_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 5000.0;
pub const ASTEROID_COUNT: usize = 150;
