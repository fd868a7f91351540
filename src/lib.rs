//! Ball Hunt - bouncing balls and the circle that eats them
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, elimination)
//! - `renderer`: Render surface abstraction (Canvas 2D on web, draw list natively)
//! - `settings`: Persisted user preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::DVec2;

/// Startup configuration constants
pub mod consts {
    /// Number of balls created at startup
    pub const BALL_COUNT: usize = 25;
    /// Upper bound for the restart ball count field
    pub const MAX_BALL_COUNT: usize = 200;

    /// Ball radius range (inclusive)
    pub const BALL_MIN_RADIUS: f64 = 10.0;
    pub const BALL_MAX_RADIUS: f64 = 20.0;

    /// Velocity component range (inclusive, units per frame)
    pub const BALL_MIN_SPEED: f64 = -7.0;
    pub const BALL_MAX_SPEED: f64 = 7.0;

    /// Hunter defaults
    pub const HUNTER_START_X: f64 = 100.0;
    pub const HUNTER_START_Y: f64 = 100.0;
    pub const HUNTER_RADIUS: f64 = 10.0;
    /// Distance moved per key press
    pub const HUNTER_STEP: f64 = 20.0;
    /// Outline width of the hunter ring
    pub const HUNTER_LINE_WIDTH: f64 = 3.0;

    /// Label shown before the live ball count
    pub const BALL_COUNT_LABEL: &str = "Ball count: ";
}

/// Whether two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    a.distance(b) < a_radius + b_radius
}
