//! Fixed rectangular play area

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Simulation bounds, `[0, width] x [0, height]`, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Whether a circle lies completely inside the arena
    pub fn contains_circle(&self, center: DVec2, radius: f64) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }

    /// Largest radius a circle can have and still fit
    pub fn max_fitting_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}
