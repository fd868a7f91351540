//! Bouncing ball body

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::color::Rgb;
use super::shape::Shape;
use crate::renderer::Surface;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Units per frame
    pub vel: DVec2,
    pub radius: f64,
    pub color: Rgb,
    /// Cleared once by `BodyRegistry::eliminate`, never set again
    alive: bool,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// One-way transition, only reachable through the registry
    pub(super) fn mark_eliminated(&mut self) {
        self.alive = false;
    }

    /// Flip velocity on every wall the ball touches.
    ///
    /// Both walls of an axis are checked, so a ball touching both flips twice.
    pub fn reflect(&mut self, arena: &Arena) {
        if self.pos.x + self.radius >= arena.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.x - self.radius <= 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y + self.radius >= arena.height {
            self.vel.y = -self.vel.y;
        }
        if self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Reflect, then move by one frame of velocity
    pub fn update(&mut self, arena: &Arena) {
        self.reflect(arena);
        self.pos += self.vel;
    }
}

impl Shape for Ball {
    fn center(&self) -> DVec2 {
        self.pos
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }

    fn advance(&mut self, arena: &Arena) {
        self.update(arena);
    }
}
