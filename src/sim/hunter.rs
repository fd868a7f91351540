//! The keyboard-controlled hunter

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::color::Rgb;
use super::shape::Shape;
use crate::consts::*;
use crate::renderer::Surface;

/// Discrete movement direction from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value (`a`/`d`/`w`/`s`); anything else is ignored
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" => Some(Direction::Left),
            "d" => Some(Direction::Right),
            "w" => Some(Direction::Up),
            "s" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Unit offset in screen coordinates (y grows downward)
    pub fn offset(self) -> DVec2 {
        match self {
            Direction::Left => DVec2::new(-1.0, 0.0),
            Direction::Right => DVec2::new(1.0, 0.0),
            Direction::Up => DVec2::new(0.0, -1.0),
            Direction::Down => DVec2::new(0.0, 1.0),
        }
    }
}

/// The circle that eliminates balls on contact. Never eliminated itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hunter {
    pub pos: DVec2,
    pub radius: f64,
    pub color: Rgb,
    /// Distance moved per key press
    pub step: f64,
    pub line_width: f64,
}

impl Default for Hunter {
    fn default() -> Self {
        Self::new(DVec2::new(HUNTER_START_X, HUNTER_START_Y), HUNTER_STEP)
    }
}

impl Hunter {
    pub fn new(pos: DVec2, step: f64) -> Self {
        Self {
            pos,
            radius: HUNTER_RADIUS,
            color: Rgb::WHITE,
            step,
            line_width: HUNTER_LINE_WIDTH,
        }
    }

    /// Translate by one step right away (input side effect, not a frame update)
    pub fn nudge(&mut self, direction: Direction) {
        self.pos += direction.offset() * self.step;
    }

    /// Push back inward by exactly `radius` for each wall crossed.
    ///
    /// Every wall is checked on its own, so opposite adjustments can cancel in
    /// an arena narrower than the hunter.
    pub fn check_bounds(&mut self, arena: &Arena) {
        if self.pos.x + self.radius >= arena.width {
            self.pos.x -= self.radius;
        }
        if self.pos.x - self.radius <= 0.0 {
            self.pos.x += self.radius;
        }
        if self.pos.y + self.radius >= arena.height {
            self.pos.y -= self.radius;
        }
        if self.pos.y - self.radius <= 0.0 {
            self.pos.y += self.radius;
        }
    }
}

impl Shape for Hunter {
    fn center(&self) -> DVec2 {
        self.pos
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.stroke_circle(self.pos, self.radius, self.color, self.line_width);
    }

    fn advance(&mut self, arena: &Arena) {
        self.check_bounds(arena);
    }
}
