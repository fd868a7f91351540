//! Capabilities shared by every circular entity

use glam::DVec2;

use super::arena::Arena;
use crate::circles_overlap;
use crate::renderer::Surface;

/// A circle that can be drawn, advanced one frame and tested for contact.
///
/// Implemented by [`Ball`](super::Ball) (filled, reflects off walls) and
/// [`Hunter`](super::Hunter) (outlined, pushed back inside the arena).
pub trait Shape {
    fn center(&self) -> DVec2;

    fn radius(&self) -> f64;

    fn draw(&self, surface: &mut dyn Surface);

    /// Per-frame boundary handling and motion
    fn advance(&mut self, arena: &Arena);

    /// Strict overlap: `distance < r1 + r2`
    fn overlaps(&self, other: &dyn Shape) -> bool {
        circles_overlap(self.center(), self.radius(), other.center(), other.radius())
    }
}
