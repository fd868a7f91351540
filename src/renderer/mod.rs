//! Rendering module
//!
//! The simulation draws through the [`Surface`] trait. On the web this is a
//! Canvas 2D context; natively and in tests it is a recorded [`DrawList`].

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use draw_list::{DrawCommand, DrawList};

use glam::DVec2;

use crate::sim::Rgb;

/// A 2D raster surface the simulation can paint on
pub trait Surface {
    /// Paint the whole `width` x `height` area with a solid color
    fn clear(&mut self, width: f64, height: f64, color: Rgb);

    /// Filled circle (full 0..2π sweep)
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb);

    /// Outlined circle (full 0..2π sweep)
    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Rgb, line_width: f64);
}
