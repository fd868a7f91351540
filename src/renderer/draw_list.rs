//! Recording surface for native runs and tests

use glam::DVec2;

use super::Surface;
use crate::sim::Rgb;

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
        color: Rgb,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: Rgb,
    },
    StrokeCircle {
        center: DVec2,
        radius: f64,
        color: Rgb,
        line_width: f64,
    },
}

/// Surface that stores every command of the current frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of filled circles (balls) drawn since the last clear
    pub fn filled_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Number of outlined circles (hunter) drawn since the last clear
    pub fn stroked_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f64, height: f64, color: Rgb) {
        // A clear starts a new frame
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Rgb, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }
}
