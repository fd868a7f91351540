//! Per-frame simulation step
//!
//! The host calls [`tick`] once per animation frame and [`handle_input`]
//! whenever an input event arrives. Both run on the same thread, so they
//! interleave but never overlap.

use serde::{Deserialize, Serialize};

use super::collision::{hunt, recolor_overlapping};
use super::color::Rgb;
use super::hunter::Direction;
use super::shape::Shape;
use super::state::SimState;
use crate::renderer::Surface;

/// Input delivered by the host between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Directional key press for the hunter
    Move(Direction),
    /// Play/pause control
    TogglePause,
    /// Rebuild the registry with a new ball count
    Restart { ball_count: usize, seed: u64 },
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Two overlapping balls took a shared color
    Recolored { a: usize, b: usize, color: Rgb },
    /// The hunter caught a ball
    Eliminated { index: usize },
}

/// Apply one input event immediately. Returns false if it was ignored.
pub fn handle_input(state: &mut SimState, event: InputEvent) -> bool {
    match event {
        InputEvent::Move(direction) => {
            if state.paused {
                return false;
            }
            state.hunter.nudge(direction);
            true
        }
        InputEvent::TogglePause => {
            state.paused = !state.paused;
            log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
            true
        }
        InputEvent::Restart { ball_count, seed } => {
            state.restart(ball_count, seed);
            log::info!("Restarted with {} balls", state.balls.len());
            true
        }
    }
}

/// Advance the simulation by one frame and paint it onto `surface`.
///
/// Order: background, then for each live ball draw/move/recolor, then the
/// hunter draw/clamp/eliminate. Eliminations only happen in the hunter
/// pass, so every ball alive at the start of the ball pass is visited.
/// While paused the frame is painted but nothing moves.
pub fn tick(state: &mut SimState, surface: &mut dyn Surface) -> Vec<SimEvent> {
    let mut events = Vec::new();
    let arena = state.arena;

    surface.clear(arena.width, arena.height, Rgb::BLACK);

    for i in state.balls.live_indices() {
        if let Some(ball) = state.balls.get_mut(i) {
            ball.draw(surface);
            if !state.paused {
                ball.advance(&arena);
            }
        }
        if !state.paused {
            for (a, b, color) in recolor_overlapping(&mut state.balls, i, &mut state.rng) {
                events.push(SimEvent::Recolored { a, b, color });
            }
        }
    }

    state.hunter.draw(surface);
    if !state.paused {
        state.hunter.advance(&arena);
        for index in hunt(&state.hunter, &mut state.balls) {
            log::debug!(
                "Ball {} eliminated, {} left",
                index,
                state.balls.live_count()
            );
            events.push(SimEvent::Eliminated { index });
        }
    }

    state.frame += 1;
    events
}
