//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, velocities in units per frame
//! - Seeded RNG only
//! - Stable iteration order (registry index)
//! - Drawing only through the `Surface` trait, no platform dependencies

pub mod arena;
pub mod ball;
pub mod collision;
pub mod color;
pub mod hunter;
pub mod registry;
pub mod shape;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use ball::Ball;
pub use collision::{hunt, recolor_overlapping};
pub use color::Rgb;
pub use hunter::{Direction, Hunter};
pub use registry::BodyRegistry;
pub use shape::Shape;
pub use state::{SimConfig, SimState, SpawnRange};
pub use tick::{InputEvent, SimEvent, handle_input, tick};

#[cfg(test)]
mod proptests {
    use glam::DVec2;
    use proptest::prelude::*;

    use super::*;
    use crate::renderer::DrawList;

    proptest! {
        #[test]
        fn balls_stay_within_one_step_of_bounds(
            seed in 0u64..1000,
            width in 100.0f64..800.0,
            height in 100.0f64..600.0,
            frames in 1usize..200,
        ) {
            let arena = Arena::new(width.floor(), height.floor());
            let mut state = SimState::new(SimConfig::default(), arena, seed);
            // Keep the hunter out of the way
            state.hunter.pos = DVec2::new(-1000.0, -1000.0);
            let mut list = DrawList::new();

            for _ in 0..frames {
                tick(&mut state, &mut list);
                state.hunter.pos = DVec2::new(-1000.0, -1000.0);
                for ball in state.balls.iter() {
                    let (r, v) = (ball.radius, ball.vel.abs());
                    prop_assert!(ball.pos.x >= r - v.x && ball.pos.x <= arena.width - r + v.x,
                        "x={} r={} vx={}", ball.pos.x, r, ball.vel.x);
                    prop_assert!(ball.pos.y >= r - v.y && ball.pos.y <= arena.height - r + v.y,
                        "y={} r={} vy={}", ball.pos.y, r, ball.vel.y);
                }
            }
        }

        #[test]
        fn elimination_is_monotonic_and_counted(
            seed in 0u64..500,
            moves in proptest::collection::vec(0u8..4, 10..120),
        ) {
            let arena = Arena::new(400.0, 300.0);
            let mut state = SimState::new(SimConfig::default(), arena, seed);
            let initial = state.live_count();
            let mut list = DrawList::new();
            let mut dead = vec![false; state.balls.len()];
            let mut eliminated = 0;

            for m in moves {
                let dir = match m {
                    0 => Direction::Left,
                    1 => Direction::Right,
                    2 => Direction::Up,
                    _ => Direction::Down,
                };
                handle_input(&mut state, InputEvent::Move(dir));
                let live_before = state.live_count();
                for event in tick(&mut state, &mut list) {
                    if let SimEvent::Eliminated { index } = event {
                        prop_assert!(!dead[index], "ball {} eliminated twice", index);
                        dead[index] = true;
                        eliminated += 1;
                    }
                }
                for (i, ball) in state.balls.iter().enumerate() {
                    prop_assert_eq!(ball.is_alive(), !dead[i]);
                }
                prop_assert_eq!(state.live_count(), initial - eliminated);
                // Balls caught this frame were still drawn
                prop_assert_eq!(list.filled_count(), live_before);
            }
        }

        #[test]
        fn hunter_clamp_reaches_inside(
            x in -60.0f64..460.0,
            y in -60.0f64..360.0,
        ) {
            let arena = Arena::new(400.0, 300.0);
            let mut hunter = Hunter::new(DVec2::new(x, y), 20.0);
            let r = hunter.radius;
            // Each pass moves at least one radius toward the inside
            let passes = ((60.0 + r) / r).ceil() as usize + 1;
            for _ in 0..passes {
                hunter.check_bounds(&arena);
            }
            prop_assert!(arena.contains_circle(hunter.pos, r), "pos={:?}", hunter.pos);
        }
    }
}
