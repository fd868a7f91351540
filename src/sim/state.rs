//! Simulation configuration and state
//!
//! Everything a frame reads or writes lives in [`SimState`]; there are no
//! globals.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::hunter::Hunter;
use super::registry::BodyRegistry;
use crate::consts::*;

/// Inclusive sampling range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: f64,
    pub max: f64,
}

impl SpawnRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Startup parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ball_count: usize,
    pub radius_range: SpawnRange,
    pub speed_range: SpawnRange,
    pub hunter_start: DVec2,
    pub hunter_step: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            radius_range: SpawnRange::new(BALL_MIN_RADIUS, BALL_MAX_RADIUS),
            speed_range: SpawnRange::new(BALL_MIN_SPEED, BALL_MAX_SPEED),
            hunter_start: DVec2::new(HUNTER_START_X, HUNTER_START_Y),
            hunter_step: HUNTER_STEP,
        }
    }
}

impl SimConfig {
    /// Copy with the given ball count, clamped to `1..=MAX_BALL_COUNT`
    pub fn with_ball_count(&self, count: usize) -> Self {
        Self {
            ball_count: count.clamp(1, MAX_BALL_COUNT),
            ..self.clone()
        }
    }

    /// Copy whose ranges can always be sampled inside `arena`.
    ///
    /// Radii shrink so a ball fits (never below 1), a reversed range is
    /// swapped. Nothing here is an error.
    pub fn fitted_to(&self, arena: &Arena) -> Self {
        let mut radius = self.radius_range;
        if radius.min > radius.max {
            std::mem::swap(&mut radius.min, &mut radius.max);
        }
        let fit = arena.max_fitting_radius().floor().max(1.0);
        radius.max = radius.max.min(fit).max(1.0);
        radius.min = radius.min.min(radius.max).max(1.0);

        let mut speed = self.speed_range;
        if speed.min > speed.max {
            std::mem::swap(&mut speed.min, &mut speed.max);
        }

        Self {
            radius_range: radius,
            speed_range: speed,
            ..self.clone()
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub config: SimConfig,
    pub arena: Arena,
    pub balls: BodyRegistry,
    pub hunter: Hunter,
    /// Frames stepped so far (paused frames included)
    pub frame: u64,
    pub paused: bool,
}

impl SimState {
    /// Create all balls and the hunter for a new run
    pub fn new(config: SimConfig, arena: Arena, seed: u64) -> Self {
        let config = config.fitted_to(&arena);
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = BodyRegistry::create_bodies(
            config.ball_count,
            &arena,
            config.radius_range,
            config.speed_range,
            &mut rng,
        );
        let hunter = Hunter::new(config.hunter_start, config.hunter_step);

        log::info!(
            "Simulation created: {} balls, arena {}x{}, seed {}",
            balls.len(),
            arena.width,
            arena.height,
            seed
        );

        Self {
            seed,
            rng,
            config,
            arena,
            balls,
            hunter,
            frame: 0,
            paused: false,
        }
    }

    /// Assemble a state from prepared parts (no random creation)
    pub fn from_parts(arena: Arena, balls: BodyRegistry, hunter: Hunter, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config: SimConfig::default(),
            arena,
            balls,
            hunter,
            frame: 0,
            paused: false,
        }
    }

    /// Replace every ball and reset the hunter, keeping the arena
    pub fn restart(&mut self, ball_count: usize, seed: u64) {
        let config = self.config.with_ball_count(ball_count);
        let paused = self.paused;
        *self = Self::new(config, self.arena, seed);
        self.paused = paused;
    }

    pub fn live_count(&self) -> usize {
        self.balls.live_count()
    }

    /// Text for the live count display
    pub fn status_text(&self) -> String {
        format!("{}{}", BALL_COUNT_LABEL, self.live_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = SimState::new(SimConfig::default(), Arena::new(800.0, 600.0), 12345);
        assert_eq!(state.balls.len(), BALL_COUNT);
        assert_eq!(state.live_count(), BALL_COUNT);
        assert_eq!(state.hunter.pos, DVec2::new(HUNTER_START_X, HUNTER_START_Y));
        assert_eq!(state.hunter.step, HUNTER_STEP);
        assert_eq!(state.frame, 0);
        assert!(!state.paused);
        assert_eq!(state.status_text(), "Ball count: 25");
    }

    #[test]
    fn test_same_seed_same_balls() {
        let arena = Arena::new(800.0, 600.0);
        let a = SimState::new(SimConfig::default(), arena, 77);
        let b = SimState::new(SimConfig::default(), arena, 77);
        assert!(a.balls.iter().eq(b.balls.iter()));

        let c = SimState::new(SimConfig::default(), arena, 78);
        assert!(!a.balls.iter().eq(c.balls.iter()));
    }

    #[test]
    fn test_fitted_to_small_arena() {
        let arena = Arena::new(30.0, 500.0);
        let config = SimConfig::default().fitted_to(&arena);
        assert_eq!(config.radius_range, SpawnRange::new(10.0, 15.0));

        let tiny = Arena::new(12.0, 12.0);
        let config = SimConfig::default().fitted_to(&tiny);
        assert_eq!(config.radius_range, SpawnRange::new(6.0, 6.0));

        // Every ball still fits
        let state = SimState::new(SimConfig::default(), tiny, 1);
        for ball in state.balls.iter() {
            assert!(tiny.contains_circle(ball.pos, ball.radius));
        }
    }

    #[test]
    fn test_fitted_to_swaps_reversed_ranges() {
        let config = SimConfig {
            radius_range: SpawnRange::new(20.0, 10.0),
            speed_range: SpawnRange::new(7.0, -7.0),
            ..Default::default()
        };
        let fitted = config.fitted_to(&Arena::new(800.0, 600.0));
        assert_eq!(fitted.radius_range, SpawnRange::new(10.0, 20.0));
        assert_eq!(fitted.speed_range, SpawnRange::new(-7.0, 7.0));
    }

    #[test]
    fn test_restart_replaces_balls() {
        let mut state = SimState::new(SimConfig::default(), Arena::new(800.0, 600.0), 5);
        state.balls.eliminate(0);
        state.hunter.pos = DVec2::new(400.0, 300.0);
        state.paused = true;

        state.restart(40, 6);
        assert_eq!(state.balls.len(), 40);
        assert_eq!(state.live_count(), 40);
        assert_eq!(state.hunter.pos, DVec2::new(HUNTER_START_X, HUNTER_START_Y));
        assert_eq!(state.seed, 6);
        assert!(state.paused);

        state.restart(0, 7);
        assert_eq!(state.balls.len(), 1);
        state.restart(10_000, 8);
        assert_eq!(state.balls.len(), MAX_BALL_COUNT);
    }
}
