//! Ordered ball storage with a live counter

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::ball::Ball;
use super::color::Rgb;
use super::state::SpawnRange;

/// Uniform integer in `[min, max]` (inclusive), returned as `f64`.
///
/// Collapses to `min` when the range holds no integer.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if hi < lo {
        return min;
    }
    rng.random_range(lo..=hi) as f64
}

/// All balls of a run, in creation order.
///
/// Eliminated balls stay in place so indices remain stable; only the `alive`
/// flag changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyRegistry {
    balls: Vec<Ball>,
    /// Decremented on elimination, never recomputed
    live: usize,
}

impl BodyRegistry {
    /// Build from explicit balls (dead ones are not counted)
    pub fn from_balls(balls: Vec<Ball>) -> Self {
        let live = balls.iter().filter(|b| b.is_alive()).count();
        Self { balls, live }
    }

    /// Create `count` balls with independent random attributes.
    ///
    /// Each center is sampled in `[radius, dimension - radius]` so the whole
    /// circle starts inside the arena. Zero velocity components are allowed.
    pub fn create_bodies<R: Rng + ?Sized>(
        count: usize,
        arena: &Arena,
        radius_range: SpawnRange,
        speed_range: SpawnRange,
        rng: &mut R,
    ) -> Self {
        let mut balls = Vec::with_capacity(count);
        while balls.len() < count {
            let radius = random_int(rng, radius_range.min, radius_range.max);
            let x = random_int(rng, radius, arena.width - radius);
            let y = random_int(rng, radius, arena.height - radius);
            let vx = random_int(rng, speed_range.min, speed_range.max);
            let vy = random_int(rng, speed_range.min, speed_range.max);
            let color = Rgb::random(rng);
            balls.push(Ball::new(DVec2::new(x, y), DVec2::new(vx, vy), radius, color));
        }
        Self { balls, live: count }
    }

    /// Number of balls still alive
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Total balls ever created, dead or alive
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    /// Mutable access for motion; the `alive` flag stays out of reach
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ball> {
        self.balls.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    /// Whether the ball at `index` exists and is alive
    pub fn is_live(&self, index: usize) -> bool {
        self.balls.get(index).is_some_and(Ball::is_alive)
    }

    /// Call `f` once for each live ball, in registry order
    pub fn for_each_live(&self, mut f: impl FnMut(usize, &Ball)) {
        for (i, ball) in self.balls.iter().enumerate() {
            if ball.is_alive() {
                f(i, ball);
            }
        }
    }

    /// Indices of balls alive right now, in registry order.
    ///
    /// A frame pass walks this snapshot, so liveness is read once at the
    /// top of the pass.
    pub fn live_indices(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.live);
        self.for_each_live(|i, _| indices.push(i));
        indices
    }

    /// Mark a ball eliminated. Returns false if it was already dead or missing.
    pub fn eliminate(&mut self, index: usize) -> bool {
        match self.balls.get_mut(index) {
            Some(ball) if ball.is_alive() => {
                ball.mark_eliminated();
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    /// Give two distinct balls the same color
    pub fn share_color(&mut self, a: usize, b: usize, color: Rgb) {
        if let Some(ball) = self.balls.get_mut(a) {
            ball.color = color;
        }
        if let Some(ball) = self.balls.get_mut(b) {
            ball.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn radius_range() -> SpawnRange {
        SpawnRange::new(10.0, 20.0)
    }

    fn speed_range() -> SpawnRange {
        SpawnRange::new(-7.0, 7.0)
    }

    #[test]
    fn test_create_bodies_fit_arena() {
        let arena = Arena::new(320.0, 240.0);
        let mut rng = Pcg32::seed_from_u64(1);
        let registry =
            BodyRegistry::create_bodies(100, &arena, radius_range(), speed_range(), &mut rng);

        assert_eq!(registry.len(), 100);
        assert_eq!(registry.live_count(), 100);
        for ball in registry.iter() {
            assert!(ball.is_alive());
            assert!((10.0..=20.0).contains(&ball.radius));
            assert_eq!(ball.radius.fract(), 0.0);
            assert!(arena.contains_circle(ball.pos, ball.radius));
            assert!((-7.0..=7.0).contains(&ball.vel.x));
            assert!((-7.0..=7.0).contains(&ball.vel.y));
        }
    }

    #[test]
    fn test_create_bodies_deterministic() {
        let arena = Arena::new(640.0, 480.0);
        let a = BodyRegistry::create_bodies(
            25,
            &arena,
            radius_range(),
            speed_range(),
            &mut Pcg32::seed_from_u64(99),
        );
        let b = BodyRegistry::create_bodies(
            25,
            &arena,
            radius_range(),
            speed_range(),
            &mut Pcg32::seed_from_u64(99),
        );
        assert!(a.iter().eq(b.iter()));
    }

    #[test]
    fn test_random_int_inclusive() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..500 {
            let v = random_int(&mut rng, -2.0, 2.0);
            assert!((-2.0..=2.0).contains(&v));
            seen_min |= v == -2.0;
            seen_max |= v == 2.0;
        }
        assert!(seen_min && seen_max);
        // Empty integer range falls back to min
        assert_eq!(random_int(&mut rng, 10.2, 10.8), 10.2);
    }

    #[test]
    fn test_eliminate_once() {
        let arena = Arena::new(200.0, 200.0);
        let mut rng = Pcg32::seed_from_u64(5);
        let mut registry =
            BodyRegistry::create_bodies(3, &arena, radius_range(), speed_range(), &mut rng);

        assert!(registry.eliminate(1));
        assert_eq!(registry.live_count(), 2);
        // Second elimination of the same ball is a no-op
        assert!(!registry.eliminate(1));
        assert_eq!(registry.live_count(), 2);
        // Out of range
        assert!(!registry.eliminate(10));
        assert_eq!(registry.live_count(), 2);

        // Stays in the registry
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_live(1));
        assert_eq!(registry.live_indices(), vec![0, 2]);
    }

    #[test]
    fn test_for_each_live_skips_dead() {
        let balls = (0..4)
            .map(|i| {
                Ball::new(
                    DVec2::new(20.0 * i as f64 + 20.0, 20.0),
                    DVec2::ZERO,
                    5.0,
                    Rgb::WHITE,
                )
            })
            .collect();
        let mut registry = BodyRegistry::from_balls(balls);
        registry.eliminate(0);
        registry.eliminate(2);

        let mut visited = Vec::new();
        registry.for_each_live(|i, _| visited.push(i));
        assert_eq!(visited, vec![1, 3]);
        assert_eq!(registry.live_indices(), visited);
    }

    #[test]
    fn test_live_counter_matches_scan() {
        let arena = Arena::new(300.0, 300.0);
        let mut rng = Pcg32::seed_from_u64(21);
        let mut registry =
            BodyRegistry::create_bodies(6, &arena, radius_range(), speed_range(), &mut rng);
        let scan = |r: &BodyRegistry| r.iter().filter(|b| b.is_alive()).count();

        // Mutable access moves balls but cannot touch liveness
        if let Some(ball) = registry.get_mut(0) {
            ball.pos = DVec2::new(150.0, 150.0);
            ball.color = Rgb::BLACK;
        }
        assert_eq!(registry.live_count(), scan(&registry));

        for i in [0, 3, 3, 5, 9] {
            registry.eliminate(i);
            assert_eq!(registry.live_count(), scan(&registry));
        }
        assert_eq!(registry.live_count(), 3);
        // Eliminated balls stay eliminated
        assert!(!registry.is_live(0));
        assert!(registry.get(3).is_some_and(|b| !b.is_alive()));
    }

    #[test]
    fn test_from_balls_counts_live_only() {
        let mut dead = Ball::new(DVec2::new(50.0, 50.0), DVec2::ZERO, 5.0, Rgb::WHITE);
        dead.mark_eliminated();
        let live = Ball::new(DVec2::new(80.0, 50.0), DVec2::ZERO, 5.0, Rgb::WHITE);
        let registry = BodyRegistry::from_balls(vec![dead, live]);
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.len(), 2);
    }
}
