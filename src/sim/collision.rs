//! Contact rules between circles
//!
//! Two rules exist:
//! - ball vs ball: overlapping balls both take one freshly sampled color
//! - hunter vs ball: an overlapped ball is eliminated
//!
//! Neither rule changes any velocity.

use rand::Rng;

use super::color::Rgb;
use super::hunter::Hunter;
use super::registry::BodyRegistry;
use super::shape::Shape;

/// Recolor every live ball overlapping the ball at `index`.
///
/// Peers are visited in registry order and compared by index, so two balls
/// with identical attributes are still distinct. Each overlapping pair
/// gets one new color shared by both balls. Returns `(index, other, color)`
/// for each recolored pair.
pub fn recolor_overlapping<R: Rng + ?Sized>(
    registry: &mut BodyRegistry,
    index: usize,
    rng: &mut R,
) -> Vec<(usize, usize, Rgb)> {
    let mut hits = Vec::new();
    if !registry.is_live(index) {
        return hits;
    }

    for other in 0..registry.len() {
        if other == index {
            continue;
        }
        let overlapping = match (registry.get(index), registry.get(other)) {
            (Some(a), Some(b)) => b.is_alive() && a.overlaps(b),
            _ => false,
        };
        if overlapping {
            let color = Rgb::random(rng);
            registry.share_color(index, other, color);
            hits.push((index, other, color));
        }
    }
    hits
}

/// Eliminate every live ball the hunter overlaps. Returns eliminated indices.
pub fn hunt(hunter: &Hunter, registry: &mut BodyRegistry) -> Vec<usize> {
    let caught: Vec<usize> = registry
        .live_indices()
        .into_iter()
        .filter(|&i| registry.get(i).is_some_and(|b| hunter.overlaps(b)))
        .collect();

    for &i in &caught {
        registry.eliminate(i);
    }
    caught
}
