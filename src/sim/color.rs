//! Display colors

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color, each channel in 0..=255
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// CSS color string, e.g. `rgb(12,34,56)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_css_format() {
        assert_eq!(Rgb::new(12, 34, 56).to_css(), "rgb(12,34,56)");
        assert_eq!(Rgb::BLACK.to_css(), "rgb(0,0,0)");
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(Rgb::random(&mut a), Rgb::random(&mut b));
        }
    }

    #[test]
    fn test_random_varies() {
        let mut rng = Pcg32::seed_from_u64(42);
        let first = Rgb::random(&mut rng);
        assert!((0..32).any(|_| Rgb::random(&mut rng) != first));
    }
}
