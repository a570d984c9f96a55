//! RNG module - seeded piece and color draws
//!
//! Shapes and colors are drawn uniformly and independently; there is no bag.
//! A simple LCG keeps every game reproducible from its seed.

use crate::types::{COLOR_COUNT, SHAPE_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate first step
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Draw a shape id in `[0, SHAPE_COUNT)`
    pub fn draw_shape(&mut self) -> u8 {
        self.next_range(u32::from(SHAPE_COUNT)) as u8
    }

    /// Draw a color in `[1, COLOR_COUNT]`
    pub fn draw_color(&mut self) -> u8 {
        1 + self.next_range(u32::from(COLOR_COUNT)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 0);
        let first = rng.next_u32();
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn test_draw_ranges() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.draw_shape() < SHAPE_COUNT);
            let color = rng.draw_color();
            assert!((1..=COLOR_COUNT).contains(&color));
        }
    }

    #[test]
    fn test_every_shape_eventually_drawn() {
        let mut rng = SimpleRng::new(12345);
        let mut seen = [false; SHAPE_COUNT as usize];
        for _ in 0..500 {
            seen[rng.draw_shape() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "saw {:?}", seen);
    }
}
