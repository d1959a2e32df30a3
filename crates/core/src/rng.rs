//! RNG module - monster direction draws
//!
//! A small seeded LCG keeps the engine free of global randomness: the binary
//! seeds it from the clock, tests seed it with constants and get repeatable
//! monster walks.

use crate::types::Direction;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle with short periods; scale from the high bits.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform pick among the four directions.
    pub fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.next_range(Direction::ALL.len() as u32) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_direction(), b.next_direction());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn next_range_stays_below_max() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn every_direction_is_drawn_roughly_evenly() {
        let mut rng = SimpleRng::new(12345);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let dir = rng.next_direction();
            let idx = Direction::ALL.iter().position(|d| *d == dir).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "counts {:?}", counts);
        }
    }

    #[test]
    fn directions_do_not_cycle_with_period_four() {
        let mut rng = SimpleRng::new(3);
        let first: Vec<Direction> = (0..4).map(|_| rng.next_direction()).collect();
        let periodic = (0..16).all(|_| {
            let next: Vec<Direction> = (0..4).map(|_| rng.next_direction()).collect();
            next == first
        });
        assert!(!periodic);
    }
}
