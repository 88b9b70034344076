//! RNG module - seeded piece draws
//!
//! A simple LCG drives the next-piece draw. Each draw is independent
//! and uniform over the seven kinds; there is no bag or shuffle, so the
//! same kind can repeat arbitrarily often. That matches the classic
//! game feel and is kept on purpose.

use blockfall_types::PieceKind;

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        // Numerical Recipes constants: a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw the kind of the next piece, uniformly and independently.
    pub fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn all_kinds_show_up() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[(rng.next_piece().color_id() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "draws missing some kinds: {:?}", seen);
    }

    #[test]
    fn independent_draws_can_repeat() {
        // No bag fairness: back-to-back duplicates must be possible.
        let mut rng = SimpleRng::new(1);
        let mut prev = rng.next_piece();
        let mut repeats = 0;
        for _ in 0..1000 {
            let next = rng.next_piece();
            if next == prev {
                repeats += 1;
            }
            prev = next;
        }
        assert!(repeats > 0);
    }
}
