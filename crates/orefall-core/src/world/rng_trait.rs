//! RNG trait abstraction for world generation
//!
//! Generation draws from one shared stream threaded through every call, so
//! outcomes depend on call order. The trait keeps the surface down to the
//! draws generation actually needs and lets tests substitute any seeded
//! `rand` generator.

use std::ops::Range;

/// Random draws used by terrain generation.
pub trait WorldRng {
    /// Uniform f64 in [0.0, 1.0).
    fn unit_f64(&mut self) -> f64;

    /// Uniform i32 in the half-open `range`.
    fn range_i32(&mut self, range: Range<i32>) -> i32;

    /// Probability gate: true with chance `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit_f64() < probability
    }
}

// Blanket implementation for any type implementing rand::Rng, covering both
// the world's seeded Xoshiro stream and test generators.
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn unit_f64(&mut self) -> f64 {
        self.gen()
    }

    fn range_i32(&mut self, range: Range<i32>) -> i32 {
        self.gen_range(range)
    }
}
