//! Random jitter sources for the forecast engine.
//!
//! Jitter simulates real-time variance on top of the deterministic model.
//! It is an injected dependency so tests can pin the draw to a fixed value
//! while production wiring uses the process RNG.

use rand::Rng;

/// Lower bound of the production jitter range.
pub const JITTER_LOW: f64 = 0.9;
/// Upper bound of the production jitter range.
pub const JITTER_HIGH: f64 = 1.1;

/// A source of multiplicative jitter factors.
pub trait JitterSource: Send {
    /// Draw one jitter factor. Draws are independent across calls.
    fn draw(&mut self) -> f64;
}

/// Uniform jitter over `[low, high)` drawn from the thread RNG.
///
/// Each call is an independent, unseeded draw; values are not reproducible
/// across calls.
#[derive(Debug, Clone, Copy)]
pub struct UniformJitter {
    low: f64,
    high: f64,
}

impl UniformJitter {
    pub fn new(low: f64, high: f64) -> UniformJitter {
        UniformJitter { low, high }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        UniformJitter::new(JITTER_LOW, JITTER_HIGH)
    }
}

impl JitterSource for UniformJitter {
    fn draw(&mut self) -> f64 {
        rand::thread_rng().gen_range(self.low..self.high)
    }
}

/// A jitter source that always returns the same factor.
///
/// Intended for tests that need the deterministic core on its own.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_draws_stay_in_range() {
        let mut jitter = UniformJitter::default();
        for _ in 0..10_000 {
            let factor = jitter.draw();
            assert!((JITTER_LOW..JITTER_HIGH).contains(&factor));
        }
    }

    #[test]
    fn fixed_jitter_is_constant() {
        let mut jitter = FixedJitter(1.0);
        assert_eq!(jitter.draw(), 1.0);
        assert_eq!(jitter.draw(), 1.0);
    }
}
