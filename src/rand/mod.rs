//! Non-cryptographic random source.
//!
//! Passwords are sampled with `SmallRng`. It is fast and uniform but not
//! suitable for credentials that must resist a determined attacker.

mod hw;

use std::sync::atomic::{AtomicU64, Ordering};

use ::rand::rngs::SmallRng;
use ::rand::{RngCore, SeedableRng};

// Separates sources created within the same counter tick.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

/// Per-caller random source. Each generator call owns one, so no locking is needed.
#[derive(Debug, Clone)]
pub struct Rand(SmallRng);

impl Rand {
    pub fn new() -> Self {
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self::seeded(mix(hw::entropy() ^ seq.rotate_left(32)))
    }

    /// Reproducible stream, same seed gives the same output.
    pub fn seeded(seed: u64) -> Self {
        Rand(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Rand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ::rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

// SplitMix64 finalizer, spreads low-entropy counter bits across the seed.
#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = Rand::seeded(42);
        let mut b = Rand::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn fresh_sources_differ() {
        let mut a = Rand::new();
        let mut b = Rand::new();
        let xs: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn mix_spreads_adjacent_inputs() {
        assert_ne!(mix(1), mix(2));
        assert_ne!(mix(1), 1);
    }
}
