//! Seeded deterministic RNG and seed-string hashing
//!
//! The garland must look identical every time it is computed for the same
//! page, so all jitter comes from a Park-Miller multiplicative LCG whose
//! whole state is one integer. An instance is created per generation call
//! and threaded through explicitly; there is no global generator.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Lehmer modulus (2^31 - 1, a Mersenne prime)
const LCG_MODULUS: u64 = 2_147_483_647;
/// Lehmer multiplier (Park-Miller "minimal standard")
const LCG_MULTIPLIER: u64 = 16_807;

/// Hash a seed string into a non-negative integer seed.
///
/// Classic polynomial rolling hash (`h = h * 31 + char`) on wrapping 32-bit
/// signed arithmetic, absolute value taken. Integer ops only, so the result
/// is stable across platforms.
pub fn hash_text(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in text.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Park-Miller multiplicative LCG (`state = state * 16807 mod 2^31-1`).
///
/// The state is always in `[1, 2^31 - 2]`; `next()` maps it onto `[0, 1)`.
/// The sequence is fully determined by the seed, which is what lets a page
/// and its server-rendered markup agree on every control point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator, normalizing the seed into `[1, 2^31 - 2]`.
    pub fn new(seed: u64) -> Self {
        let state = seed % LCG_MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Create a generator from a seed string (page seed + layout params).
    pub fn from_text(seed: &str) -> Self {
        Self::new(hash_text(seed) as u64)
    }

    /// Advance the LCG and return the new raw state in `[1, 2^31 - 2]`.
    #[inline]
    fn advance(&mut self) -> u64 {
        self.state = (self.state * LCG_MULTIPLIER) % LCG_MODULUS;
        self.state
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next(&mut self) -> f64 {
        (self.advance() - 1) as f64 / (LCG_MODULUS - 2) as f64
    }

    /// Next value in `[min, max)`.
    #[inline]
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// `range` for the f32 geometry pipeline.
    #[inline]
    pub fn range32(&mut self, min: f32, max: f32) -> f32 {
        (min as f64 + self.next() * (max as f64 - min as f64)) as f32
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        // A Lehmer draw carries 31 bits; fold the top halves of two draws
        // into one full word.
        let hi = (self.advance() - 1) >> 15;
        let lo = (self.advance() - 1) >> 15;
        ((hi as u32) << 16) | (lo as u32 & 0xFFFF)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_park_miller_reference_sequence() {
        // Published minimal-standard check: from state 1, the 10,000th
        // iterate is 1043618065.
        let mut rng = SeededRng::new(1);
        for _ in 0..10_000 {
            rng.advance();
        }
        assert_eq!(rng.state, 1_043_618_065);
    }

    #[test]
    fn test_next_stays_in_unit_interval() {
        let mut rng = SeededRng::from_text("isepbands-christmas-2024");
        for _ in 0..10_000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v), "next() escaped [0,1): {}", v);
        }
    }

    #[test]
    fn test_mean_is_near_half() {
        let mut rng = SeededRng::from_text("isepbands-christmas-2024");
        let mean: f64 = (0..10_000).map(|_| rng.next()).sum::<f64>() / 10_000.0;
        assert!(
            (mean - 0.5).abs() < 0.02,
            "empirical mean {} too far from 0.5",
            mean
        );
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_zero_seed_is_normalized() {
        // State 0 is a fixed point of the LCG; it must never be used.
        let mut zero = SeededRng::new(0);
        let mut one = SeededRng::new(1);
        assert_eq!(zero.next(), one.next());

        // Multiples of the modulus reduce to 0 as well.
        let mut wrapped = SeededRng::new(LCG_MODULUS * 3);
        let mut fresh = SeededRng::new(1);
        assert_eq!(wrapped.next(), fresh.next());
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1_000 {
            let v = rng.range(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&v));
        }
        let mut rng = SeededRng::new(7);
        for _ in 0..1_000 {
            let v = rng.range32(10.0, 20.0);
            assert!((10.0..=20.0).contains(&v));
        }
    }

    #[test]
    fn test_hash_text_known_values() {
        assert_eq!(hash_text(""), 0);
        assert_eq!(hash_text("a"), 97);
        assert_eq!(hash_text("garland"), 190_778_173);
        assert_eq!(hash_text("isepbands-christmas-2024"), 1_357_712_369);
    }

    #[test]
    fn test_from_text_matches_hash() {
        let mut a = SeededRng::from_text("garland");
        let mut b = SeededRng::new(hash_text("garland") as u64);
        assert_eq!(a.next(), b.next());
    }

    #[test]
    fn test_rand_core_bridge() {
        use rand::Rng;

        // The RngCore impl must be as deterministic as the inherent API.
        let mut a = SeededRng::new(99);
        let mut b = SeededRng::new(99);
        assert_eq!(a.next_u32(), b.next_u32());
        assert_eq!(a.next_u64(), b.next_u64());

        // And usable through the rand trait surface.
        let mut rng = SeededRng::from_text("bridge");
        let x: f64 = rng.random();
        assert!((0.0..1.0).contains(&x));
        let n = rng.random_range(0..10);
        assert!((0..10).contains(&n));

        let mut seeded = SeededRng::from_seed(42u64.to_le_bytes());
        let mut direct = SeededRng::new(42);
        assert_eq!(seeded.next(), direct.next());
    }
}
