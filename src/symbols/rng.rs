//! Uniform random source used to pick symbols.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`: `floor(u * len)`.
    ///
    /// `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len - 1)
    }
}

/// Small xorshift64* generator.
///
/// Not cryptographic. Seeded from process entropy for rendering, or from a
/// fixed seed in tests.
#[derive(Debug, Clone)]
pub struct SymbolRng {
    state: u64,
}

impl SymbolRng {
    /// Build a generator from a 64-bit seed.
    ///
    /// `seed = 0` is remapped so the state can never be all zeros.
    pub const fn from_seed(seed: u64) -> Self {
        let mixed = seed ^ 0x9E37_79B9_7F4A_7C15;
        let state = if mixed == 0 {
            0xA076_1D64_78BD_642F
        } else {
            mixed
        };
        Self { state }
    }

    /// Seed from the std per-process hasher keys mixed with the clock.
    pub fn from_entropy() -> Self {
        let mut hasher = RandomState::new().build_hasher();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        hasher.write_u64(nanos);
        Self::from_seed(hasher.finish())
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl UniformSource for SymbolRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        // top 53 bits -> [0, 1)
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
