//! Seeded xoroshiro128+ generator shared by all samplers.
use rand::RngCore;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Reciprocal of 2^24, mapping 24 random bits onto `[0, 1)`.
const INV_2_POW_24: f32 = 1.0 / (1u32 << 24) as f32;

/// Small, fast deterministic generator (xoroshiro128+).
///
/// The two state words are derived from the seed with SplitMix64, so nearby seeds
/// give unrelated streams. Not suitable for cryptography.
#[derive(Debug, Clone)]
pub struct Prng {
    s0: u64,
    s1: u64,
}

impl Prng {
    pub fn new(seed: i64) -> Self {
        let mut state = seed as u64;
        let s0 = splitmix64(&mut state);
        let s1 = splitmix64(&mut state);
        Self { s0, s1 }
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_add(s1);
        s1 ^= s0;
        self.s0 = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.s1 = s1.rotate_left(36);
        result
    }

    /// Uniform float in `[0, 1)` with 24 bits of precision.
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        ((self.next_raw() as u32) >> 8) as f32 * INV_2_POW_24
    }

    /// Uniform integer in `[0, bound)`. `bound` must be positive.
    #[inline]
    pub fn next_int(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        let r = i64::from((self.next_raw() as u32) >> 1);
        ((r * i64::from(bound)) >> 31) as i32
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl RngCore for Prng {
    /// Upper half of the next output word; [`Prng::next_float`] and
    /// [`Prng::next_int`] draw from the lower half instead.
    fn next_u32(&mut self) -> u32 {
        (self.next_raw() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
