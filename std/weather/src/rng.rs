//! Seedable Mulberry32 generator.
//!
//! The output sequence is part of the tool's observable behavior: the same
//! seed must always yield the same weather, so the mixing steps below are
//! fixed bit-for-bit.

/// Increment added to the state before every draw.
const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;

/// Divisor mapping a `u32` onto `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 pseudo-random generator with 32 bits of state.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator whose first draw depends only on `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }

    /// Advance the state and return the next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Return a draw function over a fresh generator seeded with `seed`.
///
/// Restarting a sequence means calling this again with the same seed.
pub fn make_generator(seed: u32) -> impl FnMut() -> f64 {
    let mut rng = Mulberry32::new(seed);
    move || rng.next_f64()
}
