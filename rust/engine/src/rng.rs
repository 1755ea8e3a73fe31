//! Randomness sources for board shuffling.
//!
//! Daily boards use [`SeededRandom`], a small linear congruential generator
//! whose constants are fixed so that every implementation derives the same board
//! for a given date. Practice boards use any [`rand::Rng`] through [`RngSource`].
//! Both feed the same Fisher–Yates [`shuffle`].

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub const LCG_MULTIPLIER: u64 = 9301;
pub const LCG_INCREMENT: u64 = 49297;
pub const LCG_MODULUS: u64 = 233_280;

/// A stream of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Linear congruential generator:
/// `state = (state * 9301 + 49297) mod 233280`, yielding `state / 233280`.
///
/// These constants are a compatibility contract; changing them changes every
/// daily board.
///
/// ```
/// use dailyset_engine::rng::SeededRandom;
///
/// let mut a = SeededRandom::new(20250101);
/// let mut b = SeededRandom::new(20250101);
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        // reducing first gives the same sequence and keeps the product in range
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    pub fn next(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.next()
    }
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<ThreadRng> {
    /// Non-reproducible source for practice boards.
    pub fn thread() -> Self {
        RngSource(rand::rng())
    }
}

impl RngSource<ChaCha20Rng> {
    /// Reproducible practice source.
    pub fn from_seed(seed: u64) -> Self {
        RngSource(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// In-place Fisher–Yates shuffle driven by `rng`.
///
/// Walks from the last position down to 1, swapping position `i` with
/// `floor(next_unit() * (i + 1))`. The draw order is part of the daily-board
/// contract.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}
