//! Boundary token generation.
//!
//! An encoder asks its [`BoundarySource`] for a token exactly once, at
//! construction. Production code uses [`RandomBoundary::thread`]; tests can
//! seed an RNG or pin the token with [`FixedBoundary`].

use rand::Rng;
use rand::rngs::ThreadRng;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Something that can produce a token unlikely to appear in field content.
pub trait BoundarySource {
    fn token(&mut self) -> String;
}

/// Random base-36 tokens drawn from an RNG.
#[derive(Debug, Clone)]
pub struct RandomBoundary<R = ThreadRng> {
    rng: R,
}

impl RandomBoundary<ThreadRng> {
    /// Draw tokens from the thread-local RNG.
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> RandomBoundary<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BoundarySource for RandomBoundary<R> {
    fn token(&mut self) -> String {
        to_base36(self.rng.random::<u64>())
    }
}

/// A caller-chosen token, returned verbatim every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBoundary(pub String);

impl FixedBoundary {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl BoundarySource for FixedBoundary {
    fn token(&mut self) -> String {
        self.0.clone()
    }
}

/// Lowercase base-36 rendering of `value`.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
