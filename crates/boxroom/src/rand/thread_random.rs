use crate::{IdentifierSource, RawId};
use rand::{Rng, rng};

/// An [`IdentifierSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// Draws uniformly from the full 64-bit range. The RNG is cryptographically
/// secure (ChaCha-based) and reseeded periodically.
///
/// This type does **not** store the RNG itself; it accesses the thread-local
/// generator on each call, so it is zero-sized and freely cloneable.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl IdentifierSource for ThreadRandom {
    fn generate(&self) -> RawId {
        rng().random()
    }
}
