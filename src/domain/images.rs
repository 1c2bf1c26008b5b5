use std::ops::RangeInclusive;

use rand::{Rng, RngExt};
use serde::Serialize;

pub const WIDTH_RANGE: RangeInclusive<u32> = 1024..=2000;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 1024..=2000;
pub const SEED_RANGE: RangeInclusive<u32> = 100_000..=999_999;

/// Randomized stylistic parameters for one generation attempt.
///
/// Sampled through an injected random source so callers (and tests) control
/// determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageParameters {
    pub width: u32,
    pub height: u32,
    pub seed: u32,
}

impl ImageParameters {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            width: rng.random_range(WIDTH_RANGE),
            height: rng.random_range(HEIGHT_RANGE),
            seed: rng.random_range(SEED_RANGE),
        }
    }
}

/// One generated artifact held by the registry: the minted identifier and the
/// raw image bytes, immutable after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedImage {
    pub id: String,
    pub bytes: Vec<u8>,
}
