//! XXH3 pair hasher.

use crate::hash::pair_bytes;
use crate::hash::traits::KeyHasher;
use crate::site::{Key, SiteId};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Seeded XXH3 (64-bit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xxh3KeyHasher {
    seed: u64,
}

impl Xxh3KeyHasher {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl KeyHasher for Xxh3KeyHasher {
    fn hash_pair(&self, site: SiteId, key: Key) -> u64 {
        xxh3_64_with_seed(&pair_bytes(site, key), self.seed)
    }

    fn name(&self) -> &'static str {
        "Xxh3KeyHasher"
    }
}
