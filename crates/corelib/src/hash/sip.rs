//! SipHash-1-3 pair hasher.

use crate::hash::pair_bytes;
use crate::hash::traits::KeyHasher;
use crate::site::{Key, SiteId};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Keyed SipHash-1-3. The seed fills the first key word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SipKeyHasher {
    seed: u64,
}

impl SipKeyHasher {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl KeyHasher for SipKeyHasher {
    fn hash_pair(&self, site: SiteId, key: Key) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(self.seed, 0);
        hasher.write(&pair_bytes(site, key));
        hasher.finish()
    }

    fn name(&self) -> &'static str {
        "SipKeyHasher"
    }
}
