//! Weighted rendezvous scoring.
//!
//! # Algorithm
//!
//! For a site with capacity `w` and a key `k`:
//!
//! 1. Hash `(site id, k)` under the scorer's seed.
//! 2. Map the hash to a uniform `c` strictly inside `(0, 1)`.
//! 3. Score is `-w / ln(c)`.
//!
//! `-ln(c)` is an exponential variate, so `-w / ln(c)` is the reciprocal of an
//! exponential with rate proportional to `1/w`. The site with the highest score
//! wins, and over many keys site `i` wins with probability `w_i / sum(w)`.
//!
//! A score depends only on the site's own identity and capacity, never on the
//! other sites. Adding, removing, or resizing one site leaves the relative order
//! of every other pair untouched.

use crate::hash::KeyHasher;
use crate::site::{Key, Site, SiteId};

/// Number of hash bits fed into the mantissa.
const UNIT_BITS: u32 = 52;
const UNIT_SCALE: f64 = (1u64 << UNIT_BITS) as f64;

/// Map a 64-bit hash to a uniform value strictly inside `(0, 1)`.
///
/// Takes the top 52 bits and centers them in their bucket, so the result lies
/// in `[2^-53, 1 - 2^-53]`. Every step is exact in `f64`: `ln` never sees 0 and
/// never returns 0.
#[inline]
pub fn unit_interval(hash: u64) -> f64 {
    ((hash >> (64 - UNIT_BITS)) as f64 + 0.5) / UNIT_SCALE
}

/// A site paired with its score for one key. Only lives for one ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreRecord {
    pub site: SiteId,
    pub score: f64,
}

/// Computes weighted rendezvous scores with an injected hasher.
#[derive(Clone, Debug)]
pub struct WeightedScorer<H> {
    hasher: H,
}

impl<H: KeyHasher> WeightedScorer<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Score one `(site, key)` pair. Always finite and positive.
    #[inline]
    pub fn score(&self, site: SiteId, capacity: u64, key: Key) -> f64 {
        let c = unit_interval(self.hasher.hash_pair(site, key));
        -(capacity as f64) / c.ln()
    }

    /// Score a site for a key, producing a [`ScoreRecord`].
    #[inline]
    pub fn record(&self, site: &Site, key: Key) -> ScoreRecord {
        ScoreRecord {
            site: site.id(),
            score: self.score(site.id(), site.capacity(), key),
        }
    }
}
