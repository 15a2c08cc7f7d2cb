//! Site abstractions for the simulated storage cluster.
//!
//! A site is an in-memory stand-in for a storage node: it holds a bounded
//! set of keys and counts how many read probes it answered or missed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Key identifier. Keys carry no payload; identity is the value itself.
pub type Key = u64;

/// Compact identifier for a site in the cluster.
///
/// Identities are handed out by whoever builds the cluster (usually the
/// position in the configured capacity list) and stay stable for the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub u32);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A capacity-bounded key store with read hit/miss counters.
///
/// # Invariants
///
/// - `len() <= capacity()` as long as every caller of [`Site::write`]
///   checked [`Site::full`] first. The site itself does not enforce it.
/// - Every call to [`Site::read`] bumps exactly one of the two counters.
#[derive(Clone, Debug)]
pub struct Site {
    id: SiteId,
    capacity: u64,
    known_keys: HashSet<Key>,
    read_hits: u64,
    read_misses: u64,
}

impl Site {
    /// Construct an empty site. Zero capacity is rejected.
    pub fn new(id: SiteId, capacity: u64) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity { site: id });
        }
        Ok(Self {
            id,
            capacity,
            known_keys: HashSet::new(),
            read_hits: 0,
            read_misses: 0,
        })
    }

    #[inline]
    pub fn id(&self) -> SiteId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of keys currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.known_keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.known_keys.is_empty()
    }

    /// True once the site holds `capacity` keys.
    #[inline]
    pub fn full(&self) -> bool {
        self.known_keys.len() as u64 >= self.capacity
    }

    /// Store `key`. No capacity check: callers must consult [`Site::full`].
    pub fn write(&mut self, key: Key) {
        self.known_keys.insert(key);
    }

    /// Probe for `key`, recording a hit or a miss. Returns true on a hit.
    pub fn read(&mut self, key: Key) -> bool {
        if self.known_keys.contains(&key) {
            self.read_hits += 1;
            true
        } else {
            self.read_misses += 1;
            false
        }
    }

    /// Membership check without touching the counters.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.known_keys.contains(&key)
    }

    #[inline]
    pub fn read_hits(&self) -> u64 {
        self.read_hits
    }

    #[inline]
    pub fn read_misses(&self) -> u64 {
        self.read_misses
    }
}
