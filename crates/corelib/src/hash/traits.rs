//! Core hasher trait definitions.

use crate::site::{Key, SiteId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Turns a `(site, key)` pair into a 64-bit hash.
///
/// Implementations are stateless and thread-safe; the only input besides the
/// pair is a seed fixed at construction.
pub trait KeyHasher: Send + Sync + fmt::Debug + 'static {
    /// Hash one pair.
    fn hash_pair(&self, site: SiteId, key: Key) -> u64;

    /// Returns the name of this hasher.
    fn name(&self) -> &'static str;
}

/// Which hash function to use, as named in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    /// SipHash-1-3.
    #[default]
    Sip,
    /// XXH3 64-bit.
    Xxh3,
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HasherKind::Sip => write!(f, "sip"),
            HasherKind::Xxh3 => write!(f, "xxh3"),
        }
    }
}

impl FromStr for HasherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sip" | "siphash" => Ok(HasherKind::Sip),
            "xxh3" | "xxhash" => Ok(HasherKind::Xxh3),
            other => Err(format!("unknown hasher '{other}' (expected 'sip' or 'xxh3')")),
        }
    }
}

impl<H: KeyHasher + ?Sized> KeyHasher for Box<H> {
    fn hash_pair(&self, site: SiteId, key: Key) -> u64 {
        (**self).hash_pair(site, key)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl HasherKind {
    /// Build a boxed hasher of this kind with the given seed.
    pub fn build(self, seed: u64) -> Box<dyn KeyHasher> {
        match self {
            HasherKind::Sip => Box::new(super::SipKeyHasher::new(seed)),
            HasherKind::Xxh3 => Box::new(super::Xxh3KeyHasher::new(seed)),
        }
    }
}
