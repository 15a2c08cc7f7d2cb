//! Seeded hashing of `(site, key)` pairs.
//!
//! The scorer only needs a well-mixed 64-bit value per pair. Hashers are
//! stateless apart from their seed, so the same seed gives the same value on
//! any process and any number of times.

pub mod sip;
pub mod traits;
pub mod xxh3;

pub use sip::SipKeyHasher;
pub use traits::{HasherKind, KeyHasher};
pub use xxh3::Xxh3KeyHasher;

use crate::site::{Key, SiteId};

/// Canonical byte encoding hashed for a pair: site id then key, little-endian.
#[inline]
pub(crate) fn pair_bytes(site: SiteId, key: Key) -> [u8; 12] {
    let mut buf = [0u8; 12];
    buf[..4].copy_from_slice(&site.0.to_le_bytes());
    buf[4..].copy_from_slice(&key.to_le_bytes());
    buf
}
