//! Core library for weighted rendezvous sharding.
//!
//! This crate provides the building blocks of the simulation:
//! - Capacity-bounded sites with read hit/miss counters
//! - Seeded `(site, key)` hashers
//! - The weighted rendezvous scorer
//! - The site set and its per-key ranking

pub mod cluster;
pub mod error;
pub mod hash;
pub mod score;
pub mod site;

pub use cluster::{rank_order, Cluster};
pub use error::{Error, Result};
pub use hash::{HasherKind, KeyHasher, SipKeyHasher, Xxh3KeyHasher};
pub use score::{unit_interval, ScoreRecord, WeightedScorer};
pub use site::{Key, Site, SiteId};
