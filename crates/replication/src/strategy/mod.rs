//! Replication strategy abstractions.
//!
//! A replication strategy decides, for one key, which ranked sites receive
//! the write and whether the write happens at all.
//!
//! - **AllOrNothingStrategy**: the top `rf` ranked sites, only if all have room

pub mod all_or_nothing;

pub use all_or_nothing::AllOrNothingStrategy;

use crate::error::Result;
use corelib::{Cluster, Key, KeyHasher, SiteId};

/// Outcome of placing one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The key was stored on these sites, best ranked first.
    Written(Vec<SiteId>),
    /// The key was stored nowhere. `full` lists the target sites that had no room.
    Rejected { full: Vec<SiteId> },
}

impl Placement {
    pub fn is_written(&self) -> bool {
        matches!(self, Placement::Written(_))
    }
}

/// Trait for replication strategies.
///
/// # Thread Safety
///
/// Strategies hold configuration only, so they are `Send + Sync`. The cluster
/// they mutate is passed in by exclusive reference.
pub trait ReplicationStrategy: Send + Sync + 'static {
    /// Number of sites each written key lands on.
    fn replication_factor(&self) -> usize;

    /// Place `key` into `cluster`, mutating the chosen sites.
    fn place<H: KeyHasher>(&self, cluster: &mut Cluster<H>, key: Key) -> Result<Placement>;

    /// Get the strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
