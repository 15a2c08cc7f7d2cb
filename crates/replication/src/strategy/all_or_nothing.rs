//! All-or-nothing replication strategy.
//!
//! # Algorithm
//!
//! 1. Rank every site for the key
//! 2. Look at the top `rf` sites
//! 3. If none of them is full, write the key to all of them
//! 4. Otherwise write it nowhere
//!
//! There is no fallback to lower-ranked sites and no partial replication:
//! a key ends up on exactly `rf` sites or on none.
//!
//! # Limitations
//!
//! - Key order matters. Early keys can saturate a site that later keys rank first.
//! - A rejected key stays rejected even if capacity would have existed elsewhere.

use crate::error::Result;
use crate::strategy::{Placement, ReplicationStrategy};
use corelib::{Cluster, Key, KeyHasher};
use tracing::trace;

/// Writes to the top `rf` ranked sites only when all of them have room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllOrNothingStrategy {
    replication_factor: usize,
}

impl AllOrNothingStrategy {
    /// Create a strategy with the given replication factor.
    ///
    /// The factor is validated against the site count by
    /// [`SimulationConfig::validate`](crate::SimulationConfig::validate); here a
    /// factor larger than the cluster simply targets every site.
    pub fn new(replication_factor: usize) -> Self {
        Self { replication_factor }
    }
}

impl ReplicationStrategy for AllOrNothingStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn place<H: KeyHasher>(&self, cluster: &mut Cluster<H>, key: Key) -> Result<Placement> {
        let mut targets = cluster.rank(key);
        targets.truncate(self.replication_factor);

        let mut full = Vec::new();
        for id in &targets {
            if cluster.site(*id)?.full() {
                full.push(*id);
            }
        }
        if !full.is_empty() {
            trace!(key, ?full, "rejecting key");
            return Ok(Placement::Rejected { full });
        }

        for id in &targets {
            cluster.site_mut(*id)?.write(key);
        }
        Ok(Placement::Written(targets))
    }

    fn name(&self) -> &'static str {
        "AllOrNothingStrategy"
    }
}
