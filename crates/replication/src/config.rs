//! Simulation configuration.
//!
//! Serialized field names are camelCase. The short flag spellings `rf` and
//! `siteCaps` are accepted as aliases.

use crate::error::{ReplicationError, Result};
use corelib::HasherKind;
use serde::{Deserialize, Serialize};

/// Everything needed to run one simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Capacity per site. List position `i` becomes site id `i + 1`.
    #[serde(alias = "siteCaps")]
    pub sites: Vec<u64>,
    /// Number of distinct sites each written key is stored on.
    #[serde(alias = "rf")]
    pub replication_factor: usize,
    /// Size of the key universe `[0, num_writes)`.
    pub num_writes: u64,
    /// Number of uniformly random reads to route.
    pub num_reads: u64,
    /// Seed for both the pair hasher and the read-key generator.
    pub seed: u64,
    pub hasher: HasherKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            replication_factor: 1,
            num_writes: 1000,
            num_reads: 10000,
            seed: 0,
            hasher: HasherKind::default(),
        }
    }
}

impl SimulationConfig {
    /// Check the configuration before any site is built.
    pub fn validate(&self) -> Result<()> {
        if self.sites.is_empty() {
            return Err(ReplicationError::NoSites);
        }
        if let Some(index) = self.sites.iter().position(|&c| c == 0) {
            return Err(ReplicationError::InvalidCapacity { index, value: 0 });
        }
        if self.replication_factor == 0 {
            return Err(ReplicationError::ZeroReplicationFactor);
        }
        if self.replication_factor > self.sites.len() {
            return Err(ReplicationError::ReplicationFactorExceedsSites {
                factor: self.replication_factor,
                sites: self.sites.len(),
            });
        }
        Ok(())
    }
}
