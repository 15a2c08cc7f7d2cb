//! Error types for placement and simulation setup.

use thiserror::Error;

/// Result type alias for the replication crate.
pub type Result<T> = std::result::Result<T, ReplicationError>;

/// Configuration problems detected before any simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// Replication factor of zero.
    #[error("replication factor must be at least 1")]
    ZeroReplicationFactor,
    /// More replicas requested than there are sites to hold them.
    #[error("replication factor {factor} is greater than num sites ({sites})")]
    ReplicationFactorExceedsSites { factor: usize, sites: usize },
    /// No site capacities were configured.
    #[error("no sites configured")]
    NoSites,
    /// A configured capacity is not a positive integer.
    #[error("capacity at position {index} must be positive, got {value}")]
    InvalidCapacity { index: usize, value: u64 },
    #[error(transparent)]
    Core(#[from] corelib::Error),
}
