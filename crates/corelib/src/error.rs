//! Error types for the core library.

use crate::site::SiteId;
use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a cluster of sites.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A site was given a capacity of zero.
    #[error("invalid capacity for site {site}: capacity must be positive")]
    InvalidCapacity { site: SiteId },
    /// Two sites share the same identity.
    #[error("duplicate site identity {0}")]
    DuplicateSite(SiteId),
    /// A cluster needs at least one site.
    #[error("cluster has no sites")]
    EmptyCluster,
    /// A lookup named a site the cluster does not contain.
    #[error("unknown site {0}")]
    UnknownSite(SiteId),
}
