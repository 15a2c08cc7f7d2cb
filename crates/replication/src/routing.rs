//! Read routing.
//!
//! A read walks the key's ranking and probes sites in order until one holds
//! the key. Every probe counts: the site records a hit or a miss whether or
//! not the search stops there. Sites after the first hit are never touched.

use crate::error::Result;
use corelib::{Cluster, Key, KeyHasher, SiteId};

/// Outcome of routing one read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadResult {
    /// The site that answered, if any did.
    pub hit: Option<SiteId>,
    /// Number of sites probed, including the one that hit.
    pub probes: usize,
}

/// Routes reads through the rendezvous ranking, first hit wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadRouter;

impl ReadRouter {
    pub fn new() -> Self {
        Self
    }

    /// Probe sites for `key` in rank order, stopping at the first hit.
    ///
    /// A key stored nowhere exhausts the ranking and records a miss on every site.
    pub fn route<H: KeyHasher>(&self, cluster: &mut Cluster<H>, key: Key) -> Result<ReadResult> {
        let mut probes = 0;
        for id in cluster.rank(key) {
            probes += 1;
            if cluster.site_mut(id)?.read(key) {
                return Ok(ReadResult {
                    hit: Some(id),
                    probes,
                });
            }
        }
        Ok(ReadResult { hit: None, probes })
    }
}
