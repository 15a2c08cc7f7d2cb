//! Per-site and aggregate statistics handed to the reporter.

use corelib::{Cluster, KeyHasher, SiteId};
use serde::Serialize;

/// Snapshot of one site after a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteStats {
    pub id: SiteId,
    /// Keys stored.
    pub occupied: u64,
    pub capacity: u64,
    /// `occupied / capacity` as a percentage.
    pub occupancy_pct: f64,
    pub hits: u64,
    /// Share of all configured reads answered here. `None` when no reads ran.
    pub hit_pct: Option<f64>,
    pub misses: u64,
    /// Keys in the universe that rank this site first.
    pub primary: u64,
}

/// Counts from one read phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadSummary {
    /// Reads routed to at least one site.
    pub routed: u64,
    /// Reads of unwritable keys, dropped without probing.
    pub skipped: u64,
    /// Reads that found the key somewhere.
    pub hits: u64,
    /// Total site probes across all routed reads.
    pub probes: u64,
}

/// Everything the reporter needs after a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub sites: Vec<SiteStats>,
    pub num_writes: u64,
    pub num_reads: u64,
    pub written: u64,
    pub unwritable: u64,
    pub unwritable_pct: f64,
    pub reads: ReadSummary,
}

/// `part / whole` as a percentage, 0 for an empty whole.
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub(crate) fn site_stats<H: KeyHasher>(
    cluster: &Cluster<H>,
    num_writes: u64,
    num_reads: u64,
) -> Vec<SiteStats> {
    let primary = cluster.primary_counts(0..num_writes);
    cluster
        .sites()
        .map(|site| {
            let occupied = site.len() as u64;
            SiteStats {
                id: site.id(),
                occupied,
                capacity: site.capacity(),
                occupancy_pct: percent(occupied, site.capacity()),
                hits: site.read_hits(),
                hit_pct: (num_reads > 0).then(|| percent(site.read_hits(), num_reads)),
                misses: site.read_misses(),
                primary: primary.get(&site.id()).copied().unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(5, 10), 50.0);
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(3, 3), 100.0);
    }
}
