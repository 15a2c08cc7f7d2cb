//! The simulated site set and per-key site ranking.
//!
//! A [`Cluster`] owns every site for the run together with the scorer that
//! ranks them. Ranking is a full O(n log n) sort of all sites per key; there
//! is no shared ranking table to keep in sync.

use crate::error::{Error, Result};
use crate::hash::KeyHasher;
use crate::score::{ScoreRecord, WeightedScorer};
use crate::site::{Key, Site, SiteId};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Ordering used for rankings: descending score, then ascending site id.
///
/// Equal floating-point scores are rare but possible, so the id tie-break keeps
/// rankings reproducible. `total_cmp` gives a total order even though scores
/// are always finite.
#[inline]
pub fn rank_order(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.site.cmp(&b.site))
}

/// A fixed set of sites plus the scorer that ranks them.
#[derive(Debug)]
pub struct Cluster<H> {
    sites: BTreeMap<SiteId, Site>,
    scorer: WeightedScorer<H>,
}

impl<H: KeyHasher> Cluster<H> {
    /// Build a cluster from already constructed sites.
    ///
    /// Fails on an empty site list or on two sites sharing an identity.
    pub fn new(sites: impl IntoIterator<Item = Site>, scorer: WeightedScorer<H>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for site in sites {
            let id = site.id();
            if map.insert(id, site).is_some() {
                return Err(Error::DuplicateSite(id));
            }
        }
        if map.is_empty() {
            return Err(Error::EmptyCluster);
        }
        debug!(sites = map.len(), hasher = scorer.hasher().name(), "built cluster");
        Ok(Self { sites: map, scorer })
    }

    /// Build a cluster from an ordered capacity list.
    ///
    /// The site at list position `i` gets identity `i + 1`.
    pub fn from_capacities(capacities: &[u64], scorer: WeightedScorer<H>) -> Result<Self> {
        let sites = capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| Site::new(SiteId(i as u32 + 1), capacity))
            .collect::<Result<Vec<_>>>()?;
        Self::new(sites, scorer)
    }

    /// Score every site for `key`, best first.
    pub fn scores(&self, key: Key) -> Vec<ScoreRecord> {
        let mut records: Vec<ScoreRecord> = self
            .sites
            .values()
            .map(|site| self.scorer.record(site, key))
            .collect();
        records.sort_by(rank_order);
        records
    }

    /// All site ids ordered by descending score for `key`.
    pub fn rank(&self, key: Key) -> Vec<SiteId> {
        self.scores(key).into_iter().map(|r| r.site).collect()
    }

    /// How many of `keys` rank each site first.
    ///
    /// Every site appears in the result, including those that never win.
    pub fn primary_counts(&self, keys: impl IntoIterator<Item = Key>) -> BTreeMap<SiteId, u64> {
        let mut counts: BTreeMap<SiteId, u64> = self.sites.keys().map(|&id| (id, 0)).collect();
        for key in keys {
            let winner = self
                .sites
                .values()
                .map(|site| self.scorer.record(site, key))
                .min_by(rank_order);
            if let Some(record) = winner {
                *counts.entry(record.site).or_default() += 1;
            }
        }
        counts
    }

    pub fn site(&self, id: SiteId) -> Result<&Site> {
        self.sites.get(&id).ok_or(Error::UnknownSite(id))
    }

    pub fn site_mut(&mut self, id: SiteId) -> Result<&mut Site> {
        self.sites.get_mut(&id).ok_or(Error::UnknownSite(id))
    }

    /// Sites in identity order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn total_capacity(&self) -> u64 {
        self.sites.values().map(Site::capacity).sum()
    }

    pub fn scorer(&self) -> &WeightedScorer<H> {
        &self.scorer
    }
}
