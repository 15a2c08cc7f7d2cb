//! Two-phase simulation driver.
//!
//! # Phases
//!
//! 1. **Writes**: keys `0..num_writes` in increasing order go through the
//!    replication strategy. Rejected keys join the unwritable set for good.
//! 2. **Reads**: `num_reads` keys drawn uniformly from `0..num_writes`. Reads
//!    of unwritable keys are dropped; the rest are routed first-hit.
//!
//! Site state only changes inside these two phases, one after the other.

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::routing::ReadRouter;
use crate::stats::{percent, site_stats, ReadSummary, SimulationReport};
use crate::strategy::{AllOrNothingStrategy, Placement, ReplicationStrategy};
use corelib::{Cluster, Key, KeyHasher, WeightedScorer};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// One configured run over an in-memory cluster.
#[derive(Debug)]
pub struct Simulation<H> {
    config: SimulationConfig,
    cluster: Cluster<H>,
    strategy: AllOrNothingStrategy,
    router: ReadRouter,
    unwritable: BTreeSet<Key>,
    written: u64,
    writes_done: bool,
    reads: ReadSummary,
}

impl Simulation<Box<dyn KeyHasher>> {
    /// Build a simulation using the hasher and seed named in `config`.
    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        let hasher = config.hasher.build(config.seed);
        Self::new(config, hasher)
    }
}

impl<H: KeyHasher> Simulation<H> {
    /// Validate `config` and build the cluster. Nothing is written yet.
    pub fn new(config: SimulationConfig, hasher: H) -> Result<Self> {
        config.validate()?;
        let cluster = Cluster::from_capacities(&config.sites, WeightedScorer::new(hasher))?;
        let strategy = AllOrNothingStrategy::new(config.replication_factor);
        debug!(
            sites = cluster.len(),
            total_capacity = cluster.total_capacity(),
            strategy = strategy.name(),
            "simulation ready"
        );
        Ok(Self {
            config,
            cluster,
            strategy,
            router: ReadRouter::new(),
            unwritable: BTreeSet::new(),
            written: 0,
            writes_done: false,
            reads: ReadSummary::default(),
        })
    }

    /// Place every key in the universe. Runs at most once.
    pub fn run_writes(&mut self) -> Result<()> {
        if self.writes_done {
            return Ok(());
        }
        for key in 0..self.config.num_writes {
            match self.strategy.place(&mut self.cluster, key)? {
                Placement::Written(_) => self.written += 1,
                Placement::Rejected { full } => {
                    debug!(key, ?full, "unable to write");
                    self.unwritable.insert(key);
                }
            }
        }
        self.writes_done = true;
        info!(
            written = self.written,
            unwritable = self.unwritable.len(),
            "write phase complete"
        );
        Ok(())
    }

    /// Route `num_reads` uniformly random reads, drawing keys from `rng`.
    ///
    /// Runs the write phase first if it has not happened yet. With an empty key
    /// universe there is nothing to draw and no site is probed.
    pub fn run_reads<R: Rng>(&mut self, rng: &mut R) -> Result<ReadSummary> {
        self.run_writes()?;
        let num_writes = self.config.num_writes;
        if num_writes == 0 {
            return Ok(self.reads);
        }

        for _ in 0..self.config.num_reads {
            let key = rng.gen_range(0..num_writes);
            if self.unwritable.contains(&key) {
                self.reads.skipped += 1;
                continue;
            }
            let result = self.router.route(&mut self.cluster, key)?;
            self.reads.routed += 1;
            self.reads.probes += result.probes as u64;
            if result.hit.is_some() {
                self.reads.hits += 1;
            }
        }
        info!(
            routed = self.reads.routed,
            skipped = self.reads.skipped,
            probes = self.reads.probes,
            "read phase complete"
        );
        Ok(self.reads)
    }

    /// Run both phases and produce the report.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<SimulationReport> {
        self.run_writes()?;
        self.run_reads(rng)?;
        Ok(self.report())
    }

    /// Statistics for the current state.
    pub fn report(&self) -> SimulationReport {
        let num_writes = self.config.num_writes;
        let num_reads = self.config.num_reads;
        SimulationReport {
            sites: site_stats(&self.cluster, num_writes, num_reads),
            num_writes,
            num_reads,
            written: self.written,
            unwritable: self.unwritable.len() as u64,
            unwritable_pct: percent(self.unwritable.len() as u64, num_writes),
            reads: self.reads,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn cluster(&self) -> &Cluster<H> {
        &self.cluster
    }

    /// Keys rejected during the write phase.
    pub fn unwritable(&self) -> &BTreeSet<Key> {
        &self.unwritable
    }

    /// Number of keys placed on `rf` sites.
    pub fn written(&self) -> u64 {
        self.written
    }
}
