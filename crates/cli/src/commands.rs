//! Subcommands and their results.

use anyhow::Result;
use clap::Subcommand;
use corelib::{Cluster, Key, ScoreRecord, WeightedScorer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use replication::{Simulation, SimulationConfig, SimulationReport};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, Subcommand)]
pub enum Command {
    /// Run the write and read phases and print per-site statistics.
    #[default]
    Simulate,
    /// Print every site's score for one key, best first.
    Rank {
        /// Key to rank sites for.
        #[arg(long)]
        key: Key,
    },
}

/// One row of a ranking printout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedSite {
    pub site: corelib::SiteId,
    pub capacity: u64,
    pub score: f64,
}

/// What a command produced, ready for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandResult {
    Report(SimulationReport),
    Ranking { key: Key, sites: Vec<RankedSite> },
}

impl Command {
    pub fn execute(self, config: SimulationConfig) -> Result<CommandResult> {
        match self {
            Command::Simulate => simulate(config),
            Command::Rank { key } => rank(config, key),
        }
    }
}

fn simulate(config: SimulationConfig) -> Result<CommandResult> {
    info!(
        sites = config.sites.len(),
        rf = config.replication_factor,
        num_writes = config.num_writes,
        num_reads = config.num_reads,
        hasher = %config.hasher,
        "starting simulation"
    );
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut sim = Simulation::from_config(config)?;
    Ok(CommandResult::Report(sim.run(&mut rng)?))
}

fn rank(config: SimulationConfig, key: Key) -> Result<CommandResult> {
    let scorer = WeightedScorer::new(config.hasher.build(config.seed));
    let cluster = Cluster::from_capacities(&config.sites, scorer)?;
    let sites = cluster
        .scores(key)
        .into_iter()
        .map(|ScoreRecord { site, score }| {
            Ok(RankedSite {
                site,
                capacity: cluster.site(site)?.capacity(),
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CommandResult::Ranking { key, sites })
}
