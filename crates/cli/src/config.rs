//! Command-line configuration.
//!
//! Values come from three layers, later ones winning:
//! built-in defaults, an optional JSON config file, explicit flags.

use crate::commands::{Command, CommandResult};
use crate::report::OutputFormat;
use anyhow::{bail, Context, Result};
use clap::Parser;
use corelib::HasherKind;
use replication::SimulationConfig;
use std::path::{Path, PathBuf};

/// Weighted rendezvous hashing simulator.
#[derive(Debug, Parser)]
#[command(name = "rendezvous-sim", version, about)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file with simulation settings. Flags override its values.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Replication factor.
    #[arg(long = "rf", global = true)]
    pub replication_factor: Option<usize>,

    /// Number of writes (size of the key universe).
    #[arg(long, alias = "numWrites", global = true)]
    pub num_writes: Option<u64>,

    /// Number of reads, uniformly random over the written key universe.
    #[arg(long, alias = "numReads", global = true)]
    pub num_reads: Option<u64>,

    /// Comma separated list of integers, each a site and its capacity.
    #[arg(long, alias = "siteCaps", global = true)]
    pub site_caps: Option<String>,

    /// Seed for the pair hasher and the read generator.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pair hash function: sip or xxh3.
    #[arg(long, global = true)]
    pub hasher: Option<HasherKind>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

impl CliConfig {
    /// Parse, execute and print. Entry point for `main`.
    pub fn run(self) -> Result<()> {
        setup_tracing(&self.log_level);
        let result = self.execute()?;
        println!("{}", result.render(self.format)?);
        Ok(())
    }

    /// Execute the selected command without printing anything.
    pub fn execute(&self) -> Result<CommandResult> {
        let config = self.simulation_config()?;
        self.command.clone().unwrap_or_default().execute(config)
    }

    /// Merge defaults, the config file and flags into a validated config.
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(caps) = &self.site_caps {
            config.sites = parse_capacities(caps)?;
        }
        if let Some(rf) = self.replication_factor {
            config.replication_factor = rf;
        }
        if let Some(n) = self.num_writes {
            config.num_writes = n;
        }
        if let Some(n) = self.num_reads {
            config.num_reads = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(hasher) = self.hasher {
            config.hasher = hasher;
        }

        if config.sites.is_empty() {
            bail!("please supply --site-caps (or a config file listing sites)");
        }
        config.validate()?;
        Ok(config)
    }
}

/// Read a JSON [`SimulationConfig`] from disk.
pub fn load_config_file(path: &Path) -> Result<SimulationConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Parse a comma separated capacity list such as `"20000,10000,10000"`.
pub fn parse_capacities(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry.trim();
            if entry.is_empty() {
                bail!("empty capacity at position {i} in '{raw}'");
            }
            entry
                .parse::<u64>()
                .with_context(|| format!("invalid capacity '{entry}' at position {i}"))
        })
        .collect()
}

/// Initialize the `tracing` subscriber on stderr.
///
/// Respects `RUST_LOG` if set, otherwise uses `level`.
fn setup_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
