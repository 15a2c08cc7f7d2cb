//! CLI tool for running weighted rendezvous hashing simulations.
//!
//! Provides commands for:
//! - Simulating write placement and read routing over a site set
//! - Inspecting the ranking of sites for a single key

pub mod commands;
pub mod config;
pub mod report;

pub use commands::{Command, CommandResult, RankedSite};
pub use config::{parse_capacities, CliConfig};
pub use report::OutputFormat;
