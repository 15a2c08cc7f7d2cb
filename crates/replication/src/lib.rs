//! Write placement and read routing over a weighted rendezvous cluster.
//!
//! This crate provides:
//! - Pluggable replication strategies (all-or-nothing top-`rf` placement)
//! - First-hit read routing through the same ranking
//! - A two-phase simulation driver with per-site statistics

pub mod config;
pub mod error;
pub mod routing;
pub mod simulation;
pub mod stats;
pub mod strategy;

pub use config::SimulationConfig;
pub use error::{ReplicationError, Result};
pub use routing::{ReadResult, ReadRouter};
pub use simulation::Simulation;
pub use stats::{ReadSummary, SimulationReport, SiteStats};
pub use strategy::{AllOrNothingStrategy, Placement, ReplicationStrategy};
