//! Rendering of command results.

use crate::commands::{CommandResult, RankedSite};
use anyhow::Result;
use clap::ValueEnum;
use replication::SimulationReport;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl CommandResult {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(match self {
                CommandResult::Report(report) => render_report(report),
                CommandResult::Ranking { key, sites } => render_ranking(*key, sites),
            }),
        }
    }
}

/// Plain-text report: one line per site, then the unwritable total.
///
/// The read clause is omitted entirely when no reads were configured.
pub fn render_report(report: &SimulationReport) -> String {
    let mut out = String::new();
    for site in &report.sites {
        let _ = write!(
            out,
            "site {}: {}/{} ({:.2}% full)",
            site.id, site.occupied, site.capacity, site.occupancy_pct
        );
        if let Some(hit_pct) = site.hit_pct {
            let _ = write!(
                out,
                ". received reads: {} hits ({:.2}% of total), {} misses",
                site.hits, hit_pct, site.misses
            );
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "unable to write: {} ({:.2}%)",
        report.unwritable, report.unwritable_pct
    );
    out
}

pub fn render_ranking(key: u64, sites: &[RankedSite]) -> String {
    let mut out = format!("key {key}:");
    for (i, s) in sites.iter().enumerate() {
        let _ = write!(
            out,
            "\n  #{} site {} (capacity {}) score {:.6}",
            i + 1,
            s.site,
            s.capacity,
            s.score
        );
    }
    out
}
