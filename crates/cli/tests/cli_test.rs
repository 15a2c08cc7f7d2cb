//! End-to-end tests driving the CLI configuration layer.

use clap::Parser;
use cli::{CliConfig, CommandResult, OutputFormat};
use corelib::SiteId;

fn cli(args: &[&str]) -> CliConfig {
    let mut argv = vec!["rendezvous-sim"];
    argv.extend_from_slice(args);
    CliConfig::try_parse_from(argv).unwrap()
}

fn report(args: &[&str]) -> replication::SimulationReport {
    match cli(args).execute().unwrap() {
        CommandResult::Report(report) => report,
        other => panic!("expected a report, got {other:?}"),
    }
}

// ============================================================================
// Simulate
// ============================================================================

#[test]
fn test_single_site_text_output() {
    let result = cli(&["--siteCaps", "5", "--rf", "1", "--numWrites", "10", "--numReads", "0"])
        .execute()
        .unwrap();
    assert_eq!(
        result.render(OutputFormat::Text).unwrap(),
        "site 1: 5/5 (100.00% full)\nunable to write: 5 (50.00%)"
    );
}

#[test]
fn test_ample_capacity_no_unwritable() {
    let report = report(&[
        "simulate",
        "--site-caps",
        "20000,10000,10000,10000",
        "--rf",
        "2",
        "--num-writes",
        "1000",
    ]);
    assert_eq!(report.unwritable, 0);
    assert_eq!(report.sites.len(), 4);
    assert!(report.sites.iter().all(|s| s.hit_pct.is_some()));
}

#[test]
fn test_rf_exceeding_sites_fails_before_running() {
    let err = cli(&["--site-caps", "10,10", "--rf", "3"]).execute().unwrap_err();
    assert_eq!(
        err.to_string(),
        "replication factor 3 is greater than num sites (2)"
    );
}

#[test]
fn test_malformed_capacity_fails() {
    let err = cli(&["--site-caps", "10,ten"]).execute().unwrap_err();
    assert!(format!("{err:#}").contains("invalid capacity 'ten'"), "{err:#}");
}

#[test]
fn test_zero_capacity_fails() {
    assert!(cli(&["--site-caps", "10,0"]).execute().is_err());
}

#[test]
fn test_same_seed_same_report() {
    let args = ["--site-caps", "30,20,10", "--rf", "2", "--num-writes", "40", "--seed", "12"];
    assert_eq!(report(&args), report(&args));
}

// ============================================================================
// Rank
// ============================================================================

#[test]
fn test_rank_lists_every_site() {
    let result = cli(&["rank", "--key", "42", "--site-caps", "3,2,1", "--hasher", "xxh3"])
        .execute()
        .unwrap();
    match result {
        CommandResult::Ranking { key, sites } => {
            assert_eq!(key, 42);
            let mut ids: Vec<_> = sites.iter().map(|s| s.site).collect();
            assert!(sites.windows(2).all(|w| w[0].score >= w[1].score));
            ids.sort();
            assert_eq!(ids, vec![SiteId(1), SiteId(2), SiteId(3)]);
        }
        other => panic!("expected a ranking, got {other:?}"),
    }
}

// ============================================================================
// Config file
// ============================================================================

#[test]
fn test_config_file_with_flag_override() {
    let path = std::env::temp_dir().join(format!("rendezvous-sim-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "siteCaps": [5, 5], "rf": 2, "numWrites": 3, "numReads": 0 }"#,
    )
    .unwrap();

    let config = cli(&["--config", path.to_str().unwrap(), "--numWrites", "8"])
        .simulation_config()
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.sites, vec![5, 5]);
    assert_eq!(config.replication_factor, 2);
    assert_eq!(config.num_writes, 8);
    assert_eq!(config.num_reads, 0);
}

#[test]
fn test_missing_config_file_fails() {
    let err = cli(&["--config", "/nonexistent/rendezvous-sim.json"])
        .execute()
        .unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
