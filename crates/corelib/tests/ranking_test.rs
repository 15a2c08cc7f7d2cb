//! Tests for weighted rendezvous ranking.
//!
//! # Test Strategy
//!
//! 1. **Basic functionality**: single site, ranking shape
//! 2. **Determinism**: same seed gives the same ranking, different seed differs
//! 3. **Minimal disruption**: membership and capacity changes leave others' order alone
//! 4. **Fairness**: first-rank share converges to capacity share

use corelib::{Cluster, Site, SiteId, SipKeyHasher, WeightedScorer, Xxh3KeyHasher};
use proptest::prelude::*;

fn sip(seed: u64) -> WeightedScorer<SipKeyHasher> {
    WeightedScorer::new(SipKeyHasher::new(seed))
}

/// Ranking restricted to the given ids, preserving order.
fn restricted(ranking: &[SiteId], keep: &[SiteId]) -> Vec<SiteId> {
    ranking.iter().copied().filter(|id| keep.contains(id)).collect()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_single_site_always_first() {
    let cluster = Cluster::from_capacities(&[5], sip(0)).unwrap();
    for key in 0..100 {
        assert_eq!(cluster.rank(key), vec![SiteId(1)]);
    }
}

#[test]
fn test_scores_are_finite_and_positive() {
    let cluster = Cluster::from_capacities(&[1, 1_000, 1_000_000], sip(3)).unwrap();
    for key in 0..1_000 {
        for record in cluster.scores(key) {
            assert!(record.score.is_finite(), "key {key}: {record:?}");
            assert!(record.score > 0.0, "key {key}: {record:?}");
        }
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_same_seed_same_ranking() {
    let a = Cluster::from_capacities(&[20_000, 10_000, 10_000, 10_000], sip(11)).unwrap();
    let b = Cluster::from_capacities(&[20_000, 10_000, 10_000, 10_000], sip(11)).unwrap();
    for key in 0..500 {
        assert_eq!(a.rank(key), b.rank(key));
    }
}

#[test]
fn test_different_seed_changes_some_rankings() {
    let a = Cluster::from_capacities(&[1, 1, 1, 1], sip(1)).unwrap();
    let b = Cluster::from_capacities(&[1, 1, 1, 1], sip(2)).unwrap();
    let differing = (0..500).filter(|&key| a.rank(key) != b.rank(key)).count();
    assert!(differing > 0, "seed had no effect on 500 rankings");
}

#[test]
fn test_xxh3_cluster_deterministic() {
    let scorer = || WeightedScorer::new(Xxh3KeyHasher::new(99));
    let a = Cluster::from_capacities(&[3, 2, 1], scorer()).unwrap();
    let b = Cluster::from_capacities(&[3, 2, 1], scorer()).unwrap();
    for key in 0..200 {
        assert_eq!(a.scores(key), b.scores(key));
    }
}

// ============================================================================
// Minimal Disruption Tests
// ============================================================================

#[test]
fn test_removing_site_keeps_relative_order() {
    let full = Cluster::from_capacities(&[4, 3, 2, 1], sip(5)).unwrap();
    let survivors = [SiteId(1), SiteId(2), SiteId(4)];
    let reduced = Cluster::new(
        vec![
            Site::new(SiteId(1), 4).unwrap(),
            Site::new(SiteId(2), 3).unwrap(),
            Site::new(SiteId(4), 1).unwrap(),
        ],
        sip(5),
    )
    .unwrap();

    for key in 0..1_000 {
        assert_eq!(restricted(&full.rank(key), &survivors), reduced.rank(key));
    }
}

#[test]
fn test_resizing_site_keeps_others_order() {
    let before = Cluster::from_capacities(&[10, 10, 10], sip(8)).unwrap();
    let after = Cluster::from_capacities(&[10, 500, 10], sip(8)).unwrap();
    let untouched = [SiteId(1), SiteId(3)];

    for key in 0..1_000 {
        assert_eq!(
            restricted(&before.rank(key), &untouched),
            restricted(&after.rank(key), &untouched)
        );
    }
}

// ============================================================================
// Fairness Tests
// ============================================================================

#[test]
fn test_primary_share_tracks_capacity_share() {
    let capacities = [20_000u64, 10_000, 10_000, 10_000];
    let cluster = Cluster::from_capacities(&capacities, sip(42)).unwrap();
    let total: u64 = capacities.iter().sum();
    let keys = 100_000u64;

    let counts = cluster.primary_counts(0..keys);
    for (i, capacity) in capacities.iter().enumerate() {
        let id = SiteId(i as u32 + 1);
        let observed = counts[&id] as f64 / keys as f64;
        let expected = *capacity as f64 / total as f64;
        assert!(
            (observed - expected).abs() < 0.01,
            "site {id}: observed {observed:.4}, expected {expected:.4}"
        );
    }
}

#[test]
fn test_equal_capacities_share_evenly() {
    let cluster = Cluster::from_capacities(&[7, 7, 7, 7, 7], sip(0)).unwrap();
    let keys = 50_000u64;
    for (id, n) in cluster.primary_counts(0..keys) {
        let share = n as f64 / keys as f64;
        assert!((share - 0.2).abs() < 0.015, "site {id}: share {share:.4}");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_rank_deterministic(
        capacities in prop::collection::vec(1u64..10_000, 1..12),
        seed in any::<u64>(),
        key in any::<u64>(),
    ) {
        let a = Cluster::from_capacities(&capacities, sip(seed)).unwrap();
        let b = Cluster::from_capacities(&capacities, sip(seed)).unwrap();
        prop_assert_eq!(a.rank(key), b.rank(key));
    }

    #[test]
    fn prop_rank_covers_every_site_once(
        capacities in prop::collection::vec(1u64..10_000, 1..12),
        seed in any::<u64>(),
        key in any::<u64>(),
    ) {
        let cluster = Cluster::from_capacities(&capacities, sip(seed)).unwrap();
        let mut ranked = cluster.rank(key);
        ranked.sort();
        let expected: Vec<SiteId> = (1..=capacities.len() as u32).map(SiteId).collect();
        prop_assert_eq!(ranked, expected);
    }
}
