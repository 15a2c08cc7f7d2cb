use corelib::{Cluster, SipKeyHasher, WeightedScorer, Xxh3KeyHasher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for sites in [4usize, 16, 64] {
        let capacities: Vec<u64> = (1..=sites as u64).map(|i| i * 1_000).collect();

        let sip = Cluster::from_capacities(&capacities, WeightedScorer::new(SipKeyHasher::new(0)))
            .expect("valid capacities");
        group.bench_with_input(BenchmarkId::new("sip", sites), &sip, |b, cluster| {
            let mut key = 0u64;
            b.iter(|| {
                key = key.wrapping_add(1);
                black_box(cluster.rank(black_box(key)))
            })
        });

        let xxh3 = Cluster::from_capacities(&capacities, WeightedScorer::new(Xxh3KeyHasher::new(0)))
            .expect("valid capacities");
        group.bench_with_input(BenchmarkId::new("xxh3", sites), &xxh3, |b, cluster| {
            let mut key = 0u64;
            b.iter(|| {
                key = key.wrapping_add(1);
                black_box(cluster.rank(black_box(key)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
