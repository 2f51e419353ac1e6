use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tspbb::{coordinator, AveragedEdgeBound, BestSolution, DistanceMatrix, MinEdgeBound, WorkerId};

fn random_matrix(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = n * (n - 1) / 2;
    let values: Vec<i64> = (0..count).map(|_| rng.gen_range(1..100)).collect();
    DistanceMatrix::from_values(n, &values).unwrap()
}

fn bench_min_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs/min-edge");
    group.sample_size(20);

    for n in [8usize, 10, 12] {
        let distance = random_matrix(n, n as u64);
        group.bench_with_input(BenchmarkId::new("cities", n), &distance, |b, distance| {
            b.iter(|| {
                let oracle = MinEdgeBound;
                let id = WorkerId::new(0, 1);
                let seeds = coordinator::seed_tasks_for(distance, &oracle, id);
                let best = BestSolution::new();
                tspbb::dfs::run_dfs(distance, &oracle, seeds, &best).unwrap();
                best.cost()
            });
        });
    }
}

fn bench_averaged_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs/averaged-edge");
    group.sample_size(20);

    for n in [8usize, 10, 12] {
        let distance = random_matrix(n, n as u64);
        group.bench_with_input(BenchmarkId::new("cities", n), &distance, |b, distance| {
            b.iter(|| {
                let oracle = AveragedEdgeBound;
                let id = WorkerId::new(0, 1);
                let seeds = coordinator::seed_tasks_for(distance, &oracle, id);
                let best = BestSolution::new();
                tspbb::dfs::run_dfs(distance, &oracle, seeds, &best).unwrap();
                best.cost()
            });
        });
    }
}

criterion_group!(
    name = dfs;
    config = Criterion::default();
    targets = bench_min_edge, bench_averaged_edge
);
criterion_main!(dfs);
