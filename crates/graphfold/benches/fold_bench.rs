//! Direct folds vs compiled-plan replays.
//!
//! `diamond_chain(k)` has 2^k maximal walks through k stacked diamonds, so
//! walk discovery dominates the direct fold while a replay only pays the
//! per-prefix combines.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphfold::adjacency::{random_dag, AdjacencyList};
use graphfold::{compile_fold, compile_fold_right, fold, fold_right, CombineInput};

/// k diamonds in series: vertex 3i forks to 3i+1 and 3i+2, both rejoining at
/// 3(i+1). Root 0, single sink 3k.
fn diamond_chain(k: u32) -> AdjacencyList<u32> {
    let mut g = AdjacencyList::new();
    for i in 0..k {
        let top = 3 * i;
        g.add_edge(top, top + 1);
        g.add_edge(top, top + 2);
        g.add_edge(top + 1, 3 * (i + 1));
        g.add_edge(top + 2, 3 * (i + 1));
    }
    g
}

fn sum(input: CombineInput<'_, u64>, v: &u32) -> u64 {
    match input {
        CombineInput::Seed(init) => init + u64::from(*v),
        CombineInput::Merged(children) => children.iter().sum::<u64>() + u64::from(*v),
    }
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    for k in [4u32, 8, 12] {
        let g = diamond_chain(k);
        group.bench_with_input(BenchmarkId::new("direct", k), &g, |b, g| {
            b.iter(|| fold(g, &0, 0u64, |acc, v| acc + u64::from(*v)).unwrap());
        });
        let plan = compile_fold(&g, &0).unwrap();
        group.bench_with_input(BenchmarkId::new("replay", k), &plan, |b, plan| {
            b.iter(|| plan.replay(0u64, |acc, v| acc + u64::from(*v)));
        });
    }
    group.finish();
}

fn bench_fold_right(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_right");
    for n in [64u32, 256, 1024] {
        let g = random_dag(n, (n as usize) * 8, 0xF01D);
        group.bench_with_input(BenchmarkId::new("direct", n), &g, |b, g| {
            b.iter(|| fold_right(g, &0, 0u64, sum).unwrap());
        });
        let plan = compile_fold_right(&g, &0).unwrap();
        group.bench_with_input(BenchmarkId::new("replay", n), &plan, |b, plan| {
            b.iter(|| plan.replay(0u64, sum));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fold, bench_fold_right);
criterion_main!(benches);
