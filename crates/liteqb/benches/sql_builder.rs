use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use liteqb::{select, Op, QueryBuilder, Select, WhereGroup};

/// Build a SELECT over `n` columns filtered by `n` bound conditions:
/// SELECT col0, col1, ... FROM t WHERE col0 = ? AND col1 = ? ...
fn build_select(n: usize) -> Select {
    let mut group = WhereGroup::new();
    for i in 0..n {
        group.add_op(&format!("col{i}"), Op::Eq, i as i64).unwrap();
    }

    let mut qb = select("t").unwrap();
    let cols: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    qb.columns(cols).filter(group);
    qb
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut qb = build_select(n);
                black_box(qb.build().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_cached_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/cached_build");

    for n in [1, 10, 100] {
        let mut qb = build_select(n);
        qb.build().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(qb.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_where_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/where_group");

    for n in [1, 5, 20, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut wg = WhereGroup::new();
                for i in 0..n {
                    wg.add_op("col", Op::Gt, i as i64).unwrap();
                }
                black_box(wg.build());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_cached_build, bench_where_group);
criterion_main!(benches);
