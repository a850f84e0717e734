use catalog::entity::{BRAND, DEPARTMENT, PRODUCT};
use catalog::{QueryBuilder, RelationMode};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

/// A product builder with `n` filter terms and `n` value assignments.
fn build_product(n: usize) -> QueryBuilder {
    let mut qb = QueryBuilder::new(&PRODUCT);
    for i in 0..n {
        let i = i as i64;
        match i % 3 {
            0 => qb.set_filter("PRD_ID", i).set_value("PRD_STOCK", i),
            1 => qb
                .set_filter("PRD_CODE", format!("C-{i}"))
                .set_value("PRD_NAME", "O'Brien"),
            _ => qb
                .set_filter("PRD_PRICE", Decimal::new(i * 100 + 99, 2))
                .set_value("PRD_PRICE", Decimal::new(i, 1)),
        };
    }
    qb
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/select");

    for n in [1, 5, 10, 50] {
        let qb = build_product(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql()));
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/join");

    for n in [1, 5, 10, 50] {
        let mut qb = build_product(n);
        qb.bind_referenced(&BRAND, RelationMode::Mandatory)
            .bind_referenced(&DEPARTMENT, RelationMode::Optional);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql()));
        });
    }

    group.finish();
}

fn bench_insert_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/insert_update");

    for n in [1, 5, 10, 50] {
        let qb = build_product(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| {
                black_box(qb.to_insert_sql());
                black_box(qb.to_update_sql());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_join, bench_insert_update);
criterion_main!(benches);
