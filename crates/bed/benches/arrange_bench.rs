//! Benchmarks for row-major pallet arrangement.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pallet_layout_bed::{Arranger, Bed, LoadPlan, Pallet, RowMajorArranger};
use pallet_layout_core::Config;

fn arrange_benchmark(c: &mut Criterion) {
    let bed = Bed::new(2.5, 13.6);
    let arranger = RowMajorArranger::new();

    let mut group = c.benchmark_group("arrange_eur_pallets");
    for count in [33usize, 100, 1000] {
        let pallets: Vec<Pallet> = (0..count).map(|_| Pallet::new()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &pallets, |b, pallets| {
            b.iter(|| {
                let result = arranger.arrange(black_box(&bed), pallets.clone());
                black_box(result)
            })
        });
    }
    group.finish();
}

fn quantity_benchmark(c: &mut Criterion) {
    c.bench_function("plan_grow_shrink_33", |b| {
        let mut plan = LoadPlan::new(Config::default()).unwrap();
        b.iter(|| {
            plan.set_pallet_number(33);
            black_box(plan.update_pallet_quantity());
            plan.set_pallet_number(1);
            black_box(plan.update_pallet_quantity());
        })
    });
}

criterion_group!(benches, arrange_benchmark, quantity_benchmark);
criterion_main!(benches);
