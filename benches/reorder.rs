use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bit_basis::{reorder_lazy, reorder_unchecked, ReorderedBasis};

fn rotated_orders(groups: usize) -> Vec<usize> {
    (0..groups).map(|i| (i + 1) % groups + 1).collect()
}

fn reorder_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder");

    for groups in [10usize, 14, 18] {
        let orders = rotated_orders(groups);
        let data: Vec<f64> = (0..1u64 << groups).map(|x| x as f64).collect();

        group.bench_function(format!("eager, groups: {}", groups), |b| {
            b.iter(|| black_box(unsafe { reorder_unchecked(&data, &orders) }))
        });

        let basis = reorder_lazy(&orders).unwrap();
        group.bench_function(format!("lazy odometer, groups: {}", groups), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                for index in &basis {
                    sum = sum.wrapping_add(index);
                }
                black_box(sum)
            })
        });

        group.bench_function(format!("recompute per index, groups: {}", groups), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                for basis_index in 0..basis.len() {
                    sum = sum.wrapping_add(ReorderedBasis::permuted(&basis, basis_index));
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

criterion_group!(
    name = reorder;
    config = Criterion::default().sample_size(30);
    targets = reorder_bench
);
criterion_main!(reorder);
