use bitga::{
    individual::Individual,
    operators::{crossover, select_pair},
    rng::RandomNumberGenerator,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_crossover(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("operators");
    for n_bits in [16, 32, 63].iter() {
        let parent_a = Individual::random(*n_bits, 0.0, 1.0, &mut rng).unwrap();
        let parent_b = Individual::random(*n_bits, 0.0, 1.0, &mut rng).unwrap();
        group.bench_function(&format!("crossover_{}_bits", n_bits), |b| {
            b.iter(|| {
                let children = crossover(
                    black_box(&parent_a),
                    black_box(&parent_b),
                    black_box(1.0),
                    &mut rng,
                );
                assert!(children.is_ok());
            })
        });
    }

    for size in [10, 100, 1000].iter() {
        let fitness: Vec<f64> = (1..=*size).map(|i| i as f64).collect();
        group.bench_function(&format!("select_pair_{}", size), |b| {
            b.iter(|| {
                let pair = select_pair(black_box(&fitness), &mut rng);
                assert!(pair.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_crossover);
criterion_main!(benches);
