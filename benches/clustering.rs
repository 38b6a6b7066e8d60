use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmeans_demo::cluster::{Clustering, Kmeans};
use kmeans_demo::{ClusteringDemo, DataMode, DemoConfig, Vec2};
use rand::prelude::*;

fn bench_demo(c: &mut Criterion) {
    let mut group = c.benchmark_group("demo");

    group.bench_function("step_n500_k5", |b| {
        let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(42)).unwrap();
        demo.generate_data(500, DataMode::Blobs).unwrap();
        demo.initialize_centroids(5).unwrap();
        b.iter(|| black_box(demo.step()))
    });

    group.bench_function("run_to_convergence_n500_k3", |b| {
        b.iter(|| {
            let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(42)).unwrap();
            demo.generate_data(500, DataMode::Blobs).unwrap();
            black_box(demo.run().finish())
        })
    });

    group.finish();
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<Vec2> = (0..1000)
        .map(|_| Vec2::new(rng.random::<f32>() * 400.0, rng.random::<f32>() * 200.0))
        .collect();

    group.bench_function("fit_predict_n1000_k10", |b| {
        b.iter(|| {
            let model = Kmeans::new(10).with_max_iter(10).with_seed(42);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_demo, bench_kmeans);
criterion_main!(benches);
