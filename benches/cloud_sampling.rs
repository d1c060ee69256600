use criterion::{criterion_group, criterion_main, Criterion};
use manta::{ManifoldSampler, PointsPerCloud, SamplerConfig};

fn criterion_sphere(c: &mut Criterion) {
    let config = SamplerConfig::new(10, PointsPerCloud::Fixed(1500), 0.05).unwrap();
    let sampler = ManifoldSampler::new(config);
    c.bench_function("sphere_batch", |b| b.iter(|| sampler.sphere(1.0).unwrap()));
}

fn criterion_klein_bottle(c: &mut Criterion) {
    let config = SamplerConfig::new(10, PointsPerCloud::Fixed(1500), 0.05).unwrap();
    let sampler = ManifoldSampler::new(config);
    c.bench_function("klein_bottle_batch", |b| {
        b.iter(|| sampler.klein_bottle().unwrap())
    });
}

criterion_group!(benches, criterion_sphere, criterion_klein_bottle);
criterion_main!(benches);
