use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mountcheck::component::{Banner, Placeholder};
use mountcheck::{HarnessConfig, SmokeRunner};

fn bench_attempts(c: &mut Criterion) {
    let runner = SmokeRunner::new(HarnessConfig::default());

    c.bench_function("mount_placeholder", |b| {
        b.iter(|| black_box(runner.attempt(&Placeholder)))
    });

    c.bench_function("mount_banner_with_styles", |b| {
        b.iter(|| black_box(runner.attempt(&Banner)))
    });
}

criterion_group!(benches, bench_attempts);
criterion_main!(benches);
