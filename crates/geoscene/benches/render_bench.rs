//! Criterion benchmarks for scene rendering.
//! Focus sizes: shape count in {1, 8, 32, 128}, unfiltered and depth-filtered.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geoscene::rand::{random_scene, RandomSceneCfg};
use geoscene::DrawDepth;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_render");
    for &count in &[1usize, 8, 32, 128] {
        let cfg = RandomSceneCfg {
            count,
            ..Default::default()
        };
        let mut scene = random_scene(&cfg, 43).unwrap();
        group.bench_with_input(BenchmarkId::new("all_depths", count), &count, |b, _| {
            b.iter(|| scene.render())
        });
        scene.set_draw_filter(DrawDepth::UpTo(1));
        group.bench_with_input(BenchmarkId::new("up_to_depth_1", count), &count, |b, _| {
            b.iter(|| scene.render())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
