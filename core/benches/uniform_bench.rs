//! Benchmarks for per-frame uniform work and headless rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shader_playground::scenes::{keys, SceneType, UniformEncoder};
use shader_playground::{ControlValue, Playground, RenderConfig};

/// Encoder that only counts bytes, so the bench measures the scene side.
struct NullEncoder(usize);

impl UniformEncoder for NullEncoder {
    fn set_fragment_bytes(&mut self, bytes: &[u8], _index: u32) {
        self.0 += bytes.len();
    }
}

fn bench_uniform_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("Uniforms");
    let playground = Playground::new(SceneType::RepeatingCircles);

    group.bench_function("snapshot", |b| {
        b.iter(|| black_box(playground.uniform_snapshot()));
    });

    group.bench_function("bind", |b| {
        let mut encoder = NullEncoder(0);
        b.iter(|| {
            playground.bind_uniforms(&mut encoder);
            black_box(encoder.0)
        });
    });

    group.finish();
}

fn bench_panel_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Panel");
    let mut playground = Playground::new(SceneType::RepeatingCircles);

    group.bench_function("slider_set", |b| {
        let mut value = 0.0f32;
        b.iter(|| {
            value = (value + 0.37) % 5.0;
            black_box(
                playground.edit(|panel| panel.set(keys::SCALE, ControlValue::Number(value))),
            )
        });
    });

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scene Rendering");
    let playground = Playground::new(SceneType::RepeatingCircles);

    for (width, height, name) in [(320, 180, "180p"), (1280, 720, "720p")] {
        let config = RenderConfig {
            width,
            height,
            ..Default::default()
        };
        let renderer = match pollster::block_on(playground.renderer(config)) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Skipping GPU benchmarks: {}", e);
                return;
            }
        };

        group.bench_with_input(BenchmarkId::new("render_frame", name), &renderer, |b, r| {
            b.iter(|| black_box(playground.render_frame(r, 0.5)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_uniform_snapshot,
    bench_panel_edits,
    bench_render_frame
);
criterion_main!(benches);
