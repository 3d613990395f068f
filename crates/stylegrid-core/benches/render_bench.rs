use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stylegrid_core::{compose, GalleryConfig, RenderOptions, StyleRegistry, DEFAULT_THEMES};

fn bench_compose(c: &mut Criterion) {
    let registry = StyleRegistry::builtin();
    let config = GalleryConfig::default();
    let mut group = c.benchmark_group("compose");
    for theme in DEFAULT_THEMES {
        let style = registry.get(theme).expect("builtin theme");
        group.bench_function(theme, |b| {
            b.iter(|| -> Result<()> {
                black_box(compose(theme, style, &config)?);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let registry = StyleRegistry::builtin();
    let config = GalleryConfig::default();
    let mut group = c.benchmark_group("render_png_bytes");
    for &(w, h) in &[(740, 140), (1480, 280)] {
        group.bench_function(format!("liquid_{w}x{h}"), |b| {
            let fig = compose("liquid", registry.get("liquid").expect("builtin theme"), &config).expect("compose");
            let opts = RenderOptions { width: w, height: h, draw_labels: false };
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose, bench_render);
criterion_main!(benches);
