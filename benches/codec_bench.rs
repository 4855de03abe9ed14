use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geoform_map_widget::{codec, BaseType, ControlsDefinition, Feature, Geometry};
use glam::DVec2;
use std::hint::black_box;

fn build_polygons(count: usize) -> Vec<Feature> {
    (0..count)
        .map(|i| {
            let origin = DVec2::new((i % 100) as f64 * 50.0, (i / 100) as f64 * 50.0);
            let ring: Vec<DVec2> = (0..16)
                .map(|k| {
                    let angle = k as f64 / 16.0 * std::f64::consts::TAU;
                    origin + DVec2::new(angle.cos(), angle.sin()) * 20.0
                })
                .collect();
            Feature::new(Geometry::polygon(ring))
        })
        .collect()
}

fn bench_encode_decode(c: &mut Criterion) {
    let controls = ControlsDefinition::single(BaseType::Polygon, true);
    let mut group = c.benchmark_group("codec");

    for count in [1usize, 100, 1000] {
        let features = build_polygons(count);
        let value = codec::encode(&features, &controls);

        group.bench_with_input(BenchmarkId::new("encode_multipolygon", count), &features, |b, f| {
            b.iter(|| black_box(codec::encode(black_box(f), &controls)).len())
        });
        group.bench_with_input(BenchmarkId::new("decode_multipolygon", count), &value, |b, v| {
            b.iter(|| black_box(codec::decode(black_box(v), &controls)).len())
        });
    }

    group.finish();
}

fn bench_wkt_decode(c: &mut Criterion) {
    let controls = ControlsDefinition::single(BaseType::Point, true);
    let points: Vec<String> = (0..1000).map(|i| format!("({i} {})", i * 2)).collect();
    let wkt = format!("MULTIPOINT({})", points.join(", "));

    c.bench_function("decode_wkt_multipoint_1000", |b| {
        b.iter(|| black_box(codec::decode(black_box(&wkt), &controls)).len())
    });
}

criterion_group!(codec_benches, bench_encode_decode, bench_wkt_decode);
criterion_main!(codec_benches);
