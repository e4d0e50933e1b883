use candle_chart::api::{ChartEngine, ChartEngineConfig};
use candle_chart::core::{
    Bounds, CoordinateTransform, MovingAverageSetting, OhlcRecord, Point, RawOhlcRecord, Viewport,
    project_candles,
};
use candle_chart::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const DAY: f64 = 86_400.0;

fn generated_records(count: usize) -> Vec<RawOhlcRecord> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let base = 100.0 + t * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            RawOhlcRecord::new(t * DAY, open, high, low, close)
        })
        .collect()
}

fn build_engine(count: usize) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(generated_records(count))
        .expect("generated data");
    engine
}

fn bench_transform_round_trip(c: &mut Criterion) {
    let transform = CoordinateTransform::new(
        Bounds::new(0.0, 10_000.0 * DAY, 2_500.0, 0.0),
        Bounds::new(50.0, 1_870.0, 50.0, 1_030.0),
    )
    .expect("valid transform");

    c.bench_function("transform_round_trip", |b| {
        b.iter(|| {
            let px = transform.data_to_pixel(black_box(Point::new(4_321.0 * DAY, 1_234.5)));
            black_box(transform.pixel_to_data(px))
        })
    });
}

fn bench_candle_projection_10k(c: &mut Criterion) {
    let records: Vec<OhlcRecord> = generated_records(10_000)
        .into_iter()
        .map(|raw| raw.normalize().expect("valid generated record"))
        .collect();
    let transform = CoordinateTransform::new(
        Bounds::new(0.0, 10_000.0 * DAY, 700.0, 0.0),
        Bounds::new(50.0, 1_870.0, 50.0, 1_030.0),
    )
    .expect("valid transform");

    c.bench_function("candle_projection_10k", |b| {
        b.iter(|| black_box(project_candles(black_box(&records), black_box(transform))))
    });
}

fn bench_render_frame_2k(c: &mut Criterion) {
    let mut engine = build_engine(2_000);
    engine
        .set_moving_average(MovingAverageSetting::Window(10))
        .expect("moving average");

    c.bench_function("render_frame_2k", |b| {
        b.iter(|| black_box(engine.build_render_frame().expect("frame")))
    });
}

fn bench_hit_test_2k(c: &mut Criterion) {
    let engine = build_engine(2_000);
    let pointer = Point::new(800.0, 450.0);

    c.bench_function("hit_test_2k", |b| {
        b.iter(|| black_box(engine.hit_test(black_box(pointer))))
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_candle_projection_10k,
    bench_render_frame_2k,
    bench_hit_test_2k
);
criterion_main!(benches);
