use candle_chart::api::{ChartEngine, ChartEngineConfig};
use candle_chart::core::{Bounds, Point, RawOhlcRecord, Viewport, remap_point};
use candle_chart::interaction::{InteractionMode, PointerEvent, WheelEvent};
use candle_chart::render::{CanvasLayerKind, NullRenderer};
use proptest::prelude::*;

const DAY: f64 = 86_400.0;

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (
        -1.0e4f64..1.0e4,
        1.0f64..1.0e4,
        -1.0e4f64..1.0e4,
        1.0f64..1.0e4,
    )
        .prop_map(|(left, width, bottom, height)| {
            Bounds::new(left, left + width, bottom + height, bottom)
        })
}

fn candles_strategy() -> impl Strategy<Value = Vec<RawOhlcRecord>> {
    prop::collection::vec((1.0f64..500.0, 0.0f64..20.0, 0.0f64..20.0, -1.0f64..1.0), 1..24)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (open, up, down, bias))| {
                    let close = open + bias * up.min(down).max(0.5);
                    let high = open.max(close) + up;
                    let low = open.min(close) - down;
                    RawOhlcRecord::new(i as f64 * DAY, open, high, low, close)
                })
                .collect()
        })
}

#[derive(Debug, Clone)]
enum ViewOp {
    Wheel(f64),
    Drag { from: (f64, f64), to: (f64, f64) },
}

fn view_ops_strategy() -> impl Strategy<Value = Vec<ViewOp>> {
    let op = prop_oneof![
        (-3.0f64..3.0).prop_map(ViewOp::Wheel),
        ((60.0f64..740.0, 60.0f64..540.0), (60.0f64..740.0, 60.0f64..540.0))
            .prop_map(|(from, to)| ViewOp::Drag { from, to }),
    ];
    prop::collection::vec(op, 0..12)
}

fn build_engine(records: Vec<RawOhlcRecord>) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(800, 600));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(records).expect("set data");
    engine
}

proptest! {
    #[test]
    fn remap_point_round_trips(
        data in bounds_strategy(),
        pixel in bounds_strategy(),
        x in -1.0e4f64..1.0e4,
        y in -1.0e4f64..1.0e4
    ) {
        let point = Point::new(x, y);
        let back = remap_point(pixel, data, remap_point(data, pixel, point));
        prop_assert!((back.x - point.x).abs() <= 1e-6);
        prop_assert!((back.y - point.y).abs() <= 1e-6);
    }

    #[test]
    fn larger_price_maps_to_smaller_pixel_y(
        records in candles_strategy(),
        low_fraction in 0.0f64..0.5,
        gap_fraction in 0.01f64..0.5
    ) {
        let engine = build_engine(records);
        let transform = engine.data_transform(true).expect("transform");
        let bounds = engine.data_bounds(true).expect("bounds");

        let lower = bounds.bottom + bounds.height().abs() * low_fraction;
        let higher = lower + bounds.height().abs() * gap_fraction;
        let lower_px = transform.data_to_pixel(Point::new(bounds.left, lower));
        let higher_px = transform.data_to_pixel(Point::new(bounds.left, higher));
        prop_assert!(higher_px.y < lower_px.y);
    }

    #[test]
    fn reset_restores_initial_candle_pixels(
        records in candles_strategy(),
        ops in view_ops_strategy()
    ) {
        let mut engine = build_engine(records);
        let initial = engine.build_render_frame().expect("frame");

        for op in ops {
            match op {
                ViewOp::Wheel(delta_y) => {
                    let event = WheelEvent::new(PointerEvent::new(400.0, 300.0), delta_y);
                    engine.wheel(event).expect("wheel");
                }
                ViewOp::Drag { from, to } => {
                    engine
                        .pointer_down(PointerEvent::new(from.0, from.1), InteractionMode::Pan)
                        .expect("down");
                    engine
                        .pointer_move(PointerEvent::new(to.0, to.1), InteractionMode::Pan)
                        .expect("move");
                    engine.pointer_up(PointerEvent::new(to.0, to.1)).expect("up");
                }
            }
        }

        engine.reset_scale().expect("reset");
        let state = engine.viewport_state();
        prop_assert_eq!(state.scale, 1.0);
        prop_assert_eq!(state.offset, Point::new(0.0, 0.0));

        let restored = engine.build_render_frame().expect("frame");
        prop_assert_eq!(
            restored.layer(CanvasLayerKind::Candles),
            initial.layer(CanvasLayerKind::Candles)
        );
    }

    #[test]
    fn close_pixel_hits_its_candle(records in candles_strategy(), pick in 0usize..24) {
        let engine = build_engine(records);
        let geometry = engine.snapshot().expect("snapshot").candle_geometry;
        let k = pick % geometry.len();

        let hit = engine.hit_test(geometry[k].close).expect("hit");
        prop_assert_eq!(hit.record_index, k);
        prop_assert_eq!(hit.record, engine.records()[k]);
    }
}
