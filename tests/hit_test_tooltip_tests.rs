use candle_chart::api::{ChartEngine, ChartEngineConfig};
use candle_chart::core::{Point, RawOhlcRecord, Viewport};
use candle_chart::extensions::{OverlayDisplay, Tooltip};
use candle_chart::interaction::{InteractionMode, PointerEvent};
use candle_chart::render::NullRenderer;

const DAY: f64 = 86_400.0;

#[derive(Debug, Default)]
struct RecordingOverlay {
    shown: Vec<Tooltip>,
    hidden: usize,
}

impl OverlayDisplay for RecordingOverlay {
    fn show_tooltip(&mut self, tooltip: &Tooltip) {
        self.shown.push(tooltip.clone());
    }

    fn hide_tooltip(&mut self) {
        self.hidden += 1;
    }
}

fn build_engine() -> ChartEngine<NullRenderer, RecordingOverlay> {
    let config = ChartEngineConfig::new(Viewport::new(800, 600));
    let mut engine = ChartEngine::with_overlay(
        NullRenderer::default(),
        RecordingOverlay::default(),
        config,
    )
    .expect("engine init");
    let records = [10.0, 14.0, 11.0, 17.0, 13.0]
        .iter()
        .enumerate()
        .map(|(i, &open)| {
            let close = if i % 2 == 0 { open + 1.5 } else { open - 1.5 };
            RawOhlcRecord::new(i as f64 * DAY, open, open + 3.0, open - 3.0, close)
        })
        .collect();
    engine.set_data(records).expect("set data");
    engine
}

fn close_pixel(engine: &ChartEngine<NullRenderer, RecordingOverlay>, k: usize) -> Point {
    engine.snapshot().expect("snapshot").candle_geometry[k].close
}

#[test]
fn hit_at_close_pixel_returns_that_candle() {
    let engine = build_engine();
    for k in 0..5 {
        let pixel = close_pixel(&engine, k);
        let hit = engine.hit_test(pixel).expect("hit");
        assert_eq!(hit.record_index, k);
        assert_eq!(hit.record, engine.records()[k]);
        assert_eq!(hit.key_point, pixel);
        assert_eq!(hit.distance_px, 0.0);
    }
}

#[test]
fn hit_radius_is_margin_over_ten_over_scale() {
    let mut engine = build_engine();
    assert_eq!(engine.hit_radius_px(), 5.0);

    let pixel = close_pixel(&engine, 2);
    assert!(engine.hit_test(pixel.add(Point::new(0.0, 4.9))).is_some());
    assert!(engine.hit_test(pixel.add(Point::new(0.0, 5.1))).is_none());

    engine.zoom_by(50.0).expect("zoom");
    assert_eq!(engine.viewport_state().scale, 2.0);
    assert_eq!(engine.hit_radius_px(), 2.5);
}

#[test]
fn hit_test_respects_data_range_offset() {
    let mut engine = build_engine();
    engine.set_data_range(2, 3).expect("range");
    let pixel = engine.snapshot().expect("snapshot").candle_geometry[1].close;
    let hit = engine.hit_test(pixel).expect("hit");
    assert_eq!(hit.record_index, 3);
    assert_eq!(hit.record, engine.records()[3]);
}

#[test]
fn hover_shows_tooltip_anchored_at_offset() {
    let mut engine = build_engine();
    let pixel = close_pixel(&engine, 0);
    engine
        .pointer_move(PointerEvent::new(pixel.x, pixel.y), InteractionMode::Pan)
        .expect("move");

    let tooltip = engine.tooltip().expect("tooltip shown").clone();
    assert_eq!(tooltip.record_index, 0);
    assert_eq!(tooltip.anchor, pixel.add(Point::new(12.0, 12.0)));
    assert_eq!(
        tooltip.lines,
        vec!["1970-01-01", "Open: 10.00", "High: 13.00", "Low: 7.00", "Close: 11.50"]
    );
    assert_eq!(engine.overlay().shown.len(), 1);
    assert_eq!(engine.overlay().hidden, 0);
}

#[test]
fn hide_is_forwarded_only_when_visible() {
    let mut engine = build_engine();
    let far = PointerEvent::new(1.0, 1.0);

    engine.pointer_move(far, InteractionMode::Pan).expect("move");
    engine.pointer_move(far, InteractionMode::Pan).expect("move");
    assert_eq!(engine.overlay().hidden, 0);

    let pixel = close_pixel(&engine, 1);
    let near = PointerEvent::new(pixel.x, pixel.y);
    engine.pointer_move(near, InteractionMode::Pan).expect("move");
    engine.pointer_move(near, InteractionMode::Pan).expect("move");
    assert_eq!(engine.overlay().shown.len(), 2);

    engine.pointer_move(far, InteractionMode::Pan).expect("move");
    engine.pointer_move(far, InteractionMode::Pan).expect("move");
    assert_eq!(engine.overlay().hidden, 1);
    assert!(engine.tooltip().is_none());
}

#[test]
fn disabling_tooltips_hides_current_one() {
    let mut engine = build_engine();
    let pixel = close_pixel(&engine, 3);
    engine
        .pointer_move(PointerEvent::new(pixel.x, pixel.y), InteractionMode::Pan)
        .expect("move");
    assert!(engine.tooltip().is_some());

    engine.set_tooltip_enabled(false);
    assert!(!engine.tooltip_enabled());
    assert!(engine.tooltip().is_none());
    assert_eq!(engine.overlay().hidden, 1);

    engine
        .pointer_move(PointerEvent::new(pixel.x, pixel.y), InteractionMode::Pan)
        .expect("move");
    assert!(engine.tooltip().is_none());
    assert_eq!(engine.overlay().shown.len(), 1);
}

#[test]
fn pointer_leave_hides_tooltip() {
    let mut engine = build_engine();
    let pixel = close_pixel(&engine, 4);
    engine
        .pointer_move(PointerEvent::new(pixel.x, pixel.y), InteractionMode::Pan)
        .expect("move");
    engine.pointer_leave();
    assert!(engine.tooltip().is_none());
    assert_eq!(engine.overlay().hidden, 1);

    engine.pointer_leave();
    assert_eq!(engine.overlay().hidden, 1);
}

#[test]
fn out_of_order_append_hides_tooltip() {
    let mut engine = build_engine();
    let pixel = close_pixel(&engine, 4);
    engine
        .pointer_move(PointerEvent::new(pixel.x, pixel.y), InteractionMode::Pan)
        .expect("move");
    assert_eq!(engine.tooltip().map(|t| t.record_index), Some(4));

    engine
        .add_data(vec![RawOhlcRecord::new(5.0 * DAY, 13.0, 16.0, 10.0, 14.0)])
        .expect("in-order append");
    assert!(engine.tooltip().is_some());
    assert_eq!(engine.overlay().hidden, 0);

    engine
        .add_data(vec![RawOhlcRecord::new(-DAY, 12.0, 15.0, 9.0, 13.0)])
        .expect("out-of-order append");
    assert!(engine.tooltip().is_none());
    assert_eq!(engine.overlay().hidden, 1);
}
