use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Titles drawn at the ends of the two axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitles {
    pub time: String,
    pub value: String,
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self {
            time: "time".to_owned(),
            value: "value".to_owned(),
        }
    }
}

/// Style contract for every render frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background_color: Color,
    pub candle_up_color: Color,
    pub candle_down_color: Color,
    pub wick_color: Color,
    pub point_color: Color,
    pub annotation_line_color: Color,
    pub moving_average_color: Color,
    pub axis_line_color: Color,
    pub text_color: Color,
    /// Stroke width of the open-close body line.
    pub candle_body_width_px: f64,
    /// Stroke width of the high-low wick line.
    pub wick_width_px: f64,
    /// Radius of the four key-point markers per candle.
    pub point_radius_px: f64,
    pub annotation_line_width_px: f64,
    pub moving_average_line_width_px: f64,
    pub axis_line_width_px: f64,
    pub tick_length_px: f64,
    pub label_font_size_px: f64,
    /// Decimals used by price labels and tooltip values.
    pub price_precision: u8,
    /// `chrono` strftime pattern for time labels.
    pub time_label_format: String,
    pub axis_titles: Option<AxisTitles>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let ink = Color::rgb8(51, 51, 51);
        Self {
            background_color: Color::WHITE,
            candle_up_color: Color::rgb8(38, 166, 91),
            candle_down_color: Color::rgb8(220, 53, 69),
            wick_color: Color::rgb8(128, 128, 128),
            point_color: ink,
            annotation_line_color: ink,
            moving_average_color: Color::BLACK,
            axis_line_color: ink,
            text_color: ink,
            candle_body_width_px: 6.0,
            wick_width_px: 2.0,
            point_radius_px: 3.0,
            annotation_line_width_px: 1.0,
            moving_average_line_width_px: 1.5,
            axis_line_width_px: 1.0,
            tick_length_px: 5.0,
            label_font_size_px: 12.0,
            price_precision: 2,
            time_label_format: "%Y-%m-%d".to_owned(),
            axis_titles: Some(AxisTitles::default()),
        }
    }
}
