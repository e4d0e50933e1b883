use chrono::format::{Item, StrftimeItems};

use crate::core::DataRange;
use crate::error::{ChartError, ChartResult};

use super::{ChartEngineConfig, RenderStyle};

pub(super) fn validate_config(config: &ChartEngineConfig) -> ChartResult<()> {
    let viewport = config.viewport;
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let margin = config.margin_px;
    if !margin.is_finite() || margin < 0.0 {
        return Err(ChartError::InvalidData(
            "margin must be finite and >= 0".to_owned(),
        ));
    }
    if 2.0 * margin >= f64::from(viewport.width) || 2.0 * margin >= f64::from(viewport.height) {
        return Err(ChartError::InvalidData(format!(
            "margin {margin} leaves no plot area in a {}x{} viewport",
            viewport.width, viewport.height
        )));
    }

    if !config.tooltip_offset_px.is_finite() {
        return Err(ChartError::InvalidData(
            "tooltip offset must be finite".to_owned(),
        ));
    }

    config.zoom.validate()?;
    config.bounds_tuning.validate()?;
    if let Some(range) = config.data_range {
        validate_data_range(range)?;
    }
    validate_render_style(&config.style)
}

pub(super) fn validate_data_range(range: DataRange) -> ChartResult<DataRange> {
    if range.amount == 0 {
        return Err(ChartError::InvalidData(
            "data range amount must be >= 1".to_owned(),
        ));
    }
    Ok(range)
}

pub(super) fn validate_render_style(style: &RenderStyle) -> ChartResult<()> {
    for color in [
        style.background_color,
        style.candle_up_color,
        style.candle_down_color,
        style.wick_color,
        style.point_color,
        style.annotation_line_color,
        style.moving_average_color,
        style.axis_line_color,
        style.text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("candle body width", style.candle_body_width_px),
        ("wick width", style.wick_width_px),
        ("point radius", style.point_radius_px),
        ("annotation line width", style.annotation_line_width_px),
        ("moving average line width", style.moving_average_line_width_px),
        ("axis line width", style.axis_line_width_px),
        ("tick length", style.tick_length_px),
        ("label font size", style.label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    if style.price_precision > 12 {
        return Err(ChartError::InvalidData(
            "price precision must be <= 12".to_owned(),
        ));
    }

    if style.time_label_format.is_empty()
        || StrftimeItems::new(&style.time_label_format).any(|item| matches!(item, Item::Error))
    {
        return Err(ChartError::InvalidData(format!(
            "invalid time label format `{}`",
            style.time_label_format
        )));
    }

    Ok(())
}
