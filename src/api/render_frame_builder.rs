use crate::core::{Axis, LinearScale, PlotArea, format_tick};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartState;
use super::layout_helpers::estimate_label_text_width_px;

const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_LINE_SPACING: f64 = 1.3;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 2.0;

/// Materializes the chart as displayed at `now_ms`.
///
/// Pure with respect to `state`: the same state and timestamp always yield
/// the same frame.
pub fn build_render_frame(state: &ChartState, now_ms: f64) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(state.config.viewport);

    push_x_axis(&mut frame, state, now_ms);
    push_y_axis(&mut frame, state, now_ms);
    push_points(&mut frame, state, now_ms);
    push_axis_labels(&mut frame, state);
    push_tooltip(&mut frame, state, now_ms);

    frame.validate()?;
    Ok(frame)
}

/// Scale with the domain shown at `now_ms`; falls back to the target scale
/// if an interpolated domain is not finite.
fn displayed_scale(state: &ChartState, axis: Axis, now_ms: f64) -> LinearScale {
    let target = state.scale(axis);
    target
        .with_domain(state.displayed_domain(axis, now_ms))
        .unwrap_or(target)
}

fn push_x_axis(frame: &mut RenderFrame, state: &ChartState, now_ms: f64) {
    let config = state.config;
    let plot = state.plot;
    let scale = displayed_scale(state, Axis::X, now_ms);
    let baseline_y = plot.to_viewport_y(plot.height);

    frame.lines.push(LinePrimitive::new(
        plot.to_viewport_x(0.0),
        baseline_y,
        plot.to_viewport_x(plot.width),
        baseline_y,
        AXIS_STROKE_WIDTH_PX,
        config.axis_color,
    ));

    let step = scale.tick_step(config.x_tick_count).unwrap_or(1.0);
    for tick in scale.ticks(config.x_tick_count) {
        let x = plot.to_viewport_x(scale.domain_to_pixel(tick));
        if !in_span(x, plot.left, plot.left + plot.width) {
            continue;
        }
        frame.lines.push(LinePrimitive::new(
            x,
            baseline_y,
            x,
            baseline_y + TICK_SIZE_PX,
            AXIS_STROKE_WIDTH_PX,
            config.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, step),
            x,
            baseline_y + TICK_SIZE_PX + TICK_PADDING_PX + config.tick_font_size_px,
            config.tick_font_size_px,
            config.axis_color,
            TextHAlign::Center,
        ));
    }
}

fn push_y_axis(frame: &mut RenderFrame, state: &ChartState, now_ms: f64) {
    let config = state.config;
    let plot = state.plot;
    let scale = displayed_scale(state, Axis::Y, now_ms);
    let baseline_x = plot.to_viewport_x(0.0);

    frame.lines.push(LinePrimitive::new(
        baseline_x,
        plot.to_viewport_y(0.0),
        baseline_x,
        plot.to_viewport_y(plot.height),
        AXIS_STROKE_WIDTH_PX,
        config.axis_color,
    ));

    let step = scale.tick_step(config.y_tick_count).unwrap_or(1.0);
    for tick in scale.ticks(config.y_tick_count) {
        let y = plot.to_viewport_y(scale.domain_to_pixel(tick));
        if !in_span(y, plot.top, plot.top + plot.height) {
            continue;
        }
        frame.lines.push(LinePrimitive::new(
            baseline_x - TICK_SIZE_PX,
            y,
            baseline_x,
            y,
            AXIS_STROKE_WIDTH_PX,
            config.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, step),
            baseline_x - TICK_SIZE_PX - TICK_PADDING_PX,
            y + config.tick_font_size_px / 3.0,
            config.tick_font_size_px,
            config.axis_color,
            TextHAlign::Right,
        ));
    }
}

fn push_points(frame: &mut RenderFrame, state: &ChartState, now_ms: f64) {
    let config = state.config;
    let plot = state.plot;
    let positions = state.displayed_positions(now_ms);

    for (record, (x, y)) in state.dataset.records().iter().zip(&positions) {
        let (cx, cy) = (plot.to_viewport_x(*x), plot.to_viewport_y(*y));
        frame.circles.push(CirclePrimitive::new(
            cx,
            cy,
            config.point_radius_px,
            config.point_color,
        ));
        if !record.abbr.is_empty() {
            frame.texts.push(TextPrimitive::new(
                record.abbr.as_str(),
                cx,
                cy,
                config.abbr_font_size_px,
                config.abbr_color,
                TextHAlign::Center,
            ));
        }
    }
}

fn push_axis_labels(frame: &mut RenderFrame, state: &ChartState) {
    let config = state.config;
    for placement in state.placements.values() {
        let active = state.labels(placement.field.axis()).is_active(placement.field);
        let color = if active {
            config.active_label_color
        } else {
            config.inactive_label_color
        };
        frame.texts.push(
            TextPrimitive::new(
                placement.field.label_text(),
                placement.anchor_x,
                placement.anchor_y,
                config.label_font_size_px,
                color,
                TextHAlign::Center,
            )
            .bold(active)
            .rotated(placement.rotation_deg),
        );
    }
}

fn push_tooltip(frame: &mut RenderFrame, state: &ChartState, now_ms: f64) {
    let Some(index) = state.hover.hovered() else {
        return;
    };
    let Some(record) = state.dataset.get(index) else {
        return;
    };
    let Some((x, y)) = state.displayed_positions(now_ms).get(index).copied() else {
        return;
    };

    let config = state.config;
    let content = state.tooltip.content(record);
    let font_size = config.tooltip_font_size_px;
    let line_height = font_size * TOOLTIP_LINE_SPACING;
    let text_width = content
        .lines
        .iter()
        .map(|line| estimate_label_text_width_px(line, font_size))
        .fold(0.0, f64::max);
    let width = text_width + 2.0 * TOOLTIP_PADDING_PX;
    let height = line_height * content.lines.len() as f64 + 2.0 * TOOLTIP_PADDING_PX;

    let (box_x, box_y) = tooltip_origin(
        state.plot,
        (x, y),
        config.point_radius_px,
        (width, height),
        config.tooltip_offset,
    );
    frame.rects.push(
        RectPrimitive::new(box_x, box_y, width, height, config.tooltip_background)
            .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
    );
    for (line_index, line) in content.lines.iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            line.as_str(),
            box_x + width / 2.0,
            box_y + TOOLTIP_PADDING_PX + line_height * line_index as f64 + font_size,
            font_size,
            config.tooltip_text_color,
            TextHAlign::Center,
        ));
    }
}

/// Places the tooltip box north of the point: horizontally centered on it,
/// bottom edge at the circle's top, then shifted by `(top, left)` offset.
fn tooltip_origin(
    plot: PlotArea,
    point: (f64, f64),
    radius: f64,
    size: (f64, f64),
    offset: (f64, f64),
) -> (f64, f64) {
    let north_x = plot.to_viewport_x(point.0);
    let north_y = plot.to_viewport_y(point.1) - radius;
    (
        north_x - size.0 / 2.0 + offset.1,
        north_y - size.1 + offset.0,
    )
}

fn in_span(value: f64, start: f64, end: f64) -> bool {
    const EPSILON: f64 = 1e-6;
    value >= start - EPSILON && value <= end + EPSILON
}
