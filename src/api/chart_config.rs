use serde::{Deserialize, Serialize};

use crate::core::{Axis, Field, Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup as JSON.
/// Every field has a default matching the reference 950×500 census layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    /// Duration of the axis tick transition after a field switch.
    #[serde(default = "default_axis_transition_ms")]
    pub axis_transition_ms: f64,
    /// Duration of the point glide after a field switch.
    #[serde(default = "default_point_transition_ms")]
    pub point_transition_ms: f64,
    #[serde(default = "default_point_radius_px")]
    pub point_radius_px: f64,
    #[serde(default = "default_point_color")]
    pub point_color: Color,
    #[serde(default = "default_abbr_font_size_px")]
    pub abbr_font_size_px: f64,
    #[serde(default = "default_abbr_color")]
    pub abbr_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_active_label_color")]
    pub active_label_color: Color,
    #[serde(default = "default_inactive_label_color")]
    pub inactive_label_color: Color,
    #[serde(default = "default_tick_font_size_px")]
    pub tick_font_size_px: f64,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    /// `(top, left)` offset of the tooltip box relative to the hovered point.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: (f64, f64),
    #[serde(default = "default_tooltip_font_size_px")]
    pub tooltip_font_size_px: f64,
    #[serde(default = "default_tooltip_background")]
    pub tooltip_background: Color,
    #[serde(default = "default_tooltip_text_color")]
    pub tooltip_text_color: Color,
    #[serde(default = "default_x_field")]
    pub default_x: Field,
    #[serde(default = "default_y_field")]
    pub default_y: Field,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            axis_transition_ms: default_axis_transition_ms(),
            point_transition_ms: default_point_transition_ms(),
            point_radius_px: default_point_radius_px(),
            point_color: default_point_color(),
            abbr_font_size_px: default_abbr_font_size_px(),
            abbr_color: default_abbr_color(),
            label_font_size_px: default_label_font_size_px(),
            active_label_color: default_active_label_color(),
            inactive_label_color: default_inactive_label_color(),
            tick_font_size_px: default_tick_font_size_px(),
            axis_color: default_axis_color(),
            x_tick_count: default_tick_count(),
            y_tick_count: default_tick_count(),
            tooltip_offset: default_tooltip_offset(),
            tooltip_font_size_px: default_tooltip_font_size_px(),
            tooltip_background: default_tooltip_background(),
            tooltip_text_color: default_tooltip_text_color(),
            default_x: default_x_field(),
            default_y: default_y_field(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport, margins: Margins) -> Self {
        self.viewport = viewport;
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_transition_durations(mut self, axis_ms: f64, point_ms: f64) -> Self {
        self.axis_transition_ms = axis_ms;
        self.point_transition_ms = point_ms;
        self
    }

    #[must_use]
    pub fn with_default_fields(mut self, x: Field, y: Field) -> Self {
        self.default_x = x;
        self.default_y = y;
        self
    }

    /// Parses a JSON config; missing keys fall back to defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize config: {e}")))
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_area()?;

        for (name, value) in [
            ("axis_transition_ms", self.axis_transition_ms),
            ("point_transition_ms", self.point_transition_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::Config(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("point_radius_px", self.point_radius_px),
            ("abbr_font_size_px", self.abbr_font_size_px),
            ("label_font_size_px", self.label_font_size_px),
            ("tick_font_size_px", self.tick_font_size_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::Config(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        if self.x_tick_count == 0 || self.y_tick_count == 0 {
            return Err(ChartError::Config("tick counts must be > 0".to_owned()));
        }
        if !self.tooltip_offset.0.is_finite() || !self.tooltip_offset.1.is_finite() {
            return Err(ChartError::Config(
                "tooltip offset must be finite".to_owned(),
            ));
        }

        for color in [
            self.point_color,
            self.abbr_color,
            self.active_label_color,
            self.inactive_label_color,
            self.axis_color,
            self.tooltip_background,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }

        self.default_x.ensure_axis(Axis::X)?;
        self.default_y.ensure_axis(Axis::Y)?;
        Ok(())
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(950, 500)
}

fn default_axis_transition_ms() -> f64 {
    100.0
}

fn default_point_transition_ms() -> f64 {
    10_000.0
}

fn default_point_radius_px() -> f64 {
    10.0
}

fn default_point_color() -> Color {
    Color::rgba(0.0, 0.0, 1.0, 0.5)
}

fn default_abbr_font_size_px() -> f64 {
    10.0
}

fn default_abbr_color() -> Color {
    Color::WHITE
}

fn default_label_font_size_px() -> f64 {
    14.0
}

fn default_active_label_color() -> Color {
    Color::BLACK
}

fn default_inactive_label_color() -> Color {
    Color::rgb(0.75, 0.75, 0.75)
}

fn default_tick_font_size_px() -> f64 {
    10.0
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_tick_count() -> usize {
    10
}

fn default_tooltip_offset() -> (f64, f64) {
    (-8.0, 0.0)
}

fn default_tooltip_font_size_px() -> f64 {
    12.0
}

fn default_tooltip_background() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.8)
}

fn default_tooltip_text_color() -> Color {
    Color::WHITE
}

fn default_x_field() -> Field {
    Axis::X.default_field()
}

fn default_y_field() -> Field {
    Axis::Y.default_field()
}
