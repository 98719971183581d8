use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, Field, PlotArea};
use crate::error::ChartResult;

use super::ChartConfig;
use super::layout_helpers::{PixelBounds, estimate_label_text_width_px};

const X_LABEL_GROUP_OFFSET_PX: f64 = 20.0;
const X_LABEL_FIRST_BASELINE_PX: f64 = 15.0;
const LABEL_STEP_PX: f64 = 20.0;
const Y_LABEL_ROTATION_DEG: f64 = -90.0;

/// One clickable axis label as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub field: Field,
    pub active: bool,
}

/// The three labels of one axis.
///
/// Only the active field is stored, so exactly one label is active by
/// construction and activation is mutually exclusive within the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelGroup {
    axis: Axis,
    active: Field,
}

impl LabelGroup {
    pub fn new(axis: Axis, active: Field) -> ChartResult<Self> {
        Ok(Self {
            axis,
            active: active.ensure_axis(axis)?,
        })
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn active(self) -> Field {
        self.active
    }

    #[must_use]
    pub fn is_active(self, field: Field) -> bool {
        self.active == field
    }

    /// Marks `field` active and the previous label inactive.
    ///
    /// Returns the previously active field, or `None` when `field` already was
    /// the active label.
    pub fn activate(&mut self, field: Field) -> ChartResult<Option<Field>> {
        field.ensure_axis(self.axis)?;
        if self.active == field {
            return Ok(None);
        }
        let previous = self.active;
        self.active = field;
        Ok(Some(previous))
    }

    #[must_use]
    pub fn labels(self) -> [AxisLabel; 3] {
        self.axis.fields().map(|field| AxisLabel {
            field,
            active: field == self.active,
        })
    }
}

/// Where a label is drawn, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub field: Field,
    /// Text anchor (horizontal center, baseline) before rotation.
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub rotation_deg: f64,
    pub(super) bounds: PixelBounds,
}

impl LabelPlacement {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Lays out all six labels in display order (X labels first).
///
/// X labels stack under the plot; Y labels are rotated -90° and stack
/// leftwards from a third of the left margin.
#[must_use]
pub fn label_placements(config: &ChartConfig, plot: PlotArea) -> IndexMap<Field, LabelPlacement> {
    let font_size = config.label_font_size_px;
    let ascent = font_size;
    let descent = font_size * 0.25;
    let mut placements = IndexMap::with_capacity(6);

    for (index, field) in Axis::X.fields().into_iter().enumerate() {
        let anchor_x = plot.to_viewport_x(plot.width / 2.0);
        let anchor_y = plot.to_viewport_y(
            plot.height
                + X_LABEL_GROUP_OFFSET_PX
                + X_LABEL_FIRST_BASELINE_PX
                + LABEL_STEP_PX * index as f64,
        );
        let half_width = estimate_label_text_width_px(field.label_text(), font_size) / 2.0;
        placements.insert(
            field,
            LabelPlacement {
                field,
                anchor_x,
                anchor_y,
                rotation_deg: 0.0,
                bounds: PixelBounds {
                    x0: anchor_x - half_width,
                    y0: anchor_y - ascent,
                    x1: anchor_x + half_width,
                    y1: anchor_y + descent,
                },
            },
        );
    }

    for (index, field) in Axis::Y.fields().into_iter().enumerate() {
        let offset = config.margins.left / 3.0 + LABEL_STEP_PX * index as f64;
        let anchor_x = plot.to_viewport_x(-offset);
        let anchor_y = plot.to_viewport_y(plot.height / 2.0);
        let half_width = estimate_label_text_width_px(field.label_text(), font_size) / 2.0;
        placements.insert(
            field,
            LabelPlacement {
                field,
                anchor_x,
                anchor_y,
                rotation_deg: Y_LABEL_ROTATION_DEG,
                bounds: PixelBounds {
                    x0: anchor_x - ascent,
                    y0: anchor_y - half_width,
                    x1: anchor_x + descent,
                    y1: anchor_y + half_width,
                },
            },
        );
    }

    placements
}
