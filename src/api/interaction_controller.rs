use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, Field};
use crate::error::ChartResult;

use super::ChartState;
use super::invalidation::InvalidationTopics;
use super::transition::{AnimatedAttribute, TransitionHandle};

/// Result of a label click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The clicked label already was active; nothing changed.
    Ignored,
    Applied(FieldSwitch),
}

impl ClickOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied(_))
    }

    #[must_use]
    pub fn invalidation(self) -> InvalidationTopics {
        match self {
            Self::Ignored => InvalidationTopics::none(),
            Self::Applied(switch) => switch.invalidation,
        }
    }
}

/// Describes one applied field switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSwitch {
    pub axis: Axis,
    pub previous: Field,
    pub current: Field,
    pub domain: (f64, f64),
    pub invalidation: InvalidationTopics,
    pub axis_transition: TransitionHandle,
    pub point_transition: TransitionHandle,
}

/// Handles a click on the label of `field`.
///
/// Re-clicking the active label is a no-op. Otherwise the label group swaps
/// its active label, the axis domain is recomputed from the dataset, axis
/// and point transitions are (re)started and the tooltip is rebound to the
/// new field pair. A field whose values are all equal yields a zero-span
/// domain; its points sit at the middle of the axis.
pub fn on_label_click(
    state: &mut ChartState,
    field: Field,
    now_ms: f64,
) -> ChartResult<ClickOutcome> {
    let axis = field.axis();
    if state.labels(axis).is_active(field) {
        debug!(%axis, %field, "label already active; click ignored");
        return Ok(ClickOutcome::Ignored);
    }

    let domain = state.compute_domain(axis, field);
    let scale = state.scale(axis).with_domain(domain)?;

    let Some(previous) = state.labels_mut(axis).activate(field)? else {
        return Ok(ClickOutcome::Ignored);
    };
    *state.scale_mut(axis) = scale;

    let config = state.config;
    let axis_transition = state.transitions.start(
        AnimatedAttribute::axis_domain(axis),
        vec![domain.0, domain.1],
        now_ms,
        config.axis_transition_ms,
    );
    let targets = state.target_positions(axis);
    let point_transition = state.transitions.start(
        AnimatedAttribute::points(axis),
        targets,
        now_ms,
        config.point_transition_ms,
    );

    state.tooltip = state.tooltip.rebind(state.active_x(), state.active_y());

    debug!(
        %axis,
        %previous,
        current = %field,
        domain_start = domain.0,
        domain_end = domain.1,
        tooltip_generation = state.tooltip.generation(),
        "axis field switched"
    );

    Ok(ClickOutcome::Applied(FieldSwitch {
        axis,
        previous,
        current: field,
        domain,
        invalidation: InvalidationTopics::field_switch(axis),
        axis_transition,
        point_transition,
    }))
}

/// Resolves the label under a viewport-pixel position.
#[must_use]
pub fn label_at(state: &ChartState, x: f64, y: f64) -> Option<Field> {
    state
        .placements
        .values()
        .find(|placement| placement.contains(x, y))
        .map(|placement| placement.field)
}

/// Updates hover state for a pointer at viewport-pixel `(x, y)`.
///
/// The nearest displayed point whose circle contains the pointer becomes the
/// hovered record. Returns the hovered index.
pub fn pointer_move(state: &mut ChartState, x: f64, y: f64, now_ms: f64) -> Option<usize> {
    let plot = state.plot;
    let radius = state.config.point_radius_px;
    let hovered = state
        .displayed_positions(now_ms)
        .into_iter()
        .enumerate()
        .filter_map(|(index, (px, py))| {
            let dx = plot.to_viewport_x(px) - x;
            let dy = plot.to_viewport_y(py) - y;
            let distance = (dx * dx + dy * dy).sqrt();
            (distance <= radius).then_some((OrderedFloat(distance), index))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, index)| index);

    state.hover.on_pointer_move(x, y, hovered);
    hovered
}

pub fn pointer_leave(state: &mut ChartState) {
    state.hover.on_pointer_leave();
}
