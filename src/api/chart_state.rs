use indexmap::IndexMap;

use crate::core::{
    Axis, Dataset, Field, LinearScale, PlotArea, Record, compute_x_domain, compute_y_domain,
};
use crate::error::ChartResult;
use crate::interaction::HoverState;

use super::axis_labels::{LabelGroup, LabelPlacement, label_placements};
use super::transition::{AnimatedAttribute, TransitionScheduler};
use super::{ChartConfig, TooltipBinding, TooltipContent};

/// Owned state of one scatter chart session.
///
/// Created once by `initialize`; afterwards only the interaction controller
/// mutates the active fields, scales, tooltip binding and transitions.
#[derive(Debug, Clone)]
pub struct ChartState {
    pub(super) config: ChartConfig,
    pub(super) plot: PlotArea,
    pub(super) dataset: Dataset,
    pub(super) x_labels: LabelGroup,
    pub(super) y_labels: LabelGroup,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) tooltip: TooltipBinding,
    pub(super) hover: HoverState,
    pub(super) transitions: TransitionScheduler,
    pub(super) placements: IndexMap<Field, LabelPlacement>,
}

impl ChartState {
    /// Builds the initial state: default fields active, scales fitted to the
    /// dataset, points placed at their final positions without animation.
    pub fn initialize(dataset: Dataset, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot = config.plot_area()?;

        let x_labels = LabelGroup::new(Axis::X, config.default_x)?;
        let y_labels = LabelGroup::new(Axis::Y, config.default_y)?;
        let x_scale = LinearScale::new(
            compute_x_domain(&dataset, config.default_x),
            (0.0, plot.width),
        )?;
        let y_scale = LinearScale::new(
            compute_y_domain(&dataset, config.default_y),
            (plot.height, 0.0),
        )?;

        let mut state = Self {
            placements: label_placements(&config, plot),
            tooltip: TooltipBinding::new(config.default_x, config.default_y),
            config,
            plot,
            dataset,
            x_labels,
            y_labels,
            x_scale,
            y_scale,
            hover: HoverState::default(),
            transitions: TransitionScheduler::new(),
        };

        for axis in [Axis::X, Axis::Y] {
            let (start, end) = state.domain(axis);
            state
                .transitions
                .set_immediate(AnimatedAttribute::axis_domain(axis), vec![start, end]);
            let positions = state.target_positions(axis);
            state
                .transitions
                .set_immediate(AnimatedAttribute::points(axis), positions);
        }

        Ok(state)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn active_x(&self) -> Field {
        self.x_labels.active()
    }

    #[must_use]
    pub fn active_y(&self) -> Field {
        self.y_labels.active()
    }

    #[must_use]
    pub fn active_field(&self, axis: Axis) -> Field {
        self.labels(axis).active()
    }

    #[must_use]
    pub fn labels(&self, axis: Axis) -> LabelGroup {
        match axis {
            Axis::X => self.x_labels,
            Axis::Y => self.y_labels,
        }
    }

    pub(super) fn labels_mut(&mut self, axis: Axis) -> &mut LabelGroup {
        match axis {
            Axis::X => &mut self.x_labels,
            Axis::Y => &mut self.y_labels,
        }
    }

    #[must_use]
    pub fn label_placements(&self) -> &IndexMap<Field, LabelPlacement> {
        &self.placements
    }

    #[must_use]
    pub fn scale(&self, axis: Axis) -> LinearScale {
        match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
        }
    }

    pub(super) fn scale_mut(&mut self, axis: Axis) -> &mut LinearScale {
        match axis {
            Axis::X => &mut self.x_scale,
            Axis::Y => &mut self.y_scale,
        }
    }

    /// Target domain of `axis` for the active field.
    #[must_use]
    pub fn domain(&self, axis: Axis) -> (f64, f64) {
        self.scale(axis).domain()
    }

    /// Domain rule for `axis` applied to `field`, computed fresh.
    #[must_use]
    pub fn compute_domain(&self, axis: Axis, field: Field) -> (f64, f64) {
        match axis {
            Axis::X => compute_x_domain(&self.dataset, field),
            Axis::Y => compute_y_domain(&self.dataset, field),
        }
    }

    /// Domain drawn on `axis` at `now_ms`, mid-transition if one is running.
    #[must_use]
    pub fn displayed_domain(&self, axis: Axis, now_ms: f64) -> (f64, f64) {
        match self
            .transitions
            .sample(AnimatedAttribute::axis_domain(axis), now_ms)
            .as_slice()
        {
            [start, end] => (*start, *end),
            _ => self.domain(axis),
        }
    }

    /// Final plot-local coordinate of every record along `axis`.
    #[must_use]
    pub fn target_positions(&self, axis: Axis) -> Vec<f64> {
        let scale = self.scale(axis);
        let field = self.active_field(axis);
        self.dataset
            .values(field)
            .map(|value| scale.domain_to_pixel(value))
            .collect()
    }

    /// Plot-local `(x, y)` of every record as displayed at `now_ms`.
    #[must_use]
    pub fn displayed_positions(&self, now_ms: f64) -> Vec<(f64, f64)> {
        let xs = self.transitions.sample(AnimatedAttribute::PointsX, now_ms);
        let ys = self.transitions.sample(AnimatedAttribute::PointsY, now_ms);
        xs.into_iter().zip(ys).collect()
    }

    #[must_use]
    pub fn tooltip(&self) -> TooltipBinding {
        self.tooltip
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn hovered_record(&self) -> Option<&Record> {
        self.hover.hovered().and_then(|index| self.dataset.get(index))
    }

    /// Tooltip text for the hovered record, if any.
    #[must_use]
    pub fn tooltip_content(&self) -> Option<TooltipContent> {
        self.hovered_record().map(|record| self.tooltip.content(record))
    }

    #[must_use]
    pub fn transitions(&self) -> &TransitionScheduler {
        &self.transitions
    }

    #[must_use]
    pub fn has_running_transitions(&self, now_ms: f64) -> bool {
        self.transitions.has_running(now_ms)
    }
}
