use tracing::trace;

use crate::core::{Dataset, Field};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::interaction_controller::{self, ClickOutcome};
use super::invalidation::{InvalidationTopic, InvalidationTopics};
use super::render_frame_builder::build_render_frame;
use super::{ChartConfig, ChartSnapshot, ChartState};

/// Main facade consumed by host applications.
///
/// Owns a renderer plus the chart state, forwards host events to the
/// interaction controller and accumulates pending redraw topics until the
/// next `render`.
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    state: ChartState,
    pending: InvalidationTopics,
}

impl<R: Renderer> ScatterChart<R> {
    pub fn new(renderer: R, dataset: Dataset, config: ChartConfig) -> ChartResult<Self> {
        let state = ChartState::initialize(dataset, config)?;
        Ok(Self::from_state(renderer, state))
    }

    #[must_use]
    pub fn from_state(renderer: R, state: ChartState) -> Self {
        Self {
            renderer,
            state,
            pending: InvalidationTopics::all(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        self.state.config()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn click_label(&mut self, field: Field, now_ms: f64) -> ChartResult<ClickOutcome> {
        let outcome = interaction_controller::on_label_click(&mut self.state, field, now_ms)?;
        self.pending = self.pending.union(outcome.invalidation());
        Ok(outcome)
    }

    /// Click entry point for hosts that carry labels as `(axis tag, name)`.
    pub fn click_label_by_name(
        &mut self,
        axis_tag: &str,
        name: &str,
        now_ms: f64,
    ) -> ChartResult<ClickOutcome> {
        let field = Field::from_label(axis_tag, name)?;
        self.click_label(field, now_ms)
    }

    /// Routes a click at viewport `(x, y)`; `None` when no label was hit.
    pub fn click_at(&mut self, x: f64, y: f64, now_ms: f64) -> ChartResult<Option<ClickOutcome>> {
        match self.label_at(x, y) {
            Some(field) => self.click_label(field, now_ms).map(Some),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn label_at(&self, x: f64, y: f64) -> Option<Field> {
        interaction_controller::label_at(&self.state, x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) -> Option<usize> {
        let before = self.state.hover().hovered();
        let hovered = interaction_controller::pointer_move(&mut self.state, x, y, now_ms);
        if hovered != before {
            self.pending = self.pending.with_topic(InvalidationTopic::Tooltip);
        }
        hovered
    }

    pub fn pointer_leave(&mut self) {
        if self.state.hover().hovered().is_some() {
            self.pending = self.pending.with_topic(InvalidationTopic::Tooltip);
        }
        interaction_controller::pointer_leave(&mut self.state);
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.pending
    }

    #[must_use]
    pub fn has_running_transitions(&self, now_ms: f64) -> bool {
        self.state.has_running_transitions(now_ms)
    }

    /// `true` when something changed since the last render or an animation
    /// is still in flight.
    #[must_use]
    pub fn needs_render(&self, now_ms: f64) -> bool {
        !self.pending.is_none() || self.has_running_transitions(now_ms)
    }

    pub fn build_render_frame(&self, now_ms: f64) -> ChartResult<RenderFrame> {
        build_render_frame(&self.state, now_ms)
    }

    pub fn render(&mut self, now_ms: f64) -> ChartResult<()> {
        let frame = build_render_frame(&self.state, now_ms)?;
        self.renderer.render(&frame)?;
        self.finish_render(now_ms, &frame);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        now_ms: f64,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = build_render_frame(&self.state, now_ms)?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.finish_render(now_ms, &frame);
        Ok(())
    }

    fn finish_render(&mut self, now_ms: f64, frame: &RenderFrame) {
        let retired = self.state.transitions.retire_finished(now_ms);
        trace!(
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            retired,
            "chart rendered"
        );
        self.pending = InvalidationTopics::none();
    }

    #[must_use]
    pub fn snapshot(&self, now_ms: f64) -> ChartSnapshot {
        ChartSnapshot::capture(&self.state, now_ms)
    }

    pub fn snapshot_json_contract_v1_pretty(&self, now_ms: f64) -> ChartResult<String> {
        self.snapshot(now_ms).to_json_contract_v1_pretty()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
