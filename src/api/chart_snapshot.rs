use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, Field, Viewport};
use crate::error::{ChartError, ChartResult};

use super::ChartState;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests,
/// debugging tooling and the `scatter_snapshot` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub active_x: Field,
    pub active_y: Field,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub displayed_x_domain: (f64, f64),
    pub displayed_y_domain: (f64, f64),
    /// Label activity in display order.
    pub labels: IndexMap<Field, bool>,
    pub tooltip_generation: u64,
    pub hovered: Option<usize>,
    pub transitions_running: bool,
    pub points: Vec<PointSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub abbr: String,
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    #[must_use]
    pub fn capture(state: &ChartState, now_ms: f64) -> Self {
        let plot = state.plot_area();
        let target_x = state.target_positions(Axis::X);
        let target_y = state.target_positions(Axis::Y);
        let points = state
            .dataset()
            .records()
            .iter()
            .zip(state.displayed_positions(now_ms))
            .zip(target_x.into_iter().zip(target_y))
            .map(|((record, (x, y)), (tx, ty))| PointSnapshot {
                abbr: record.abbr.clone(),
                x: plot.to_viewport_x(x),
                y: plot.to_viewport_y(y),
                target_x: plot.to_viewport_x(tx),
                target_y: plot.to_viewport_y(ty),
            })
            .collect();

        let labels = [Axis::X, Axis::Y]
            .into_iter()
            .flat_map(|axis| state.labels(axis).labels())
            .map(|label| (label.field, label.active))
            .collect();

        Self {
            viewport: state.config().viewport,
            active_x: state.active_x(),
            active_y: state.active_y(),
            x_domain: state.domain(Axis::X),
            y_domain: state.domain(Axis::Y),
            displayed_x_domain: state.displayed_domain(Axis::X, now_ms),
            displayed_y_domain: state.displayed_domain(Axis::Y, now_ms),
            labels,
            tooltip_generation: state.tooltip().generation(),
            hovered: state.hover().hovered(),
            transitions_running: state.has_running_transitions(now_ms),
            points,
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
