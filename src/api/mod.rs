mod axis_labels;
mod chart_config;
mod chart_snapshot;
mod chart_state;
mod interaction_controller;
mod invalidation;
mod layout_helpers;
mod render_frame_builder;
mod scatter_chart;
mod tooltip;
mod transition;

pub use axis_labels::{AxisLabel, LabelGroup, LabelPlacement, label_placements};
pub use chart_config::ChartConfig;
pub use chart_snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, PointSnapshot,
};
pub use chart_state::ChartState;
pub use interaction_controller::{
    ClickOutcome, FieldSwitch, label_at, on_label_click, pointer_leave, pointer_move,
};
pub use invalidation::{InvalidationTopic, InvalidationTopics};
pub use render_frame_builder::build_render_frame;
pub use scatter_chart::ScatterChart;
pub use tooltip::{TooltipBinding, TooltipContent};
pub use transition::{AnimatedAttribute, TransitionHandle, TransitionScheduler, ease_cubic_in_out};
