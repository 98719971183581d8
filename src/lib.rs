//! census-scatter: interactive census scatter plot.
//!
//! The crate keeps a strict split between the owned chart state, the pure
//! render-frame view model and the drawing backends. Host applications feed
//! label clicks, pointer events and clock timestamps; the crate answers with
//! backend-agnostic frames.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartState, ScatterChart};
pub use error::{ChartError, ChartResult};
