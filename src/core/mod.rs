pub mod dataset;
pub mod domain;
pub mod field;
pub mod scale;
pub mod types;

pub use dataset::{Dataset, Record};
pub use domain::{compute_x_domain, compute_y_domain, field_extent};
pub use field::{Axis, Field};
pub use scale::{LinearScale, format_tick};
pub use types::{Margins, PlotArea, Viewport};
