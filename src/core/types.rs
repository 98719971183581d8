use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plotting rectangle for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 40.0, 80.0, 100.0)
    }
}

/// Inner plotting rectangle in viewport pixels.
///
/// Scales map into plot-local coordinates (`0..width`, `0..height`); the
/// frame builder translates them by `left`/`top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (side, value) in [
            ("top", margins.top),
            ("right", margins.right),
            ("bottom", margins.bottom),
            ("left", margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::Config(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::Config(format!(
                "margins leave no plot area: width={width}, height={height}"
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn to_viewport_x(self, plot_x: f64) -> f64 {
        self.left + plot_x
    }

    #[must_use]
    pub fn to_viewport_y(self, plot_y: f64) -> f64 {
        self.top + plot_y
    }
}
