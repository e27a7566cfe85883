use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(100.0, 100.0, 80.0, 50.0)
    }
}

/// Inner drawing area left after subtracting margins from the outer size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_outer(outer_width: f64, outer_height: f64, margins: Margins) -> ChartResult<Self> {
        margins.validate()?;
        let width = outer_width - margins.left - margins.right;
        let height = outer_height - margins.top - margins.bottom;
        let area = Self { width, height };
        if !area.is_valid() {
            return Err(ChartError::InvalidPlotArea { width, height });
        }
        Ok(area)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
