use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea};
use crate::error::{ChartError, ChartResult};
use crate::extensions::Annotation;
use crate::render::{Paint, TextAnchor, TextPrimitive};

pub const DEFAULT_CONTAINER_ID: &str = "chart-1";
pub const DEFAULT_TITLE: &str = "The gender gap of uninsured Americans by state";
pub const DEFAULT_SUBTITLE: &str =
    "The percentage of men uninsured is higher than women in every state, a 2012-2016 survey shows.";

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file. Every field has
/// a default, and `ChartConfig::default()` draws the stock gender-gap chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub container_id: String,
    pub outer_width: f64,
    pub outer_height: f64,
    pub margins: Margins,
    /// Horizontal domain. Fixed; never fitted to the data.
    pub x_domain: [f64; 2],
    pub x_tick_count: usize,
    /// Vertical shift of the label-only axis drawn above the plot.
    pub top_axis_offset: f64,
    pub row_padding: f64,
    pub dot_radius: f64,
    pub female_fill: Paint,
    pub male_fill: Paint,
    pub connector_stroke: Paint,
    pub gridline_dasharray: String,
    pub gridline_fill: Paint,
    pub category_font_size: f64,
    /// `[vertical, horizontal]` tooltip shift from the hovered dot.
    pub tooltip_offset: [f64; 2],
    pub title: TextPrimitive,
    pub subtitle: TextPrimitive,
    pub annotation_font_size: String,
    pub annotations: Vec<Annotation>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let margins = Margins::default();
        let outer_width = 750.0;
        let plot_width = outer_width - margins.left - margins.right;
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            outer_width,
            outer_height: 700.0,
            margins,
            x_domain: [0.0, 18.0],
            x_tick_count: 10,
            top_axis_offset: -15.0,
            row_padding: 0.5,
            dot_radius: 4.0,
            female_fill: paint("#fde725"),
            male_fill: paint("#31688e"),
            connector_stroke: paint("black"),
            gridline_dasharray: "1 6".to_owned(),
            gridline_fill: paint("lightgrey"),
            category_font_size: 10.0,
            tooltip_offset: [-10.0, 0.0],
            title: TextPrimitive::new(DEFAULT_TITLE, plot_width / 2.0, -70.0, 18.0, TextAnchor::Middle)
                .with_dx(-40.0)
                .bold(),
            subtitle: TextPrimitive::new(DEFAULT_SUBTITLE, 0.0, -40.0, 14.0, TextAnchor::Right)
                .with_dx(-10.0),
            annotation_font_size: "10px".to_owned(),
            annotations: vec![Annotation::label("", 90.0), Annotation::label("", 80.0)],
        }
    }
}

fn paint(value: &str) -> Paint {
    Paint::from_trusted(value)
}

impl ChartConfig {
    #[must_use]
    pub fn with_size(mut self, outer_width: f64, outer_height: f64) -> Self {
        self.outer_width = outer_width;
        self.outer_height = outer_height;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_x_domain(mut self, start: f64, end: f64) -> Self {
        self.x_domain = [start, end];
        self
    }

    #[must_use]
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_outer(self.outer_width, self.outer_height, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.container_id.is_empty() {
            return Err(ChartError::InvalidConfig(
                "container id must not be empty".to_owned(),
            ));
        }
        // The id is written into a CSS selector and a script string literal.
        if !self
            .container_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ChartError::InvalidConfig(format!(
                "container id `{}` may only contain ASCII letters, digits, `-` and `_`",
                self.container_id
            )));
        }
        self.plot_area()?;

        let [start, end] = self.x_domain;
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(ChartError::InvalidConfig(
                "x domain must be finite and non-zero".to_owned(),
            ));
        }
        if self.x_tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "x tick count must be > 0".to_owned(),
            ));
        }
        if !self.row_padding.is_finite() || !(0.0..=1.0).contains(&self.row_padding) {
            return Err(ChartError::InvalidConfig(
                "row padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "dot radius must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("top_axis_offset", self.top_axis_offset),
            ("tooltip_offset[0]", self.tooltip_offset[0]),
            ("tooltip_offset[1]", self.tooltip_offset[1]),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!("`{name}` must be finite")));
            }
        }
        if !self.category_font_size.is_finite() || self.category_font_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "category font size must be finite and > 0".to_owned(),
            ));
        }

        self.title
            .validate()
            .map_err(|err| ChartError::InvalidConfig(format!("title: {err}")))?;
        self.subtitle
            .validate()
            .map_err(|err| ChartError::InvalidConfig(format!("subtitle: {err}")))?;
        for annotation in &self.annotations {
            annotation.validate()?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}
