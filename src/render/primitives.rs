use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::Element;

const NAMED_PAINTS: &[&str] = &[
    "black",
    "white",
    "lightgrey",
    "grey",
    "gray",
    "currentColor",
    "none",
];

/// RGB color parsed from `#rgb` / `#rrggbb` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("color `{input}` must start with `#`"))
        })?;
        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16)
                .map_err(|_| ChartError::InvalidData(format!("color `{input}` is not valid hex")))
        };
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |index: usize| channel(&digits[index..=index]).map(|v| v * 17);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(ChartError::InvalidData(format!(
                "color `{input}` must have 3 or 6 hex digits"
            ))),
        }
    }
}

/// SVG paint value: a hex color or one of a few keywords.
///
/// The input spelling is kept so output attributes match the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Paint(String);

impl Paint {
    pub fn parse(input: &str) -> ChartResult<Self> {
        if input.starts_with('#') {
            Color::from_hex(input)?;
            return Ok(Self(input.to_owned()));
        }
        if NAMED_PAINTS.contains(&input) {
            return Ok(Self(input.to_owned()));
        }
        Err(ChartError::InvalidData(format!("unsupported paint `{input}`")))
    }

    /// Skips validation; only for built-in literals.
    pub(crate) fn from_trusted(value: &str) -> Self {
        Self(value.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Paint {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::parse(&value)
    }
}

impl From<Paint> for String {
    fn from(value: Paint) -> Self {
        value.0
    }
}

/// Formats a number the way it should appear in SVG attributes and labels:
/// shortest round-trip decimal, no trailing `.0`, no negative zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Draw command for one line segment in the parent group's coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Paint,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Paint) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
        }
    }

    /// Rejects non-finite coordinates. Off-plot coordinates are allowed.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_element(&self) -> Element {
        Element::new("line")
            .attr("y1", format_number(self.y1))
            .attr("y2", format_number(self.y2))
            .attr("x1", format_number(self.x1))
            .attr("x2", format_number(self.x2))
            .attr("stroke", self.stroke.as_str())
    }
}

/// Draw command for one dot.
#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Paint,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64, fill: Paint) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_element(&self) -> Element {
        Element::new("circle")
            .attr("r", format_number(self.radius))
            .attr("fill", self.fill.as_str())
            .attr("cy", format_number(self.cy))
            .attr("cx", format_number(self.cx))
    }
}

/// Value written to the SVG `text-anchor` attribute.
///
/// `Right` is not a valid SVG keyword; browsers fall back to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
    Right,
}

impl TextAnchor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
            Self::Right => "right",
        }
    }
}

/// Draw command for one static label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub dx: f64,
    pub font_size: f64,
    pub anchor: TextAnchor,
    #[serde(default)]
    pub bold: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64, anchor: TextAnchor) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            dx: 0.0,
            font_size,
            anchor,
            bold: false,
        }
    }

    #[must_use]
    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.dx.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_element(&self) -> Element {
        let element = Element::new("text")
            .attr("font-size", format_number(self.font_size))
            .attr("text-anchor", self.anchor.as_str())
            .text(self.text.clone())
            .attr("x", format_number(self.x))
            .attr("y", format_number(self.y))
            .attr("dx", format_number(self.dx));
        if self.bold {
            element.attr("font-weight", "bold")
        } else {
            element
        }
    }
}
