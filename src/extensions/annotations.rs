use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Element, NodeId, SvgDocument, format_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorEnd {
    None,
    Arrow,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorLineType {
    Straight,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationConnector {
    pub end: ConnectorEnd,
    pub line_type: ConnectorLineType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationNote {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Maximum line width in pixels before the label wraps.
    pub wrap: f64,
}

/// Static callout drawn over the chart.
///
/// `x`/`y` locate the annotated subject, `dx`/`dy` the note relative to it.
/// Missing coordinates default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub note: AnnotationNote,
    #[serde(default)]
    pub connector: Option<AnnotationConnector>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub dx: Option<f64>,
    #[serde(default)]
    pub dy: Option<f64>,
}

impl Annotation {
    #[must_use]
    pub fn label(label: impl Into<String>, wrap: f64) -> Self {
        Self {
            note: AnnotationNote {
                label: label.into(),
                title: None,
                wrap,
            },
            connector: None,
            x: None,
            y: None,
            dx: None,
            dy: None,
        }
    }

    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_note_offset(mut self, dx: f64, dy: f64) -> Self {
        self.dx = Some(dx);
        self.dy = Some(dy);
        self
    }

    #[must_use]
    pub fn with_connector(mut self, connector: AnnotationConnector) -> Self {
        self.connector = Some(connector);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.note.wrap.is_finite() || self.note.wrap <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "annotation wrap must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [("x", self.x), ("y", self.y), ("dx", self.dx), ("dy", self.dy)] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ChartError::InvalidConfig(format!(
                    "annotation `{name}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Text metrics used to wrap note labels without a font backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationStyle {
    pub char_width_px: f64,
    pub line_height_px: f64,
    pub connector_stroke: &'static str,
    pub arrow_length_px: f64,
    pub dot_radius_px: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            char_width_px: 5.5,
            line_height_px: 12.0,
            connector_stroke: "grey",
            arrow_length_px: 10.0,
            dot_radius_px: 3.0,
        }
    }
}

/// Greedy word wrap by estimated width. Words wider than `wrap` get their own line.
#[must_use]
pub fn wrap_label(label: &str, wrap: f64, char_width_px: f64) -> Vec<String> {
    let max_chars = ((wrap / char_width_px).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in label.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Appends a `g.annotations` layer to `parent` with one `g.annotation` per entry.
pub fn draw_annotations(
    document: &mut SvgDocument,
    parent: NodeId,
    annotations: &[Annotation],
    style: AnnotationStyle,
) -> ChartResult<NodeId> {
    let layer = document.append(parent, Element::new("g").attr("class", "annotations"))?;
    for annotation in annotations {
        annotation.validate()?;
        draw_annotation(document, layer, annotation, style)?;
    }
    Ok(layer)
}

fn draw_annotation(
    document: &mut SvgDocument,
    layer: NodeId,
    annotation: &Annotation,
    style: AnnotationStyle,
) -> ChartResult<()> {
    let x = annotation.x.unwrap_or(0.0);
    let y = annotation.y.unwrap_or(0.0);
    let dx = annotation.dx.unwrap_or(0.0);
    let dy = annotation.dy.unwrap_or(0.0);

    let group = document.append(
        layer,
        Element::new("g").attr("class", "annotation").attr(
            "transform",
            format!("translate({},{})", format_number(x), format_number(y)),
        ),
    )?;

    let connector = document.append(
        group,
        Element::new("g").attr("class", "annotation-connector"),
    )?;
    if let Some(shape) = annotation.connector {
        if dx != 0.0 || dy != 0.0 {
            draw_connector(document, connector, shape, dx, dy, style)?;
        }
    }
    document.append(group, Element::new("g").attr("class", "annotation-subject"))?;

    let note = document.append(
        group,
        Element::new("g").attr("class", "annotation-note").attr(
            "transform",
            format!("translate({},{})", format_number(dx), format_number(dy)),
        ),
    )?;
    let content = document.append(
        note,
        Element::new("g").attr("class", "annotation-note-content"),
    )?;

    let lines = wrap_label(&annotation.note.label, annotation.note.wrap, style.char_width_px);
    let widest = lines
        .iter()
        .map(|line| line.chars().count() as f64 * style.char_width_px)
        .fold(0.0, f64::max);
    let title_lines = usize::from(annotation.note.title.is_some());
    let height = (lines.len() + title_lines) as f64 * style.line_height_px;
    document.append(
        content,
        Element::new("rect")
            .attr("class", "annotation-note-bg")
            .attr("width", format_number(widest))
            .attr("height", format_number(height))
            .attr("fill", "white")
            .attr("fill-opacity", "0"),
    )?;

    if let Some(title) = &annotation.note.title {
        document.append(
            content,
            Element::new("text")
                .attr("class", "annotation-note-title")
                .attr("font-weight", "bold")
                .text(title.clone()),
        )?;
    }

    let label = document.append(
        content,
        Element::new("text")
            .attr("class", "annotation-note-label")
            .attr("y", format_number(title_lines as f64 * style.line_height_px)),
    )?;
    for (index, line) in lines.into_iter().enumerate() {
        document.append(
            label,
            Element::new("tspan")
                .attr("x", "0")
                .attr("dy", if index == 0 { "0.8em" } else { "1.2em" })
                .text(line),
        )?;
    }
    Ok(())
}

fn draw_connector(
    document: &mut SvgDocument,
    connector: NodeId,
    shape: AnnotationConnector,
    dx: f64,
    dy: f64,
    style: AnnotationStyle,
) -> ChartResult<()> {
    let (dx_s, dy_s) = (format_number(dx), format_number(dy));
    let (path, first_leg) = match shape.line_type {
        ConnectorLineType::Straight => (format!("M0,0L{dx_s},{dy_s}"), (dx, dy)),
        ConnectorLineType::Horizontal => (format!("M0,0L{dx_s},0L{dx_s},{dy_s}"), (dx, 0.0)),
        ConnectorLineType::Vertical => (format!("M0,0L0,{dy_s}L{dx_s},{dy_s}"), (0.0, dy)),
    };
    document.append(
        connector,
        Element::new("path")
            .attr("class", "connector")
            .attr("fill", "none")
            .attr("stroke", style.connector_stroke)
            .attr("d", path),
    )?;

    match shape.end {
        ConnectorEnd::None => {}
        ConnectorEnd::Dot => {
            document.append(
                connector,
                Element::new("circle")
                    .attr("class", "connector-end connector-dot")
                    .attr("r", format_number(style.dot_radius_px))
                    .attr("fill", style.connector_stroke),
            )?;
        }
        ConnectorEnd::Arrow => {
            let (leg_x, leg_y) = if first_leg.0 == 0.0 && first_leg.1 == 0.0 {
                (dx, dy)
            } else {
                first_leg
            };
            let length = leg_x.hypot(leg_y);
            let (ux, uy) = (leg_x / length, leg_y / length);
            let base_x = ux * style.arrow_length_px;
            let base_y = uy * style.arrow_length_px;
            let half_width = style.arrow_length_px * 0.4;
            let (px, py) = (-uy * half_width, ux * half_width);
            document.append(
                connector,
                Element::new("path")
                    .attr("class", "connector-end connector-arrow")
                    .attr("fill", style.connector_stroke)
                    .attr(
                        "d",
                        format!(
                            "M0,0L{},{}L{},{}Z",
                            format_number(base_x + px),
                            format_number(base_y + py),
                            format_number(base_x - px),
                            format_number(base_y - py)
                        ),
                    ),
            )?;
        }
    }
    Ok(())
}
