use crate::core::{LinearScale, PointScale};
use crate::error::ChartResult;

use super::{Element, NodeId, SvgDocument, format_number};

const CRISP_OFFSET: f64 = 0.5;
const DEFAULT_TICK_SIZE: f64 = 6.0;
const DEFAULT_TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

impl AxisOrient {
    fn direction(self) -> f64 {
        match self {
            Self::Bottom => 1.0,
            Self::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Axis generator that fills an existing `<g>` with a domain path and ticks.
///
/// A negative tick size draws tick lines across the plot (gridlines).
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    orient: AxisOrient,
    range: (f64, f64),
    ticks: Vec<AxisTick>,
    tick_size_inner: f64,
    tick_size_outer: f64,
    tick_padding: f64,
}

impl Axis {
    #[must_use]
    pub fn bottom(scale: LinearScale, tick_count: usize) -> Self {
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| AxisTick {
                position: scale.map(value),
                label: scale.tick_format(tick_count, value),
            })
            .collect();
        Self::with_ticks(AxisOrient::Bottom, scale.range(), ticks)
    }

    #[must_use]
    pub fn left(scale: &PointScale) -> Self {
        let offset = (scale.bandwidth() - CRISP_OFFSET * 2.0).max(0.0) / 2.0;
        let ticks = scale
            .domain()
            .filter_map(|name| {
                scale.map(name).map(|position| AxisTick {
                    position: position + offset,
                    label: name.to_owned(),
                })
            })
            .collect();
        Self::with_ticks(AxisOrient::Left, scale.range(), ticks)
    }

    fn with_ticks(orient: AxisOrient, range: (f64, f64), ticks: Vec<AxisTick>) -> Self {
        Self {
            orient,
            range,
            ticks,
            tick_size_inner: DEFAULT_TICK_SIZE,
            tick_size_outer: DEFAULT_TICK_SIZE,
            tick_padding: DEFAULT_TICK_PADDING,
        }
    }

    /// Sets inner and outer tick size together.
    #[must_use]
    pub fn with_tick_size(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    #[must_use]
    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    #[must_use]
    pub fn orient(&self) -> AxisOrient {
        self.orient
    }

    /// Draws into `group`: the domain path first, then one `g.tick` per tick.
    pub fn draw(&self, document: &mut SvgDocument, group: NodeId) -> ChartResult<()> {
        let k = self.orient.direction();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let range0 = self.range.0 + CRISP_OFFSET;
        let range1 = self.range.1 + CRISP_OFFSET;
        let outer = format_number(k * self.tick_size_outer);

        let path = match self.orient {
            AxisOrient::Bottom => format!(
                "M{},{outer}V0.5H{}V{outer}",
                format_number(range0),
                format_number(range1)
            ),
            AxisOrient::Left => format!(
                "M{outer},{}H0.5V{}H{outer}",
                format_number(range0),
                format_number(range1)
            ),
        };
        document.append(
            group,
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", path),
        )?;

        let (line_attr, text_attr, dy) = match self.orient {
            AxisOrient::Bottom => ("y2", "y", "0.71em"),
            AxisOrient::Left => ("x2", "x", "0.32em"),
        };
        for tick in &self.ticks {
            let position = format_number(tick.position + CRISP_OFFSET);
            let transform = match self.orient {
                AxisOrient::Bottom => format!("translate({position},0)"),
                AxisOrient::Left => format!("translate(0,{position})"),
            };
            let tick_group = document.append(
                group,
                Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", "1")
                    .attr("transform", transform),
            )?;
            document.append(
                tick_group,
                Element::new("line")
                    .attr("stroke", "currentColor")
                    .attr(line_attr, format_number(k * self.tick_size_inner)),
            )?;
            document.append(
                tick_group,
                Element::new("text")
                    .attr("fill", "currentColor")
                    .attr(text_attr, format_number(k * spacing))
                    .attr("dy", dy)
                    .text(tick.label.clone()),
            )?;
        }

        let anchor = match self.orient {
            AxisOrient::Bottom => "middle",
            AxisOrient::Left => "end",
        };
        for (name, value) in [
            ("fill", "none"),
            ("font-size", "10"),
            ("font-family", "sans-serif"),
            ("text-anchor", anchor),
        ] {
            document.set_attr(group, name, value)?;
        }
        Ok(())
    }
}
