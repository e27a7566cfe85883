use std::io::Read;
use std::path::Path;

use tracing::{debug, error};

use crate::core::{GroupedEntry, Record, group_by_state};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{AnnotationStyle, draw_annotations};
use crate::interaction::{HoverBinding, TooltipKind};
use crate::render::{
    Axis, CirclePrimitive, Element, LinePrimitive, Renderer, TextPrimitive, format_number,
};

use super::{DotPlotChart, load_records, load_records_from_path};

/// Result of one load-then-draw run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { states: usize },
    /// The source could not be read or parsed; nothing was drawn.
    Failed,
}

impl<R: Renderer> DotPlotChart<R> {
    /// Loads `path` and draws the chart. Load errors are logged and recorded in
    /// [`DotPlotChart::diagnostics`] instead of being returned.
    pub fn run_path(&mut self, path: impl AsRef<Path>) -> ChartResult<LoadOutcome> {
        match load_records_from_path(path) {
            Ok(records) => self.continue_with(records),
            Err(err) => Ok(self.report_load_failure(&err)),
        }
    }

    /// Same as [`DotPlotChart::run_path`] for an in-memory or streamed source.
    pub fn run_reader<S: Read>(&mut self, source: S) -> ChartResult<LoadOutcome> {
        match load_records(source) {
            Ok(records) => self.continue_with(records),
            Err(err) => Ok(self.report_load_failure(&err)),
        }
    }

    fn continue_with(&mut self, records: Vec<Record>) -> ChartResult<LoadOutcome> {
        let states = self.ready(records)?;
        Ok(LoadOutcome::Rendered { states })
    }

    fn report_load_failure(&mut self, err: &ChartError) -> LoadOutcome {
        error!(error = %err, "failed to load chart data");
        self.diagnostics.push(err.to_string());
        LoadOutcome::Failed
    }

    /// Draws `records` into the document and returns the number of states drawn.
    ///
    /// Append-only: calling this again draws a second copy of every element.
    pub fn ready(&mut self, records: Vec<Record>) -> ChartResult<usize> {
        let grouped = group_by_state(&records);
        debug!(
            records = records.len(),
            groups = grouped.len(),
            "nested data read in"
        );

        self.y_scale = self
            .y_scale
            .clone()
            .with_domain(grouped.iter().map(|entry| entry.key.clone()));

        let base = self.entries.len();
        for (offset, entry) in grouped.iter().enumerate() {
            self.draw_state(base + offset, entry)?;
        }
        let states = grouped.len();
        self.entries.extend(grouped);

        self.draw_annotation_layer()?;
        self.draw_axes()?;
        self.draw_titles()?;
        Ok(states)
    }

    fn draw_state(&mut self, index: usize, entry: &GroupedEntry) -> ChartResult<()> {
        let row_y = self.y_scale.map(&entry.key).ok_or_else(|| {
            ChartError::InvalidData(format!("state `{}` has no row position", entry.key))
        })?;
        let record = entry.first();
        let female_x = self.x_scale.map(record.female);
        let male_x = self.x_scale.map(record.male);

        let line = LinePrimitive::new(
            female_x,
            0.0,
            male_x,
            0.0,
            self.config.connector_stroke.clone(),
        );
        let female_dot = CirclePrimitive::new(
            female_x,
            0.0,
            self.config.dot_radius,
            self.config.female_fill.clone(),
        );
        let male_dot = CirclePrimitive::new(
            male_x,
            0.0,
            self.config.dot_radius,
            self.config.male_fill.clone(),
        );
        line.validate()?;
        female_dot.validate()?;
        male_dot.validate()?;

        let group = self.document.append(
            self.plot_group,
            Element::new("g").attr("transform", format!("translate(0,{})", format_number(row_y))),
        )?;
        self.document.append(group, line.to_element())?;
        self.document.append(
            group,
            female_dot
                .to_element()
                .on_hover(HoverBinding::new(TooltipKind::Female, index)),
        )?;
        self.document.append(
            group,
            male_dot
                .to_element()
                .on_hover(HoverBinding::new(TooltipKind::Male, index)),
        )?;
        Ok(())
    }

    fn draw_annotation_layer(&mut self) -> ChartResult<()> {
        // Annotations live on the outer svg, outside the margin translation.
        let svg = self
            .document
            .select_tag("svg")
            .ok_or_else(|| ChartError::InvalidData("document has no svg element".to_owned()))?;
        let layer = self.document.append(
            svg,
            Element::new("g").style("font-size", self.config.annotation_font_size.clone()),
        )?;
        draw_annotations(
            &mut self.document,
            layer,
            &self.config.annotations,
            AnnotationStyle::default(),
        )?;
        Ok(())
    }

    fn draw_axes(&mut self) -> ChartResult<()> {
        let plot_group = self.plot_group;
        let x_axis = Axis::bottom(self.x_scale, self.config.x_tick_count)
            .with_tick_size(-self.plot.height);

        let bottom = self.document.append(
            plot_group,
            Element::new("g").attr("class", "axis x-axis").attr(
                "transform",
                format!("translate(0,{})", format_number(self.plot.height)),
            ),
        )?;
        x_axis.draw(&mut self.document, bottom)?;

        let top = self.document.append(
            plot_group,
            Element::new("g").attr("class", "axis x-axis-2").attr(
                "transform",
                format!("translate(0, {})", format_number(self.config.top_axis_offset)),
            ),
        )?;
        x_axis.draw(&mut self.document, top)?;

        for line in self.document.select_class_tag(plot_group, "x-axis", "line") {
            self.document
                .set_attr(line, "stroke-dasharray", self.config.gridline_dasharray.clone())?;
            self.document
                .set_attr(line, "fill", self.config.gridline_fill.as_str())?;
        }
        self.remove_matching(&[("x-axis", "path")])?;
        if let Some(first) = self.document.select_class(plot_group, "x-axis").first() {
            self.document.lower(*first)?;
        }

        let y_axis = Axis::left(&self.y_scale);
        let left = self
            .document
            .append(plot_group, Element::new("g").attr("class", "axis y-axis"))?;
        y_axis.draw(&mut self.document, left)?;
        self.document.set_attr(
            left,
            "font-size",
            format_number(self.config.category_font_size),
        )?;

        self.remove_matching(&[
            ("y-axis", "path"),
            ("y-axis", "line"),
            ("x-axis-2", "path"),
            ("x-axis-2", "line"),
        ])?;
        debug!(
            x_ticks = x_axis.ticks().len(),
            y_ticks = y_axis.ticks().len(),
            "axes drawn"
        );
        Ok(())
    }

    fn remove_matching(&mut self, selectors: &[(&str, &str)]) -> ChartResult<()> {
        for (class_name, tag) in selectors {
            for id in self
                .document
                .select_class_tag(self.plot_group, class_name, tag)
            {
                self.document.remove(id)?;
            }
        }
        Ok(())
    }

    fn draw_titles(&mut self) -> ChartResult<()> {
        for text in [self.config.title.clone(), self.config.subtitle.clone()] {
            self.append_text(&text)?;
        }
        Ok(())
    }

    fn append_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.document.append(self.plot_group, text.to_element())?;
        Ok(())
    }
}
