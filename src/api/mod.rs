mod chart_config;
mod data_loader;
mod interaction_controller;
mod render_pipeline;

pub use chart_config::{ChartConfig, DEFAULT_CONTAINER_ID, DEFAULT_SUBTITLE, DEFAULT_TITLE};
pub use data_loader::{load_records, load_records_from_path};
pub use render_pipeline::LoadOutcome;

use tracing::debug;

use crate::core::{GroupedEntry, LinearScale, PlotArea, PointScale};
use crate::error::ChartResult;
use crate::interaction::{TooltipController, TooltipKind};
use crate::render::{Element, NodeId, RenderFrame, Renderer, SvgDocument, format_number};

/// One chart session: the owned document, the scales, the loaded groups and
/// the two tooltip instances.
///
/// The outer `<svg>` and the translated plot `<g>` exist as soon as the chart
/// is constructed; everything else is appended by [`DotPlotChart::ready`].
pub struct DotPlotChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    plot: PlotArea,
    x_scale: LinearScale,
    y_scale: PointScale,
    document: SvgDocument,
    svg: NodeId,
    plot_group: NodeId,
    entries: Vec<GroupedEntry>,
    male_tooltip: TooltipController,
    female_tooltip: TooltipController,
    diagnostics: Vec<String>,
}

impl<R: Renderer> DotPlotChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot = config.plot_area()?;

        let [domain_start, domain_end] = config.x_domain;
        let x_scale = LinearScale::new(domain_start, domain_end)?.with_range(0.0, plot.width)?;
        let y_scale = PointScale::new(plot.height, 0.0)?.with_padding(config.row_padding)?;

        let mut document = SvgDocument::new(&config.container_id);
        let root = document.root();
        let svg = document.append(
            root,
            Element::new("svg")
                .attr("height", format_number(config.outer_height))
                .attr("width", format_number(config.outer_width)),
        )?;
        let plot_group = document.append(
            svg,
            Element::new("g").attr(
                "transform",
                format!(
                    "translate({},{})",
                    format_number(config.margins.left),
                    format_number(config.margins.top)
                ),
            ),
        )?;

        debug!(
            plot_width = plot.width,
            plot_height = plot.height,
            container = %config.container_id,
            "chart mounted"
        );

        Ok(Self {
            renderer,
            male_tooltip: TooltipController::new(TooltipKind::Male, config.tooltip_offset),
            female_tooltip: TooltipController::new(TooltipKind::Female, config.tooltip_offset),
            config,
            plot,
            x_scale,
            y_scale,
            document,
            svg,
            plot_group,
            entries: Vec::new(),
            diagnostics: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> &PointScale {
        &self.y_scale
    }

    #[must_use]
    pub fn document(&self) -> &SvgDocument {
        &self.document
    }

    /// The outer `<svg>` element.
    #[must_use]
    pub fn svg_node(&self) -> NodeId {
        self.svg
    }

    /// The `<g>` translated by the margins that holds the plot.
    #[must_use]
    pub fn plot_group(&self) -> NodeId {
        self.plot_group
    }

    /// Every grouped entry drawn so far, across all `ready` calls.
    #[must_use]
    pub fn entries(&self) -> &[GroupedEntry] {
        &self.entries
    }

    #[must_use]
    pub fn tooltip(&self, kind: TooltipKind) -> &TooltipController {
        match kind {
            TooltipKind::Male => &self.male_tooltip,
            TooltipKind::Female => &self.female_tooltip,
        }
    }

    fn tooltip_mut(&mut self, kind: TooltipKind) -> &mut TooltipController {
        match kind {
            TooltipKind::Male => &mut self.male_tooltip,
            TooltipKind::Female => &mut self.female_tooltip,
        }
    }

    /// Messages recorded by the load-failure handler.
    #[must_use]
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Hands the current document to the backend.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = RenderFrame::new(
            &self.document,
            &self.entries,
            [&self.female_tooltip, &self.male_tooltip],
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
