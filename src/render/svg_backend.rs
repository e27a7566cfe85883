use std::fmt::Write as _;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipController;
use crate::render::{NodeId, RenderFrame, Renderer, SvgDocument, format_number};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const CONTAINER_PLACEHOLDER: &str = "__CONTAINER__";

const TOOLTIP_STYLE: &str = "\
#__CONTAINER__ { position: relative; }
.d3-tip {
  line-height: 1;
  padding: 6px 8px;
  background: rgba(0, 0, 0, 0.8);
  color: #fff;
  border-radius: 2px;
  font: 12px sans-serif;
  transform: translate(-50%, -100%);
}
";

// Mirrors TooltipController::show/hide for the static page.
const TOOLTIP_SCRIPT: &str = "\
(function () {
  var container = document.getElementById('__CONTAINER__');
  container.querySelectorAll('[data-tip]').forEach(function (node) {
    var tip = document.getElementById('tip-' + node.getAttribute('data-tip'));
    node.addEventListener('mouseover', function () {
      var box = node.getBoundingClientRect();
      var origin = container.getBoundingClientRect();
      var offset = tip.getAttribute('data-offset').split(',').map(Number);
      tip.textContent = node.getAttribute('data-tip-text');
      tip.style.left = (box.left + box.width / 2 - origin.left + offset[1]) + 'px';
      tip.style.top = (box.top - origin.top + offset[0]) + 'px';
      tip.style.opacity = 1;
    });
    node.addEventListener('mouseout', function () {
      tip.style.opacity = 0;
    });
  });
})();
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SvgOutputMode {
    /// Bare `<svg>` document.
    #[default]
    Svg,
    /// Standalone HTML page with the host container, tooltips and styles.
    HtmlPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub elements_written: usize,
    pub hover_targets: usize,
}

/// Serializes a frame to SVG or HTML text.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    mode: SvgOutputMode,
    page_title: String,
    output: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new(mode: SvgOutputMode) -> Self {
        Self {
            mode,
            page_title: "Uninsured adults by state".to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    #[must_use]
    pub fn mode(&self) -> SvgOutputMode {
        self.mode
    }

    /// Text produced by the most recent render.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()> {
        frame.validate()?;
        let mut writer = MarkupWriter::new(frame);
        match self.mode {
            SvgOutputMode::Svg => {
                let svg = frame.document.select_tag("svg").ok_or_else(|| {
                    ChartError::InvalidData("document has no svg element".to_owned())
                })?;
                writer.write_node(svg, true)?;
            }
            SvgOutputMode::HtmlPage => writer.write_page(&self.page_title)?,
        }
        self.last_stats = writer.stats;
        self.output = writer.out;
        debug!(
            bytes = self.output.len(),
            elements = self.last_stats.elements_written,
            "serialized chart"
        );
        Ok(())
    }
}

struct MarkupWriter<'a> {
    frame: &'a RenderFrame<'a>,
    out: String,
    stats: SvgRenderStats,
}

impl<'a> MarkupWriter<'a> {
    fn new(frame: &'a RenderFrame<'a>) -> Self {
        Self {
            frame,
            out: String::new(),
            stats: SvgRenderStats::default(),
        }
    }

    fn document(&self) -> &'a SvgDocument {
        self.frame.document
    }

    fn write_page(&mut self, title: &str) -> ChartResult<()> {
        self.out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        self.push_fmt(format_args!("<title>{}</title>\n", escape_text(title)))?;
        let root = self.document().root();
        let container_id = self.document().container_id();
        self.push_fmt(format_args!(
            "<style>\n{}</style>\n",
            TOOLTIP_STYLE.replace(CONTAINER_PLACEHOLDER, container_id)
        ))?;
        self.out.push_str("</head>\n<body>\n");

        let container = self.document().element(root)?;
        self.out.push('<');
        self.out.push_str(&container.tag);
        for (name, value) in &container.attributes {
            self.push_fmt(format_args!(" {name}=\"{}\"", escape_attr(value)))?;
        }
        self.out.push('>');
        for child in self.document().children(root) {
            let is_svg = self.document().element(*child)?.tag == "svg";
            self.write_node(*child, is_svg)?;
        }
        for tooltip in self.frame.tooltips {
            self.write_tooltip(tooltip)?;
        }
        self.push_fmt(format_args!("</{}>\n", container.tag))?;

        self.push_fmt(format_args!(
            "<script>\n{}</script>\n",
            TOOLTIP_SCRIPT.replace(CONTAINER_PLACEHOLDER, container_id)
        ))?;
        self.out.push_str("</body>\n</html>\n");
        Ok(())
    }

    fn write_tooltip(&mut self, tooltip: &TooltipController) -> ChartResult<()> {
        let position = tooltip.position();
        let offset = tooltip.offset();
        let opacity = if tooltip.is_visible() { "1" } else { "0" };
        self.push_fmt(format_args!(
            "<div id=\"tip-{}\" class=\"{}\" data-offset=\"{},{}\" \
             style=\"position: absolute; left: {}px; top: {}px; opacity: {opacity}; \
             pointer-events: none; box-sizing: border-box;\">{}</div>",
            tooltip.kind().as_str(),
            escape_attr(tooltip.class_name()),
            format_number(offset[0]),
            format_number(offset[1]),
            format_number(position.x),
            format_number(position.y),
            escape_text(tooltip.text()),
        ))
    }

    fn write_node(&mut self, id: NodeId, with_namespace: bool) -> ChartResult<()> {
        let element = self.document().element(id)?;
        self.stats.elements_written += 1;

        self.out.push('<');
        self.out.push_str(&element.tag);
        if with_namespace {
            self.push_fmt(format_args!(" xmlns=\"{SVG_NAMESPACE}\""))?;
        }
        for (name, value) in &element.attributes {
            self.push_fmt(format_args!(" {name}=\"{}\"", escape_attr(value)))?;
        }
        if !element.style.is_empty() {
            let style = element
                .style
                .iter()
                .map(|(name, value)| format!("{name}: {value};"))
                .collect::<Vec<_>>()
                .join(" ");
            self.push_fmt(format_args!(" style=\"{}\"", escape_attr(&style)))?;
        }
        if let Some(binding) = element.hover {
            let entry = self.frame.entries.get(binding.entry).ok_or_else(|| {
                ChartError::InvalidData(format!("missing entry {}", binding.entry))
            })?;
            self.stats.hover_targets += 1;
            self.push_fmt(format_args!(
                " data-tip=\"{}\" data-tip-text=\"{}\"",
                binding.kind.as_str(),
                escape_attr(&binding.kind.text_for(entry))
            ))?;
        }
        self.out.push('>');

        if let Some(text) = &element.text {
            self.out.push_str(&escape_text(text));
        }
        for child in self.document().children(id) {
            self.write_node(*child, false)?;
        }

        self.push_fmt(format_args!("</{}>", element.tag))
    }

    fn push_fmt(&mut self, args: std::fmt::Arguments<'_>) -> ChartResult<()> {
        self.out
            .write_fmt(args)
            .map_err(|err| ChartError::InvalidData(format!("failed to format markup: {err}")))
    }
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_covers_markup_characters() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }
}
