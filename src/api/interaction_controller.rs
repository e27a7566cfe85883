use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverBinding, PointerEvent, TooltipAnchor};
use crate::render::{NodeId, Renderer, SvgDocument};

use super::DotPlotChart;

impl<R: Renderer> DotPlotChart<R> {
    /// Shows the tooltip bound to `node`. Returns `false` when the node has no binding.
    pub fn pointer_enter(&mut self, node: NodeId) -> ChartResult<bool> {
        self.dispatch_pointer(node, PointerEvent::Enter)
    }

    /// Hides the tooltip bound to `node`. Returns `false` when the node has no binding.
    pub fn pointer_leave(&mut self, node: NodeId) -> ChartResult<bool> {
        self.dispatch_pointer(node, PointerEvent::Leave)
    }

    pub fn dispatch_pointer(&mut self, node: NodeId, event: PointerEvent) -> ChartResult<bool> {
        let Some(binding) = self.hover_binding(node)? else {
            trace!(node = node.index(), ?event, "pointer event on unbound node");
            return Ok(false);
        };

        match event {
            PointerEvent::Enter => {
                let anchor = north_anchor(&self.document, node)?;
                let entry = self.entries.get(binding.entry).cloned().ok_or_else(|| {
                    ChartError::InvalidData(format!("missing entry {}", binding.entry))
                })?;
                self.tooltip_mut(binding.kind).show(&entry, anchor);
            }
            PointerEvent::Leave => self.tooltip_mut(binding.kind).hide(),
        }
        Ok(true)
    }

    /// Attached nodes carrying a hover binding, in document order.
    #[must_use]
    pub fn hover_targets(&self) -> Vec<NodeId> {
        self.document.hover_targets(self.document.root())
    }

    fn hover_binding(&self, node: NodeId) -> ChartResult<Option<HoverBinding>> {
        let element = self.document.element(node)?;
        if !self.document.is_attached(node) {
            return Ok(None);
        }
        Ok(element.hover)
    }
}

/// Top-center of a circle in outer-svg coordinates: its center minus the
/// radius, shifted by every ancestor `translate`.
fn north_anchor(document: &SvgDocument, node: NodeId) -> ChartResult<TooltipAnchor> {
    let element = document.element(node)?;
    let numeric = |name: &str| {
        element
            .attributes
            .get(name)
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(0.0)
    };
    let (mut x, mut y) = (numeric("cx"), numeric("cy") - numeric("r"));

    let mut current = document.parent(node);
    while let Some(id) = current {
        if document.element(id)?.tag == "svg" {
            break;
        }
        if let Some((tx, ty)) = document
            .element(id)?
            .attributes
            .get("transform")
            .and_then(|transform| parse_translate(transform))
        {
            x += tx;
            y += ty;
        }
        current = document.parent(id);
    }
    Ok(TooltipAnchor::new(x, y))
}

fn parse_translate(transform: &str) -> Option<(f64, f64)> {
    let inner = transform
        .trim()
        .strip_prefix("translate(")?
        .strip_suffix(')')?;
    let mut parts = inner.split([',', ' ']).filter(|part| !part.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next().map_or(Some(0.0), |part| part.parse().ok())?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::parse_translate;

    #[test]
    fn translate_accepts_comma_and_space_separators() {
        assert_eq!(parse_translate("translate(100,100)"), Some((100.0, 100.0)));
        assert_eq!(parse_translate("translate(0, -15)"), Some((0.0, -15.0)));
        assert_eq!(parse_translate("translate(12)"), Some((12.0, 0.0)));
        assert_eq!(parse_translate("scale(2)"), None);
    }
}
