use crate::core::GroupedEntry;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipController;

use super::SvgDocument;

/// Everything a backend needs to draw one chart: the element tree, the grouped
/// data that hover bindings point into, and the tooltip instances.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub document: &'a SvgDocument,
    pub entries: &'a [GroupedEntry],
    pub tooltips: [&'a TooltipController; 2],
}

impl<'a> RenderFrame<'a> {
    #[must_use]
    pub fn new(
        document: &'a SvgDocument,
        entries: &'a [GroupedEntry],
        tooltips: [&'a TooltipController; 2],
    ) -> Self {
        Self {
            document,
            entries,
            tooltips,
        }
    }

    /// Checks that every attached hover binding points at a loaded entry.
    pub fn validate(&self) -> ChartResult<()> {
        for id in self.document.hover_targets(self.document.root()) {
            let Some(binding) = self.document.element(id)?.hover else {
                continue;
            };
            if binding.entry >= self.entries.len() {
                return Err(ChartError::InvalidData(format!(
                    "hover binding on node {} points at missing entry {}",
                    id.index(),
                    binding.entry
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }
}
