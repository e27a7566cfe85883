use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates the frame so tests catch dangling hover bindings.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_element_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_element_count = frame.document.element_count();
        Ok(())
    }
}
