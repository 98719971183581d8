use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests catch invalid geometry, and it
/// keeps the last frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
