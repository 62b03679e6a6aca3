use crate::error::SurfaceResult;
use crate::render::{GeometryFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// it reaches a scene graph.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_label_count: usize,
    pub last_vertex_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &GeometryFrame) -> SurfaceResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines().count();
        self.last_label_count = frame.labels().count();
        self.last_vertex_count = frame
            .surfaces()
            .map(|surface| surface.vertex_count())
            .sum();
        Ok(())
    }
}
