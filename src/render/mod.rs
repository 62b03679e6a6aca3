mod frame;
mod null_renderer;
mod primitives;

pub use frame::GeometryFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, GeometryPrimitive, LabelPlacement, LabelRole, LinePrimitive, LineRole, LineStyle,
    Point3, TriangulatedSurface,
};

use crate::error::SurfaceResult;

/// Contract implemented by any scene-graph adapter.
///
/// Adapters receive a fully materialized, deterministic `GeometryFrame` and
/// translate each primitive into their native objects; a new frame replaces
/// the previous scene wholesale.
pub trait Renderer {
    fn render(&mut self, frame: &GeometryFrame) -> SurfaceResult<()>;
}
