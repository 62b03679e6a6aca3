use serde::{Deserialize, Serialize};

use crate::error::SurfaceResult;
use crate::render::{
    GeometryPrimitive, LabelPlacement, LinePrimitive, LineRole, TriangulatedSurface,
};

/// Ordered geometry for one build, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryFrame {
    pub primitives: Vec<GeometryPrimitive>,
}

impl GeometryFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: impl Into<GeometryPrimitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    pub fn extend(&mut self, primitives: impl IntoIterator<Item = GeometryPrimitive>) {
        self.primitives.extend(primitives);
    }

    pub fn validate(&self) -> SurfaceResult<()> {
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(GeometryPrimitive::as_line)
    }

    pub fn lines_with_role(&self, role: LineRole) -> impl Iterator<Item = &LinePrimitive> {
        self.lines().filter(move |line| line.style.role == role)
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelPlacement> {
        self.primitives.iter().filter_map(GeometryPrimitive::as_label)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &TriangulatedSurface> {
        self.primitives
            .iter()
            .filter_map(GeometryPrimitive::as_surface)
    }
}
