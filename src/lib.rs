//! yield-surface: yield-curve history to 3D surface geometry.
//!
//! Raw CSV rows become typed observations, observations become scales, and
//! scales drive the builders that emit axes, gridlines, labels, a colored
//! triangulated mesh and one line per maturity. Drawing the geometry is left
//! to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod render;
pub mod telemetry;

pub use api::{BuildResult, SurfaceConfig, VisualizationAssembler};
pub use error::{SurfaceError, SurfaceResult};
