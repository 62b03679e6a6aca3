mod assembler;
pub mod axis_builder;
pub mod axis_label_format;
mod build_result;
pub mod grid_builder;
pub mod maturity_line_builder;
mod profile;
mod render_style;
mod scale_builder;
mod surface_config;
pub mod surface_mesh_builder;

pub use assembler::VisualizationAssembler;
pub use axis_builder::build_axes;
pub use axis_label_format::{
    TimeLabelPattern, format_rate_tick, format_tenor_tick, format_time_ticks,
};
pub use build_result::{
    BUILD_SUMMARY_JSON_SCHEMA_V1, BuildResult, BuildSummary, BuildSummaryJsonContractV1,
};
pub use grid_builder::{build_grids, build_rate_grid, build_tenor_grid, build_time_grid};
pub use maturity_line_builder::build_maturity_lines;
pub use profile::{AxisTickCounts, SurfaceProfile};
pub use render_style::SurfaceStyle;
pub use scale_builder::SurfaceScales;
pub use surface_config::{ChartDimensions, H15_PREAMBLE_ROWS, MissingValuePolicy, SurfaceConfig};
pub use surface_mesh_builder::build_surface_mesh;
