use crate::core::Dataset;
use crate::error::SurfaceResult;
use crate::render::{LinePrimitive, LineRole, Point3};

use super::{SurfaceScales, SurfaceStyle};

/// One polyline per tenor tracing its rate through time.
///
/// Dates where the tenor is missing are skipped, so a line may end up with
/// fewer than two points. It is still emitted to keep one line per tenor.
pub fn build_maturity_lines(
    dataset: &Dataset,
    scales: &SurfaceScales,
    style: &SurfaceStyle,
) -> SurfaceResult<Vec<LinePrimitive>> {
    let line_style = style.line_style(LineRole::MaturityLine);
    (0..dataset.tenor_count())
        .map(|tenor_index| -> SurfaceResult<LinePrimitive> {
            let z = scales.tenor.map(tenor_index as f64)?;
            let points = dataset
                .observations()
                .iter()
                .filter_map(|observation| {
                    observation
                        .rate(tenor_index)
                        .map(|rate| (observation.date, rate))
                })
                .map(|(date, rate)| -> SurfaceResult<Point3> {
                    Ok(Point3::new(scales.time.map(date)?, scales.rate.map(rate)?, z))
                })
                .collect::<SurfaceResult<Vec<_>>>()?;
            Ok(LinePrimitive::polyline(points, line_style))
        })
        .collect()
}
