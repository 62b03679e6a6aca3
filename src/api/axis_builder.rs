use crate::render::{LinePrimitive, LineRole, Point3};

use super::{SurfaceScales, SurfaceStyle};

/// The three frame axes, meeting at the `(x max, y min, z min)` corner.
///
/// Every axis is pushed `axis_inset` outward from the grid planes so the
/// frame never coincides with a gridline.
#[must_use]
pub fn build_axes(scales: &SurfaceScales, style: &SurfaceStyle) -> [LinePrimitive; 3] {
    let (x_lo, y_lo, z_lo) = scales.lows();
    let (x_hi, y_hi, z_hi) = scales.highs();
    let inset = style.axis_inset;
    let line_style = style.line_style(LineRole::Axis);

    let corner_x = x_hi + inset;
    let corner_y = y_lo - inset;
    let corner_z = z_lo - inset;

    [
        LinePrimitive::segment(
            Point3::new(x_lo, corner_y, corner_z),
            Point3::new(x_hi, corner_y, corner_z),
            line_style,
        ),
        LinePrimitive::segment(
            Point3::new(corner_x, corner_y, z_lo),
            Point3::new(corner_x, corner_y, z_hi),
            line_style,
        ),
        LinePrimitive::segment(
            Point3::new(corner_x, y_lo, corner_z),
            Point3::new(corner_x, y_hi, corner_z),
            line_style,
        ),
    ]
}
