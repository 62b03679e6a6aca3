use crate::core::TenorSet;
use crate::error::SurfaceResult;
use crate::render::{GeometryPrimitive, LabelPlacement, LabelRole, LinePrimitive, LineRole, Point3};

use super::axis_label_format::{format_rate_tick, format_tenor_tick, format_time_ticks};
use super::{AxisTickCounts, SurfaceScales, SurfaceStyle};

pub const TIME_AXIS_TITLE: &str = "Date";
pub const TENOR_AXIS_TITLE: &str = "Maturity";
pub const RATE_AXIS_TITLE: &str = "Interest Rate";

/// Gridlines, tick labels and titles for all three axes, in draw order:
/// time, tenor, rate.
pub fn build_grids(
    scales: &SurfaceScales,
    tenors: &TenorSet,
    style: &SurfaceStyle,
    ticks: AxisTickCounts,
) -> SurfaceResult<Vec<GeometryPrimitive>> {
    let mut primitives = build_time_grid(scales, style, ticks.time)?;
    primitives.extend(build_tenor_grid(scales, tenors, style, ticks.tenor)?);
    primitives.extend(build_rate_grid(scales, style, ticks.rate)?);
    Ok(primitives)
}

/// Lines across the floor at each date tick, labelled in front of the time axis.
pub fn build_time_grid(
    scales: &SurfaceScales,
    style: &SurfaceStyle,
    tick_count: usize,
) -> SurfaceResult<Vec<GeometryPrimitive>> {
    let (_, y_lo, z_lo) = scales.lows();
    let (_, _, z_hi) = scales.highs();
    let line_style = style.line_style(LineRole::Grid);

    let ticks = scales.time.ticks(tick_count);
    let texts = format_time_ticks(&ticks);
    let mut primitives = Vec::with_capacity(ticks.len() * 2 + 1);
    for (tick, text) in ticks.iter().zip(texts) {
        let x = scales.time.map(*tick)?;
        primitives.push(
            LinePrimitive::segment(
                Point3::new(x, y_lo, z_lo),
                Point3::new(x, y_lo, z_hi),
                line_style,
            )
            .into(),
        );
        primitives.push(
            LabelPlacement::new(
                text,
                Point3::new(x, y_lo - 1.0, z_lo - 2.0),
                LabelRole::TimeTick,
            )
            .into(),
        );
    }

    primitives.push(
        LabelPlacement::new(
            TIME_AXIS_TITLE,
            Point3::new(
                scales.time.linear().range_mean(),
                y_lo - 3.0,
                z_lo - 4.0,
            ),
            LabelRole::AxisTitle,
        )
        .into(),
    );
    Ok(primitives)
}

/// Lines across the floor at each tenor tick. Only integer ticks get a label.
pub fn build_tenor_grid(
    scales: &SurfaceScales,
    tenors: &TenorSet,
    style: &SurfaceStyle,
    tick_count: usize,
) -> SurfaceResult<Vec<GeometryPrimitive>> {
    let (x_lo, y_lo, _) = scales.lows();
    let (x_hi, _, _) = scales.highs();
    let line_style = style.line_style(LineRole::Grid);

    let ticks = scales.tenor.ticks(tick_count);
    let mut primitives = Vec::with_capacity(ticks.len() * 2 + 1);
    for tick in ticks {
        let z = scales.tenor.map(tick)?;
        primitives.push(
            LinePrimitive::segment(
                Point3::new(x_lo, y_lo, z),
                Point3::new(x_hi, y_lo, z),
                line_style,
            )
            .into(),
        );
        if let Some(text) = format_tenor_tick(tenors, tick) {
            primitives.push(
                LabelPlacement::new(
                    text,
                    Point3::new(x_hi + 2.0, y_lo - 1.0, z),
                    LabelRole::TenorTick,
                )
                .into(),
            );
        }
    }

    primitives.push(
        LabelPlacement::new(
            TENOR_AXIS_TITLE,
            Point3::new(x_hi + 6.0, y_lo - 1.0, scales.tenor.range_mean()),
            LabelRole::AxisTitle,
        )
        .into(),
    );
    Ok(primitives)
}

/// Lines up the back wall at each rate tick, labelled beside the rate axis.
pub fn build_rate_grid(
    scales: &SurfaceScales,
    style: &SurfaceStyle,
    tick_count: usize,
) -> SurfaceResult<Vec<GeometryPrimitive>> {
    let (x_lo, _, z_lo) = scales.lows();
    let (x_hi, _, _) = scales.highs();
    let line_style = style.line_style(LineRole::Grid);

    let ticks = scales.rate.ticks(tick_count);
    let mut primitives = Vec::with_capacity(ticks.len() * 2 + 1);
    for tick in ticks {
        let y = scales.rate.map(tick)?;
        primitives.push(
            LinePrimitive::segment(
                Point3::new(x_lo, y, z_lo),
                Point3::new(x_hi, y, z_lo),
                line_style,
            )
            .into(),
        );
        if let Some(text) = format_rate_tick(tick) {
            primitives.push(
                LabelPlacement::new(
                    text,
                    Point3::new(x_hi + 2.0, y, z_lo - 1.0),
                    LabelRole::RateTick,
                )
                .into(),
            );
        }
    }

    primitives.push(
        LabelPlacement::new(
            RATE_AXIS_TITLE,
            Point3::new(x_hi + 7.0, scales.rate.range_mean(), z_lo - 1.0),
            LabelRole::AxisTitle,
        )
        .into(),
    );
    Ok(primitives)
}
