use tracing::trace;

use crate::core::{Dataset, GridIndex, GridShape};
use crate::error::{ScaleAxis, SurfaceError, SurfaceResult};
use crate::render::{Color, Point3, TriangulatedSurface};

use super::{MissingValuePolicy, SurfaceScales, SurfaceStyle};

/// Colored surface over the (date x tenor) grid.
///
/// Vertices are laid out row-major by tenor (see [`GridShape`]). Every grid
/// cell becomes two triangles, and every triangle carries its own copy of its
/// corners' colors.
pub fn build_surface_mesh(
    dataset: &Dataset,
    scales: &SurfaceScales,
    style: &SurfaceStyle,
    policy: MissingValuePolicy,
) -> SurfaceResult<TriangulatedSurface> {
    let shape = GridShape::new(dataset.len(), dataset.tenor_count());
    if shape.date_count < 2 {
        return Err(SurfaceError::DegenerateDomain {
            axis: ScaleAxis::Time,
            message: format!(
                "a surface needs at least 2 dates, got {}",
                shape.date_count
            ),
        });
    }

    let floor = scales.rate.map(0.0)?;
    let observations = dataset.observations();
    let mut positions = Vec::with_capacity(shape.vertex_count());
    let mut vertex_colors = Vec::with_capacity(shape.vertex_count());
    let mut missing = 0_usize;

    for index in shape.indices() {
        let observation = &observations[index.date_index];
        let x = scales.time.map(observation.date)?;
        let z = scales.tenor.map(index.tenor_index as f64)?;

        match observation.rate(index.tenor_index) {
            Some(rate) => {
                positions.push(Point3::new(x, scales.rate.map(rate)?, z));
                vertex_colors.push(scales.color.color(rate)?);
            }
            None => match policy {
                MissingValuePolicy::Sentinel => {
                    missing += 1;
                    positions.push(Point3::new(x, floor, z));
                    vertex_colors.push(style.missing_color);
                }
                MissingValuePolicy::Reject => {
                    return Err(SurfaceError::MissingValuePropagation {
                        stage: "surface mesh",
                        date_index: Some(index.date_index),
                        tenor_index: Some(index.tenor_index),
                    });
                }
            },
        }
    }

    let mut faces = Vec::with_capacity(shape.face_count());
    for tenor_index in 0..shape.tenor_count.saturating_sub(1) {
        for date_index in 0..shape.date_count - 1 {
            let a = corner(shape, date_index, tenor_index)?;
            let b = corner(shape, date_index, tenor_index + 1)?;
            let c = corner(shape, date_index + 1, tenor_index + 1)?;
            let e = corner(shape, date_index + 1, tenor_index)?;
            faces.push([a, b, e]);
            faces.push([b, c, e]);
        }
    }

    let face_colors = faces
        .iter()
        .map(|face| face_colors(face, &vertex_colors))
        .collect();

    trace!(
        vertices = positions.len(),
        faces = faces.len(),
        missing,
        "built surface mesh"
    );
    Ok(TriangulatedSurface {
        positions,
        vertex_colors,
        faces,
        face_colors,
    })
}

fn corner(shape: GridShape, date_index: usize, tenor_index: usize) -> SurfaceResult<usize> {
    shape
        .vertex_index(GridIndex::new(date_index, tenor_index))
        .ok_or_else(|| {
            SurfaceError::InvalidData(format!(
                "grid corner ({date_index}, {tenor_index}) is outside {shape:?}"
            ))
        })
}

fn face_colors(face: &[usize; 3], vertex_colors: &[Color]) -> [Color; 3] {
    face.map(|vertex| vertex_colors[vertex])
}
