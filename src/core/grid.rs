use serde::{Deserialize, Serialize};

/// Cell of the (date x tenor) surface grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    pub date_index: usize,
    pub tenor_index: usize,
}

impl GridIndex {
    #[must_use]
    pub const fn new(date_index: usize, tenor_index: usize) -> Self {
        Self {
            date_index,
            tenor_index,
        }
    }
}

/// Row-major layout of the surface vertices.
///
/// Each tenor is one row of `date_count` vertices, so vertex
/// `tenor_index * date_count + date_index` belongs to that date and tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub date_count: usize,
    pub tenor_count: usize,
}

impl GridShape {
    #[must_use]
    pub const fn new(date_count: usize, tenor_count: usize) -> Self {
        Self {
            date_count,
            tenor_count,
        }
    }

    #[must_use]
    pub const fn vertex_count(self) -> usize {
        self.date_count * self.tenor_count
    }

    /// Two triangles per grid cell.
    #[must_use]
    pub const fn face_count(self) -> usize {
        2 * self.date_count.saturating_sub(1) * self.tenor_count.saturating_sub(1)
    }

    #[must_use]
    pub fn contains(self, index: GridIndex) -> bool {
        index.date_index < self.date_count && index.tenor_index < self.tenor_count
    }

    /// Flat vertex index, or `None` outside the grid.
    #[must_use]
    pub fn vertex_index(self, index: GridIndex) -> Option<usize> {
        self.contains(index)
            .then(|| index.tenor_index * self.date_count + index.date_index)
    }

    /// Inverse of [`GridShape::vertex_index`].
    #[must_use]
    pub fn grid_index(self, vertex: usize) -> Option<GridIndex> {
        if vertex >= self.vertex_count() {
            return None;
        }
        Some(GridIndex::new(
            vertex % self.date_count,
            vertex / self.date_count,
        ))
    }

    /// Row-major iteration: all dates of tenor 0, then tenor 1, ...
    pub fn indices(self) -> impl Iterator<Item = GridIndex> {
        (0..self.tenor_count).flat_map(move |tenor_index| {
            (0..self.date_count).map(move |date_index| GridIndex::new(date_index, tenor_index))
        })
    }
}
