use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{SurfaceError, SurfaceResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_u32(packed: u32) -> Self {
        Self::rgb(
            ((packed >> 16) & 0xff) as f64 / 255.0,
            ((packed >> 8) & 0xff) as f64 / 255.0,
            (packed & 0xff) as f64 / 255.0,
        )
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> SurfaceResult<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(SurfaceError::InvalidData(format!(
                "color `{text}` must have six hex digits"
            )));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_rgb_u32)
            .map_err(|_| SurfaceError::InvalidData(format!("color `{text}` is not valid hex")))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    /// Per-channel interpolation; `t` is clamped to `0..=1` and both ends are exact.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: f64, to: f64| from * (1.0 - t) + to * t;
        Self::rgba(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> SurfaceResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SurfaceError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Position in scene units: `x` time, `y` rate, `z` maturity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    fn validate(self, what: &str) -> SurfaceResult<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(SurfaceError::InvalidData(format!(
                "{what} coordinates must be finite"
            )))
        }
    }
}

/// What a line is drawn for; renderers pick materials from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRole {
    Axis,
    Grid,
    MaturityLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub role: LineRole,
    pub color: Color,
    pub width: f64,
}

impl LineStyle {
    #[must_use]
    pub const fn new(role: LineRole, color: Color, width: f64) -> Self {
        Self { role, color, width }
    }

    pub fn validate(self) -> SurfaceResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SurfaceError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Polyline through `points`. Axis and grid segments have exactly two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub points: SmallVec<[Point3; 2]>,
    pub style: LineStyle,
}

impl LinePrimitive {
    #[must_use]
    pub fn segment(from: Point3, to: Point3, style: LineStyle) -> Self {
        let mut points = SmallVec::new();
        points.push(from);
        points.push(to);
        Self { points, style }
    }

    #[must_use]
    pub fn polyline(points: impl IntoIterator<Item = Point3>, style: LineStyle) -> Self {
        Self {
            points: points.into_iter().collect(),
            style,
        }
    }

    pub fn validate(&self) -> SurfaceResult<()> {
        for point in &self.points {
            point.validate("line")?;
        }
        self.style.validate()
    }
}

/// What a label annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelRole {
    TimeTick,
    TenorTick,
    RateTick,
    AxisTitle,
}

/// Text anchored at a scene position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub text: String,
    pub position: Point3,
    pub role: LabelRole,
}

impl LabelPlacement {
    #[must_use]
    pub fn new(text: impl Into<String>, position: Point3, role: LabelRole) -> Self {
        Self {
            text: text.into(),
            position,
            role,
        }
    }

    pub fn validate(&self) -> SurfaceResult<()> {
        if self.text.is_empty() {
            return Err(SurfaceError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        self.position.validate("label")
    }
}

/// Indexed triangle mesh with a vertex-color slot per face corner.
///
/// `face_colors[i]` holds the colors of `faces[i]`'s three corners, copied
/// from `vertex_colors`, so renderers can color faces without shared
/// vertex buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangulatedSurface {
    pub positions: Vec<Point3>,
    pub vertex_colors: Vec<Color>,
    pub faces: Vec<[usize; 3]>,
    pub face_colors: Vec<[Color; 3]>,
}

impl TriangulatedSurface {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn validate(&self) -> SurfaceResult<()> {
        if self.vertex_colors.len() != self.positions.len() {
            return Err(SurfaceError::InvalidData(format!(
                "surface has {} vertices but {} vertex colors",
                self.positions.len(),
                self.vertex_colors.len()
            )));
        }
        if self.face_colors.len() != self.faces.len() {
            return Err(SurfaceError::InvalidData(format!(
                "surface has {} faces but {} face color triples",
                self.faces.len(),
                self.face_colors.len()
            )));
        }
        for position in &self.positions {
            position.validate("surface vertex")?;
        }
        for color in &self.vertex_colors {
            color.validate()?;
        }
        for face in &self.faces {
            if face.iter().any(|&index| index >= self.positions.len()) {
                return Err(SurfaceError::InvalidData(format!(
                    "face {face:?} references a vertex outside 0..{}",
                    self.positions.len()
                )));
            }
        }
        Ok(())
    }
}

/// One renderable unit handed to the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryPrimitive {
    LineSegment(LinePrimitive),
    Label(LabelPlacement),
    Surface(TriangulatedSurface),
}

impl GeometryPrimitive {
    pub fn validate(&self) -> SurfaceResult<()> {
        match self {
            Self::LineSegment(line) => line.validate(),
            Self::Label(label) => label.validate(),
            Self::Surface(surface) => surface.validate(),
        }
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&LinePrimitive> {
        match self {
            Self::LineSegment(line) => Some(line),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> Option<&LabelPlacement> {
        match self {
            Self::Label(label) => Some(label),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_surface(&self) -> Option<&TriangulatedSurface> {
        match self {
            Self::Surface(surface) => Some(surface),
            _ => None,
        }
    }
}

impl From<LinePrimitive> for GeometryPrimitive {
    fn from(line: LinePrimitive) -> Self {
        Self::LineSegment(line)
    }
}

impl From<LabelPlacement> for GeometryPrimitive {
    fn from(label: LabelPlacement) -> Self {
        Self::Label(label)
    }
}

impl From<TriangulatedSurface> for GeometryPrimitive {
    fn from(surface: TriangulatedSurface) -> Self {
        Self::Surface(surface)
    }
}
