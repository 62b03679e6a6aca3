use serde::{Deserialize, Serialize};

use crate::error::{SurfaceError, SurfaceResult};
use crate::render::{Color, LineRole, LineStyle};

/// Colors, widths and offsets applied to emitted geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_maturity_line_color")]
    pub maturity_line_color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Distance between the axis frame and the grid planes.
    #[serde(default = "default_axis_inset")]
    pub axis_inset: f64,
    /// Vertex color used for missing rates under the sentinel policy.
    #[serde(default = "default_missing_color")]
    pub missing_color: Color,
    /// Gradient endpoints of the linear color policy.
    #[serde(default = "default_gradient_low")]
    pub gradient_low: Color,
    #[serde(default = "default_gradient_high")]
    pub gradient_high: Color,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            axis_color: default_axis_color(),
            grid_color: default_grid_color(),
            maturity_line_color: default_maturity_line_color(),
            line_width: default_line_width(),
            axis_inset: default_axis_inset(),
            missing_color: default_missing_color(),
            gradient_low: default_gradient_low(),
            gradient_high: default_gradient_high(),
        }
    }
}

impl SurfaceStyle {
    #[must_use]
    pub fn line_style(&self, role: LineRole) -> LineStyle {
        let color = match role {
            LineRole::Axis => self.axis_color,
            LineRole::Grid => self.grid_color,
            LineRole::MaturityLine => self.maturity_line_color,
        };
        LineStyle::new(role, color, self.line_width)
    }

    pub fn validate(&self) -> SurfaceResult<()> {
        if !self.axis_inset.is_finite() || self.axis_inset < 0.0 {
            return Err(SurfaceError::InvalidData(
                "axis inset must be finite and >= 0".to_owned(),
            ));
        }
        for role in [LineRole::Axis, LineRole::Grid, LineRole::MaturityLine] {
            self.line_style(role).validate()?;
        }
        self.missing_color.validate()?;
        self.gradient_low.validate()?;
        self.gradient_high.validate()
    }
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_grid_color() -> Color {
    Color::from_rgb_u32(0xdddddd)
}

fn default_maturity_line_color() -> Color {
    Color::WHITE
}

fn default_line_width() -> f64 {
    1.0
}

fn default_axis_inset() -> f64 {
    0.1
}

fn default_missing_color() -> Color {
    Color::TRANSPARENT
}

fn default_gradient_low() -> Color {
    Color::from_rgb_u32(0xeef4f8)
}

fn default_gradient_high() -> Color {
    Color::from_rgb_u32(0x243d52)
}
