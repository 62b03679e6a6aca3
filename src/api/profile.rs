use serde::{Deserialize, Serialize};

/// Approximate tick counts requested from each axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTickCounts {
    pub time: usize,
    pub tenor: usize,
    pub rate: usize,
}

impl AxisTickCounts {
    #[must_use]
    pub const fn new(time: usize, tenor: usize, rate: usize) -> Self {
        Self { time, tenor, rate }
    }
}

/// Named rendering profile: color policy plus tick density.
///
/// `QuantilePalette` colors by rank bucket over a 22-step palette with
/// 10 time ticks. `LinearGradient` blends two colors by normalized rate and
/// doubles the time tick density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceProfile {
    #[default]
    QuantilePalette,
    LinearGradient,
}

impl SurfaceProfile {
    #[must_use]
    pub const fn tick_counts(self) -> AxisTickCounts {
        match self {
            Self::QuantilePalette => AxisTickCounts::new(10, 11, 20),
            Self::LinearGradient => AxisTickCounts::new(20, 11, 20),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::QuantilePalette => "quantile_palette",
            Self::LinearGradient => "linear_gradient",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "quantile_palette" | "quantile" => Some(Self::QuantilePalette),
            "linear_gradient" | "linear" => Some(Self::LinearGradient),
            _ => None,
        }
    }
}
