use serde::{Deserialize, Serialize};

use crate::error::{ScaleAxis, SurfaceError, SurfaceResult};
use crate::render::Color;

/// Sequential light-to-dark blue ramp used by the quantile policy.
pub const BLUE_PALETTE: [Color; 22] = [
    Color::from_rgb_u32(0xeef4f8),
    Color::from_rgb_u32(0xddecf4),
    Color::from_rgb_u32(0xcce5f0),
    Color::from_rgb_u32(0xbcddec),
    Color::from_rgb_u32(0xaed5e7),
    Color::from_rgb_u32(0xa0cde2),
    Color::from_rgb_u32(0x94c5dc),
    Color::from_rgb_u32(0x89bcd6),
    Color::from_rgb_u32(0x7eb4d0),
    Color::from_rgb_u32(0x74abc9),
    Color::from_rgb_u32(0x6aa2c2),
    Color::from_rgb_u32(0x619abb),
    Color::from_rgb_u32(0x5892b4),
    Color::from_rgb_u32(0x4f8aad),
    Color::from_rgb_u32(0x4781a6),
    Color::from_rgb_u32(0x3f799f),
    Color::from_rgb_u32(0x3a7195),
    Color::from_rgb_u32(0x35688c),
    Color::from_rgb_u32(0x326082),
    Color::from_rgb_u32(0x2f5877),
    Color::from_rgb_u32(0x2c506c),
    Color::from_rgb_u32(0x243d52),
];

/// Rate-to-color mapping. Both variants are monotone in rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorScaleRaw", into = "ColorScaleRaw")]
pub enum ColorScale {
    /// `palette[k]` for the `k`-th of `palette.len()` equal-population buckets.
    Quantile {
        thresholds: Vec<f64>,
        palette: Vec<Color>,
    },
    /// Linear blend from `low` at `domain.0` to `high` at `domain.1`, clamped.
    Linear {
        domain: (f64, f64),
        low: Color,
        high: Color,
    },
}

impl ColorScale {
    /// Buckets `values` (the observed rates) into `palette.len()` quantiles.
    pub fn quantile(
        values: impl IntoIterator<Item = f64>,
        palette: Vec<Color>,
    ) -> SurfaceResult<Self> {
        if palette.is_empty() {
            return Err(empty_palette());
        }
        let sorted = sorted_finite(values)?;

        let buckets = palette.len();
        let thresholds = (1..buckets)
            .map(|index| quantile_sorted(&sorted, index as f64 / buckets as f64))
            .collect();

        Ok(Self::Quantile {
            thresholds,
            palette,
        })
    }

    /// Gradient over the observed `[min, max]` of `values`.
    pub fn linear(
        values: impl IntoIterator<Item = f64>,
        low: Color,
        high: Color,
    ) -> SurfaceResult<Self> {
        let sorted = sorted_finite(values)?;
        let domain = (sorted[0], sorted[sorted.len() - 1]);
        Ok(Self::Linear { domain, low, high })
    }

    pub fn color(&self, rate: f64) -> SurfaceResult<Color> {
        if !rate.is_finite() {
            return Err(SurfaceError::InvalidData(format!(
                "color scale input must be finite, got {rate}"
            )));
        }

        match self {
            Self::Quantile {
                thresholds,
                palette,
            } => {
                let bucket = thresholds.partition_point(|threshold| *threshold <= rate);
                palette
                    .get(bucket)
                    .or_else(|| palette.last())
                    .copied()
                    .ok_or_else(empty_palette)
            }
            Self::Linear { domain, low, high } => {
                let span = domain.1 - domain.0;
                if span == 0.0 {
                    return Ok(*high);
                }
                Ok(low.lerp(*high, (rate - domain.0) / span))
            }
        }
    }

    /// Like [`ColorScale::color`], but a missing rate is rejected instead of
    /// being turned into an undefined color.
    pub fn color_of(&self, rate: Option<f64>) -> SurfaceResult<Color> {
        match rate {
            Some(rate) => self.color(rate),
            None => Err(SurfaceError::MissingValuePropagation {
                stage: "color scale",
                date_index: None,
                tenor_index: None,
            }),
        }
    }

    /// Color at the top of the rate range.
    pub fn top_color(&self) -> SurfaceResult<Color> {
        match self {
            Self::Quantile { palette, .. } => palette.last().copied().ok_or_else(empty_palette),
            Self::Linear { high, .. } => Ok(*high),
        }
    }
}

fn empty_palette() -> SurfaceError {
    SurfaceError::InvalidData("quantile palette must not be empty".to_owned())
}

#[derive(Serialize, Deserialize)]
enum ColorScaleRaw {
    Quantile {
        thresholds: Vec<f64>,
        palette: Vec<Color>,
    },
    Linear {
        domain: (f64, f64),
        low: Color,
        high: Color,
    },
}

impl TryFrom<ColorScaleRaw> for ColorScale {
    type Error = SurfaceError;

    fn try_from(raw: ColorScaleRaw) -> Result<Self, Self::Error> {
        match raw {
            ColorScaleRaw::Quantile {
                thresholds,
                palette,
            } => {
                if palette.is_empty() {
                    return Err(empty_palette());
                }
                if thresholds.len() + 1 != palette.len() {
                    return Err(SurfaceError::InvalidData(format!(
                        "{} quantile thresholds cannot split {} colors",
                        thresholds.len(),
                        palette.len()
                    )));
                }
                let ordered = thresholds.iter().all(|t| t.is_finite())
                    && thresholds.windows(2).all(|pair| pair[0] <= pair[1]);
                if !ordered {
                    return Err(SurfaceError::InvalidData(
                        "quantile thresholds must be finite and ascending".to_owned(),
                    ));
                }
                Ok(Self::Quantile {
                    thresholds,
                    palette,
                })
            }
            ColorScaleRaw::Linear { domain, low, high } => {
                if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 > domain.1 {
                    return Err(SurfaceError::InvalidData(format!(
                        "linear color domain must be finite and ascending, got {domain:?}"
                    )));
                }
                Ok(Self::Linear { domain, low, high })
            }
        }
    }
}

impl From<ColorScale> for ColorScaleRaw {
    fn from(scale: ColorScale) -> Self {
        match scale {
            ColorScale::Quantile {
                thresholds,
                palette,
            } => Self::Quantile {
                thresholds,
                palette,
            },
            ColorScale::Linear { domain, low, high } => Self::Linear { domain, low, high },
        }
    }
}

fn sorted_finite(values: impl IntoIterator<Item = f64>) -> SurfaceResult<Vec<f64>> {
    let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Err(SurfaceError::DegenerateDomain {
            axis: ScaleAxis::Color,
            message: "no observed rates to derive colors from".to_owned(),
        });
    }
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// R-7 quantile (linear interpolation between closest ranks).
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * p;
    let lower = position.floor() as usize;
    let value = sorted[lower];
    match sorted.get(lower + 1) {
        Some(next) => value + (next - value) * (position - lower as f64),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_thresholds_interpolate_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
    }

    #[test]
    fn quantile_buckets_split_population_evenly() {
        let palette = vec![Color::BLACK, Color::rgb(0.5, 0.5, 0.5), Color::WHITE];
        let scale = ColorScale::quantile([1.0, 2.0, 3.0, 4.0, 5.0, 6.0], palette)
            .expect("quantile scale");
        assert_eq!(scale.color(1.0).expect("low"), Color::BLACK);
        assert_eq!(scale.color(3.5).expect("mid"), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(scale.color(6.0).expect("high"), Color::WHITE);
    }

    #[test]
    fn palette_endpoints_match_hex_codes() {
        assert_eq!(BLUE_PALETTE[0].to_hex(), "#eef4f8");
        assert_eq!(BLUE_PALETTE[21].to_hex(), "#243d52");
    }

    #[test]
    fn deserialized_scales_are_validated() {
        let err = serde_json::from_str::<ColorScale>(
            r#"{ "Quantile": { "thresholds": [], "palette": [] } }"#,
        )
        .expect_err("empty palette");
        assert!(err.to_string().contains("palette must not be empty"));

        assert!(
            serde_json::from_str::<ColorScale>(
                r#"{ "Linear": { "domain": [3.0, 1.0],
                    "low": { "red": 1.0, "green": 1.0, "blue": 1.0, "alpha": 1.0 },
                    "high": { "red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 } } }"#,
            )
            .is_err()
        );
    }

    #[test]
    fn serialized_scales_load_back() {
        let scale = ColorScale::quantile([1.0, 2.0, 3.0], BLUE_PALETTE.to_vec())
            .expect("quantile scale");
        let json = serde_json::to_string(&scale).expect("serialize");
        let restored: ColorScale = serde_json::from_str(&json).expect("deserialize");
        let top = restored.top_color().expect("top");
        approx::assert_relative_eq!(top.blue, BLUE_PALETTE[21].blue, epsilon = 1e-12);
        assert_eq!(top.to_hex(), "#243d52");
    }

    #[test]
    fn an_empty_palette_built_by_hand_does_not_panic() {
        let scale = ColorScale::Quantile {
            thresholds: Vec::new(),
            palette: Vec::new(),
        };
        assert!(matches!(scale.color(1.0), Err(SurfaceError::InvalidData(_))));
        assert!(scale.top_color().is_err());
    }
}
