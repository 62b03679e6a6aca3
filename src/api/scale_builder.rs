use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{BLUE_PALETTE, ColorScale, Dataset, LinearScale, TimeScale};
use crate::error::{SurfaceError, SurfaceResult};

use super::{ChartDimensions, SurfaceConfig, SurfaceProfile};

/// Tenor-axis padding: integer tenor indices sit half a cell inside the ends.
const TENOR_DOMAIN_PADDING: (f64, f64) = (0.25, 0.75);

/// The four mappings shared by every builder of one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceScales {
    /// Date to `x`.
    pub time: TimeScale,
    /// Rate to `y`.
    pub rate: LinearScale,
    /// Tenor index to `z`.
    pub tenor: LinearScale,
    /// Rate to vertex color.
    pub color: ColorScale,
}

impl SurfaceScales {
    /// Builds all scales from the dataset's observed domain.
    pub fn from_dataset(dataset: &Dataset, config: &SurfaceConfig) -> SurfaceResult<Self> {
        let tenor_count = config.tenors.len();
        if dataset.tenor_count() != tenor_count {
            return Err(SurfaceError::InvalidData(format!(
                "dataset has {} tenors per observation, configuration expects {tenor_count}",
                dataset.tenor_count()
            )));
        }

        let dims = config.dimensions.validate()?;
        let time = time_scale(dataset, dims)?;
        let rate = rate_scale(dataset, dims)?;
        let tenor = tenor_scale(tenor_count, dims)?;
        let color = color_scale(dataset, config)?;

        trace!(
            rate_max = rate.domain().1,
            tenor_count,
            profile = config.profile.name(),
            "built surface scales"
        );
        Ok(Self {
            time,
            rate,
            tenor,
            color,
        })
    }

    /// Lowest scene coordinate on each axis: `(x, y, z)`.
    #[must_use]
    pub fn lows(&self) -> (f64, f64, f64) {
        (
            self.time.linear().range_min(),
            self.rate.range_min(),
            self.tenor.range_min(),
        )
    }

    /// Highest scene coordinate on each axis: `(x, y, z)`.
    #[must_use]
    pub fn highs(&self) -> (f64, f64, f64) {
        (
            self.time.linear().range_max(),
            self.rate.range_max(),
            self.tenor.range_max(),
        )
    }
}

fn time_scale(dataset: &Dataset, dims: ChartDimensions) -> SurfaceResult<TimeScale> {
    let (first, last) = dataset.date_bounds();
    TimeScale::new(first, last, (-dims.width / 2.0, dims.width / 2.0))
}

/// `[0, max rate]`. All-missing or non-positive data collapses to `[0, 0]`.
fn rate_scale(dataset: &Dataset, dims: ChartDimensions) -> SurfaceResult<LinearScale> {
    let max = dataset.present_rates().fold(0.0_f64, f64::max);
    LinearScale::new((0.0, max), (0.0, dims.height))
}

fn tenor_scale(tenor_count: usize, dims: ChartDimensions) -> SurfaceResult<LinearScale> {
    let domain = (
        -TENOR_DOMAIN_PADDING.0,
        tenor_count as f64 - TENOR_DOMAIN_PADDING.1,
    );
    LinearScale::new(domain, (-dims.depth / 2.0, dims.depth / 2.0))
}

fn color_scale(dataset: &Dataset, config: &SurfaceConfig) -> SurfaceResult<ColorScale> {
    match config.profile {
        SurfaceProfile::QuantilePalette => {
            ColorScale::quantile(dataset.present_rates(), BLUE_PALETTE.to_vec())
        }
        SurfaceProfile::LinearGradient => ColorScale::linear(
            dataset.present_rates(),
            config.style.gradient_low,
            config.style.gradient_high,
        ),
    }
}
