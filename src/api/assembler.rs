use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use crate::core::{Dataset, DateRange};
use crate::error::{ScaleAxis, SurfaceError, SurfaceResult};
use crate::render::{GeometryFrame, GeometryPrimitive, Renderer};

use super::axis_builder::build_axes;
use super::grid_builder::build_grids;
use super::maturity_line_builder::build_maturity_lines;
use super::surface_mesh_builder::build_surface_mesh;
use super::{BuildResult, SurfaceConfig, SurfaceScales};

/// Owns the full dataset and turns date ranges into geometry.
///
/// Rebuilds take `&mut self`, so they never overlap. The most recent
/// successful build is kept and exposed through [`last_build`].
///
/// [`last_build`]: VisualizationAssembler::last_build
#[derive(Debug, Clone)]
pub struct VisualizationAssembler {
    config: SurfaceConfig,
    full: Dataset,
    last: Option<BuildResult>,
}

impl VisualizationAssembler {
    pub fn new(full: Dataset, config: SurfaceConfig) -> SurfaceResult<Self> {
        config.validate()?;
        if full.tenor_count() != config.tenors.len() {
            return Err(SurfaceError::InvalidData(format!(
                "dataset has {} tenors per observation, configuration expects {}",
                full.tenor_count(),
                config.tenors.len()
            )));
        }
        Ok(Self {
            config,
            full,
            last: None,
        })
    }

    /// Builds the complete geometry for `dataset`.
    ///
    /// Primitive order: axes, time grid, tenor grid, rate grid, surface mesh,
    /// maturity lines.
    pub fn build(dataset: &Dataset, config: &SurfaceConfig) -> SurfaceResult<BuildResult> {
        let scales = SurfaceScales::from_dataset(dataset, config)?;
        let style = &config.style;

        let mut frame = GeometryFrame::new();
        frame.extend(build_axes(&scales, style).map(GeometryPrimitive::from));
        frame.extend(build_grids(
            &scales,
            &config.tenors,
            style,
            config.profile.tick_counts(),
        )?);
        frame.extend([GeometryPrimitive::from(build_surface_mesh(
            dataset,
            &scales,
            style,
            config.missing_value_policy,
        )?)]);
        frame.extend(
            build_maturity_lines(dataset, &scales, style)?
                .into_iter()
                .map(GeometryPrimitive::from),
        );
        frame.validate()?;

        trace!(primitives = frame.len(), "assembled geometry frame");
        Ok(BuildResult {
            scales,
            frame,
            date_range: dataset.date_bounds(),
            observation_count: dataset.len(),
        })
    }

    /// Builds over every observation held by the assembler.
    pub fn build_full(&mut self) -> SurfaceResult<&BuildResult> {
        let result = Self::build(&self.full, &self.config);
        self.retain(result, "full build")
    }

    /// Restricts the dataset to `start..=end` and rebuilds from scratch.
    ///
    /// An empty selection (including `start > end`) fails with
    /// `EmptyDataset { stage: RangeSelection }`. A selection holding a single
    /// date fails with `InvalidRangeInput`. Either way the previous build is kept.
    pub fn rebuild(&mut self, start: NaiveDate, end: NaiveDate) -> SurfaceResult<&BuildResult> {
        let result = self
            .full
            .select_range(start, end)
            .and_then(|subset| Self::build(&subset, &self.config))
            .map_err(|err| match err {
                SurfaceError::DegenerateDomain {
                    axis: ScaleAxis::Time,
                    message,
                } => SurfaceError::InvalidRangeInput(format!(
                    "{start} to {end} selects too few dates: {message}"
                )),
                other => other,
            });
        self.retain(result, "rebuild")
    }

    /// Parses two `YYYY-MM-DD` strings, then rebuilds.
    pub fn rebuild_from_input(&mut self, start: &str, end: &str) -> SurfaceResult<&BuildResult> {
        match DateRange::parse_iso(start, end) {
            Ok(range) => self.rebuild(range.start, range.end),
            Err(err) => {
                warn!(error = %err, start, end, "rejected date range input");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn last_build(&self) -> Option<&BuildResult> {
        self.last.as_ref()
    }

    /// Hands the most recent frame to `renderer`.
    pub fn render_last<R: Renderer>(&self, renderer: &mut R) -> SurfaceResult<()> {
        let build = self
            .last
            .as_ref()
            .ok_or_else(|| SurfaceError::InvalidData("nothing has been built yet".to_owned()))?;
        renderer.render(&build.frame)
    }

    /// First and last date of the full dataset.
    #[must_use]
    pub fn full_range(&self) -> DateRange {
        DateRange::full(&self.full)
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.full
    }

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    fn retain(
        &mut self,
        result: SurfaceResult<BuildResult>,
        operation: &'static str,
    ) -> SurfaceResult<&BuildResult> {
        match result {
            Ok(build) => {
                debug!(
                    operation,
                    start = %build.date_range.0,
                    end = %build.date_range.1,
                    observations = build.observation_count,
                    primitives = build.frame.len(),
                    "surface built"
                );
                Ok(&*self.last.insert(build))
            }
            Err(err) => {
                warn!(
                    operation,
                    error = %err,
                    user_correctable = err.is_user_correctable(),
                    "keeping previous build"
                );
                Err(err)
            }
        }
    }
}
