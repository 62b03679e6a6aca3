use serde::{Deserialize, Serialize};

use crate::core::row_parser::{DEFAULT_DATE_COLUMN, H15_NO_DATA_TOKEN};
use crate::core::{RowParser, TenorSet};
use crate::error::{SurfaceError, SurfaceResult};

use super::{SurfaceProfile, SurfaceStyle};

/// Preamble rows (units, multiplier, currency, identifier, time period)
/// that precede the data in an H.15 download.
pub const H15_PREAMBLE_ROWS: usize = 5;

/// Physical extent of the chart in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl ChartDimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
    }

    pub fn validate(self) -> SurfaceResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(SurfaceError::InvalidDimensions {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(80.0, 40.0, 30.0)
    }
}

/// What the surface mesh does with a missing rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Keep the vertex at the rate floor with the style's missing color.
    #[default]
    Sentinel,
    /// Fail the build with `MissingValuePropagation`.
    Reject,
}

/// Public pipeline configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default)]
    pub dimensions: ChartDimensions,
    #[serde(default)]
    pub profile: SurfaceProfile,
    #[serde(default)]
    pub tenors: TenorSet,
    #[serde(default)]
    pub missing_value_policy: MissingValuePolicy,
    #[serde(default)]
    pub style: SurfaceStyle,
    #[serde(default = "default_leading_rows_to_drop")]
    pub leading_rows_to_drop: usize,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_missing_tokens")]
    pub missing_tokens: Vec<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            dimensions: ChartDimensions::default(),
            profile: SurfaceProfile::default(),
            tenors: TenorSet::default(),
            missing_value_policy: MissingValuePolicy::default(),
            style: SurfaceStyle::default(),
            leading_rows_to_drop: default_leading_rows_to_drop(),
            date_column: default_date_column(),
            missing_tokens: default_missing_tokens(),
        }
    }
}

impl SurfaceConfig {
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: ChartDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: SurfaceProfile) -> Self {
        self.profile = profile;
        self
    }

    #[must_use]
    pub fn with_tenors(mut self, tenors: TenorSet) -> Self {
        self.tenors = tenors;
        self
    }

    #[must_use]
    pub fn with_missing_value_policy(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_value_policy = policy;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_leading_rows_to_drop(mut self, rows: usize) -> Self {
        self.leading_rows_to_drop = rows;
        self
    }

    /// Parser matching this configuration's columns and missing tokens.
    #[must_use]
    pub fn row_parser(&self) -> RowParser {
        let mut parser =
            RowParser::new(self.tenors.clone()).with_date_column(self.date_column.clone());
        for token in &self.missing_tokens {
            parser = parser.with_missing_token(token.clone());
        }
        parser
    }

    pub fn validate(&self) -> SurfaceResult<()> {
        self.dimensions.validate()?;
        TenorSet::new(self.tenors.iter().cloned().collect())?;
        if self.date_column.trim().is_empty() {
            return Err(SurfaceError::InvalidData(
                "date column name must not be empty".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> SurfaceResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SurfaceError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SurfaceResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SurfaceError::InvalidData(format!("failed to serialize config: {e}")))
    }
}

fn default_leading_rows_to_drop() -> usize {
    H15_PREAMBLE_ROWS
}

fn default_date_column() -> String {
    DEFAULT_DATE_COLUMN.to_owned()
}

fn default_missing_tokens() -> Vec<String> {
    vec![H15_NO_DATA_TOKEN.to_owned()]
}
