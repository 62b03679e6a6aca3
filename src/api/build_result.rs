use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::format_iso;
use crate::error::{SurfaceError, SurfaceResult};
use crate::render::{GeometryFrame, LabelRole, LineRole};

use super::SurfaceScales;

pub const BUILD_SUMMARY_JSON_SCHEMA_V1: u32 = 1;

/// Everything one build produced. The assembler keeps the latest one for
/// inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    pub scales: SurfaceScales,
    pub frame: GeometryFrame,
    pub date_range: (NaiveDate, NaiveDate),
    pub observation_count: usize,
}

impl BuildResult {
    #[must_use]
    pub fn summary(&self) -> BuildSummary {
        let (vertex_count, face_count) = self
            .frame
            .surfaces()
            .next()
            .map_or((0, 0), |surface| (surface.vertex_count(), surface.face_count()));

        BuildSummary {
            start: format_iso(self.date_range.0),
            end: format_iso(self.date_range.1),
            observation_count: self.observation_count,
            rate_domain: self.scales.rate.domain(),
            primitive_count: self.frame.len(),
            axis_count: self.frame.lines_with_role(LineRole::Axis).count(),
            grid_line_count: self.frame.lines_with_role(LineRole::Grid).count(),
            maturity_line_count: self.frame.lines_with_role(LineRole::MaturityLine).count(),
            tick_label_count: self
                .frame
                .labels()
                .filter(|label| label.role != LabelRole::AxisTitle)
                .count(),
            vertex_count,
            face_count,
        }
    }

    pub fn to_json_pretty(&self) -> SurfaceResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SurfaceError::InvalidData(format!("failed to serialize build: {e}")))
    }
}

/// Counts describing a build, cheap to print or diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub start: String,
    pub end: String,
    pub observation_count: usize,
    pub rate_domain: (f64, f64),
    pub primitive_count: usize,
    pub axis_count: usize,
    pub grid_line_count: usize,
    pub maturity_line_count: usize,
    pub tick_label_count: usize,
    pub vertex_count: usize,
    pub face_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSummaryJsonContractV1 {
    pub schema_version: u32,
    pub summary: BuildSummary,
}

impl BuildSummary {
    pub fn to_json_contract_v1_pretty(&self) -> SurfaceResult<String> {
        let payload = BuildSummaryJsonContractV1 {
            schema_version: BUILD_SUMMARY_JSON_SCHEMA_V1,
            summary: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SurfaceError::InvalidData(format!("failed to serialize build summary contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> SurfaceResult<Self> {
        if let Ok(summary) = serde_json::from_str::<Self>(input) {
            return Ok(summary);
        }
        let payload: BuildSummaryJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SurfaceError::InvalidData(format!("failed to parse build summary json payload: {e}"))
        })?;
        if payload.schema_version != BUILD_SUMMARY_JSON_SCHEMA_V1 {
            return Err(SurfaceError::InvalidData(format!(
                "unsupported build summary schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.summary)
    }
}
