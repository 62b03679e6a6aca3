use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Chart dimension whose scale could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleAxis {
    Time,
    Rate,
    Tenor,
    Color,
}

impl std::fmt::Display for ScaleAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Time => "time",
            Self::Rate => "rate",
            Self::Tenor => "tenor",
            Self::Color => "color",
        };
        f.write_str(name)
    }
}

/// Pipeline stage that left no observations behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetStage {
    /// Ingest: preamble removal and no-data filtering emptied the input.
    Filtering,
    /// A user-selected date range matched no observation.
    RangeSelection,
}

impl std::fmt::Display for DatasetStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Filtering => f.write_str("filtering"),
            Self::RangeSelection => f.write_str("range selection"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("row {row}: malformed date in column `{column}`: {value:?}")]
    MalformedDate {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: malformed rate for tenor `{tenor}`: {value:?} (record: {record})")]
    MalformedRate {
        row: usize,
        tenor: String,
        value: String,
        record: String,
    },

    #[error("row {row}: missing column `{column}`")]
    MissingColumn { row: usize, column: String },

    #[error("no observations remain after {stage}")]
    EmptyDataset { stage: DatasetStage },

    #[error("degenerate {axis} domain: {message}")]
    DegenerateDomain { axis: ScaleAxis, message: String },

    #[error("missing rate reached {stage} at date index {date_index:?}, tenor index {tenor_index:?}")]
    MissingValuePropagation {
        stage: &'static str,
        date_index: Option<usize>,
        tenor_index: Option<usize>,
    },

    #[error("invalid chart dimensions: width={width}, height={height}, depth={depth}")]
    InvalidDimensions { width: f64, height: f64, depth: f64 },

    #[error("invalid date range input: {0}")]
    InvalidRangeInput(String),

    #[error("csv error: {0}")]
    Csv(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl SurfaceError {
    /// Returns `true` when a caller can recover by asking for a different date range.
    ///
    /// Problems with the loaded data itself, such as a file holding a single
    /// date, are not correctable this way.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::EmptyDataset {
                stage: DatasetStage::RangeSelection
            } | Self::InvalidRangeInput(_)
        )
    }
}

impl From<csv::Error> for SurfaceError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}
