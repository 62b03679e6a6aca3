use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::error::{SurfaceError, SurfaceResult};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date bounds chosen by the user.
///
/// `start > end` is representable on purpose: selecting with an inverted
/// range yields an empty dataset, which the assembler reports as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Bounds covering the whole dataset, used to seed the range inputs.
    #[must_use]
    pub fn full(dataset: &Dataset) -> Self {
        let (start, end) = dataset.date_bounds();
        Self { start, end }
    }

    /// Parses two `YYYY-MM-DD` inputs.
    pub fn parse_iso(start: &str, end: &str) -> SurfaceResult<Self> {
        Ok(Self {
            start: parse_iso_date(start)?,
            end: parse_iso_date(end)?,
        })
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Renders both bounds as `YYYY-MM-DD`.
    #[must_use]
    pub fn to_iso(self) -> (String, String) {
        (format_iso(self.start), format_iso(self.end))
    }
}

#[must_use]
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(text: &str) -> SurfaceResult<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SurfaceError::InvalidRangeInput(
            "date range bound is empty".to_owned(),
        ));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|err| {
        SurfaceError::InvalidRangeInput(format!("`{trimmed}` is not a YYYY-MM-DD date: {err}"))
    })
}
