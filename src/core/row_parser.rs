use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Observation, RawRecord, TenorSet};
use crate::error::{SurfaceError, SurfaceResult};

/// Date column of the Federal Reserve H.15 download.
pub const DEFAULT_DATE_COLUMN: &str = "Series Description";

/// H.15 writes `ND` for business days without a published rate.
pub const H15_NO_DATA_TOKEN: &str = "ND";

/// Turns raw records into typed observations.
///
/// An empty cell is always a missing rate. `missing_tokens` lists extra cell
/// values that also mean "missing" (compared after trimming).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowParser {
    pub date_column: String,
    pub tenors: TenorSet,
    #[serde(default)]
    pub missing_tokens: Vec<String>,
}

impl RowParser {
    #[must_use]
    pub fn new(tenors: TenorSet) -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_owned(),
            tenors,
            missing_tokens: Vec::new(),
        }
    }

    /// Parser for the H.15 Treasury download (`ND` cells count as missing).
    #[must_use]
    pub fn h15() -> Self {
        Self::new(TenorSet::treasury()).with_missing_token(H15_NO_DATA_TOKEN)
    }

    #[must_use]
    pub fn with_date_column(mut self, column: impl Into<String>) -> Self {
        self.date_column = column.into();
        self
    }

    #[must_use]
    pub fn with_missing_token(mut self, token: impl Into<String>) -> Self {
        self.missing_tokens.push(token.into());
        self
    }

    /// Parses one record. `row` is only used for error context.
    pub fn parse(&self, record: &RawRecord, row: usize) -> SurfaceResult<Observation> {
        let date_text = self.field(record, row, &self.date_column)?;
        let date = parse_date(date_text).ok_or_else(|| SurfaceError::MalformedDate {
            row,
            column: self.date_column.clone(),
            value: date_text.to_owned(),
        })?;

        let mut curve = Vec::with_capacity(self.tenors.len());
        for tenor in self.tenors.iter() {
            let text = self.field(record, row, &tenor.key)?.trim();
            if text.is_empty() || self.missing_tokens.iter().any(|token| token == text) {
                curve.push(None);
                continue;
            }
            match text.parse::<f64>() {
                Ok(rate) if rate.is_finite() => curve.push(Some(rate)),
                _ => {
                    return Err(SurfaceError::MalformedRate {
                        row,
                        tenor: tenor.label.clone(),
                        value: text.to_owned(),
                        record: format!("{record:?}"),
                    });
                }
            }
        }

        Ok(Observation::new(date, curve))
    }

    /// Parses every record, aborting on the first malformed one.
    ///
    /// `first_row` is the source row number of `records[0]`.
    pub fn parse_all(
        &self,
        records: &[RawRecord],
        first_row: usize,
    ) -> SurfaceResult<Vec<Observation>> {
        records
            .iter()
            .enumerate()
            .map(|(offset, record)| self.parse(record, first_row + offset))
            .collect()
    }

    fn field<'a>(&self, record: &'a RawRecord, row: usize, column: &str) -> SurfaceResult<&'a str> {
        record
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| SurfaceError::MissingColumn {
                row,
                column: column.to_owned(),
            })
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new(TenorSet::default())
    }
}

/// Accepts `YYYY-MM-DD`, or `YYYY-MM` meaning the first of that month.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if text.len() == 7 {
        return NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok();
    }
    None
}
