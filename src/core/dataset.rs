use chrono::NaiveDate;
use serde::Serialize;

use crate::core::Observation;
use crate::error::{DatasetStage, SurfaceError, SurfaceResult};

/// Removes the first `n` rows unconditionally.
///
/// Generic over the row type: the H.15 preamble (units, multiplier, currency,
/// identifiers, time period) is dropped before any parsing happens.
#[must_use]
pub fn drop_leading_non_data_rows<T>(mut rows: Vec<T>, n: usize) -> Vec<T> {
    let n = n.min(rows.len());
    rows.drain(..n);
    rows
}

/// Keeps observations with at least one present rate, preserving order.
#[must_use]
pub fn keep_rows_with_any_data(rows: Vec<Observation>) -> Vec<Observation> {
    rows.into_iter().filter(Observation::has_any_rate).collect()
}

/// Keeps observations dated within `start..=end`, preserving order.
///
/// An inverted range (`start > end`) selects nothing.
#[must_use]
pub fn select_range(rows: &[Observation], start: NaiveDate, end: NaiveDate) -> Vec<Observation> {
    rows.iter()
        .filter(|row| start <= row.date && row.date <= end)
        .cloned()
        .collect()
}

/// Non-empty, strictly date-ascending observations sharing one curve width,
/// each with at least one present rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Validates ordering, curve widths and rate presence. `stage` names the
    /// step that produced `observations` so an empty input reports where it
    /// emptied.
    pub fn new(observations: Vec<Observation>, stage: DatasetStage) -> SurfaceResult<Self> {
        let Some(first) = observations.first() else {
            return Err(SurfaceError::EmptyDataset { stage });
        };

        let width = first.curve.len();
        if width == 0 {
            return Err(SurfaceError::InvalidData(
                "observations must carry at least one tenor".to_owned(),
            ));
        }

        for (index, pair) in observations.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(SurfaceError::InvalidData(format!(
                    "observation {} ({}) is not after {} ({})",
                    index + 1,
                    pair[1].date,
                    index,
                    pair[0].date
                )));
            }
        }

        if let Some((index, row)) = observations
            .iter()
            .enumerate()
            .find(|(_, row)| row.curve.len() != width)
        {
            return Err(SurfaceError::InvalidData(format!(
                "observation {index} has {} tenors, expected {width}",
                row.curve.len()
            )));
        }

        if let Some(row) = observations.iter().find(|row| !row.has_any_rate()) {
            return Err(SurfaceError::InvalidData(format!(
                "observation {} has no present rate",
                row.date
            )));
        }

        Ok(Self { observations })
    }

    /// Narrows to `start..=end`; an empty selection is a range-selection error.
    pub fn select_range(&self, start: NaiveDate, end: NaiveDate) -> SurfaceResult<Self> {
        let selected = select_range(&self.observations, start, end);
        Self::new(selected, DatasetStage::RangeSelection)
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn tenor_count(&self) -> usize {
        self.observations.first().map_or(0, |row| row.curve.len())
    }

    /// First and last observation dates.
    #[must_use]
    pub fn date_bounds(&self) -> (NaiveDate, NaiveDate) {
        let first = &self.observations[0];
        let last = &self.observations[self.observations.len() - 1];
        (first.date, last.date)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.observations.iter().map(|row| row.date)
    }

    /// Every present rate, row by row in tenor order.
    pub fn present_rates(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().flat_map(Observation::present_rates)
    }

    #[must_use]
    pub fn into_observations(self) -> Vec<Observation> {
        self.observations
    }
}
