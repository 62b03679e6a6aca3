use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One untyped source row: column name to raw cell text, in column order.
pub type RawRecord = IndexMap<String, String>;

/// One date's yield curve. `None` marks a tenor with no published rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub curve: Vec<Option<f64>>,
}

impl Observation {
    #[must_use]
    pub fn new(date: NaiveDate, curve: Vec<Option<f64>>) -> Self {
        Self { date, curve }
    }

    #[must_use]
    pub fn has_any_rate(&self) -> bool {
        self.curve.iter().any(Option::is_some)
    }

    #[must_use]
    pub fn rate(&self, tenor_index: usize) -> Option<f64> {
        self.curve.get(tenor_index).copied().flatten()
    }

    /// Present rates in tenor order.
    pub fn present_rates(&self) -> impl Iterator<Item = f64> + '_ {
        self.curve.iter().filter_map(|rate| *rate)
    }
}
