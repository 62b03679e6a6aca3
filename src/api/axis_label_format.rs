use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::TenorSet;

/// Text pattern shared by every label of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeLabelPattern {
    /// `2019`
    Year,
    /// `2019/07`
    YearMonth,
}

impl TimeLabelPattern {
    /// Year-only while every tick falls in a different year; any collision
    /// switches the whole axis to year/month.
    #[must_use]
    pub fn resolve(ticks: &[NaiveDate]) -> Self {
        let mut years: Vec<i32> = ticks.iter().map(Datelike::year).collect();
        years.sort_unstable();
        years.dedup();
        if years.len() == ticks.len() {
            Self::Year
        } else {
            Self::YearMonth
        }
    }

    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            Self::Year => date.year().to_string(),
            Self::YearMonth => format!("{}/{:02}", date.year(), date.month()),
        }
    }
}

/// Labels for a full set of time ticks, using one pattern for all of them.
#[must_use]
pub fn format_time_ticks(ticks: &[NaiveDate]) -> Vec<String> {
    let pattern = TimeLabelPattern::resolve(ticks);
    ticks.iter().map(|date| pattern.format(*date)).collect()
}

/// `None` for fractional or out-of-range ticks.
#[must_use]
pub fn format_tenor_tick(tenors: &TenorSet, tick: f64) -> Option<String> {
    tenors.label_for_tick(tick).map(str::to_owned)
}

/// `"<value>%"`; the zero tick is left to the corner of the frame.
#[must_use]
pub fn format_rate_tick(tick: f64) -> Option<String> {
    if tick == 0.0 || !tick.is_finite() {
        return None;
    }
    Some(format!("{tick}%"))
}
