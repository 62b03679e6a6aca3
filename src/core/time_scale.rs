use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::scale::tick_step;
use crate::core::LinearScale;
use crate::error::{ScaleAxis, SurfaceError, SurfaceResult};

const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Calendar interval used to place time ticks.
///
/// `step` filters the interval's boundaries: `Day { step: 2 }` keeps days of
/// month 1, 3, 5, ..., `Month { step: 3 }` keeps January, April, July and
/// October, `Year { step: 5 }` keeps years divisible by five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeTickInterval {
    Day { step: u32 },
    Week,
    Month { step: u32 },
    Year { step: u32 },
}

impl TimeTickInterval {
    fn approximate_days(self) -> f64 {
        match self {
            Self::Day { step } => f64::from(step),
            Self::Week => 7.0,
            Self::Month { step } => DAYS_PER_MONTH * f64::from(step),
            Self::Year { step } => DAYS_PER_YEAR * f64::from(step),
        }
    }

    /// First boundary of the base interval on or after `date`.
    fn ceil(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day { .. } => Some(date),
            Self::Week => {
                let offset = (7 - date.weekday().num_days_from_sunday()) % 7;
                date.checked_add_days(Days::new(u64::from(offset)))
            }
            Self::Month { .. } => {
                let first = date.with_day(1)?;
                if first == date {
                    Some(date)
                } else {
                    first.checked_add_months(Months::new(1))
                }
            }
            Self::Year { .. } => {
                let first = NaiveDate::from_ymd_opt(date.year(), 1, 1)?;
                if first == date {
                    Some(date)
                } else {
                    NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
                }
            }
        }
    }

    fn next_boundary(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day { .. } => date.succ_opt(),
            Self::Week => date.checked_add_days(Days::new(7)),
            Self::Month { .. } => date.checked_add_months(Months::new(1)),
            Self::Year { .. } => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1),
        }
    }

    fn keeps(self, date: NaiveDate) -> bool {
        match self {
            Self::Day { step } => date.day0() % step.max(1) == 0,
            Self::Week => date.weekday() == Weekday::Sun,
            Self::Month { step } => date.month0() % step.max(1) == 0,
            Self::Year { step } => date.year().rem_euclid(step.max(1) as i32) == 0,
        }
    }

    /// Boundaries within `start..=end`.
    #[must_use]
    pub fn range(self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut cursor = self.ceil(start);
        while let Some(date) = cursor {
            if date > end {
                break;
            }
            if self.keeps(date) {
                dates.push(date);
            }
            cursor = self.next_boundary(date);
        }
        dates
    }
}

const TICK_INTERVALS: [TimeTickInterval; 6] = [
    TimeTickInterval::Day { step: 1 },
    TimeTickInterval::Day { step: 2 },
    TimeTickInterval::Week,
    TimeTickInterval::Month { step: 1 },
    TimeTickInterval::Month { step: 3 },
    TimeTickInterval::Year { step: 1 },
];

/// Date axis mapped linearly through day numbers onto scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    /// Requires `start < end`; equal dates leave nothing to spread across the axis.
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> SurfaceResult<Self> {
        if start > end {
            return Err(SurfaceError::InvalidData(format!(
                "time domain is inverted: {start} > {end}"
            )));
        }
        if start == end {
            return Err(SurfaceError::DegenerateDomain {
                axis: ScaleAxis::Time,
                message: format!("a single date ({start}) cannot span the time axis"),
            });
        }

        let linear = LinearScale::new((day_number(start), day_number(end)), range)?;
        Ok(Self { start, end, linear })
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.linear
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn map(self, date: NaiveDate) -> SurfaceResult<f64> {
        self.linear.map(day_number(date))
    }

    /// Interval whose spacing is closest to `span / count`.
    #[must_use]
    pub fn tick_interval(self, count: usize) -> TimeTickInterval {
        let span = day_number(self.end) - day_number(self.start);
        let target = span / count.max(1) as f64;

        let index = TICK_INTERVALS
            .iter()
            .take_while(|interval| interval.approximate_days() <= target)
            .count();

        if index == TICK_INTERVALS.len() {
            let step = tick_step(
                day_number(self.start) / DAYS_PER_YEAR,
                day_number(self.end) / DAYS_PER_YEAR,
                count.max(1),
            );
            return TimeTickInterval::Year {
                step: step.round().max(1.0) as u32,
            };
        }
        if index == 0 {
            return TICK_INTERVALS[0];
        }

        let below = TICK_INTERVALS[index - 1];
        let above = TICK_INTERVALS[index];
        if target / below.approximate_days() < above.approximate_days() / target {
            below
        } else {
            above
        }
    }

    /// Calendar-aligned ticks inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<NaiveDate> {
        if count == 0 {
            return Vec::new();
        }
        self.tick_interval(count).range(self.start, self.end)
    }
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}
