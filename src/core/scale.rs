use serde::{Deserialize, Serialize};

use crate::error::{SurfaceError, SurfaceResult};

/// Continuous linear mapping from a numeric domain onto a scene-unit range.
///
/// A zero-width domain is allowed and maps every value to the range start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> SurfaceResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(SurfaceError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(SurfaceError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn range_min(self) -> f64 {
        self.range_start.min(self.range_end)
    }

    #[must_use]
    pub fn range_max(self) -> f64 {
        self.range_start.max(self.range_end)
    }

    #[must_use]
    pub fn range_mean(self) -> f64 {
        (self.range_start + self.range_end) / 2.0
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn map(self, value: f64) -> SurfaceResult<f64> {
        if !value.is_finite() {
            return Err(SurfaceError::InvalidData("value must be finite".to_owned()));
        }
        if self.is_degenerate() {
            return Ok(self.range_start);
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, position: f64) -> SurfaceResult<f64> {
        if !position.is_finite() {
            return Err(SurfaceError::InvalidData(
                "position must be finite".to_owned(),
            ));
        }
        if self.range_start == self.range_end {
            return Ok(self.domain_start);
        }

        let normalized = (position - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Round-valued ticks inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick bounds plus the increment. A negative increment `-k` means
/// ticks are `i / k`, which keeps decimal ticks like `0.3` exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        i1 = (start * inverse).round();
        i2 = (stop * inverse).round();
        if i1 / inverse < start {
            i1 += 1.0;
        }
        if i2 / inverse > stop {
            i2 -= 1.0;
        }
        inc = -inverse;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Step between nice ticks over `start..stop` for a target `count`.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (low, high, sign) = if stop < start {
        (stop, start, -1.0)
    } else {
        (start, stop, 1.0)
    };
    let (_, _, inc) = tick_spec(low, high, count as f64);
    sign * if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Ticks on multiples of 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(low, high, count as f64);
    if i2.is_nan() || i2 < i1 || !inc.is_finite() {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|offset| {
            let index = i1 + offset as f64;
            if inc < 0.0 { index / -inc } else { index * inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}
