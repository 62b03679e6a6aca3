use serde::{Deserialize, Serialize};

use crate::error::{SurfaceError, SurfaceResult};

const TREASURY_MATURITIES: [(&str, &str); 11] = [
    ("1-month", "1M"),
    ("3-month", "3M"),
    ("6-month", "6M"),
    ("1-year", "1Y"),
    ("2-year", "2Y"),
    ("3-year", "3Y"),
    ("5-year", "5Y"),
    ("7-year", "7Y"),
    ("10-year", "10Y"),
    ("20-year", "20Y"),
    ("30-year", "30Y"),
];

/// One maturity point of the curve: the source column key and its axis label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenor {
    pub key: String,
    pub label: String,
}

impl Tenor {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Ordered tenor list shared by parsing, scales and geometry.
///
/// Index `0` is the shortest maturity. Curve entries, the tenor axis and the
/// mesh rows all use this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenorSet {
    tenors: Vec<Tenor>,
}

impl TenorSet {
    pub fn new(tenors: Vec<Tenor>) -> SurfaceResult<Self> {
        if tenors.is_empty() {
            return Err(SurfaceError::InvalidData(
                "tenor set must not be empty".to_owned(),
            ));
        }
        for (index, tenor) in tenors.iter().enumerate() {
            if tenor.key.trim().is_empty() {
                return Err(SurfaceError::InvalidData(format!(
                    "tenor {index} has an empty column key"
                )));
            }
            if tenor.label.trim().is_empty() {
                return Err(SurfaceError::InvalidData(format!(
                    "tenor `{}` has an empty axis label",
                    tenor.key
                )));
            }
            if tenors[..index].iter().any(|other| other.key == tenor.key) {
                return Err(SurfaceError::InvalidData(format!(
                    "duplicate tenor key `{}`",
                    tenor.key
                )));
            }
        }
        Ok(Self { tenors })
    }

    /// The 11 U.S. Treasury constant-maturity tenors keyed by their H.15 CSV headers.
    #[must_use]
    pub fn treasury() -> Self {
        let tenors = TREASURY_MATURITIES
            .iter()
            .map(|(maturity, label)| {
                Tenor::new(
                    format!(
                        "Market yield on U.S. Treasury securities at {maturity}  constant maturity, quoted on investment basis"
                    ),
                    *label,
                )
            })
            .collect();
        Self { tenors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tenors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tenor> {
        self.tenors.get(index)
    }

    /// Label for an axis tick value, present only for integer tenor indices.
    #[must_use]
    pub fn label_for_tick(&self, tick: f64) -> Option<&str> {
        if !tick.is_finite() || tick < 0.0 || tick.fract() != 0.0 {
            return None;
        }
        self.tenors.get(tick as usize).map(|tenor| tenor.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tenor> {
        self.tenors.iter()
    }
}

impl Default for TenorSet {
    fn default() -> Self {
        Self::treasury()
    }
}
