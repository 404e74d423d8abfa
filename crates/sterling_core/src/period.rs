//! Quarterly time points.
//!
//! The model's fundamental time unit is one calendar quarter. `Period` is a
//! small `Copy` value supporting integer-quarter arithmetic (`p + 1`,
//! `p - 4`), total ordering, and the conventional `"2025Q1"` text form.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single calendar quarter, e.g. 2025Q1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    year: i32,
    quarter: u8,
}

impl Period {
    /// Constructs a period from a year and a quarter in `1..=4`.
    ///
    /// # Panics
    ///
    /// Panics if `quarter` is outside `1..=4`.
    pub fn new(year: i32, quarter: u8) -> Self {
        assert!(
            (1..=4).contains(&quarter),
            "quarter must be in 1..=4, got {quarter}"
        );
        Self { year, quarter }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    /// Absolute quarter count used for arithmetic and ordering.
    fn index(self) -> i64 {
        i64::from(self.year) * 4 + i64::from(self.quarter) - 1
    }

    fn from_index(index: i64) -> Self {
        let year = index.div_euclid(4);
        let quarter = index.rem_euclid(4) + 1;
        Self {
            year: year as i32,
            quarter: quarter as u8,
        }
    }

    /// Number of quarters from `earlier` up to `self` (negative if `self`
    /// precedes `earlier`).
    pub fn quarters_since(self, earlier: Period) -> i64 {
        self.index() - earlier.index()
    }

    pub fn next(self) -> Self {
        self + 1
    }
}

impl Add<i64> for Period {
    type Output = Period;

    fn add(self, quarters: i64) -> Period {
        Period::from_index(self.index() + quarters)
    }
}

impl Sub<i64> for Period {
    type Output = Period;

    fn sub(self, quarters: i64) -> Period {
        Period::from_index(self.index() - quarters)
    }
}

impl Sub<Period> for Period {
    type Output = i64;

    fn sub(self, other: Period) -> i64 {
        self.quarters_since(other)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid period {input:?}, expected e.g. \"2025Q1\"")]
pub struct ParsePeriodError {
    input: String,
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePeriodError {
            input: s.to_string(),
        };
        let (year, quarter) = s.split_once(['Q', 'q']).ok_or_else(err)?;
        let year: i32 = year.trim().parse().map_err(|_| err())?;
        let quarter: u8 = quarter.trim().parse().map_err(|_| err())?;
        if !(1..=4).contains(&quarter) {
            return Err(err());
        }
        Ok(Period::new(year, quarter))
    }
}

#[cfg(test)]
mod tests {
    use super::Period;

    #[test]
    fn arithmetic_wraps_across_years() {
        let p = Period::new(2024, 4);
        assert_eq!(p + 1, Period::new(2025, 1));
        assert_eq!(p - 4, Period::new(2023, 4));
        assert_eq!(Period::new(2025, 1) - Period::new(2024, 1), 4);
    }

    #[test]
    fn ordering_follows_time() {
        assert!(Period::new(2024, 4) < Period::new(2025, 1));
        assert!(Period::new(2025, 2) > Period::new(2025, 1));
    }

    #[test]
    fn parse_and_display_round_trip() {
        let p: Period = "2025Q1".parse().unwrap();
        assert_eq!(p, Period::new(2025, 1));
        assert_eq!(p.to_string(), "2025Q1");
        assert!("2025".parse::<Period>().is_err());
        assert!("2025Q5".parse::<Period>().is_err());
    }

    #[test]
    fn quarters_since_is_signed() {
        let base = Period::new(1979, 4);
        assert_eq!(Period::new(1980, 4).quarters_since(base), 4);
        assert_eq!(Period::new(1979, 1).quarters_since(base), -3);
    }
}
