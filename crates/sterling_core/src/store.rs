//! The shared time-series table all model components read and write.
//!
//! `SeriesStore` is a dense two-dimensional table: rows are a fixed,
//! contiguous range of quarters chosen at construction; columns are named
//! variables added lazily the first time they are referenced. Cells hold
//! `f64` with `NAN` as the "never set" sentinel; the public accessors
//! translate the sentinel into a typed [`StoreError`] so callers never see
//! it directly.
//!
//! Writes are immediately visible to subsequent reads. The Gauss-Seidel
//! sweep depends on this: an equation evaluated later in a sweep must see
//! the updates made earlier in that same sweep.

use std::collections::HashMap;

use thiserror::Error;

use crate::period::Period;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The cell exists but has never been assigned a value.
    #[error("{name} has no value at {period}")]
    Undefined { name: String, period: Period },

    /// No column of this name has ever been created.
    #[error("unknown variable {0}")]
    UnknownColumn(String),

    /// The period lies outside the store's fixed row range.
    #[error("period {period} outside store range {first}..={last}")]
    OutOfRange {
        period: Period,
        first: Period,
        last: Period,
    },
}

/// Dense quarterly table of named `f64` series.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    first: Period,
    rows: usize,
    names: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<Vec<f64>>,
}

impl SeriesStore {
    /// Creates an empty store spanning `first..=last` inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `last` precedes `first`.
    pub fn new(first: Period, last: Period) -> Self {
        let span = last.quarters_since(first);
        assert!(span >= 0, "store range ends ({last}) before it starts ({first})");
        Self {
            first,
            rows: span as usize + 1,
            names: Vec::new(),
            index: HashMap::new(),
            columns: Vec::new(),
        }
    }

    pub fn first_period(&self) -> Period {
        self.first
    }

    pub fn last_period(&self) -> Period {
        self.first + (self.rows as i64 - 1)
    }

    pub fn contains(&self, period: Period) -> bool {
        let offset = period.quarters_since(self.first);
        offset >= 0 && (offset as usize) < self.rows
    }

    /// Iterates the row periods in chronological order.
    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        let first = self.first;
        (0..self.rows as i64).map(move |k| first + k)
    }

    /// Column names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the column index for `name`, creating an undefined-filled
    /// column if it does not exist yet.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(&col) = self.index.get(name) {
            return col;
        }
        let col = self.columns.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), col);
        self.columns.push(vec![f64::NAN; self.rows]);
        col
    }

    fn row(&self, period: Period) -> Result<usize, StoreError> {
        let offset = period.quarters_since(self.first);
        if offset < 0 || offset as usize >= self.rows {
            return Err(StoreError::OutOfRange {
                period,
                first: self.first,
                last: self.last_period(),
            });
        }
        Ok(offset as usize)
    }

    /// Reads `name` at `period`.
    pub fn get(&self, period: Period, name: &str) -> Result<f64, StoreError> {
        let row = self.row(period)?;
        let col = self
            .index
            .get(name)
            .ok_or_else(|| StoreError::UnknownColumn(name.to_string()))?;
        let value = self.columns[*col][row];
        if value.is_nan() {
            return Err(StoreError::Undefined {
                name: name.to_string(),
                period,
            });
        }
        Ok(value)
    }

    /// Reads `name` at `period - lag` quarters.
    pub fn lag(&self, period: Period, name: &str, lag: i64) -> Result<f64, StoreError> {
        self.get(period - lag, name)
    }

    /// True if the cell holds a value (column exists and is not the
    /// undefined sentinel). Out-of-range periods count as undefined.
    pub fn is_defined(&self, period: Period, name: &str) -> bool {
        self.get(period, name).is_ok()
    }

    /// Writes `value` for `name` at `period`, creating the column if
    /// necessary. The write is visible to every subsequent read.
    pub fn set(&mut self, period: Period, name: &str, value: f64) -> Result<(), StoreError> {
        let row = self.row(period)?;
        let col = self.ensure_column(name);
        self.columns[col][row] = value;
        Ok(())
    }

    /// Adds `delta` to an already-defined cell; leaves undefined cells
    /// untouched and reports whether the addition happened.
    pub fn add(&mut self, period: Period, name: &str, delta: f64) -> Result<bool, StoreError> {
        let row = self.row(period)?;
        let Some(&col) = self.index.get(name) else {
            return Ok(false);
        };
        let cell = &mut self.columns[col][row];
        if cell.is_nan() {
            return Ok(false);
        }
        *cell += delta;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{SeriesStore, StoreError};
    use crate::period::Period;

    fn store() -> SeriesStore {
        SeriesStore::new(Period::new(2020, 1), Period::new(2021, 4))
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut s = store();
        let t = Period::new(2020, 3);
        s.set(t, "GDP", 100.0).unwrap();
        assert_eq!(s.get(t, "GDP").unwrap(), 100.0);
        assert_eq!(s.lag(t + 1, "GDP", 1).unwrap(), 100.0);
    }

    #[test]
    fn unset_cell_is_undefined() {
        let mut s = store();
        s.set(Period::new(2020, 1), "GDP", 1.0).unwrap();
        let err = s.get(Period::new(2020, 2), "GDP").unwrap_err();
        assert!(matches!(err, StoreError::Undefined { .. }));
    }

    #[test]
    fn unknown_column_and_range_errors() {
        let s = store();
        assert!(matches!(
            s.get(Period::new(2020, 1), "GDP").unwrap_err(),
            StoreError::UnknownColumn(_)
        ));
        let mut s = store();
        assert!(matches!(
            s.set(Period::new(1999, 1), "GDP", 1.0).unwrap_err(),
            StoreError::OutOfRange { .. }
        ));
    }

    #[test]
    fn writes_are_visible_in_place() {
        // The Gauss-Seidel contract: a later read in the same pass sees the
        // earlier write.
        let mut s = store();
        let t = Period::new(2020, 1);
        s.set(t, "W", 1.0).unwrap();
        s.set(t, "W", 2.0).unwrap();
        assert_eq!(s.get(t, "W").unwrap(), 2.0);
    }

    #[test]
    fn add_skips_undefined_cells() {
        let mut s = store();
        let t = Period::new(2020, 1);
        assert!(!s.add(t, "GDP", 5.0).unwrap());
        s.set(t, "GDP", 10.0).unwrap();
        assert!(s.add(t, "GDP", 5.0).unwrap());
        assert_eq!(s.get(t, "GDP").unwrap(), 15.0);
    }

    #[test]
    fn lazy_columns_start_undefined() {
        let mut s = store();
        s.ensure_column("NEW");
        assert!(s.has_column("NEW"));
        assert!(!s.is_defined(Period::new(2020, 1), "NEW"));
    }
}
