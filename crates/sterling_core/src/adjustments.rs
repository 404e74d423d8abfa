//! Post-convergence additive corrections.
//!
//! A small set of endogenous variables carries an exogenous add-factor: a
//! companion column whose value is added to the solved result once per
//! period, after the sweep loop has finished. The corrections must never
//! feed back into the iteration, so the solver applies the table exactly
//! once, whether the period converged or ran out of budget.

use crate::period::Period;
use crate::store::SeriesStore;

/// Fixed mapping from target variables to their adjustment columns.
#[derive(Debug, Clone, Default)]
pub struct AdjustmentTable {
    pairs: Vec<(&'static str, &'static str)>,
}

impl AdjustmentTable {
    pub fn new(pairs: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(target, adjustment)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.pairs.iter().copied()
    }

    /// Adds each defined adjustment value to its target at `period`.
    ///
    /// Pairs whose columns are missing, or whose adjustment value is
    /// undefined at `period`, are skipped. Returns the number of targets
    /// actually adjusted.
    pub fn apply(&self, store: &mut SeriesStore, period: Period) -> usize {
        let mut applied = 0;
        for (target, adjustment) in &self.pairs {
            let Ok(delta) = store.get(period, adjustment) else {
                continue;
            };
            if let Ok(true) = store.add(period, target, delta) {
                applied += 1;
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::AdjustmentTable;
    use crate::period::Period;
    use crate::store::SeriesStore;

    #[test]
    fn applies_only_defined_pairs() {
        let t = Period::new(2025, 1);
        let mut store = SeriesStore::new(t, t);
        store.set(t, "PSNBCY", 100.0).unwrap();
        store.set(t, "PSNBCY_A", 5.0).unwrap();
        store.set(t, "SBHH", 50.0).unwrap();
        // SBHH_A column missing entirely; TYWHH target missing.
        store.set(t, "TYWHH_A", 9.0).unwrap();

        let table = AdjustmentTable::new([
            ("PSNBCY", "PSNBCY_A"),
            ("SBHH", "SBHH_A"),
            ("TYWHH", "TYWHH_A"),
        ]);
        assert_eq!(table.apply(&mut store, t), 1);
        assert_eq!(store.get(t, "PSNBCY").unwrap(), 105.0);
        assert_eq!(store.get(t, "SBHH").unwrap(), 50.0);
    }

    #[test]
    fn double_application_double_counts() {
        // Guards the "exactly once per period" contract: running the table
        // twice visibly corrupts the result, so the solver must only ever
        // invoke it once.
        let t = Period::new(2025, 1);
        let mut store = SeriesStore::new(t, t);
        store.set(t, "V", 10.0).unwrap();
        store.set(t, "V_A", 1.0).unwrap();
        let table = AdjustmentTable::new([("V", "V_A")]);
        table.apply(&mut store, t);
        table.apply(&mut store, t);
        assert_eq!(store.get(t, "V").unwrap(), 12.0);
    }
}
