//! Closed-form pre-solve for the tightly coupled cost-index block.
//!
//! Three cost indices are mutually defined as linear combinations of each
//! other plus exogenous terms (an input-output closure). Left to the main
//! sweep, this tight loop converges slowly; instead the block is solved
//! exactly once per period, before sweeping, as the 3×3 linear system
//!
//! ```text
//! (I - C/100) * x = a
//! ```
//!
//! where `C` holds the cross-coefficients in index points per 100 and `a`
//! the exogenous intercepts. The pre-solve is strictly a convergence
//! accelerator: on any undefined input or a singular matrix it steps aside
//! and lets the ordinary Gauss-Seidel sweep resolve the three variables.

use nalgebra::{Matrix3, Vector3};
use tracing::debug;

use crate::period::Period;
use crate::registry::{EvalContext, EvalError};
use crate::store::SeriesStore;

/// Computes the exogenous intercepts `a` from the non-circular inputs.
pub type InterceptFn = fn(&EvalContext) -> Result<[f64; 3], EvalError>;

/// Definition of one linear cost block.
///
/// `cross[i][j]` is the coefficient of `targets[j]` in the equation for
/// `targets[i]`, in index points per 100; the diagonal must be zero (no
/// variable references itself). The intercept function must not read any of
/// the target variables, otherwise the closed form would not match the
/// registered equations — the model crate's tests pin this down.
#[derive(Clone)]
pub struct CostBlock {
    targets: [&'static str; 3],
    cross: [[f64; 3]; 3],
    intercepts: InterceptFn,
}

impl CostBlock {
    /// # Panics
    ///
    /// Panics if `cross` has a nonzero diagonal entry.
    pub fn new(targets: [&'static str; 3], cross: [[f64; 3]; 3], intercepts: InterceptFn) -> Self {
        for (i, row) in cross.iter().enumerate() {
            assert!(
                row[i] == 0.0,
                "cost block {}: self-coefficient must be zero",
                targets[i]
            );
        }
        Self {
            targets,
            cross,
            intercepts,
        }
    }

    pub fn targets(&self) -> [&'static str; 3] {
        self.targets
    }

    /// Solves the block at `period` and writes the three results into the
    /// store. Returns whether the closed form was applied; `false` means
    /// the sweep will resolve the block instead.
    pub fn pre_solve(&self, store: &mut SeriesStore, period: Period) -> bool {
        if self.targets.iter().any(|name| !store.has_column(name)) {
            return false;
        }

        let intercepts = {
            let ctx = EvalContext::new(store, period);
            match (self.intercepts)(&ctx) {
                Ok(a) if a.iter().all(|v| v.is_finite()) => a,
                Ok(_) => {
                    debug!(%period, "cost block intercepts non-finite, deferring to sweep");
                    return false;
                }
                Err(err) => {
                    debug!(%period, %err, "cost block inputs unavailable, deferring to sweep");
                    return false;
                }
            }
        };

        let mut matrix = Matrix3::identity();
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    matrix[(i, j)] = -self.cross[i][j] / 100.0;
                }
            }
        }
        let rhs = Vector3::from(intercepts);

        let Some(solution) = matrix.lu().solve(&rhs) else {
            debug!(%period, "cost block matrix singular, deferring to sweep");
            return false;
        };
        if solution.iter().any(|v| !v.is_finite()) {
            return false;
        }

        for (name, value) in self.targets.iter().zip(solution.iter()) {
            // Targets were checked above; the write cannot fail for a period
            // the solver is iterating.
            if store.set(period, name, *value).is_err() {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Debug for CostBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostBlock")
            .field("targets", &self.targets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::CostBlock;
    use crate::period::Period;
    use crate::registry::{EvalContext, EvalError};
    use crate::store::SeriesStore;

    fn intercepts(c: &EvalContext) -> Result<[f64; 3], EvalError> {
        Ok([c.v("A1")?, c.v("A2")?, c.v("A3")?])
    }

    fn block() -> CostBlock {
        CostBlock::new(
            ["X1", "X2", "X3"],
            [[0.0, 10.0, 5.0], [20.0, 0.0, 2.0], [8.0, 4.0, 0.0]],
            intercepts,
        )
    }

    fn seeded_store(t: Period) -> SeriesStore {
        let mut store = SeriesStore::new(t, t);
        store.set(t, "A1", 90.0).unwrap();
        store.set(t, "A2", 70.0).unwrap();
        store.set(t, "A3", 80.0).unwrap();
        for name in ["X1", "X2", "X3"] {
            store.set(t, name, 1.0).unwrap();
        }
        store
    }

    #[test]
    fn closed_form_satisfies_the_original_equations() {
        let t = Period::new(2025, 1);
        let mut store = seeded_store(t);
        assert!(block().pre_solve(&mut store, t));

        let x1 = store.get(t, "X1").unwrap();
        let x2 = store.get(t, "X2").unwrap();
        let x3 = store.get(t, "X3").unwrap();

        // Substituted back, each right-hand side must reproduce the solved
        // value to near machine precision.
        let rhs1 = 90.0 + 10.0 * x2 / 100.0 + 5.0 * x3 / 100.0;
        let rhs2 = 70.0 + 20.0 * x1 / 100.0 + 2.0 * x3 / 100.0;
        let rhs3 = 80.0 + 8.0 * x1 / 100.0 + 4.0 * x2 / 100.0;
        assert!(((x1 - rhs1) / rhs1).abs() < 1e-9);
        assert!(((x2 - rhs2) / rhs2).abs() < 1e-9);
        assert!(((x3 - rhs3) / rhs3).abs() < 1e-9);
    }

    #[test]
    fn missing_input_defers_to_sweep() {
        let t = Period::new(2025, 1);
        let mut store = seeded_store(t);
        store.set(t, "A2", f64::NAN).unwrap();
        // NaN sentinel means "undefined": the read fails and the pre-solve
        // declines without touching the targets.
        store.set(t, "X1", 123.0).unwrap();
        assert!(!block().pre_solve(&mut store, t));
        assert_eq!(store.get(t, "X1").unwrap(), 123.0);
    }

    #[test]
    fn absent_target_column_defers_to_sweep() {
        let t = Period::new(2025, 1);
        let mut store = SeriesStore::new(t, t);
        store.set(t, "A1", 1.0).unwrap();
        assert!(!block().pre_solve(&mut store, t));
    }

    #[test]
    fn singular_matrix_defers_to_sweep() {
        fn zero_intercepts(_: &EvalContext) -> Result<[f64; 3], EvalError> {
            Ok([0.0, 0.0, 0.0])
        }
        // cross/100 chosen so (I - C/100) has two identical rows
        // ([1, 1, -0.5] twice).
        let block = CostBlock::new(
            ["X1", "X2", "X3"],
            [
                [0.0, -100.0, 50.0],
                [-100.0, 0.0, 50.0],
                [10.0, 10.0, 0.0],
            ],
            zero_intercepts,
        );
        let t = Period::new(2025, 1);
        let mut store = seeded_store(t);
        assert!(!block.pre_solve(&mut store, t));
    }
}
