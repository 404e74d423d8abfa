//! Gauss-Seidel period solver and the sequential range driver.
//!
//! Each quarter is solved as a fixed-point problem: seed the endogenous
//! variables, pre-solve the linear cost block, then sweep the full equation
//! registry repeatedly, updating every variable in place with damped
//! relaxation until the largest relative change falls below tolerance or
//! the iteration budget runs out. In-place updates are essential: an
//! equation evaluated later in a sweep sees the values written earlier in
//! that same sweep, which is what distinguishes Gauss-Seidel from Jacobi
//! iteration and what makes this tightly circular system converge at all.
//!
//! Periods are strictly sequential — period `t` reads the finalized state
//! of `t-1` and earlier through lagged lookups, and a finalized period is
//! never revisited.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::adjustments::AdjustmentTable;
use crate::cost_block::CostBlock;
use crate::period::Period;
use crate::registry::{EquationRegistry, EvalContext};
use crate::store::SeriesStore;

/// Magnitude below which a variable is left out of the relative-change
/// convergence metric (it is still updated).
///
/// Known limitation, preserved from the original convergence definition:
/// a variable oscillating entirely below this magnitude never registers in
/// the metric and cannot by itself hold up convergence.
pub const NEAR_ZERO: f64 = 1e-10;

/// Placeholder used to seed an endogenous variable with no current or
/// previous value; nonzero so ratio-form equations do not divide by zero
/// on the first sweep.
const SEED_FALLBACK: f64 = 1.0;

/// Tuning knobs for the per-period fixed-point iteration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Sweep budget per period.
    pub max_iterations: usize,
    /// Convergence threshold on the max relative change per sweep.
    pub tolerance: f64,
    /// Under-relaxation weight on the newly computed value, in `[0, 1]`.
    pub damping: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-8,
            damping: 0.7,
        }
    }
}

/// Per-period solve diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodOutcome {
    pub period: Period,
    /// Sweeps performed; equals the budget when not converged.
    pub iterations: usize,
    pub converged: bool,
    /// Largest relative change observed in the final sweep.
    pub max_rel_change: f64,
    /// Variable with the largest relative change in the final sweep.
    pub worst_variable: Option<String>,
    /// Evaluations skipped in the final sweep (undefined inputs or
    /// non-finite results).
    pub skipped_updates: usize,
}

/// Solves the simultaneous system one quarter at a time.
#[derive(Debug)]
pub struct GaussSeidelSolver {
    registry: EquationRegistry,
    settings: SolverSettings,
    adjustments: AdjustmentTable,
    cost_block: Option<CostBlock>,
}

impl GaussSeidelSolver {
    pub fn new(registry: EquationRegistry, settings: SolverSettings) -> Self {
        Self {
            registry,
            settings,
            adjustments: AdjustmentTable::default(),
            cost_block: None,
        }
    }

    /// Attaches the post-convergence additive corrections.
    pub fn with_adjustments(mut self, adjustments: AdjustmentTable) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Attaches the closed-form cost-block pre-solver.
    pub fn with_cost_block(mut self, cost_block: CostBlock) -> Self {
        self.cost_block = Some(cost_block);
        self
    }

    pub fn registry(&self) -> &EquationRegistry {
        &self.registry
    }

    pub fn settings(&self) -> SolverSettings {
        self.settings
    }

    /// Seeds every endogenous variable at `period`: keep an existing value,
    /// else carry the previous period forward, else fall back to 1.0.
    fn initialise_period(&self, store: &mut SeriesStore, period: Period) -> Result<()> {
        for name in self.registry.names() {
            store.ensure_column(name);
            if store.is_defined(period, name) {
                continue;
            }
            let seed = store
                .get(period - 1, name)
                .unwrap_or(SEED_FALLBACK);
            store.set(period, name, seed)?;
        }
        Ok(())
    }

    /// Solves all equations for a single quarter.
    ///
    /// Always returns an outcome: exhausting the iteration budget is a
    /// reported condition, not a failure. Errors only on a period outside
    /// the store's range.
    pub fn solve_period(&self, store: &mut SeriesStore, period: Period) -> Result<PeriodOutcome> {
        if !store.contains(period) {
            bail!(
                "cannot solve {period}: outside store range {}..={}",
                store.first_period(),
                store.last_period()
            );
        }

        self.initialise_period(store, period)?;

        if let Some(block) = &self.cost_block {
            if block.pre_solve(store, period) {
                debug!(%period, "cost block pre-solved");
            }
        }

        let mut max_change = 0.0_f64;
        let mut worst: Option<&'static str> = None;
        let mut skipped = 0usize;

        for iteration in 1..=self.settings.max_iterations {
            max_change = 0.0;
            worst = None;
            skipped = 0;

            for equation in self.registry.iter() {
                let name = equation.name();
                let old = store.get(period, name).unwrap_or(0.0);

                let computed = {
                    let ctx = EvalContext::new(store, period);
                    equation.evaluate(&ctx)
                };
                let computed = match computed {
                    Ok(value) => value,
                    Err(_) => {
                        // Undefined input or non-finite result: keep the
                        // prior value this pass and keep sweeping.
                        skipped += 1;
                        continue;
                    }
                };

                let damped =
                    self.settings.damping * computed + (1.0 - self.settings.damping) * old;
                store.set(period, name, damped)?;

                if old.abs() > NEAR_ZERO {
                    let rel_change = ((damped - old) / old).abs();
                    if rel_change > max_change {
                        max_change = rel_change;
                        worst = Some(name);
                    }
                }
            }

            if iteration % 10 == 0 {
                debug!(
                    %period,
                    iteration,
                    max_change,
                    worst = worst.unwrap_or(""),
                    skipped,
                    "sweeping"
                );
            }

            if max_change < self.settings.tolerance {
                self.adjustments.apply(store, period);
                return Ok(PeriodOutcome {
                    period,
                    iterations: iteration,
                    converged: true,
                    max_rel_change: max_change,
                    worst_variable: worst.map(str::to_string),
                    skipped_updates: skipped,
                });
            }
        }

        warn!(
            %period,
            max_iterations = self.settings.max_iterations,
            max_change,
            worst = worst.unwrap_or(""),
            "failed to converge, carrying best-effort values forward"
        );
        self.adjustments.apply(store, period);
        Ok(PeriodOutcome {
            period,
            iterations: self.settings.max_iterations,
            converged: false,
            max_rel_change: max_change,
            worst_variable: worst.map(str::to_string),
            skipped_updates: skipped,
        })
    }

    /// Solves a contiguous span of quarters in ascending order.
    ///
    /// Validates the settings and the run-up history once, before touching
    /// any period; a period that fails to converge is reported in its
    /// outcome and the range continues.
    pub fn solve_range(
        &self,
        store: &mut SeriesStore,
        start: Period,
        end: Period,
    ) -> Result<Vec<PeriodOutcome>> {
        self.validate_range(store, start, end)?;

        let span = end.quarters_since(start) + 1;
        let mut outcomes = Vec::with_capacity(span as usize);
        let mut period = start;
        while period <= end {
            let outcome = self
                .solve_period(store, period)
                .with_context(|| format!("solving {period}"))?;
            debug!(
                %period,
                iterations = outcome.iterations,
                converged = outcome.converged,
                "period finished"
            );
            outcomes.push(outcome);
            period = period + 1;
        }
        Ok(outcomes)
    }

    fn validate_range(&self, store: &SeriesStore, start: Period, end: Period) -> Result<()> {
        if self.registry.is_empty() {
            bail!("equation registry is empty");
        }
        if self.settings.max_iterations == 0 {
            bail!("max_iterations must be greater than zero");
        }
        if self.settings.tolerance <= 0.0 {
            bail!("tolerance must be positive");
        }
        if !(0.0..=1.0).contains(&self.settings.damping) {
            bail!("damping must lie in [0, 1]");
        }
        if end < start {
            bail!("solve range ends ({end}) before it starts ({start})");
        }
        if !store.contains(start) || !store.contains(end) {
            bail!(
                "solve range {start}..={end} outside store range {}..={}",
                store.first_period(),
                store.last_period()
            );
        }

        // The run-up window must physically exist and, for every endogenous
        // variable that already has history, hold no gaps: equations read up
        // to max_lag quarters back from the first solved period.
        let max_lag = self.registry.max_lag();
        let runup_start = start - max_lag;
        if !store.contains(runup_start) {
            let first = store.first_period();
            bail!(
                "store history starts at {first} but equations read back to \
                 {runup_start} (max lag {max_lag} quarters before {start})"
            );
        }
        for name in self.registry.names() {
            if !store.has_column(name) {
                // Introduced lazily and seeded during initialisation.
                continue;
            }
            for k in 1..=max_lag {
                let period = start - k;
                if !store.is_defined(period, name) {
                    bail!(
                        "incomplete run-up history: {name} undefined at {period} \
                         (needs {max_lag} quarters before {start})"
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GaussSeidelSolver, SolverSettings};
    use crate::adjustments::AdjustmentTable;
    use crate::period::Period;
    use crate::registry::{Equation, EquationKind, EquationRegistry, EvalContext, EvalResult};
    use crate::store::SeriesStore;

    // A small well-posed circular system:
    //   A = 0.5 * B + 1
    //   B = 0.5 * A + 1
    // with fixed point A = B = 2.
    fn eq_a(c: &EvalContext) -> EvalResult {
        Ok(0.5 * c.v("B")? + 1.0)
    }

    fn eq_b(c: &EvalContext) -> EvalResult {
        Ok(0.5 * c.v("A")? + 1.0)
    }

    // Pure identity of an exogenous input, no feedback.
    fn eq_ident(c: &EvalContext) -> EvalResult {
        Ok(2.0 * c.v("EXO")? + c.lag("EXO", 1)?)
    }

    // Flips sign every evaluation via its own current value.
    fn eq_flip(c: &EvalContext) -> EvalResult {
        Ok(-c.v("FLIP")?)
    }

    fn registry(pairs: Vec<(&'static str, crate::registry::EvalFn)>) -> EquationRegistry {
        let equations = pairs
            .into_iter()
            .map(|(name, f)| Equation::new(name, EquationKind::Identity, f))
            .collect();
        EquationRegistry::builder()
            .max_lag(1)
            .group("test", equations)
            .unwrap()
            .build()
    }

    fn seeded_store(names: &[&str]) -> SeriesStore {
        let mut store = SeriesStore::new(Period::new(2024, 1), Period::new(2026, 4));
        for period in [Period::new(2024, 1), Period::new(2024, 2)] {
            for name in names {
                store.set(period, name, 1.0).unwrap();
            }
        }
        store
    }

    fn solve_one(
        solver: &GaussSeidelSolver,
        store: &mut SeriesStore,
        t: Period,
    ) -> super::PeriodOutcome {
        solver.solve_range(store, t, t).unwrap().remove(0)
    }

    #[test]
    fn circular_pair_converges_to_fixed_point() {
        let solver = GaussSeidelSolver::new(
            registry(vec![("A", eq_a), ("B", eq_b)]),
            SolverSettings::default(),
        );
        let mut store = seeded_store(&["A", "B"]);
        let t = Period::new(2024, 3);
        let outcome = solve_one(&solver, &mut store, t);
        assert!(outcome.converged);
        assert!((store.get(t, "A").unwrap() - 2.0).abs() < 1e-6);
        assert!((store.get(t, "B").unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn identity_equation_is_exact() {
        // An identity with no feedback computes its reference value exactly
        // on the first evaluation, independent of damping; the stored value
        // then settles onto it.
        let settings = SolverSettings {
            damping: 0.3,
            ..SolverSettings::default()
        };
        let solver = GaussSeidelSolver::new(registry(vec![("OUT", eq_ident)]), settings);
        let mut store = seeded_store(&["OUT"]);
        let t = Period::new(2024, 3);
        store.set(Period::new(2024, 2), "EXO", 5.0).unwrap();
        store.set(t, "EXO", 7.0).unwrap();

        let reference = 2.0 * 7.0 + 5.0;
        let computed = {
            let ctx = EvalContext::new(&store, t);
            eq_ident(&ctx).unwrap()
        };
        assert_eq!(computed, reference);

        let outcome = solve_one(&solver, &mut store, t);
        assert!(outcome.converged);
        assert!((store.get(t, "OUT").unwrap() - reference).abs() < 1e-6 * reference);
    }

    fn eq_four(_: &EvalContext) -> EvalResult {
        Ok(4.0)
    }

    #[test]
    fn damped_update_stays_between_old_and_computed() {
        for damping in [0.0, 0.3, 0.7, 1.0] {
            let settings = SolverSettings {
                max_iterations: 1,
                damping,
                ..SolverSettings::default()
            };
            let solver = GaussSeidelSolver::new(registry(vec![("V", eq_four)]), settings);
            let mut store = seeded_store(&["V"]);
            let t = Period::new(2024, 3);
            store.set(t, "V", 10.0).unwrap();
            solve_one(&solver, &mut store, t);
            let stored = store.get(t, "V").unwrap();
            assert!(
                (4.0..=10.0).contains(&stored),
                "damping {damping} left {stored} outside [computed, old]"
            );
        }
    }

    #[test]
    fn existing_fixed_point_converges_immediately() {
        // History already at the fixed point A = B = 2: seeding from the
        // previous quarter lands on the solution, so the first sweep's
        // relative change is zero and the period converges at once.
        let solver = GaussSeidelSolver::new(
            registry(vec![("A", eq_a), ("B", eq_b)]),
            SolverSettings::default(),
        );
        let mut store = SeriesStore::new(Period::new(2024, 1), Period::new(2024, 4));
        for period in [Period::new(2024, 1), Period::new(2024, 2)] {
            store.set(period, "A", 2.0).unwrap();
            store.set(period, "B", 2.0).unwrap();
        }
        let t = Period::new(2024, 3);
        let outcome = solve_one(&solver, &mut store, t);
        assert!(outcome.converged);
        assert!(outcome.iterations <= 5);
        assert!((store.get(t, "A").unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn undamped_oscillator_reports_non_convergence() {
        let settings = SolverSettings {
            max_iterations: 50,
            damping: 1.0,
            ..SolverSettings::default()
        };
        let solver = GaussSeidelSolver::new(registry(vec![("FLIP", eq_flip)]), settings);
        let mut store = seeded_store(&["FLIP"]);
        let outcome = solve_one(&solver, &mut store, Period::new(2024, 3));
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 50);
        assert_eq!(outcome.worst_variable.as_deref(), Some("FLIP"));
        assert!(outcome.max_rel_change > 0.0);
    }

    #[test]
    fn adjustments_applied_exactly_once_per_period() {
        let solver = GaussSeidelSolver::new(
            registry(vec![("A", eq_a), ("B", eq_b)]),
            SolverSettings::default(),
        )
        .with_adjustments(AdjustmentTable::new([("A", "A_ADD")]));
        let mut store = seeded_store(&["A", "B"]);
        let t = Period::new(2024, 3);
        store.set(t, "A_ADD", 0.25).unwrap();
        solve_one(&solver, &mut store, t);
        // Fixed point 2.0 plus one application of the add-factor.
        assert!((store.get(t, "A").unwrap() - 2.25).abs() < 1e-6);
    }

    #[test]
    fn seeds_carry_forward_and_fall_back() {
        let solver = GaussSeidelSolver::new(
            registry(vec![("A", eq_a), ("B", eq_b)]),
            SolverSettings::default(),
        );
        let mut store = seeded_store(&["A", "B"]);
        let t = Period::new(2024, 3);
        store.set(Period::new(2024, 2), "A", 42.0).unwrap();
        solver.initialise_period(&mut store, t).unwrap();
        assert_eq!(store.get(t, "A").unwrap(), 42.0);
        // A never-seen endogenous name would seed at 1.0; replicate by
        // clearing B's history in a fresh store.
        let registry2 = registry(vec![("C", eq_a)]);
        let solver2 = GaussSeidelSolver::new(registry2, SolverSettings::default());
        let mut fresh = SeriesStore::new(Period::new(2024, 1), Period::new(2024, 4));
        solver2.initialise_period(&mut fresh, t).unwrap();
        assert_eq!(fresh.get(t, "C").unwrap(), 1.0);
    }

    #[test]
    fn sequential_solves_do_not_revisit_earlier_periods() {
        let make_solver = || {
            GaussSeidelSolver::new(
                registry(vec![("A", eq_a), ("B", eq_b)]),
                SolverSettings::default(),
            )
        };
        let t0 = Period::new(2024, 3);
        let t1 = Period::new(2024, 4);
        let t2 = Period::new(2025, 2);

        let mut short = seeded_store(&["A", "B"]);
        make_solver().solve_range(&mut short, t0, t1).unwrap();

        let mut long = seeded_store(&["A", "B"]);
        make_solver().solve_range(&mut long, t0, t2).unwrap();

        let mut p = t0;
        while p <= t1 {
            assert_eq!(short.get(p, "A").unwrap(), long.get(p, "A").unwrap());
            assert_eq!(short.get(p, "B").unwrap(), long.get(p, "B").unwrap());
            p = p + 1;
        }
    }

    #[test]
    fn missing_runup_history_is_fatal_before_solving() {
        let solver = GaussSeidelSolver::new(
            registry(vec![("A", eq_a), ("B", eq_b)]),
            SolverSettings::default(),
        );
        let mut store = seeded_store(&["A", "B"]);
        // Punch a hole in the run-up window.
        store.set(Period::new(2024, 2), "A", f64::NAN).unwrap();
        let err = solver
            .solve_range(&mut store, Period::new(2024, 3), Period::new(2024, 4))
            .unwrap_err();
        assert!(err.to_string().contains("run-up"));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut store = seeded_store(&["A", "B"]);
        let t = Period::new(2024, 3);
        for settings in [
            SolverSettings {
                max_iterations: 0,
                ..SolverSettings::default()
            },
            SolverSettings {
                tolerance: 0.0,
                ..SolverSettings::default()
            },
            SolverSettings {
                damping: 1.5,
                ..SolverSettings::default()
            },
        ] {
            let solver =
                GaussSeidelSolver::new(registry(vec![("A", eq_a), ("B", eq_b)]), settings);
            assert!(solver.solve_range(&mut store, t, t).is_err());
        }
    }
}
