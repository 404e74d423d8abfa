//! Equations and the ordered registry the solver sweeps over.
//!
//! Each equation is a pure function from the store state at a target period
//! to a candidate value for one endogenous variable; the solver performs the
//! write. Equation bodies were algebraically inverted from their natural
//! differenced or ratioed form into direct "new value" form; the
//! [`EquationKind`] tag records which inversion was applied but the engine
//! treats every kind identically.
//!
//! Registry order is a convergence tuning, not a correctness requirement:
//! the solver re-sweeps until a fixed point, so any order converges to the
//! same solution, but evaluating upstream sub-systems first converges in
//! fewer sweeps. The order is therefore an explicit, test-covered list
//! rather than an accident of construction.

use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::period::Period;
use crate::store::{SeriesStore, StoreError};

/// Default deepest lag any registered equation reads, in quarters.
pub const DEFAULT_MAX_LAG: i64 = 6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The computation produced a NaN or infinity.
    #[error("evaluation of {name} produced a non-finite value")]
    NonFinite { name: String },
}

pub type EvalResult = Result<f64, EvalError>;

/// Read-only view of the store pinned to the period being solved.
///
/// Equation bodies receive this instead of the raw store so that all reads
/// are expressed relative to the target period.
pub struct EvalContext<'a> {
    store: &'a SeriesStore,
    period: Period,
}

impl<'a> EvalContext<'a> {
    pub fn new(store: &'a SeriesStore, period: Period) -> Self {
        Self { store, period }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn store(&self) -> &SeriesStore {
        self.store
    }

    /// Current-period value of `name`.
    pub fn v(&self, name: &str) -> EvalResult {
        Ok(self.store.get(self.period, name)?)
    }

    /// Value of `name` at `lag` quarters before the target period.
    pub fn lag(&self, name: &str, lag: i64) -> EvalResult {
        Ok(self.store.lag(self.period, name, lag)?)
    }

    /// Value of `name` at an absolute period, independent of the target
    /// period. Used by base-year average equations.
    pub fn at(&self, name: &str, period: Period) -> EvalResult {
        Ok(self.store.get(period, name)?)
    }
}

/// How an equation's natural form was inverted into direct form.
///
/// Informational only; the solver treats every kind as "produces a
/// candidate value".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquationKind {
    /// Direct algebraic combination of other values.
    Identity,
    /// `d(X) = rhs`, evaluated as `X(-1) + rhs`.
    Difference,
    /// `dlog(X) = rhs`, evaluated as `X(-1) * exp(rhs)`.
    LogDifference,
    /// `X / X(-k) = rhs`, evaluated as `X(-k) * rhs`.
    Ratio,
    /// `d(X) / Y = rhs`, evaluated as `X(-1) + Y * rhs`.
    RatioOfDifferences,
    /// `log(X) = rhs`, evaluated as `exp(rhs)`.
    Level,
}

pub type EvalFn = fn(&EvalContext) -> EvalResult;

/// One registered equation: the variable it determines, the inversion tag,
/// and the pure evaluation function.
#[derive(Clone)]
pub struct Equation {
    name: &'static str,
    kind: EquationKind,
    eval: EvalFn,
}

impl Equation {
    pub fn new(name: &'static str, kind: EquationKind, eval: EvalFn) -> Self {
        Self { name, kind, eval }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> EquationKind {
        self.kind
    }

    /// Runs the evaluation function, mapping NaN/infinite results into
    /// [`EvalError::NonFinite`] so every skippable outcome is an `Err`.
    pub fn evaluate(&self, ctx: &EvalContext) -> EvalResult {
        let value = (self.eval)(ctx)?;
        if !value.is_finite() {
            return Err(EvalError::NonFinite {
                name: self.name.to_string(),
            });
        }
        Ok(value)
    }
}

impl std::fmt::Debug for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Equation")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Immutable ordered collection of all endogenous equations.
///
/// Built once at startup via [`RegistryBuilder`]; iteration order is the
/// sweep order.
#[derive(Debug)]
pub struct EquationRegistry {
    equations: Vec<Equation>,
    groups: Vec<(&'static str, usize)>,
    max_lag: i64,
}

impl EquationRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            equations: Vec::new(),
            groups: Vec::new(),
            seen: HashSet::new(),
            max_lag: DEFAULT_MAX_LAG,
        }
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Equations in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = &Equation> {
        self.equations.iter()
    }

    /// The endogenous variable set, in sweep order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.equations.iter().map(Equation::name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.equations.iter().any(|eq| eq.name == name)
    }

    /// `(group name, equation count)` pairs in registration order.
    pub fn groups(&self) -> &[(&'static str, usize)] {
        &self.groups
    }

    /// Deepest lag any registered equation reads, in quarters. The range
    /// driver requires this much defined history before the first solved
    /// period.
    pub fn max_lag(&self) -> i64 {
        self.max_lag
    }
}

/// Assembles the registry group by group, rejecting duplicate targets.
pub struct RegistryBuilder {
    equations: Vec<Equation>,
    groups: Vec<(&'static str, usize)>,
    seen: HashSet<&'static str>,
    max_lag: i64,
}

impl RegistryBuilder {
    /// Appends a named group of equations in sweep order.
    pub fn group(
        mut self,
        name: &'static str,
        equations: Vec<Equation>,
    ) -> Result<RegistryBuilder> {
        for eq in &equations {
            if !self.seen.insert(eq.name) {
                bail!("equation for {} registered twice (group {name})", eq.name);
            }
        }
        self.groups.push((name, equations.len()));
        self.equations.extend(equations);
        Ok(self)
    }

    /// Overrides the declared maximum lag depth.
    pub fn max_lag(mut self, quarters: i64) -> RegistryBuilder {
        self.max_lag = quarters;
        self
    }

    pub fn build(self) -> EquationRegistry {
        EquationRegistry {
            equations: self.equations,
            groups: self.groups,
            max_lag: self.max_lag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EquationKind, EquationRegistry, EvalContext, EvalResult};
    use crate::period::Period;
    use crate::store::SeriesStore;

    fn double_a(c: &EvalContext) -> EvalResult {
        Ok(2.0 * c.v("A")?)
    }

    fn a_plus_lag(c: &EvalContext) -> EvalResult {
        Ok(c.v("A")? + c.lag("B", 1)?)
    }

    fn eq(name: &'static str, f: super::EvalFn) -> super::Equation {
        super::Equation::new(name, EquationKind::Identity, f)
    }

    #[test]
    fn builder_preserves_group_order() {
        let registry = EquationRegistry::builder()
            .group("first", vec![eq("B", double_a)])
            .unwrap()
            .group("second", vec![eq("C", a_plus_lag)])
            .unwrap()
            .build();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(registry.groups(), &[("first", 1), ("second", 1)]);
    }

    #[test]
    fn duplicate_target_is_rejected() {
        let result = EquationRegistry::builder()
            .group("first", vec![eq("B", double_a)])
            .unwrap()
            .group("second", vec![eq("B", a_plus_lag)]);
        assert!(result.is_err());
    }

    #[test]
    fn context_reads_current_and_lagged() {
        let mut store = SeriesStore::new(Period::new(2020, 1), Period::new(2020, 4));
        store.set(Period::new(2020, 1), "B", 7.0).unwrap();
        store.set(Period::new(2020, 2), "A", 3.0).unwrap();
        let ctx = EvalContext::new(&store, Period::new(2020, 2));
        assert_eq!(a_plus_lag(&ctx).unwrap(), 10.0);
        assert!(ctx.v("B").is_err());
    }
}
