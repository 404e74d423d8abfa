//! The assembled model: registry, solver, data and reporting.

use anyhow::{bail, Context, Result};
use sterling_core::{GaussSeidelSolver, Period, PeriodOutcome, SeriesStore, SolverSettings};

use crate::{config, data, equations};

/// Key variables reported by [`Model::summary`].
const SUMMARY_VARS: &[(&str, &str)] = &[
    ("GDPM", "Real GDP"),
    ("GDPMPS", "Nominal GDP"),
    ("CONS", "Consumption"),
    ("IF", "Investment"),
    ("X", "Exports"),
    ("M", "Imports"),
    ("CPI", "CPI"),
    ("LFSUR", "Unemployment rate (%)"),
    ("PSNBCY", "Public sector net borrowing"),
    ("PSND", "Public sector net debt"),
    ("CB", "Current account balance"),
];

/// The full quarterly model: an immutable solver over a loaded store.
pub struct Model {
    solver: GaussSeidelSolver,
    store: Option<SeriesStore>,
}

impl Model {
    pub fn new(settings: SolverSettings) -> Result<Self> {
        let registry = equations::registry()?;
        let solver = GaussSeidelSolver::new(registry, settings)
            .with_adjustments(config::adjustments())
            .with_cost_block(equations::cost_block());
        Ok(Self {
            solver,
            store: None,
        })
    }

    pub fn solver(&self) -> &GaussSeidelSolver {
        &self.solver
    }

    /// Populates the store with deterministic synthetic data.
    pub fn generate_synthetic_data(&mut self) {
        self.store = Some(data::generate_synthetic_store());
    }

    /// Loads an externally prepared store.
    pub fn load_store(&mut self, store: SeriesStore) {
        self.store = Some(store);
    }

    pub fn store(&self) -> Option<&SeriesStore> {
        self.store.as_ref()
    }

    /// Solves a span of quarters; defaults to the configured forecast range.
    pub fn solve(
        &mut self,
        start: Option<Period>,
        end: Option<Period>,
    ) -> Result<Vec<PeriodOutcome>> {
        let store = self
            .store
            .as_mut()
            .context("no data loaded; call generate_synthetic_data or load_store first")?;
        let start = start.unwrap_or_else(config::forecast_start);
        let end = end.unwrap_or_else(config::forecast_end);
        self.solver.solve_range(store, start, end)
    }

    /// One variable's defined values over the store range.
    pub fn variable(&self, name: &str) -> Result<Vec<(Period, f64)>> {
        let store = self.store.as_ref().context("no data loaded")?;
        if !store.has_column(name) {
            bail!("unknown variable {name}");
        }
        Ok(store
            .periods()
            .filter_map(|p| store.get(p, name).ok().map(|v| (p, v)))
            .collect())
    }

    /// Formats the key-variable summary for one quarter.
    pub fn summary(&self, period: Period) -> Result<String> {
        let store = self.store.as_ref().context("no data loaded")?;
        let mut out = format!("=== Model summary for {period} ===\n");
        for (name, label) in SUMMARY_VARS {
            if let Ok(value) = store.get(period, name) {
                out.push_str(&format!("  {label:<35}: {value:>15.1}\n"));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::Model;
    use crate::config;
    use sterling_core::{Period, SolverSettings};

    fn solved_model(end: Period) -> Model {
        let mut model = Model::new(SolverSettings::default()).unwrap();
        model.generate_synthetic_data();
        model
            .solve(Some(config::forecast_start()), Some(end))
            .unwrap();
        model
    }

    #[test]
    fn solves_the_first_forecast_quarter() {
        let mut model = Model::new(SolverSettings::default()).unwrap();
        model.generate_synthetic_data();
        let start = config::forecast_start();
        let outcomes = model.solve(Some(start), Some(start)).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].period, start);
        assert!(outcomes[0].iterations >= 1);

        // Every endogenous variable must hold a value afterwards, whether or
        // not the quarter converged within budget.
        let store = model.store().unwrap();
        for name in model.solver().registry().names() {
            assert!(store.is_defined(start, name), "{name} undefined after solve");
        }
    }

    #[test]
    fn earlier_periods_are_unaffected_by_a_longer_range() {
        let start = config::forecast_start();
        let short = solved_model(start + 1);
        let long = solved_model(start + 3);

        let mut p = start;
        while p <= start + 1 {
            for name in ["GDPM", "CONS", "CPIX", "PSNBCY", "LFSUR"] {
                let a = short.store().unwrap().get(p, name).unwrap();
                let b = long.store().unwrap().get(p, name).unwrap();
                assert_eq!(a, b, "{name} at {p} differs between ranges");
            }
            p = p + 1;
        }
    }

    #[test]
    fn summary_reports_key_variables() {
        let model = solved_model(config::forecast_start());
        let summary = model.summary(config::forecast_start()).unwrap();
        assert!(summary.contains("Real GDP"));
        assert!(summary.contains("Unemployment rate"));
    }

    #[test]
    fn solving_before_loading_data_fails() {
        let mut model = Model::new(SolverSettings::default()).unwrap();
        assert!(model.solve(None, None).is_err());
    }
}
