/// The `sterling_core` crate is the solver engine for the Sterling quarterly
/// macroeconomic model: a period-by-period Gauss-Seidel relaxation over a
/// large simultaneous equation system, with no explicit dependency graph.
///
/// Key components:
/// - **Period / SeriesStore**: quarterly time arithmetic and the shared
///   dense table of named series with lagged lookup.
/// - **Registry**: the ordered, immutable collection of endogenous
///   equations, each a pure function of the store state.
/// - **Cost block**: closed-form 3×3 pre-solve for the mutually
///   referential cost indices, a convergence accelerator with silent
///   fallback.
/// - **Solver**: damped Gauss-Seidel sweeps with per-period convergence
///   diagnostics, post-convergence additive adjustments, and the
///   sequential range driver.
pub mod adjustments;
pub mod cost_block;
pub mod period;
pub mod registry;
pub mod solver;
pub mod store;

pub use adjustments::AdjustmentTable;
pub use cost_block::CostBlock;
pub use period::Period;
pub use registry::{
    Equation, EquationKind, EquationRegistry, EvalContext, EvalError, EvalResult, RegistryBuilder,
};
pub use solver::{GaussSeidelSolver, PeriodOutcome, SolverSettings};
pub use store::{SeriesStore, StoreError};
