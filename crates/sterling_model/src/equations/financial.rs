//! Domestic financial sector: policy-linked rates, equity prices and money.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{dlog, solve_d, solve_dlog, solve_ratio};

/// d(RIC) = 0.755375*d(R) - 0.286805*(RIC(-1) - 0.822845*R(-1) - 2.583124)
fn ric(c: &EvalContext) -> EvalResult {
    let d_r = c.v("R")? - c.lag("R", 1)?;
    let ecm = c.lag("RIC", 1)? - 0.822845 * c.lag("R", 1)? - 2.583124;
    Ok(solve_d(c.lag("RIC", 1)?, 0.755375 * d_r - 0.286805 * ecm))
}

/// dlog(EQPR) = dlog(GDPMPS)
fn eqpr(c: &EvalContext) -> EvalResult {
    Ok(solve_dlog(c.lag("EQPR", 1)?, dlog(c, "GDPMPS", 0)?))
}

/// dlog(M0) = dlog(GDPMPS)
fn m0(c: &EvalContext) -> EvalResult {
    Ok(solve_dlog(c.lag("M0", 1)?, dlog(c, "GDPMPS", 0)?))
}

/// M4IC / M4IC(-1) = GDPMPS / GDPMPS(-1)
fn m4ic(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("M4IC", 1)?,
        c.v("GDPMPS")? / c.lag("GDPMPS", 1)?,
    ))
}

/// M4 = DEPHH + M4IC + M4OFC
fn m4(c: &EvalContext) -> EvalResult {
    Ok(c.v("DEPHH")? + c.v("M4IC")? + c.v("M4OFC")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("RIC", Difference, ric),
        Equation::new("EQPR", LogDifference, eqpr),
        Equation::new("M0", LogDifference, m0),
        Equation::new("M4IC", Ratio, m4ic),
        Equation::new("M4", Identity, m4),
    ]
}
