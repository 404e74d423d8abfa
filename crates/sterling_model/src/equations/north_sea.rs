//! North Sea oil: demand, trade and trading profits.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{dlog, pulse_at, safe_log, solve_dlog, solve_ratio, step_from, step_until};

/// dlog(TDOIL) = -0.2444325*dlog(TDOIL(-1)) + 1.896486*dlog(NNSGVA(-1))
///     - 0.1077816*d(log oil price relative to non-North-Sea output)
///     + sample dummies - 0.0143727
fn tdoil(c: &EvalContext) -> EvalResult {
    // d() of log(PBRENT / (RXD * (GDPMPS(-1) - BPAPS(-1)
    //     - NSGVA(-1)*PBRENT(-1)/(OILBASE*RXD(-1))) / NNSGVA(-1)))
    let ecm_inner_t = c.lag("GDPMPS", 1)? - c.lag("BPAPS", 1)?
        - (c.lag("NSGVA", 1)? * c.lag("PBRENT", 1)? / (c.v("OILBASE")? * c.lag("RXD", 1)?));
    let ecm_t = safe_log(c.v("PBRENT")? / (c.v("RXD")? * ecm_inner_t / c.lag("NNSGVA", 1)?));

    let ecm_inner_t1 = c.lag("GDPMPS", 2)? - c.lag("BPAPS", 2)?
        - (c.lag("NSGVA", 2)? * c.lag("PBRENT", 2)? / (c.v("OILBASE")? * c.lag("RXD", 2)?));
    let ecm_t1 =
        safe_log(c.lag("PBRENT", 1)? / (c.lag("RXD", 1)? * ecm_inner_t1 / c.lag("NNSGVA", 2)?));

    let dum_8485 = step_from(c, 1984, 1) * step_until(c, 1985, 1);

    let rhs = -0.2444325 * dlog(c, "TDOIL", 1)?
        + 1.896486 * dlog(c, "NNSGVA", 1)?
        - 0.1077816 * (ecm_t - ecm_t1)
        + 0.0780697 * dum_8485
        - 0.0143727
        - 0.2216107 * (pulse_at(c, 1986, 1) - pulse_at(c, 1986, 2))
        - 0.2457494 * (pulse_at(c, 2001, 3) - pulse_at(c, 2001, 4))
        + 0.1907036 * (pulse_at(c, 2010, 3) - pulse_at(c, 2010, 4))
        - 0.4334139 * pulse_at(c, 2013, 1);
    Ok(solve_dlog(c.lag("TDOIL", 1)?, rhs))
}

/// MOIL = TDOIL + XOIL - NSGVA
fn moil(c: &EvalContext) -> EvalResult {
    Ok(c.v("TDOIL")? + c.v("XOIL")? - c.v("NSGVA")?)
}

/// dlog(PXOIL) = dlog(PBRENT) - dlog(RXD)
fn pxoil(c: &EvalContext) -> EvalResult {
    let rhs = dlog(c, "PBRENT", 0)? - dlog(c, "RXD", 0)?;
    Ok(solve_dlog(c.lag("PXOIL", 1)?, rhs))
}

/// dlog(PMOIL) = dlog(PXOIL)
fn pmoil(c: &EvalContext) -> EvalResult {
    Ok(solve_dlog(c.lag("PMOIL", 1)?, dlog(c, "PXOIL", 0)?))
}

/// NSGTP / NSGTP(-1) = (NSGVA/NSGVA(-1)) * (PBRENT/PBRENT(-1)) / (RXD/RXD(-1))
fn nsgtp(c: &EvalContext) -> EvalResult {
    let ratio = (c.v("NSGVA")? / c.lag("NSGVA", 1)?)
        * (c.v("PBRENT")? / c.lag("PBRENT", 1)?)
        / (c.v("RXD")? / c.lag("RXD", 1)?);
    Ok(solve_ratio(c.lag("NSGTP", 1)?, ratio))
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("TDOIL", LogDifference, tdoil),
        Equation::new("MOIL", Identity, moil),
        Equation::new("PXOIL", LogDifference, pxoil),
        Equation::new("PMOIL", LogDifference, pmoil),
        Equation::new("NSGTP", Ratio, nsgtp),
    ]
}
