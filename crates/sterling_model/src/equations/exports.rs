//! Exports of goods and services.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{safe_log, solve_dlog};

/// XNOG = X - XS - XOIL
fn xnog(c: &EvalContext) -> EvalResult {
    Ok(c.v("X")? - c.v("XS")? - c.v("XOIL")?)
}

/// dlog(RPRICE) = dlog(PXNOG) + dlog(RXD) - 0.9351684 * dlog(WPG)
fn rprice(c: &EvalContext) -> EvalResult {
    let dlog_pxnog = safe_log(c.v("PXNOG")?) - safe_log(c.lag("PXNOG", 1)?);
    let dlog_rxd = safe_log(c.v("RXD")?) - safe_log(c.lag("RXD", 1)?);
    let dlog_wpg = safe_log(c.v("WPG")?) - safe_log(c.lag("WPG", 1)?);
    let rhs = dlog_pxnog + dlog_rxd - 0.9351684 * dlog_wpg;
    Ok(solve_dlog(c.lag("RPRICE", 1)?, rhs))
}

/// XPS = (PXNOG/100)*XNOG + (PXS/100)*XS + (PXOIL/100)*XOIL
fn xps(c: &EvalContext) -> EvalResult {
    Ok((c.v("PXNOG")? / 100.0) * c.v("XNOG")?
        + (c.v("PXS")? / 100.0) * c.v("XS")?
        + (c.v("PXOIL")? / 100.0) * c.v("XOIL")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("XNOG", Identity, xnog),
        Equation::new("RPRICE", LogDifference, rprice),
        Equation::new("XPS", Identity, xps),
    ]
}
