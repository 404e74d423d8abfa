//! Imports of goods and services: demand-weighted import propensities and
//! the services import equation.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{safe_log, solve_dlog, step_from};

/// MC = 0.257 * CONS
fn mc(c: &EvalContext) -> EvalResult {
    Ok(0.257 * c.v("CONS")?)
}

/// MCGG = 0.094 * CGG
fn mcgg(c: &EvalContext) -> EvalResult {
    Ok(0.094 * c.v("CGG")?)
}

/// MIF = 0.234 * IF
fn mif(c: &EvalContext) -> EvalResult {
    Ok(0.234 * c.v("IF")?)
}

/// MDINV = 0.106 * (DINV - ALAD)
fn mdinv(c: &EvalContext) -> EvalResult {
    Ok(0.106 * (c.v("DINV")? - c.v("ALAD")?))
}

/// MXS = 0.142 * XS
fn mxs(c: &EvalContext) -> EvalResult {
    Ok(0.142 * c.v("XS")?)
}

/// MXG = 0.376 * (XOIL + XNOG)
fn mxg(c: &EvalContext) -> EvalResult {
    Ok(0.376 * (c.v("XOIL")? + c.v("XNOG")?))
}

/// MTFE = MC + MCGG + MIF + MDINV + MXS + MXG
fn mtfe(c: &EvalContext) -> EvalResult {
    Ok(c.v("MC")? + c.v("MCGG")? + c.v("MIF")? + c.v("MDINV")? + c.v("MXS")? + c.v("MXG")?)
}

/// MINTY = 100 * M / MTFE
fn minty(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("M")? / c.v("MTFE")?)
}

/// MGTFE = 0.176*CONS + 0.064*CGG + 0.175*IF + 0.094*DINV + 0.410*XNOG + 0.049*XS
fn mgtfe(c: &EvalContext) -> EvalResult {
    Ok(0.176 * c.v("CONS")?
        + 0.064 * c.v("CGG")?
        + 0.175 * c.v("IF")?
        + 0.094 * c.v("DINV")?
        + 0.410 * c.v("XNOG")?
        + 0.049 * c.v("XS")?)
}

/// PMGREL = PMNOG / (0.156*PCE + 0.097*GGFCD + 0.203*PIF + 0.096*PINV
///     + 0.352*PXNOG + 0.063*PXS)
fn pmgrel(c: &EvalContext) -> EvalResult {
    let denominator = 0.156 * c.v("PCE")?
        + 0.097 * c.v("GGFCD")?
        + 0.203 * c.v("PIF")?
        + 0.096 * c.v("PINV")?
        + 0.352 * c.v("PXNOG")?
        + 0.063 * c.v("PXS")?;
    Ok(c.v("PMNOG")? / denominator)
}

/// MNOG = M - MS - MOIL
fn mnog(c: &EvalContext) -> EvalResult {
    Ok(c.v("M")? - c.v("MS")? - c.v("MOIL")?)
}

/// MSTFE = 0.081*CONS + 0.030*CGG + 0.059*IF + 0.012*DINV + 0.029*XNOG + 0.093*XS
fn mstfe(c: &EvalContext) -> EvalResult {
    Ok(0.081 * c.v("CONS")?
        + 0.030 * c.v("CGG")?
        + 0.059 * c.v("IF")?
        + 0.012 * c.v("DINV")?
        + 0.029 * c.v("XNOG")?
        + 0.093 * c.v("XS")?)
}

/// PMSREL = PMS / (0.060*PCE + 0.040*GGFCD + 0.067*PIF + 0.040*PINV
///     + 0.024*PXNOG + 0.098*PXS)
fn pmsrel(c: &EvalContext) -> EvalResult {
    let denominator = 0.060 * c.v("PCE")?
        + 0.040 * c.v("GGFCD")?
        + 0.067 * c.v("PIF")?
        + 0.040 * c.v("PINV")?
        + 0.024 * c.v("PXNOG")?
        + 0.098 * c.v("PXS")?;
    Ok(c.v("PMS")? / denominator)
}

/// dlog(MS) = 0.819114*dlog(MSTFE) + 0.389511*dlog(MSTFE(-1))
///     - 0.525436*dlog(MSTFE(-2)) + 0.288639*dlog(MSTFE(-3))
///     - 0.477411*dlog(PMSREL) - 0.292804*dlog(PMSREL(-1))
///     - 0.271392*dlog(MS(-1)) - 0.171294*ecm - 0.031665
fn ms(c: &EvalContext) -> EvalResult {
    let sdlog = |name: &str, lag: i64| -> EvalResult {
        Ok(safe_log(c.lag(name, lag)?) - safe_log(c.lag(name, lag + 1)?))
    };

    let d2007 = step_from(c, 2007, 1);
    let d2013 = step_from(c, 2013, 1);

    let ecm = safe_log(c.lag("MS", 1)?)
        - 1.079017 * safe_log(c.lag("MSTFE", 1)?)
        - 0.662445 * safe_log(c.lag("SPECX", 1)?)
        + 0.112661 * (d2007 * c.v("SPECX")?)
        + 0.874335 * safe_log(c.lag("PMSREL", 1)?)
        - 0.126418 * (d2007 - d2013);

    let rhs = 0.819114 * sdlog("MSTFE", 0)?
        + 0.389511 * sdlog("MSTFE", 1)?
        - 0.525436 * sdlog("MSTFE", 2)?
        + 0.288639 * sdlog("MSTFE", 3)?
        - 0.477411 * sdlog("PMSREL", 0)?
        - 0.292804 * sdlog("PMSREL", 1)?
        - 0.271392 * sdlog("MS", 1)?
        - 0.171294 * ecm
        - 0.031665;
    Ok(solve_dlog(c.lag("MS", 1)?, rhs))
}

/// MPS = MNOG*(PMNOG/100) + MS*(PMS/100) + MOIL*(PMOIL/100)
fn mps(c: &EvalContext) -> EvalResult {
    Ok(c.v("MNOG")? * (c.v("PMNOG")? / 100.0)
        + c.v("MS")? * (c.v("PMS")? / 100.0)
        + c.v("MOIL")? * (c.v("PMOIL")? / 100.0))
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("MC", Identity, mc),
        Equation::new("MCGG", Identity, mcgg),
        Equation::new("MIF", Identity, mif),
        Equation::new("MDINV", Identity, mdinv),
        Equation::new("MXS", Identity, mxs),
        Equation::new("MXG", Identity, mxg),
        Equation::new("MTFE", Identity, mtfe),
        Equation::new("MINTY", Identity, minty),
        Equation::new("MGTFE", Identity, mgtfe),
        Equation::new("PMGREL", Identity, pmgrel),
        Equation::new("MNOG", Identity, mnog),
        Equation::new("MSTFE", Identity, mstfe),
        Equation::new("PMSREL", Identity, pmsrel),
        Equation::new("MS", LogDifference, ms),
        Equation::new("MPS", Identity, mps),
    ]
}
