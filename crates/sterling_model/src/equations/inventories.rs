//! Inventories: volumes, book values and stock appreciation.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

/// DINV = (GDPM + M - SDE) - CGG - CONS - VAL - IF - X
fn dinv(c: &EvalContext) -> EvalResult {
    Ok((c.v("GDPM")? + c.v("M")? - c.v("SDE")?)
        - c.v("CGG")?
        - c.v("CONS")?
        - c.v("VAL")?
        - c.v("IF")?
        - c.v("X")?)
}

/// INV = INV(-1) + DINV
fn inv(c: &EvalContext) -> EvalResult {
    Ok(c.lag("INV", 1)? + c.v("DINV")?)
}

/// BV = BV(-1) + DINVPS
fn bv(c: &EvalContext) -> EvalResult {
    Ok(c.lag("BV", 1)? + c.v("DINVPS")?)
}

/// SA = BV(-1) * (PINV / PINV(-1) - 1)
fn sa(c: &EvalContext) -> EvalResult {
    Ok(c.lag("BV", 1)? * (c.v("PINV")? / c.lag("PINV", 1)? - 1.0))
}

/// DINVPS = DINV * PDINV / 100
fn dinvps(c: &EvalContext) -> EvalResult {
    Ok(c.v("DINV")? * c.v("PDINV")? / 100.0)
}

/// DINVHH = 0.07 * DINVPS
fn dinvhh(c: &EvalContext) -> EvalResult {
    Ok(0.07 * c.v("DINVPS")?)
}

/// DINVCG = PSNI - CGIPS - LAIPS - IPCPS - IBPC - (NPACG + NPALA)
///     - (KCGPSO - KPSCG) - (KLA - KGLAPC - KGLA) - (KPCPS - KPSPC)
///     - ASSETSA + DEP + ASSETSA
fn dinvcg(c: &EvalContext) -> EvalResult {
    Ok(c.v("PSNI")?
        - c.v("CGIPS")?
        - c.v("LAIPS")?
        - c.v("IPCPS")?
        - c.v("IBPC")?
        - (c.v("NPACG")? + c.v("NPALA")?)
        - (c.v("KCGPSO")? - c.v("KPSCG")?)
        - (c.v("KLA")? - c.v("KGLAPC")? - c.v("KGLA")?)
        - (c.v("KPCPS")? - c.v("KPSPC")?)
        - c.v("ASSETSA")?
        + c.v("DEP")?
        + c.v("ASSETSA")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("DINV", Identity, dinv),
        Equation::new("INV", Identity, inv),
        Equation::new("BV", Identity, bv),
        Equation::new("SA", Identity, sa),
        Equation::new("DINVPS", Identity, dinvps),
        Equation::new("DINVHH", Identity, dinvhh),
        Equation::new("DINVCG", Identity, dinvcg),
    ]
}
