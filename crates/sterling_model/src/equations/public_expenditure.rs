//! Public expenditure: government wage bills, procurement, consumption and
//! subsidies.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{dlog, solve_dlog, solve_ratio};

/// CGWS = CGWADJ * ERCG * ECG * (52/4000) * (1 + 1.249*EMPSC/WFP)
fn cgws(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGWADJ")? * c.v("ERCG")? * c.v("ECG")? * (52.0 / 4000.0)
        * (1.0 + 1.249 * c.v("EMPSC")? / c.v("WFP")?))
}

/// LAWS = LAWADJ * ERLA * ELA * (52/4000) * (1 + 1.418*EMPSC/WFP)
fn laws(c: &EvalContext) -> EvalResult {
    Ok(c.v("LAWADJ")? * c.v("ERLA")? * c.v("ELA")? * (52.0 / 4000.0)
        * (1.0 + 1.418 * c.v("EMPSC")? / c.v("WFP")?))
}

/// OSGG = RCGIM + RLAIM + 100
fn osgg(c: &EvalContext) -> EvalResult {
    Ok(c.v("RCGIM")? + c.v("RLAIM")? + 100.0)
}

/// CGP = CGGPSPSF - (CGWS + LAWS) - LAPR - (RCGIM + RLAIM)
fn cgp(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGGPSPSF")? - (c.v("CGWS")? + c.v("LAWS")?) - c.v("LAPR")?
        - (c.v("RCGIM")? + c.v("RLAIM")?))
}

/// GGFCD = 100 * CGGPS / CGG
fn ggfcd(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("CGGPS")? / c.v("CGG")?)
}

/// dlog(CGG) = 0.0007011 + 0.3739498*dlog(CGGPS) + 0.1802323*dlog(CGGPS(-1))
///     - 0.4198339*dlog(CGG(-1))
fn cgg(c: &EvalContext) -> EvalResult {
    let rhs = 0.0007011 + 0.3739498 * dlog(c, "CGGPS", 0)? + 0.1802323 * dlog(c, "CGGPS", 1)?
        - 0.4198339 * dlog(c, "CGG", 1)?;
    Ok(solve_dlog(c.lag("CGG", 1)?, rhs))
}

/// CGTSUB = CGSUBP + CGSUBPR
fn cgtsub(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGSUBP")? + c.v("CGSUBPR")?)
}

/// LASUBPR = (LASUBPR(-4)+LASUBPR(-3)+LASUBPR(-2)+LASUBPR(-1)) * 0.25
///     * (PGDP*4) / (PGDP(-4)+PGDP(-3)+PGDP(-2)+PGDP(-1))
fn lasubpr(c: &EvalContext) -> EvalResult {
    let lasubpr_avg =
        c.lag("LASUBPR", 4)? + c.lag("LASUBPR", 3)? + c.lag("LASUBPR", 2)? + c.lag("LASUBPR", 1)?;
    let pgdp_avg = c.lag("PGDP", 4)? + c.lag("PGDP", 3)? + c.lag("PGDP", 2)? + c.lag("PGDP", 1)?;
    Ok(lasubpr_avg * 0.25 * (c.v("PGDP")? * 4.0) / pgdp_avg)
}

/// LATSUB = LASUBP + LASUBPR
fn latsub(c: &EvalContext) -> EvalResult {
    Ok(c.v("LASUBP")? + c.v("LASUBPR")?)
}

/// CGASC / CGASC(-1) = CGWS / CGWS(-1)
fn cgasc(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("CGASC", 1)?,
        c.v("CGWS")? / c.lag("CGWS", 1)?,
    ))
}

/// CGISC / CGISC(-1) = CGWS / CGWS(-1)
fn cgisc(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("CGISC", 1)?,
        c.v("CGWS")? / c.lag("CGWS", 1)?,
    ))
}

/// EESCCG / EESCCG(-1) = CGWS / CGWS(-1)
fn eesccg(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("EESCCG", 1)?,
        c.v("CGWS")? / c.lag("CGWS", 1)?,
    ))
}

/// LASC / LASC(-1) = LAWS / LAWS(-1)
fn lasc(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("LASC", 1)?,
        c.v("LAWS")? / c.lag("LAWS", 1)?,
    ))
}

/// EESCLA / EESCLA(-1) = LAWS / LAWS(-1)
fn eescla(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("EESCLA", 1)?,
        c.v("LAWS")? / c.lag("LAWS", 1)?,
    ))
}

/// CGNCGA = TROD
fn cgncga(c: &EvalContext) -> EvalResult {
    c.v("TROD")
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("CGWS", Identity, cgws),
        Equation::new("LAWS", Identity, laws),
        Equation::new("OSGG", Identity, osgg),
        Equation::new("CGP", Identity, cgp),
        Equation::new("GGFCD", Identity, ggfcd),
        Equation::new("CGG", LogDifference, cgg),
        Equation::new("CGTSUB", Identity, cgtsub),
        Equation::new("LASUBPR", Identity, lasubpr),
        Equation::new("LATSUB", Identity, latsub),
        Equation::new("CGASC", Ratio, cgasc),
        Equation::new("CGISC", Ratio, cgisc),
        Equation::new("EESCCG", Ratio, eesccg),
        Equation::new("LASC", Ratio, lasc),
        Equation::new("EESCLA", Ratio, eescla),
        Equation::new("CGNCGA", Identity, cgncga),
    ]
}
