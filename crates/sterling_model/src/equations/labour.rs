//! Labour market: employment, participation, unemployment and hours.
//!
//! Swept first — wages and prices read the labour quantities computed here.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{pulse_at, safe_log, solve_dlog, solve_ratio};

/// ECG / ECG(-1) = EGG / EGG(-1)
fn ecg(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(c.lag("ECG", 1)?, c.v("EGG")? / c.lag("EGG", 1)?))
}

/// ELA / ELA(-1) = EGG / EGG(-1)
fn ela(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(c.lag("ELA", 1)?, c.v("EGG")? / c.lag("EGG", 1)?))
}

/// dlog(EPS) = log((ET - ECG - ELA) / (ET(-1) - ECG(-1) - ELA(-1)))
fn eps(c: &EvalContext) -> EvalResult {
    let rhs = safe_log(
        (c.v("ET")? - c.v("ECG")? - c.v("ELA")?)
            / (c.lag("ET", 1)? - c.lag("ECG", 1)? - c.lag("ELA", 1)?),
    );
    Ok(solve_dlog(c.lag("EPS", 1)?, rhs))
}

/// dlog(EMS) = -0.0113474 + 0.4369834*dlog(EMS(-1)) + 0.1932386*dlog(EMS(-2))
///     + 0.1713792*dlog(MSGVA(-1))
///     - 0.0062207*(log(EMS(-1)/MSGVA(-1)) + 0.4*log(PSAVEI(-1)/PMSGVA(-1)))
///     - 0.0103188*[2010Q4]
fn ems(c: &EvalContext) -> EvalResult {
    let dlog_ems_1 = safe_log(c.lag("EMS", 1)?) - safe_log(c.lag("EMS", 2)?);
    let dlog_ems_2 = safe_log(c.lag("EMS", 2)?) - safe_log(c.lag("EMS", 3)?);
    let dlog_msgva_1 = safe_log(c.lag("MSGVA", 1)?) - safe_log(c.lag("MSGVA", 2)?);

    let ecm = safe_log(c.lag("EMS", 1)? / c.lag("MSGVA", 1)?)
        + 0.4 * safe_log(c.lag("PSAVEI", 1)? / c.lag("PMSGVA", 1)?);

    let rhs = -0.0113474 + 0.4369834 * dlog_ems_1 + 0.1932386 * dlog_ems_2
        + 0.1713792 * dlog_msgva_1
        - 0.0062207 * ecm
        - 0.0103188 * pulse_at(c, 2010, 4);
    Ok(solve_dlog(c.lag("EMS", 1)?, rhs))
}

/// ET / ET(-1) = ETLFS / ETLFS(-1)
fn et(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("ET", 1)?,
        c.v("ETLFS")? / c.lag("ETLFS", 1)?,
    ))
}

/// WRGTP / WRGTP(-1) = ET / ET(-1)
fn wrgtp(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("WRGTP", 1)?,
        c.v("ET")? / c.lag("ET", 1)?,
    ))
}

/// WFJ = ET + WRGTP
fn wfj(c: &EvalContext) -> EvalResult {
    Ok(c.v("ET")? + c.v("WRGTP")?)
}

/// ETLFS = 1000 * (HWA / AVH)
fn etlfs(c: &EvalContext) -> EvalResult {
    Ok(1000.0 * (c.v("HWA")? / c.v("AVH")?))
}

/// ES / ES(-1) = ET / ET(-1)
fn es(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(c.lag("ES", 1)?, c.v("ET")? / c.lag("ET", 1)?))
}

/// ESLFS / ESLFS(-1) = ES / ES(-1)
fn eslfs(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("ESLFS", 1)?,
        c.v("ES")? / c.lag("ES", 1)?,
    ))
}

/// GAD = GAD1 + GAD2 + GAD3
fn gad(c: &EvalContext) -> EvalResult {
    Ok(c.v("GAD1")? + c.v("GAD2")? + c.v("GAD3")?)
}

/// POP16 / POP16(-1) = (GAD2 + GAD3) / (GAD2(-1) + GAD3(-1))
fn pop16(c: &EvalContext) -> EvalResult {
    let rhs = (c.v("GAD2")? + c.v("GAD3")?) / (c.lag("GAD2", 1)? + c.lag("GAD3", 1)?);
    Ok(solve_ratio(c.lag("POP16", 1)?, rhs))
}

/// ULFS = (POP16 * PART16 / 100) - ETLFS
fn ulfs(c: &EvalContext) -> EvalResult {
    Ok(c.v("POP16")? * c.v("PART16")? / 100.0 - c.v("ETLFS")?)
}

/// LFSUR = 100 * ULFS / (ETLFS + ULFS)
fn lfsur(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("ULFS")? / (c.v("ETLFS")? + c.v("ULFS")?))
}

/// PRODH = GDPM / HWA
fn prodh(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPM")? / c.v("HWA")?)
}

/// PART16 = 100 * (ULFS + ETLFS) / POP16
fn part16(c: &EvalContext) -> EvalResult {
    Ok(100.0 * (c.v("ULFS")? + c.v("ETLFS")?) / c.v("POP16")?)
}

/// ER = 100 * ETLFS / POP16
fn er(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("ETLFS")? / c.v("POP16")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("ECG", Ratio, ecg),
        Equation::new("ELA", Ratio, ela),
        Equation::new("EPS", LogDifference, eps),
        Equation::new("EMS", LogDifference, ems),
        Equation::new("ET", Ratio, et),
        Equation::new("WRGTP", Ratio, wrgtp),
        Equation::new("WFJ", Identity, wfj),
        Equation::new("ETLFS", Identity, etlfs),
        Equation::new("ES", Ratio, es),
        Equation::new("ESLFS", Ratio, eslfs),
        Equation::new("GAD", Identity, gad),
        Equation::new("POP16", Ratio, pop16),
        Equation::new("ULFS", Identity, ulfs),
        Equation::new("LFSUR", Identity, lfsur),
        Equation::new("PRODH", Identity, prodh),
        Equation::new("PART16", Identity, part16),
        Equation::new("ER", Identity, er),
    ]
}
