//! Financial account and balance sheets: households, rest of world and the
//! private non-financial corporate sector.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{safe_log, solve_d, solve_dlog, trend_from};

// --- Household financial accounts ---

/// NAFHHNSA = NAFHH + NAFHH(-1) + NAFHH(-2) + NAFHH(-3)
///     - NAFHHNSA(-1) - NAFHHNSA(-2) - NAFHHNSA(-3)
fn nafhhnsa(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAFHH")? + c.lag("NAFHH", 1)? + c.lag("NAFHH", 2)? + c.lag("NAFHH", 3)?
        - c.lag("NAFHHNSA", 1)?
        - c.lag("NAFHHNSA", 2)?
        - c.lag("NAFHHNSA", 3)?)
}

/// SDLHH = 0
fn sdlhh(_: &EvalContext) -> EvalResult {
    Ok(0.0)
}

/// NLHH = NAFHHNSA - SDLHH
fn nlhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAFHHNSA")? - c.v("SDLHH")?)
}

/// GMF = (PD * APH * 0.858) / DEPHH(-1)
fn gmf(c: &EvalContext) -> EvalResult {
    Ok((c.v("PD")? * c.v("APH")? * 0.858) / c.lag("DEPHH", 1)?)
}

/// d(DEPHHx) = 3.9056*d(CONSPS)
///     + exp(5.1811*(RDEP - R)) - exp(5.1811*(RDEP(-1) - R(-1)))
///     + exp(0.8206*LFSUR) - exp(0.8206*LFSUR(-1)) + exp(106.3011*GMF)
///     - 0.0369*(DEPHH(-1) - 5.5399*CONSPS(-1) - exp(0.8479*RDEP(-1))
///         - exp(1.0821*LFSUR(-1)) + 233379.6)
fn dephhx(c: &EvalContext) -> EvalResult {
    let d_consps = c.v("CONSPS")? - c.lag("CONSPS", 1)?;
    let ecm = c.lag("DEPHH", 1)? - 5.5399 * c.lag("CONSPS", 1)?
        - (0.8479 * c.lag("RDEP", 1)?).exp()
        - (1.0821 * c.lag("LFSUR", 1)?).exp()
        + 233379.6;
    let rhs = 3.9056 * d_consps + (5.1811 * (c.v("RDEP")? - c.v("R")?)).exp()
        - (5.1811 * (c.lag("RDEP", 1)? - c.lag("R", 1)?)).exp()
        + (0.8206 * c.v("LFSUR")?).exp()
        - (0.8206 * c.lag("LFSUR", 1)?).exp()
        + (106.3011 * c.v("GMF")?).exp()
        - 0.0369 * ecm;
    Ok(solve_d(c.lag("DEPHHx", 1)?, rhs))
}

/// d(DEPHH) = (DEPHHx - DEPHHx(-1)) + DEPHHADJ
fn dephh(c: &EvalContext) -> EvalResult {
    let rhs = (c.v("DEPHHx")? - c.lag("DEPHHx", 1)?) + c.v("DEPHHADJ")?;
    Ok(solve_d(c.lag("DEPHH", 1)?, rhs))
}

/// NAEQHHx = 0.4560 * NLHH - 12867
fn naeqhhx(c: &EvalContext) -> EvalResult {
    Ok(0.4560 * c.v("NLHH")? - 12867.0)
}

/// NAEQHH = NAEQHHx + NAEQHHADJ
fn naeqhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAEQHHx")? + c.v("NAEQHHADJ")?)
}

/// EQHH = (1 + 0.844*(EQPR/EQPR(-1) - 1)
///     + 0.156*((WEQPR/WEQPR(-1))/(RX/RX(-1)) - 1)) * EQHH(-1) + NAEQHH
fn eqhh(c: &EvalContext) -> EvalResult {
    let revaluation = 1.0
        + 0.844 * (c.v("EQPR")? / c.lag("EQPR", 1)? - 1.0)
        + 0.156
            * ((c.v("WEQPR")? / c.lag("WEQPR", 1)?) / (c.v("RX")? / c.lag("RX", 1)?) - 1.0);
    Ok(revaluation * c.lag("EQHH", 1)? + c.v("NAEQHH")?)
}

/// NAPEN = NEAHH
fn napen(c: &EvalContext) -> EvalResult {
    c.v("NEAHH")
}

/// NAINSx = 13293.71 + 0.627 * NAINSx(-1) - 236267.3 * SIPT(-3)
fn nainsx(c: &EvalContext) -> EvalResult {
    Ok(13293.71 + 0.627 * c.lag("NAINSx", 1)? - 236267.3 * c.lag("SIPT", 3)?)
}

/// NAINS = NAINSx + NAINSADJ
fn nains(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAINSx")? + c.v("NAINSADJ")?)
}

/// PIHH = (1 + 0.200*(EQPR/EQPR(-1) - 1) + 0.098*(RX(-1)/RX - 1)
///     + 0.170*((WEQPR/WEQPR(-1))/(RX/RX(-1)) - 1)
///     + 0.574*(DBR/DBR(-1) - 1)) * PIHH(-1) + NAPEN + NAINS
fn pihh(c: &EvalContext) -> EvalResult {
    let revaluation = 1.0
        + 0.200 * (c.v("EQPR")? / c.lag("EQPR", 1)? - 1.0)
        + 0.098 * (c.lag("RX", 1)? / c.v("RX")? - 1.0)
        + 0.170
            * ((c.v("WEQPR")? / c.lag("WEQPR", 1)?) / (c.v("RX")? / c.lag("RX", 1)?) - 1.0)
        + 0.574 * (c.v("DBR")? / c.lag("DBR", 1)? - 1.0);
    Ok(revaluation * c.lag("PIHH", 1)? + c.v("NAPEN")? + c.v("NAINS")?)
}

/// DBR = 1 / (1 + RL/100)^15
fn dbr(c: &EvalContext) -> EvalResult {
    Ok(1.0 / (1.0 + c.v("RL")? / 100.0).powi(15))
}

/// dlog(OAHHx) = 1.6091 - 0.1607*log(OAHHx(-1)) + 0.0169*log(GDPMPS(-1))
///     - 0.57443*(log(GDPMPS) - log(GDPMPS(-1))) + 0.001796*trend(1986Q4)
fn oahhx(c: &EvalContext) -> EvalResult {
    let rhs = 1.6091 - 0.1607 * safe_log(c.lag("OAHHx", 1)?)
        + 0.0169 * safe_log(c.lag("GDPMPS", 1)?)
        - 0.57443 * (safe_log(c.v("GDPMPS")?) - safe_log(c.lag("GDPMPS", 1)?))
        + 0.001796 * trend_from(c, 1986, 4);
    Ok(solve_dlog(c.lag("OAHHx", 1)?, rhs))
}

/// d(OAHH) = (OAHHx - OAHHx(-1)) + OAHHADJ
fn oahh(c: &EvalContext) -> EvalResult {
    let rhs = (c.v("OAHHx")? - c.lag("OAHHx", 1)?) + c.v("OAHHADJ")?;
    Ok(solve_d(c.lag("OAHH", 1)?, rhs))
}

/// GFWPE = DEPHH + EQHH + PIHH + OAHH
fn gfwpe(c: &EvalContext) -> EvalResult {
    Ok(c.v("DEPHH")? + c.v("EQHH")? + c.v("PIHH")? + c.v("OAHH")?)
}

// --- Household financial liabilities ---

/// NAOLPEx = OLPEx(-1) * DEBTU
fn naolpex(c: &EvalContext) -> EvalResult {
    Ok(c.lag("OLPEx", 1)? * c.v("DEBTU")?)
}

/// NAOLPE = NAOLPEx + d(STUDENT) + NAOLPEADJ
fn naolpe(c: &EvalContext) -> EvalResult {
    let d_student = c.v("STUDENT")? - c.lag("STUDENT", 1)?;
    Ok(c.v("NAOLPEx")? + d_student + c.v("NAOLPEADJ")?)
}

/// DEBTU = 0.0812616 + 0.4338504*DEBTU(-1) - 0.0248383*log(OLPEx(-1))
///     + 0.013581*log(CONSPS(-1)) - 0.0014364*LFSUR(-1) + 0.0143662*log(PD(-1))
fn debtu(c: &EvalContext) -> EvalResult {
    Ok(0.0812616 + 0.4338504 * c.lag("DEBTU", 1)?
        - 0.0248383 * safe_log(c.lag("OLPEx", 1)?)
        + 0.013581 * safe_log(c.lag("CONSPS", 1)?)
        - 0.0014364 * c.lag("LFSUR", 1)?
        + 0.0143662 * safe_log(c.lag("PD", 1)?))
}

/// OLPEx = OLPEx(-1) - 0.00219*OLPEx(-1) + NAOLPEx + NAOLPEADJ
fn olpex(c: &EvalContext) -> EvalResult {
    Ok(c.lag("OLPEx", 1)? - 0.00219 * c.lag("OLPEx", 1)? + c.v("NAOLPEx")? + c.v("NAOLPEADJ")?)
}

/// OLPE = OLPEx + STUDENT
fn olpe(c: &EvalContext) -> EvalResult {
    Ok(c.v("OLPEx")? + c.v("STUDENT")?)
}

/// AAHH = d(OAHH) + d(DEPHH) + NAEQHH + NAPEN + NAINS
fn aahh(c: &EvalContext) -> EvalResult {
    let d_oahh = c.v("OAHH")? - c.lag("OAHH", 1)?;
    let d_dephh = c.v("DEPHH")? - c.lag("DEPHH", 1)?;
    Ok(d_oahh + d_dephh + c.v("NAEQHH")? + c.v("NAPEN")? + c.v("NAINS")?)
}

/// ALHH = NAOLPE + d(LHP)
fn alhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAOLPE")? + (c.v("LHP")? - c.lag("LHP", 1)?))
}

/// HHRES = NLHH - ((d(DEPHHx) + NAEQHHx + NAPEN + NAINSx + d(OAHHx))
///     - (NAOLPEx + d(STUDENT) + d(LHP)))
fn hhres(c: &EvalContext) -> EvalResult {
    let d_dephhx = c.v("DEPHHx")? - c.lag("DEPHHx", 1)?;
    let d_oahhx = c.v("OAHHx")? - c.lag("OAHHx", 1)?;
    let d_student = c.v("STUDENT")? - c.lag("STUDENT", 1)?;
    let d_lhp = c.v("LHP")? - c.lag("LHP", 1)?;
    let assets_flow = d_dephhx + c.v("NAEQHHx")? + c.v("NAPEN")? + c.v("NAINSx")? + d_oahhx;
    let liabilities_flow = c.v("NAOLPEx")? + d_student + d_lhp;
    Ok(c.v("NLHH")? - (assets_flow - liabilities_flow))
}

/// OAHHADJ = HHRES - DEPHHADJ - NAEQHHADJ - NAINSADJ + NAOLPEADJ
fn oahhadj(c: &EvalContext) -> EvalResult {
    Ok(c.v("HHRES")? - c.v("DEPHHADJ")? - c.v("NAEQHHADJ")? - c.v("NAINSADJ")?
        + c.v("NAOLPEADJ")?)
}

// --- Aggregates ---

/// NFWPE = GFWPE - LHP - OLPE
fn nfwpe(c: &EvalContext) -> EvalResult {
    Ok(c.v("GFWPE")? - c.v("LHP")? - c.v("OLPE")?)
}

/// GPW = 0.9933 * GPW(-1) * APH / APH(-1) + 0.001 * IHHPS
fn gpw(c: &EvalContext) -> EvalResult {
    Ok(0.9933 * c.lag("GPW", 1)? * c.v("APH")? / c.lag("APH", 1)? + 0.001 * c.v("IHHPS")?)
}

// --- Rest of world ---

/// NAFROWNSA = NAFROW + NAFROW(-1) + NAFROW(-2) + NAFROW(-3)
///     - NAFROWNSA(-1) - NAFROWNSA(-2) - NAFROWNSA(-3)
fn nafrownsa(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAFROW")? + c.lag("NAFROW", 1)? + c.lag("NAFROW", 2)? + c.lag("NAFROW", 3)?
        - c.lag("NAFROWNSA", 1)?
        - c.lag("NAFROWNSA", 2)?
        - c.lag("NAFROWNSA", 3)?)
}

/// SDLROW = 0
fn sdlrow(_: &EvalContext) -> EvalResult {
    Ok(0.0)
}

/// NLROW = NAFROWNSA - SDLROW
fn nlrow(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAFROWNSA")? - c.v("SDLROW")?)
}

/// d(DAROW) = (0.3813*(XPS + MPS)/TFEPS + 0.7067*ICCPS/TFEPS - 0.1872) * TFEPS
fn darow(c: &EvalContext) -> EvalResult {
    let rhs = (0.3813 * (c.v("XPS")? + c.v("MPS")?) / c.v("TFEPS")?
        + 0.7067 * c.v("ICCPS")? / c.v("TFEPS")?
        - 0.1872)
        * c.v("TFEPS")?;
    Ok(solve_d(c.lag("DAROW", 1)?, rhs))
}

/// EQAROW = EQAROW(-1) * (EQPR / EQPR(-1)) + NAEQAROW
fn eqarow(c: &EvalContext) -> EvalResult {
    Ok(c.lag("EQAROW", 1)? * (c.v("EQPR")? / c.lag("EQPR", 1)?) + c.v("NAEQAROW")?)
}

/// Four-quarter average portfolio shares split the non-deposit asset flow
/// between equities and bonds.
fn row_asset_shares(c: &EvalContext) -> Result<(f64, f64), sterling_core::EvalError> {
    let avg_eq = 0.25
        * (c.lag("EQAROW", 1)? + c.lag("EQAROW", 2)? + c.lag("EQAROW", 3)? + c.lag("EQAROW", 4)?);
    let avg_ba = 0.25
        * (c.lag("BAROW", 1)? + c.lag("BAROW", 2)? + c.lag("BAROW", 3)? + c.lag("BAROW", 4)?);
    Ok((avg_eq / (avg_eq + avg_ba), avg_ba / (avg_eq + avg_ba)))
}

/// NAEQAROW = equity share of (AAROW - d(DAROW) - NAOTAROW)
fn naeqarow(c: &EvalContext) -> EvalResult {
    let (eq_share, _) = row_asset_shares(c)?;
    let d_darow = c.v("DAROW")? - c.lag("DAROW", 1)?;
    Ok(eq_share * (c.v("AAROW")? - d_darow - c.v("NAOTAROW")?))
}

/// BAROW = BAROW(-1) * (0.40/(RX/RX(-1)) + 0.60) + NABAROW
fn barow(c: &EvalContext) -> EvalResult {
    let rx_ratio = c.v("RX")? / c.lag("RX", 1)?;
    Ok(c.lag("BAROW", 1)? * (0.40 / rx_ratio + 0.60) + c.v("NABAROW")?)
}

/// NABAROW = bond share of (AAROW - d(DAROW) - NAOTAROW)
fn nabarow(c: &EvalContext) -> EvalResult {
    let (_, ba_share) = row_asset_shares(c)?;
    let d_darow = c.v("DAROW")? - c.lag("DAROW", 1)?;
    Ok(ba_share * (c.v("AAROW")? - d_darow - c.v("NAOTAROW")?))
}

/// OTAROW = OTAROW(-1) * (0.84/(RX/RX(-1)) + 0.16) + NAOTAROW
fn otarow(c: &EvalContext) -> EvalResult {
    let rx_ratio = c.v("RX")? / c.lag("RX", 1)?;
    Ok(c.lag("OTAROW", 1)? * (0.84 / rx_ratio + 0.16) + c.v("NAOTAROW")?)
}

/// NAOTAROW = NAOTLROW
fn naotarow(c: &EvalContext) -> EvalResult {
    c.v("NAOTLROW")
}

/// AROW = DAROW + EQAROW + BAROW + OTAROW
fn arow(c: &EvalContext) -> EvalResult {
    Ok(c.v("DAROW")? + c.v("EQAROW")? + c.v("BAROW")? + c.v("OTAROW")?)
}

/// AAROW = ALROW + NLROW
fn aarow(c: &EvalContext) -> EvalResult {
    Ok(c.v("ALROW")? + c.v("NLROW")?)
}

/// DLROW = DLROW(-1) / (RX/RX(-1)) + NADLROW
fn dlrow(c: &EvalContext) -> EvalResult {
    Ok(c.lag("DLROW", 1)? / (c.v("RX")? / c.lag("RX", 1)?) + c.v("NADLROW")?)
}

/// NADLROW = DLROW(-1) * (-0.0375 - 0.2124*DLROW(-1)/LROW(-1)
///     - 0.2004*(FYCPR(-1) + FISIMPS(-1))/EQLIC + 0.1026*WEQPR/WEQPR(-1))
fn nadlrow(c: &EvalContext) -> EvalResult {
    let factor = -0.0375 - 0.2124 * c.lag("DLROW", 1)? / c.lag("LROW", 1)?
        - 0.2004 * (c.lag("FYCPR", 1)? + c.lag("FISIMPS", 1)?) / c.v("EQLIC")?
        + 0.1026 * c.v("WEQPR")? / c.lag("WEQPR", 1)?;
    Ok(c.lag("DLROW", 1)? * factor)
}

/// EQLROW = EQLROW(-1) * (WEQPR/WEQPR(-1)) / (RX/RX(-1)) + NAEQLROW
fn eqlrow(c: &EvalContext) -> EvalResult {
    let weqpr_ratio = c.v("WEQPR")? / c.lag("WEQPR", 1)?;
    let rx_ratio = c.v("RX")? / c.lag("RX", 1)?;
    Ok(c.lag("EQLROW", 1)? * weqpr_ratio / rx_ratio + c.v("NAEQLROW")?)
}

/// NAEQLROW = 0.196*(NAINS + NAPEN) + 0.132*NAEQHH + 0.003*GDPMPS
fn naeqlrow(c: &EvalContext) -> EvalResult {
    Ok(0.196 * (c.v("NAINS")? + c.v("NAPEN")?) + 0.132 * c.v("NAEQHH")? + 0.003 * c.v("GDPMPS")?)
}

/// BLROW = BLROW(-1) / (RX/RX(-1)) + NABLROW
fn blrow(c: &EvalContext) -> EvalResult {
    Ok(c.lag("BLROW", 1)? / (c.v("RX")? / c.lag("RX", 1)?) + c.v("NABLROW")?)
}

/// NABLROW = 0.17*(NAINS + NAPEN) + 0.0325*GDPMPS
fn nablrow(c: &EvalContext) -> EvalResult {
    Ok(0.17 * (c.v("NAINS")? + c.v("NAPEN")?) + 0.0325 * c.v("GDPMPS")?)
}

/// OTLROW = OTLROW(-1) * (0.90/(RX/RX(-1)) + 0.10) + NAOTLROW
fn otlrow(c: &EvalContext) -> EvalResult {
    let rx_ratio = c.v("RX")? / c.lag("RX", 1)?;
    Ok(c.lag("OTLROW", 1)? * (0.90 / rx_ratio + 0.10) + c.v("NAOTLROW")?)
}

/// NAOTLROW = OTLROW(-1) * (GDPMPS/GDPMPS(-1) - 1)
fn naotlrow(c: &EvalContext) -> EvalResult {
    Ok(c.lag("OTLROW", 1)? * (c.v("GDPMPS")? / c.lag("GDPMPS", 1)? - 1.0))
}

/// LROW = DLROW + EQLROW + BLROW + OTLROW
fn lrow(c: &EvalContext) -> EvalResult {
    Ok(c.v("DLROW")? + c.v("EQLROW")? + c.v("BLROW")? + c.v("OTLROW")?)
}

/// ALROW = NADLROW + NAEQLROW + NABLROW + NAOTLROW - DRES
fn alrow(c: &EvalContext) -> EvalResult {
    Ok(c.v("NADLROW")? + c.v("NAEQLROW")? + c.v("NABLROW")? + c.v("NAOTLROW")? - c.v("DRES")?)
}

/// d(NIIP) = d(LROW) + d(SRES) - d(AROW)
fn niip(c: &EvalContext) -> EvalResult {
    let d_lrow = c.v("LROW")? - c.lag("LROW", 1)?;
    let d_sres = c.v("SRES")? - c.lag("SRES", 1)?;
    let d_arow = c.v("AROW")? - c.lag("AROW", 1)?;
    Ok(solve_d(c.lag("NIIP", 1)?, d_lrow + d_sres - d_arow))
}

// --- PNFC balance sheet ---

/// BLIC = BLIC(-1) + NABLIC
fn blic(c: &EvalContext) -> EvalResult {
    Ok(c.lag("BLIC", 1)? + c.v("NABLIC")?)
}

/// STLIC = STLIC(-1) + 0.09 * NALIC
fn stlic(c: &EvalContext) -> EvalResult {
    Ok(c.lag("STLIC", 1)? + 0.09 * c.v("NALIC")?)
}

/// FXLIC = FXLIC(-1) * (RX(-1)/RX) + NAFXLIC
fn fxlic(c: &EvalContext) -> EvalResult {
    Ok(c.lag("FXLIC", 1)? * (c.lag("RX", 1)? / c.v("RX")?) + c.v("NAFXLIC")?)
}

/// EQLIC = EQLIC(-1) * (EQPR/EQPR(-1)) + NAEQLIC
fn eqlic(c: &EvalContext) -> EvalResult {
    Ok(c.lag("EQLIC", 1)? * (c.v("EQPR")? / c.lag("EQPR", 1)?) + c.v("NAEQLIC")?)
}

/// OLIC = OLIC(-1) + 0.04 * NALIC
fn olic(c: &EvalContext) -> EvalResult {
    Ok(c.lag("OLIC", 1)? + 0.04 * c.v("NALIC")?)
}

/// LIC = BLIC + STLIC + FXLIC + EQLIC + OLIC
fn lic(c: &EvalContext) -> EvalResult {
    Ok(c.v("BLIC")? + c.v("STLIC")? + c.v("FXLIC")? + c.v("EQLIC")? + c.v("OLIC")?)
}

/// NABLIC = 0.14 * NALIC
fn nablic(c: &EvalContext) -> EvalResult {
    Ok(0.14 * c.v("NALIC")?)
}

/// NAFXLIC = 0.07 * NALIC
fn nafxlic(c: &EvalContext) -> EvalResult {
    Ok(0.07 * c.v("NALIC")?)
}

/// NAEQLIC = (1.6035 + 0.9385*EQLIC(-1)/(FYCPR(-1) + FISIMPS(-1)))
///     * (FYCPR + FISIMPS) - EQLIC(-1)*GDPMPS/GDPMPS(-1)
fn naeqlic(c: &EvalContext) -> EvalResult {
    let ratio = c.lag("EQLIC", 1)? / (c.lag("FYCPR", 1)? + c.lag("FISIMPS", 1)?);
    Ok((1.6035 + 0.9385 * ratio) * (c.v("FYCPR")? + c.v("FISIMPS")?)
        - c.lag("EQLIC", 1)? * c.v("GDPMPS")? / c.lag("GDPMPS", 1)?)
}

/// NALIC = -27362 + 1.513178 * IBUS * (PIF/100)
fn nalic(c: &EvalContext) -> EvalResult {
    Ok(-27362.0 + 1.513178 * c.v("IBUS")? * (c.v("PIF")? / 100.0))
}

/// AIC = AIC(-1) + (NAAIC - d(M4IC))
fn aic(c: &EvalContext) -> EvalResult {
    let d_m4ic = c.v("M4IC")? - c.lag("M4IC", 1)?;
    Ok(c.lag("AIC", 1)? + (c.v("NAAIC")? - d_m4ic))
}

/// NAAIC = AIC(-1) * (GDPMPS/GDPMPS(-1) - 1)
fn naaic(c: &EvalContext) -> EvalResult {
    Ok(c.lag("AIC", 1)? * (c.v("GDPMPS")? / c.lag("GDPMPS", 1)? - 1.0))
}

/// NWIC = AIC - LIC
fn nwic(c: &EvalContext) -> EvalResult {
    Ok(c.v("AIC")? - c.v("LIC")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("NAFHHNSA", Identity, nafhhnsa),
        Equation::new("SDLHH", Identity, sdlhh),
        Equation::new("NLHH", Identity, nlhh),
        Equation::new("GMF", Identity, gmf),
        Equation::new("DEPHHx", Difference, dephhx),
        Equation::new("DEPHH", Difference, dephh),
        Equation::new("NAEQHHx", Identity, naeqhhx),
        Equation::new("NAEQHH", Identity, naeqhh),
        Equation::new("EQHH", Identity, eqhh),
        Equation::new("NAPEN", Identity, napen),
        Equation::new("NAINSx", Identity, nainsx),
        Equation::new("NAINS", Identity, nains),
        Equation::new("PIHH", Identity, pihh),
        Equation::new("DBR", Identity, dbr),
        Equation::new("OAHHx", LogDifference, oahhx),
        Equation::new("OAHH", Difference, oahh),
        Equation::new("GFWPE", Identity, gfwpe),
        Equation::new("NAOLPEx", Identity, naolpex),
        Equation::new("NAOLPE", Identity, naolpe),
        Equation::new("DEBTU", Identity, debtu),
        Equation::new("OLPEx", Identity, olpex),
        Equation::new("OLPE", Identity, olpe),
        Equation::new("AAHH", Identity, aahh),
        Equation::new("ALHH", Identity, alhh),
        Equation::new("HHRES", Identity, hhres),
        Equation::new("OAHHADJ", Identity, oahhadj),
        Equation::new("NFWPE", Identity, nfwpe),
        Equation::new("GPW", Identity, gpw),
        Equation::new("NAFROWNSA", Identity, nafrownsa),
        Equation::new("SDLROW", Identity, sdlrow),
        Equation::new("NLROW", Identity, nlrow),
        Equation::new("DAROW", Difference, darow),
        Equation::new("EQAROW", Identity, eqarow),
        Equation::new("NAEQAROW", Identity, naeqarow),
        Equation::new("BAROW", Identity, barow),
        Equation::new("NABAROW", Identity, nabarow),
        Equation::new("OTAROW", Identity, otarow),
        Equation::new("NAOTAROW", Identity, naotarow),
        Equation::new("AROW", Identity, arow),
        Equation::new("AAROW", Identity, aarow),
        Equation::new("DLROW", Identity, dlrow),
        Equation::new("NADLROW", Identity, nadlrow),
        Equation::new("EQLROW", Identity, eqlrow),
        Equation::new("NAEQLROW", Identity, naeqlrow),
        Equation::new("BLROW", Identity, blrow),
        Equation::new("NABLROW", Identity, nablrow),
        Equation::new("OTLROW", Identity, otlrow),
        Equation::new("NAOTLROW", Identity, naotlrow),
        Equation::new("LROW", Identity, lrow),
        Equation::new("ALROW", Identity, alrow),
        Equation::new("NIIP", Difference, niip),
        Equation::new("BLIC", Identity, blic),
        Equation::new("STLIC", Identity, stlic),
        Equation::new("FXLIC", Identity, fxlic),
        Equation::new("EQLIC", Identity, eqlic),
        Equation::new("OLIC", Identity, olic),
        Equation::new("LIC", Identity, lic),
        Equation::new("NABLIC", Identity, nablic),
        Equation::new("NAFXLIC", Identity, nafxlic),
        Equation::new("NAEQLIC", Identity, naeqlic),
        Equation::new("NALIC", Identity, nalic),
        Equation::new("AIC", Identity, aic),
        Equation::new("NAAIC", Identity, naaic),
        Equation::new("NWIC", Identity, nwic),
    ]
}
