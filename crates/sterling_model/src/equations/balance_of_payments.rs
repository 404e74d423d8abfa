//! Balance of payments: exchange rates, investment income, transfers and the
//! current balance.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{dlog, pulse_at, safe_log, solve_dlog, solve_ratio, step_from, trend_from};

/// RXD = RXD(-1) * RX / RX(-1)
fn rxd(c: &EvalContext) -> EvalResult {
    Ok(c.lag("RXD", 1)? * c.v("RX")? / c.lag("RX", 1)?)
}

/// ECUPO = ECUPO(-1) * RX / RX(-1)
fn ecupo(c: &EvalContext) -> EvalResult {
    Ok(c.lag("ECUPO", 1)? * c.v("RX")? / c.lag("RX", 1)?)
}

/// d(DRES) = 0
fn dres(c: &EvalContext) -> EvalResult {
    c.lag("DRES", 1)
}

/// SRES = -DRES + (1 + 0.227*(RXD(-1)/RXD - 1) + 0.364*(RX(-1)/RX - 1)) * SRES(-1)
fn sres(c: &EvalContext) -> EvalResult {
    Ok(-c.v("DRES")?
        + (1.0
            + 0.227 * (c.lag("RXD", 1)? / c.v("RXD")? - 1.0)
            + 0.364 * (c.lag("RX", 1)? / c.v("RX")? - 1.0))
            * c.lag("SRES", 1)?)
}

/// REXC = (DLROW(-1)/LROW(-1)) * (1.24 + 1.91*(log(WEQPR) - log(WEQPR(-4))) + 0.57*R/4)
///     + (EQLROW(-1)/LROW(-1)) * (0.41 + 0.17*(log(WEQPR) - log(WEQPR(-4))))
///     + (BLROW(-1)/LROW(-1)) * (0.30 + 0.82*ROLT/4)
///     + (OTLROW(-1)/LROW(-1)) * (0.09 + 0.8*ROCB/4)
fn rexc(c: &EvalContext) -> EvalResult {
    let dlog_weqpr = safe_log(c.v("WEQPR")?) - safe_log(c.lag("WEQPR", 4)?);
    Ok((c.lag("DLROW", 1)? / c.lag("LROW", 1)?)
        * (1.24 + 1.91 * dlog_weqpr + 0.57 * c.v("R")? / 4.0)
        + (c.lag("EQLROW", 1)? / c.lag("LROW", 1)?) * (0.41 + 0.17 * dlog_weqpr)
        + (c.lag("BLROW", 1)? / c.lag("LROW", 1)?) * (0.30 + 0.82 * (c.v("ROLT")? / 4.0))
        + (c.lag("OTLROW", 1)? / c.lag("LROW", 1)?) * (0.09 + 0.8 * c.v("ROCB")? / 4.0))
}

/// CIPD = (0.7173*CIPD(-1)/LROW(-2) + (1-0.7173)*REXC/100) * LROW(-1)
fn cipd(c: &EvalContext) -> EvalResult {
    Ok((0.7173 * c.lag("CIPD", 1)? / c.lag("LROW", 2)? + (1.0 - 0.7173) * c.v("REXC")? / 100.0)
        * c.lag("LROW", 1)?)
}

/// DIPD = (0.6283*DIPD(-1)/AROW(-2) + (1-0.6283)*REXD_return/100) * AROW(-1)
///
/// REXD_return is the return on domestic assets held abroad (distinct from
/// the exchange rate RXD), computed inline from the sectoral portfolio.
fn dipd(c: &EvalContext) -> EvalResult {
    let rexd_return = (c.lag("DAROW", 1)? / c.lag("AROW", 1)?)
        * (0.62 + 2.36 * c.v("FYCPR")? / c.v("GDPMPS")? - 1.64 * pulse_at(c, 1998, 3))
        + (c.lag("EQAROW", 1)? / c.lag("AROW", 1)?)
            * (0.57 + 15.33 * c.v("NDIVHH")? / c.v("EQHH")?)
        + (c.lag("BAROW", 1)? / c.lag("AROW", 1)?) * (0.23 + 1.04 * c.v("RL")? / 4.0)
        + (c.lag("OTAROW", 1)? / c.lag("AROW", 1)?)
            * (0.18 + 0.14 * c.v("R")? / 4.0 + 0.78 * c.v("ROCB")? / 4.0);

    Ok((0.6283 * c.lag("DIPD", 1)? / c.lag("AROW", 2)?
        + (1.0 - 0.6283) * rexd_return / 100.0)
        * c.lag("AROW", 1)?)
}

/// d(CGCBOP) / CGCBOP(-1) = d(CGC) / CGC(-1)
fn cgcbop(c: &EvalContext) -> EvalResult {
    Ok(c.lag("CGCBOP", 1)?
        + c.lag("CGCBOP", 1)? * (c.v("CGC")? - c.lag("CGC", 1)?) / c.lag("CGC", 1)?)
}

/// NIPD = CIPD - DIPD + CGCBOP
fn nipd(c: &EvalContext) -> EvalResult {
    Ok(c.v("CIPD")? - c.v("DIPD")? + c.v("CGCBOP")?)
}

/// dlog(EECOMPD) = -0.492198*log(EECOMPD(-1)) + 0.693337*log(FYEMP(-1))
///     + 2.148955*dlog(FYEMP) + 0.107609*[>=2005Q1]
///     - 0.004629*trend(1979Q4) - 5.105951
fn eecompd(c: &EvalContext) -> EvalResult {
    let rhs = -0.492198 * safe_log(c.lag("EECOMPD", 1)?)
        + 0.693337 * safe_log(c.lag("FYEMP", 1)?)
        + 2.148955 * dlog(c, "FYEMP", 0)?
        + 0.107609 * step_from(c, 2005, 1)
        - 0.004629 * trend_from(c, 1979, 4)
        - 5.105951;
    Ok(solve_dlog(c.lag("EECOMPD", 1)?, rhs))
}

/// EECOMPC / EECOMPC(-1) = MAJGDP / MAJGDP(-1)
fn eecompc(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("EECOMPC", 1)?,
        c.v("MAJGDP")? / c.lag("MAJGDP", 1)?,
    ))
}

/// EUSUBP = 0
fn eusubp(_: &EvalContext) -> EvalResult {
    Ok(0.0)
}

/// EUSUBPR = EUSUBPR(-1) * ECUPO(-1) / ECUPO
fn eusubpr(c: &EvalContext) -> EvalResult {
    Ok(c.lag("EUSUBPR", 1)? * c.lag("ECUPO", 1)? / c.v("ECUPO")?)
}

/// EUSF = EUSF(-1) * ECUPO(-1) / ECUPO
fn eusf(c: &EvalContext) -> EvalResult {
    Ok(c.lag("EUSF", 1)? * c.lag("ECUPO", 1)? / c.v("ECUPO")?)
}

/// ECNET = (1 - 0.5*(ECUPO(-1)/ECUPO - 1)) * ECNET(-1)
fn ecnet(c: &EvalContext) -> EvalResult {
    Ok((1.0 - 0.5 * (c.lag("ECUPO", 1)? / c.v("ECUPO")? - 1.0)) * c.lag("ECNET", 1)?)
}

/// GNP4 = 0.010 * ((GDPMPS + NIPD + EECOMPC - EECOMPD) / ECUPO(-4))
fn gnp4(c: &EvalContext) -> EvalResult {
    Ok(0.010
        * ((c.v("GDPMPS")? + c.v("NIPD")? + c.v("EECOMPC")? - c.v("EECOMPD")?)
            / c.lag("ECUPO", 4)?))
}

/// EUVAT = 0.0325 * VREC / (0.8267 * ECUPO(-4))
fn euvat(c: &EvalContext) -> EvalResult {
    Ok(0.0325 * c.v("VREC")? / (0.8267 * c.lag("ECUPO", 4)?))
}

/// BENAB = 0.012 * CGSB
fn benab(c: &EvalContext) -> EvalResult {
    Ok(0.012 * c.v("CGSB")?)
}

/// ITA = 0.001115 * WFP
fn ita(c: &EvalContext) -> EvalResult {
    Ok(0.001115 * c.v("WFP")?)
}

/// CGITFA = ITA
fn cgitfa(c: &EvalContext) -> EvalResult {
    c.v("ITA")
}

/// log(HHTFA) = log(HHTFA(-1) * MAJGDP / MAJGDP(-1))
fn hhtfa(c: &EvalContext) -> EvalResult {
    Ok(c.lag("HHTFA", 1)? * c.v("MAJGDP")? / c.lag("MAJGDP", 1)?)
}

/// HHTA / HHTA(-1) = WFP / WFP(-1)
fn hhta(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("HHTA", 1)?,
        c.v("WFP")? / c.lag("WFP", 1)?,
    ))
}

/// TRANC = EUSUBP + HHTFA + EUSF + CGITFA + EUSUBPR + INSURE
fn tranc(c: &EvalContext) -> EvalResult {
    Ok(c.v("EUSUBP")? + c.v("HHTFA")? + c.v("EUSF")? + c.v("CGITFA")? + c.v("EUSUBPR")?
        + c.v("INSURE")?)
}

/// TRAND = TROD + ECNET + EUVAT + EUOT + HHTA + GNP4 + BENAB + ITA + INSURE
fn trand(c: &EvalContext) -> EvalResult {
    Ok(c.v("TROD")? + c.v("ECNET")? + c.v("EUVAT")? + c.v("EUOT")? + c.v("HHTA")?
        + c.v("GNP4")?
        + c.v("BENAB")?
        + c.v("ITA")?
        + c.v("INSURE")?)
}

/// TRANB = TRANC - TRAND
fn tranb(c: &EvalContext) -> EvalResult {
    Ok(c.v("TRANC")? - c.v("TRAND")?)
}

/// CGKTA = 0.02351 * KCGPSO
fn cgkta(c: &EvalContext) -> EvalResult {
    Ok(0.02351 * c.v("KCGPSO")?)
}

/// TB = XPS - MPS
fn tb(c: &EvalContext) -> EvalResult {
    Ok(c.v("XPS")? - c.v("MPS")?)
}

/// CB = TB + (EECOMPC - EECOMPD) + NIPD + TRANC - TRAND
fn cb(c: &EvalContext) -> EvalResult {
    Ok(c.v("TB")? + (c.v("EECOMPC")? - c.v("EECOMPD")?) + c.v("NIPD")? + c.v("TRANC")?
        - c.v("TRAND")?)
}

/// CBPCNT = (CB / GDPMPS) * 100
fn cbpcnt(c: &EvalContext) -> EvalResult {
    Ok((c.v("CB")? / c.v("GDPMPS")?) * 100.0)
}

/// NAFROW = -(CB + EUKT - (CGKTA + OPSKTA) + NPAA)
fn nafrow(c: &EvalContext) -> EvalResult {
    Ok(-(c.v("CB")? + c.v("EUKT")? - (c.v("CGKTA")? + c.v("OPSKTA")?) + c.v("NPAA")?))
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("RXD", Identity, rxd),
        Equation::new("ECUPO", Identity, ecupo),
        Equation::new("DRES", Difference, dres),
        Equation::new("SRES", Identity, sres),
        Equation::new("REXC", Identity, rexc),
        Equation::new("CIPD", Identity, cipd),
        Equation::new("DIPD", Identity, dipd),
        Equation::new("CGCBOP", Identity, cgcbop),
        Equation::new("NIPD", Identity, nipd),
        Equation::new("EECOMPD", LogDifference, eecompd),
        Equation::new("EECOMPC", Ratio, eecompc),
        Equation::new("EUSUBP", Identity, eusubp),
        Equation::new("EUSUBPR", Identity, eusubpr),
        Equation::new("EUSF", Identity, eusf),
        Equation::new("ECNET", Identity, ecnet),
        Equation::new("GNP4", Identity, gnp4),
        Equation::new("EUVAT", Identity, euvat),
        Equation::new("BENAB", Identity, benab),
        Equation::new("ITA", Identity, ita),
        Equation::new("CGITFA", Identity, cgitfa),
        Equation::new("HHTFA", Identity, hhtfa),
        Equation::new("HHTA", Ratio, hhta),
        Equation::new("TRANC", Identity, tranc),
        Equation::new("TRAND", Identity, trand),
        Equation::new("TRANB", Identity, tranb),
        Equation::new("CGKTA", Identity, cgkta),
        Equation::new("TB", Identity, tb),
        Equation::new("CB", Identity, cb),
        Equation::new("CBPCNT", Identity, cbpcnt),
        Equation::new("NAFROW", Identity, nafrow),
    ]
}
