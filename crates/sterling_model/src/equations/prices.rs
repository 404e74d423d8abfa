//! Prices and wages: earnings, unit labour costs, the input-output cost
//! indices, consumer and trade prices, and the RPI block.
//!
//! SCOST/CCOST/UTCOST form the tightly coupled cost block. Their sweep
//! equations below stay registered so the system remains solvable without
//! the accelerator, and [`cost_block`] hands the solver the matching
//! closed-form definition.

use sterling_core::{
    CostBlock, Equation, EquationKind, EvalContext, EvalError, EvalResult,
};

use crate::config;
use crate::funcs::{dlog, pulse_at, safe_log, solve_dlog, solve_ratio, trend_from, year_average};

/// OILBASE = 2009 average of PBRENT / RXD
fn oilbase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| Ok(c.at("PBRENT", p)? / c.at("RXD", p)?))
}

/// dlog(PSAVEI) = -0.0282 + 0.575*dlog(PMSGVA) + 0.250*dlog(PMSGVA(-1))
///     + 0.105*dlog(PMSGVA(-2)) + (1-0.575-0.250-0.105)*dlog(PMSGVA(-3))
///     - 0.0096*d(LFSUR) + 0.264*(dlog(MSGVA) - dlog(EMS))
///     + 0.282*(dlog(CPI) - dlog(PMSGVA))
///     - 0.04328*(log(PSAVEI(-1)) - log(MSGVA(-1)/EMS(-1)) - log(PMSGVA(-1))
///         + log(1 + EMPSC(-1)/WFP(-1)) + 0.0137*LFSUR(-1))
fn psavei(c: &EvalContext) -> EvalResult {
    let d_lfsur = c.v("LFSUR")? - c.lag("LFSUR", 1)?;

    let ecm = safe_log(c.lag("PSAVEI", 1)?)
        - safe_log(c.lag("MSGVA", 1)? / c.lag("EMS", 1)?)
        - safe_log(c.lag("PMSGVA", 1)?)
        + safe_log(1.0 + c.lag("EMPSC", 1)? / c.lag("WFP", 1)?)
        + 0.0137 * c.lag("LFSUR", 1)?;

    let rhs = -0.0282
        + 0.575 * dlog(c, "PMSGVA", 0)?
        + 0.250 * dlog(c, "PMSGVA", 1)?
        + 0.105 * dlog(c, "PMSGVA", 2)?
        + (1.0 - 0.575 - 0.250 - 0.105) * dlog(c, "PMSGVA", 3)?
        - 0.0096 * d_lfsur
        + 0.264 * (dlog(c, "MSGVA", 0)? - dlog(c, "EMS", 0)?)
        + 0.282 * (dlog(c, "CPI", 0)? - dlog(c, "PMSGVA", 0)?)
        - 0.04328 * ecm;
    Ok(solve_dlog(c.lag("PSAVEI", 1)?, rhs))
}

/// EARN = WFP / (ETLFS - ESLFS)
fn earn(c: &EvalContext) -> EvalResult {
    Ok(c.v("WFP")? / (c.v("ETLFS")? - c.v("ESLFS")?))
}

/// RPW = (FYEMP / PGVA) / (ETLFS - ESLFS)
fn rpw(c: &EvalContext) -> EvalResult {
    Ok((c.v("FYEMP")? / c.v("PGVA")?) / (c.v("ETLFS")? - c.v("ESLFS")?))
}

/// RCW = (FYEMP / PCE) / (ETLFS - ESLFS)
fn rcw(c: &EvalContext) -> EvalResult {
    Ok((c.v("FYEMP")? / c.v("PCE")?) / (c.v("ETLFS")? - c.v("ESLFS")?))
}

/// ULCPS = 0.17910 * (PSAVEI * (52/4) * (1 + (EMPSC + NIS)/WFP) * EMS / GVA)
fn ulcps(c: &EvalContext) -> EvalResult {
    Ok(0.17910
        * (c.v("PSAVEI")? * (52.0 / 4.0)
            * (1.0 + (c.v("EMPSC")? + c.v("NIS")?) / c.v("WFP")?)
            * c.v("EMS")?
            / c.v("GVA")?))
}

/// MSGVAPSEMP = MSGVAPS - MI
fn msgvapsemp(c: &EvalContext) -> EvalResult {
    Ok(c.v("MSGVAPS")? - c.v("MI")?)
}

/// FYEMPMS = FYEMP - CGWS - LAWS
fn fyempms(c: &EvalContext) -> EvalResult {
    Ok(c.v("FYEMP")? - c.v("CGWS")? - c.v("LAWS")?)
}

/// ULCMS = 100 * 1.6715 * FYEMPMS * (1 + MI/MSGVAPSEMP) / MSGVA
fn ulcms(c: &EvalContext) -> EvalResult {
    Ok(100.0 * 1.6715 * c.v("FYEMPMS")? * (1.0 + c.v("MI")? / c.v("MSGVAPSEMP")?)
        / c.v("MSGVA")?)
}

/// ULCPSBASE = 2009 average of ULCPS
fn ulcpsbase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| c.at("ULCPS", p))
}

/// ULCMSBASE = 2009 average of ULCMS
fn ulcmsbase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| c.at("ULCMS", p))
}

/// PMNOGBASE = 2009 average of PMNOG
fn pmnogbase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| c.at("PMNOG", p))
}

/// PMSBASE = 2009 average of PMS
fn pmsbase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| c.at("PMS", p))
}

/// TXRATEBASE = 2009 average of BPAPS / GVA
fn txratebase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| Ok(c.at("BPAPS", p)? / c.at("GVA", p)?))
}

/// PPIYBASE = 2009 average of PPIY
fn ppiybase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| c.at("PPIY", p))
}

/// CPIXBASE = 2009 average of CPIX
fn cpixbase(c: &EvalContext) -> EvalResult {
    year_average(c, 2009, |c, p| c.at("CPIX", p))
}

/// Shared input ratios for the cost-index equations.
struct CostInputs {
    ulc: f64,
    pmn: f64,
    pms: f64,
    oil: f64,
    tx: f64,
    ppiy: f64,
}

fn cost_inputs(c: &EvalContext) -> Result<CostInputs, EvalError> {
    Ok(CostInputs {
        ulc: c.v("ULCMS")? / c.v("ULCMSBASE")?,
        pmn: c.v("PMNOG")? / c.v("PMNOGBASE")?,
        pms: c.v("PMS")? / c.v("PMSBASE")?,
        oil: (c.v("PBRENT")? / c.v("RXD")?) / c.v("OILBASE")?,
        tx: (c.v("BPAPS")? / c.v("GVA")?) / c.v("TXRATEBASE")?,
        ppiy: c.v("PPIY")? / c.v("PPIYBASE")?,
    })
}

/// MCOST = 36.83*ulc + 24.64*pmn + 4.04*pms + 4.85*oil + 1.01*tx
///     + 24.72*(SCOST/100) + 0.47*(CCOST/100) + 3.43*(UTCOST/100)
fn mcost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    Ok(36.83 * r.ulc + 24.64 * r.pmn + 4.04 * r.pms + 4.85 * r.oil + 1.01 * r.tx
        + 24.72 * (c.v("SCOST")? / 100.0)
        + 0.47 * (c.v("CCOST")? / 100.0)
        + 3.43 * (c.v("UTCOST")? / 100.0))
}

/// SCOST = 70.54*ulc + 6.93*pmn + 6.41*pms + 0.09*oil + 3.52*tx
///     + 9.78*ppiy + 1.64*(CCOST/100) + 1.09*(UTCOST/100)
fn scost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    Ok(70.54 * r.ulc + 6.93 * r.pmn + 6.41 * r.pms + 0.09 * r.oil + 3.52 * r.tx
        + 9.78 * r.ppiy
        + 1.64 * (c.v("CCOST")? / 100.0)
        + 1.09 * (c.v("UTCOST")? / 100.0))
}

/// CCOST = 40.25*ulc + 2.80*pmn + 0.90*pms + 0.03*oil + 0.51*tx
///     + 27.06*ppiy + 28.13*(SCOST/100) + 0.34*(UTCOST/100)
fn ccost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    Ok(40.25 * r.ulc + 2.80 * r.pmn + 0.90 * r.pms + 0.03 * r.oil + 0.51 * r.tx
        + 27.06 * r.ppiy
        + 28.13 * (c.v("SCOST")? / 100.0)
        + 0.34 * (c.v("UTCOST")? / 100.0))
}

/// UTCOST = 14.85*ulc + 3.04*pmn + 0.51*pms + 51.52*oil + 2.90*tx
///     + 8.24*ppiy + 16.00*(SCOST/100) + 2.95*(CCOST/100)
fn utcost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    Ok(14.85 * r.ulc + 3.04 * r.pmn + 0.51 * r.pms + 51.52 * r.oil + 2.90 * r.tx
        + 8.24 * r.ppiy
        + 16.00 * (c.v("SCOST")? / 100.0)
        + 2.95 * (c.v("CCOST")? / 100.0))
}

/// Exogenous intercepts of the SCOST/CCOST/UTCOST closure: every term of
/// the three equations except the cross-references between the targets.
fn cost_block_intercepts(c: &EvalContext) -> Result<[f64; 3], EvalError> {
    let r = cost_inputs(c)?;
    let a1 = 70.54 * r.ulc + 6.93 * r.pmn + 6.41 * r.pms + 0.09 * r.oil + 3.52 * r.tx
        + 9.78 * r.ppiy;
    let a2 = 40.25 * r.ulc + 2.80 * r.pmn + 0.90 * r.pms + 0.03 * r.oil + 0.51 * r.tx
        + 27.06 * r.ppiy;
    let a3 = 14.85 * r.ulc + 3.04 * r.pmn + 0.51 * r.pms + 51.52 * r.oil + 2.90 * r.tx
        + 8.24 * r.ppiy;
    Ok([a1, a2, a3])
}

/// Closed-form definition of the cost block for the solver's pre-solve
/// step. Cross-coefficients match the sweep equations above.
pub fn cost_block() -> CostBlock {
    CostBlock::new(
        ["SCOST", "CCOST", "UTCOST"],
        [
            [0.0, 1.64, 1.09],
            [28.13, 0.0, 0.34],
            [16.00, 2.95, 0.0],
        ],
        cost_block_intercepts,
    )
}

/// RPCOST = 13.18*pmn + 4.07*pms + 11.56*tx + 7.07*ppiy
///     + 59.96*(SCOST/100) + 0.92*(CCOST/100) + 3.24*(UTCOST/100)
fn rpcost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    Ok(13.18 * r.pmn + 4.07 * r.pms + 11.56 * r.tx + 7.07 * r.ppiy
        + 59.96 * (c.v("SCOST")? / 100.0)
        + 0.92 * (c.v("CCOST")? / 100.0)
        + 3.24 * (c.v("UTCOST")? / 100.0))
}

/// ICOST = 18.40*pmn + 0.41*pms + 0.19*oil
///     + 5.63*((BPAPS/MSGVA)/TXRATEBASE) + 8.18*ppiy
///     + 20.76*(SCOST/100) + 46.42*(CCOST/100)
fn icost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    let tx_ms = (c.v("BPAPS")? / c.v("MSGVA")?) / c.v("TXRATEBASE")?;
    Ok(18.40 * r.pmn + 0.41 * r.pms + 0.19 * r.oil + 5.63 * tx_ms + 8.18 * r.ppiy
        + 20.76 * (c.v("SCOST")? / 100.0)
        + 46.42 * (c.v("CCOST")? / 100.0))
}

/// XGCOST = 15.77*pmn + 2.92*((BPAPS/MSGVA)/TXRATEBASE) + 68.46*ppiy
///     + 12.80*(SCOST/100) + 0.05*(UTCOST/100)
fn xgcost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    let tx_ms = (c.v("BPAPS")? / c.v("MSGVA")?) / c.v("TXRATEBASE")?;
    Ok(15.77 * r.pmn + 2.92 * tx_ms + 68.46 * r.ppiy
        + 12.80 * (c.v("SCOST")? / 100.0)
        + 0.05 * (c.v("UTCOST")? / 100.0))
}

/// XSCOST = 7.22*pms + 5.99*((BPAPS/MSGVA)/TXRATEBASE) + 9.29*ppiy
///     + 75.39*(SCOST/100) + 1.90*(CCOST/100) + 0.21*(UTCOST/100)
fn xscost(c: &EvalContext) -> EvalResult {
    let r = cost_inputs(c)?;
    let tx_ms = (c.v("BPAPS")? / c.v("MSGVA")?) / c.v("TXRATEBASE")?;
    Ok(7.22 * r.pms + 5.99 * tx_ms + 9.29 * r.ppiy
        + 75.39 * (c.v("SCOST")? / 100.0)
        + 1.90 * (c.v("CCOST")? / 100.0)
        + 0.21 * (c.v("UTCOST")? / 100.0))
}

/// MKGW = 100 * (PPIY / (MCOST/100)) / PPIYBASE
fn mkgw(c: &EvalContext) -> EvalResult {
    Ok(100.0 * (c.v("PPIY")? / (c.v("MCOST")? / 100.0)) / c.v("PPIYBASE")?)
}

/// dlog(MKR) = (dlog(CPI) - W1*dlog(CPIRENT) - (1-W1)*dlog(RPCOST)) / (1-W1)
fn mkr(c: &EvalContext) -> EvalResult {
    let w1 = config::W1;
    let rhs = (dlog(c, "CPI", 0)? - w1 * dlog(c, "CPIRENT", 0)?
        - (1.0 - w1) * dlog(c, "RPCOST", 0)?)
        / (1.0 - w1);
    Ok(solve_dlog(c.lag("MKR", 1)?, rhs))
}

/// CPIX = (RPCOST / 100) * (MKR / 100) * CPIXBASE
fn cpix(c: &EvalContext) -> EvalResult {
    Ok((c.v("RPCOST")? / 100.0) * (c.v("MKR")? / 100.0) * c.v("CPIXBASE")?)
}

/// Weighted growth of earnings, housing rents and rental prices, shared by
/// PRENT and CPIRENT.
fn rent_growth(c: &EvalContext) -> EvalResult {
    let wage_t = c.v("WFP")? / (c.v("ETLFS")? - c.v("ESLFS")?);
    let wage_t1 = c.lag("WFP", 1)? / (c.lag("ETLFS", 1)? - c.lag("ESLFS", 1)?);
    Ok(0.62 * (wage_t / wage_t1)
        + 0.15 * (c.v("HRRPW")? / c.lag("HRRPW", 1)?)
        + 0.23 * (c.v("PRP")? / c.lag("PRP", 1)?))
}

/// PRENT = PRENT(-1) * (0.62*wage growth + 0.15*HRRPW growth + 0.23*PRP growth)
fn prent(c: &EvalContext) -> EvalResult {
    Ok(c.lag("PRENT", 1)? * rent_growth(c)?)
}

/// CPIH = CPIH(-1) * (CPI^(1-W5) * OOH^W5) / (CPI(-1)^(1-W5) * OOH(-1)^W5)
fn cpih(c: &EvalContext) -> EvalResult {
    let w5 = config::W5;
    Ok(c.lag("CPIH", 1)?
        * (c.v("CPI")?.powf(1.0 - w5) * c.v("OOH")?.powf(w5))
        / (c.lag("CPI", 1)?.powf(1.0 - w5) * c.lag("OOH", 1)?.powf(w5)))
}

/// CPIRENT = CPIRENT(-1) * (0.62*wage growth + 0.15*HRRPW growth + 0.23*PRP growth)
fn cpirent(c: &EvalContext) -> EvalResult {
    Ok(c.lag("CPIRENT", 1)? * rent_growth(c)?)
}

/// PRMIP = PRMIP(-1) * (RMORT/RMORT(-1)) * (LHP/LHP(-1)) / (HH/HH(-1))
///
/// The PRMIP_A add-factor is applied by the post-convergence adjustment
/// table, not here.
fn prmip(c: &EvalContext) -> EvalResult {
    Ok(c.lag("PRMIP", 1)?
        * (c.v("RMORT")? / c.lag("RMORT", 1)?)
        * (c.v("LHP")? / c.lag("LHP", 1)?)
        / (c.v("HH")? / c.lag("HH", 1)?))
}

/// PR = I7 * ((1 - W4) * PRXMIP / I9 + W4 * PRMIP / I4)
fn pr(c: &EvalContext) -> EvalResult {
    Ok(config::I7
        * ((1.0 - config::W4) * c.v("PRXMIP")? / config::I9
            + config::W4 * c.v("PRMIP")? / config::I4))
}

/// RPI = PR / PR(-4) * 100 - 100
fn rpi(c: &EvalContext) -> EvalResult {
    Ok(c.v("PR")? / c.lag("PR", 4)? * 100.0 - 100.0)
}

/// dlog(PXNOG) = 0.635957*dlog(PPIY(-1)) + 0.102727*(dlog(WPG) - dlog(RXD))
///     - 0.131253*dlog(RX) - 0.000508*trend(1979Q4)
///     + pulse dummies - 0.161370*ecm + 0.297153
fn pxnog(c: &EvalContext) -> EvalResult {
    let ecm = safe_log(c.lag("PXNOG", 1)?)
        + 0.330293 * safe_log(c.lag("RX", 1)?)
        - 0.921258 * safe_log(c.lag("PPIY", 1)?)
        - (1.0 - 0.921258) * safe_log(c.lag("WPG", 1)? / c.lag("RXD", 1)?);

    let rhs = 0.635957 * dlog(c, "PPIY", 1)?
        + 0.102727 * (dlog(c, "WPG", 0)? - dlog(c, "RXD", 0)?)
        - 0.131253 * dlog(c, "RX", 0)?
        - 0.000508 * trend_from(c, 1979, 4)
        + 0.100860 * pulse_at(c, 1997, 1)
        - 0.063293 * pulse_at(c, 1998, 1)
        + 0.034519 * pulse_at(c, 1993, 1)
        - 0.161370 * ecm
        + 0.297153;
    Ok(solve_dlog(c.lag("PXNOG", 1)?, rhs))
}

/// PXS / PXS(-1) = PXNOG / PXNOG(-1)
fn pxs(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("PXS", 1)?,
        c.v("PXNOG")? / c.lag("PXNOG", 1)?,
    ))
}

/// dlog(PMNOG) = 0.606452*dlog(PPIY) + 0.230808*(dlog(WPG) - dlog(RXD))
///     - 0.106493*dlog(RX) + pulse dummies - 0.000538*trend(1979Q4)
///     - 0.160709*ecm + 0.183135
fn pmnog(c: &EvalContext) -> EvalResult {
    let ecm = safe_log(c.lag("PMNOG", 1)?)
        + 0.139917 * safe_log(c.lag("RX", 1)?)
        - 0.552396 * safe_log(c.lag("PPIY", 1)?)
        - (1.0 - 0.552396) * safe_log(c.lag("WPG", 1)? / c.lag("RXD", 1)?);

    let rhs = 0.606452 * dlog(c, "PPIY", 0)?
        + 0.230808 * (dlog(c, "WPG", 0)? - dlog(c, "RXD", 0)?)
        - 0.106493 * dlog(c, "RX", 0)?
        + 0.066665 * pulse_at(c, 1997, 1)
        - 0.038986 * pulse_at(c, 1998, 1)
        - 0.000538 * trend_from(c, 1979, 4)
        - 0.160709 * ecm
        + 0.183135;
    Ok(solve_dlog(c.lag("PMNOG", 1)?, rhs))
}

/// PMS / PMS(-1) = PMNOG / PMNOG(-1)
fn pms(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("PMS", 1)?,
        c.v("PMNOG")? / c.lag("PMNOG", 1)?,
    ))
}

/// PINV = 100 * BV / INV
fn pinv(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("BV")? / c.v("INV")?)
}

/// PCE / PCE(-4) = CPI / CPI(-4)
fn pce(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("PCE", 4)?,
        c.v("CPI")? / c.lag("CPI", 4)?,
    ))
}

/// PIF = (GDPMPS - CGGPS - CONSPS - DINVPS - VALPS - XPS + MPS - SDEPS) * 100 / IF
fn pif(c: &EvalContext) -> EvalResult {
    let numerator = c.v("GDPMPS")? - c.v("CGGPS")? - c.v("CONSPS")? - c.v("DINVPS")?
        - c.v("VALPS")?
        - c.v("XPS")?
        + c.v("MPS")?
        - c.v("SDEPS")?;
    Ok(numerator * 100.0 / c.v("IF")?)
}

/// PCDUR / PCDUR(-1) = PMNOG / PMNOG(-1)
fn pcdur(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("PCDUR", 1)?,
        c.v("PMNOG")? / c.lag("PMNOG", 1)?,
    ))
}

/// RHF = RMORT - (1 - 0.25*TPBRZ) * (RMORT - RDEP) * (1 - 0.001*LHP/GPW)
fn rhf(c: &EvalContext) -> EvalResult {
    Ok(c.v("RMORT")?
        - (1.0 - 0.25 * c.v("TPBRZ")?)
            * (c.v("RMORT")? - c.v("RDEP")?)
            * (1.0 - 0.001 * c.v("LHP")? / c.v("GPW")?))
}

/// HD / HD(-1) = APH / APH(-1)
fn hd(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("HD", 1)?,
        c.v("APH")? / c.lag("APH", 1)?,
    ))
}

/// PMSGVA = 100 * (MSGVAPS / MSGVA)
fn pmsgva(c: &EvalContext) -> EvalResult {
    Ok(100.0 * (c.v("MSGVAPS")? / c.v("MSGVA")?))
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("OILBASE", Identity, oilbase),
        Equation::new("PSAVEI", LogDifference, psavei),
        Equation::new("EARN", Identity, earn),
        Equation::new("RPW", Identity, rpw),
        Equation::new("RCW", Identity, rcw),
        Equation::new("ULCPS", Identity, ulcps),
        Equation::new("MSGVAPSEMP", Identity, msgvapsemp),
        Equation::new("FYEMPMS", Identity, fyempms),
        Equation::new("ULCMS", Identity, ulcms),
        Equation::new("ULCPSBASE", Identity, ulcpsbase),
        Equation::new("ULCMSBASE", Identity, ulcmsbase),
        Equation::new("PMNOGBASE", Identity, pmnogbase),
        Equation::new("PMSBASE", Identity, pmsbase),
        Equation::new("TXRATEBASE", Identity, txratebase),
        Equation::new("PPIYBASE", Identity, ppiybase),
        Equation::new("CPIXBASE", Identity, cpixbase),
        Equation::new("SCOST", Identity, scost),
        Equation::new("CCOST", Identity, ccost),
        Equation::new("UTCOST", Identity, utcost),
        Equation::new("MCOST", Identity, mcost),
        Equation::new("RPCOST", Identity, rpcost),
        Equation::new("ICOST", Identity, icost),
        Equation::new("XGCOST", Identity, xgcost),
        Equation::new("XSCOST", Identity, xscost),
        Equation::new("MKGW", Identity, mkgw),
        Equation::new("MKR", LogDifference, mkr),
        Equation::new("CPIX", Identity, cpix),
        Equation::new("PRENT", Identity, prent),
        Equation::new("CPIH", Identity, cpih),
        Equation::new("CPIRENT", Identity, cpirent),
        Equation::new("PRMIP", Identity, prmip),
        Equation::new("PR", Identity, pr),
        Equation::new("RPI", Identity, rpi),
        Equation::new("PXNOG", LogDifference, pxnog),
        Equation::new("PXS", Ratio, pxs),
        Equation::new("PMNOG", LogDifference, pmnog),
        Equation::new("PMS", Ratio, pms),
        Equation::new("PINV", Identity, pinv),
        Equation::new("PCE", Ratio, pce),
        Equation::new("PIF", Identity, pif),
        Equation::new("PCDUR", Ratio, pcdur),
        Equation::new("RHF", Identity, rhf),
        Equation::new("HD", Ratio, hd),
        Equation::new("PMSGVA", Identity, pmsgva),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sterling_core::{Period, SeriesStore};

    fn cost_store(t: Period) -> SeriesStore {
        let mut store = SeriesStore::new(t, t);
        for (name, value) in [
            ("ULCMS", 68.0),
            ("ULCMSBASE", 65.0),
            ("PMNOG", 36.0),
            ("PMNOGBASE", 34.0),
            ("PMS", 36.5),
            ("PMSBASE", 35.0),
            ("PBRENT", 55.0),
            ("RXD", 0.85),
            ("OILBASE", 50.0),
            ("BPAPS", 41000.0),
            ("GVA", 280000.0),
            ("TXRATEBASE", 0.15),
            ("PPIY", 36.0),
            ("PPIYBASE", 35.0),
        ] {
            store.set(t, name, value).unwrap();
        }
        store
    }

    #[test]
    fn pre_solve_reproduces_the_sweep_equations() {
        let t = Period::new(2025, 1);
        let mut store = cost_store(t);
        for name in ["SCOST", "CCOST", "UTCOST"] {
            store.set(t, name, 100.0).unwrap();
        }
        assert!(cost_block().pre_solve(&mut store, t));

        // Substituting the closed-form solution back into the registered
        // equations must reproduce each stored value.
        let ctx = EvalContext::new(&store, t);
        for (name, eval) in [
            ("SCOST", scost as fn(&EvalContext) -> EvalResult),
            ("CCOST", ccost),
            ("UTCOST", utcost),
        ] {
            let solved = store.get(t, name).unwrap();
            let rhs = eval(&ctx).unwrap();
            assert!(
                ((solved - rhs) / rhs).abs() < 1e-9,
                "{name}: solved {solved} vs rhs {rhs}"
            );
        }
    }

    #[test]
    fn cost_block_intercepts_do_not_read_the_targets() {
        // The pre-solve runs once, before the sweep; that is only sound
        // because its intercepts never read SCOST/CCOST/UTCOST. A store
        // without those columns must still produce intercepts.
        let t = Period::new(2025, 1);
        let store = cost_store(t);
        let ctx = EvalContext::new(&store, t);
        let intercepts = cost_block_intercepts(&ctx).unwrap();
        assert!(intercepts.iter().all(|a| a.is_finite()));
    }
}
