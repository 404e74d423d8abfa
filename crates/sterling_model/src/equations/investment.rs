//! Investment: cost of capital, capital stock, business and housing
//! investment, and the sectoral capital-spending split.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{dlog, pulse_at, safe_log, solve_dlog, solve_ratio, step_from, step_until};

/// DB = [<=2011Q2] * 1/(1+DISCO)
///     * (IIB + (SIB/DISCO) * (1 - (1+DISCO)^(-(1-IIB)/(SIB + 0.1*[>=2011Q3]))))
fn db(c: &EvalContext) -> EvalResult {
    let disco = c.v("DISCO")?;
    let iib = c.v("IIB")?;
    let sib = c.v("SIB")?;

    let sib_adj = sib + 0.1 * step_from(c, 2011, 3);
    let exponent = -(1.0 - iib) / sib_adj;

    Ok(step_until(c, 2011, 2)
        * (1.0 / (1.0 + disco))
        * (iib + (sib / disco) * (1.0 - (1.0 + disco).powf(exponent))))
}

/// DP = 1/(1+DISCO) * ((DISCO*FP + SP) / (DISCO + SP))
fn dp(c: &EvalContext) -> EvalResult {
    let disco = c.v("DISCO")?;
    Ok((1.0 / (1.0 + disco)) * ((disco * c.v("FP")? + c.v("SP")?) / (disco + c.v("SP")?)))
}

/// DV = SV / (DISCO + SV)
fn dv(c: &EvalContext) -> EvalResult {
    Ok(c.v("SV")? / (c.v("DISCO")? + c.v("SV")?))
}

/// WB = 0.31
fn wb(_: &EvalContext) -> EvalResult {
    Ok(0.31)
}

/// WP = 0.54
fn wp(_: &EvalContext) -> EvalResult {
    Ok(0.54)
}

/// WV = 0.14
fn wv(_: &EvalContext) -> EvalResult {
    Ok(0.14)
}

/// TAFB = (1 - TCPRO * DB) / (1 - TCPRO)
fn tafb(c: &EvalContext) -> EvalResult {
    Ok((1.0 - c.v("TCPRO")? * c.v("DB")?) / (1.0 - c.v("TCPRO")?))
}

/// TAFP = (1 - TCPRO * DP) / (1 - TCPRO)
fn tafp(c: &EvalContext) -> EvalResult {
    Ok((1.0 - c.v("TCPRO")? * c.v("DP")?) / (1.0 - c.v("TCPRO")?))
}

/// TAFV = (1 - TCPRO * DV) / (1 - TCPRO)
fn tafv(c: &EvalContext) -> EvalResult {
    Ok((1.0 - c.v("TCPRO")? * c.v("DV")?) / (1.0 - c.v("TCPRO")?))
}

/// TAF = WB * TAFB + WP * TAFP + WV * TAFV
fn taf(c: &EvalContext) -> EvalResult {
    Ok(c.v("WB")? * c.v("TAFB")? + c.v("WP")? * c.v("TAFP")? + c.v("WV")? * c.v("TAFV")?)
}

/// WG = 0.03
fn wg(_: &EvalContext) -> EvalResult {
    Ok(0.03)
}

/// CDEBT = CDEBT(-1) + d(RIC)
fn cdebt(c: &EvalContext) -> EvalResult {
    Ok(c.lag("CDEBT", 1)? + (c.v("RIC")? - c.lag("RIC", 1)?))
}

/// CEQUITY = NDIV * (1 + WG) + 100 * WG
fn cequity(c: &EvalContext) -> EvalResult {
    Ok(c.v("NDIV")? * (1.0 + c.v("WG")?) + 100.0 * c.v("WG")?)
}

/// RWACC = DEBTW * CDEBT + (1 - DEBTW) * CEQUITY
fn rwacc(c: &EvalContext) -> EvalResult {
    Ok(c.v("DEBTW")? * c.v("CDEBT")? + (1.0 - c.v("DEBTW")?) * c.v("CEQUITY")?)
}

/// RDELTA = 0.022
fn rdelta(_: &EvalContext) -> EvalResult {
    Ok(0.022)
}

/// COCU = PIBUS / PGDP * PGDP(1970Q1) / PIBUS(1970Q1) * (DELTA + RWACC)
fn cocu(c: &EvalContext) -> EvalResult {
    let base = sterling_core::Period::new(1970, 1);
    let pgdp_base = c.at("PGDP", base)?;
    let pibus_base = c.at("PIBUS", base)?;
    Ok((c.v("PIBUS")? / c.v("PGDP")?) * (pgdp_base / pibus_base) * (c.v("DELTA")? + c.v("RWACC")?))
}

/// COC = TAF * COCU
fn coc(c: &EvalContext) -> EvalResult {
    Ok(c.v("TAF")? * c.v("COCU")?)
}

/// KSTAR = exp(log(MSGVA) - 0.4 * log(COC) + 2.434202655)
fn kstar(c: &EvalContext) -> EvalResult {
    Ok((safe_log(c.v("MSGVA")?) - 0.4 * safe_log(c.v("COC")?) + 2.434202655).exp())
}

/// KMSXH = (IBUSX / 1000) + KMSXH(-1) * (1 - RDELTA)
fn kmsxh(c: &EvalContext) -> EvalResult {
    Ok((c.v("IBUSX")? / 1000.0) + c.lag("KMSXH", 1)? * (1.0 - c.v("RDELTA")?))
}

/// KGAP = log(KMSXH * 1000) - log(KSTAR)
fn kgap(c: &EvalContext) -> EvalResult {
    Ok(safe_log(c.v("KMSXH")? * 1000.0) - safe_log(c.v("KSTAR")?))
}

/// TQ = -(NWIC / 1000) / (KMSXH * (PKMSXHB / 100))
fn tq(c: &EvalContext) -> EvalResult {
    Ok(-(c.v("NWIC")? / 1000.0) / (c.v("KMSXH")? * (c.v("PKMSXHB")? / 100.0)))
}

/// PKMSXHB = PIBUS
fn pkmsxhb(c: &EvalContext) -> EvalResult {
    c.v("PIBUS")
}

/// IBUS = IF - GGI - PCIH - PCLEB - IH - IPRL
fn ibus(c: &EvalContext) -> EvalResult {
    Ok(c.v("IF")? - c.v("GGI")? - c.v("PCIH")? - c.v("PCLEB")? - c.v("IH")? - c.v("IPRL")?)
}

/// IBUSX = IBUS - 17394 * [2005Q2]
fn ibusx(c: &EvalContext) -> EvalResult {
    Ok(c.v("IBUS")? - 17394.0 * pulse_at(c, 2005, 2))
}

/// GGIPS = CGIPS + LAIPS
fn ggips(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGIPS")? + c.v("LAIPS")?)
}

/// GGI = 100 * GGIPS / GGIDEF
fn ggi(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("GGIPS")? / c.v("GGIDEF")?)
}

/// GGIX = GGI + 17394 * [2005Q2]
fn ggix(c: &EvalContext) -> EvalResult {
    Ok(c.v("GGI")? + 17394.0 * pulse_at(c, 2005, 2))
}

/// GGIDEF / GGIDEF(-1) = PIF / PIF(-1)
fn ggidef(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("GGIDEF", 1)?,
        c.v("PIF")? / c.lag("PIF", 1)?,
    ))
}

/// dlog(HIMPROV) = -1.936849 + 0.0467091*d(RMORT) - 0.09652566*dlog(PD(-1))
///     - 0.5129925*(log(HIMPROV(-1)) - 1.00768*log(CONSPS(-1)))
///     - 0.0834384*[2003Q1]
fn himprov(c: &EvalContext) -> EvalResult {
    let d_rmort = c.v("RMORT")? - c.lag("RMORT", 1)?;
    let ecm = safe_log(c.lag("HIMPROV", 1)?) - 1.00768 * safe_log(c.lag("CONSPS", 1)?);
    let rhs = -1.936849 + 0.0467091 * d_rmort - 0.09652566 * dlog(c, "PD", 1)?
        - 0.5129925 * ecm
        - 0.0834384 * pulse_at(c, 2003, 1);
    Ok(solve_dlog(c.lag("HIMPROV", 1)?, rhs))
}

/// PCIH / PCIH(-1) = IH / IH(-1)
fn pcih(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("PCIH", 1)?,
        c.v("IH")? / c.lag("IH", 1)?,
    ))
}

/// VALPS = VAL * PIF / 100
fn valps(c: &EvalContext) -> EvalResult {
    Ok(c.v("VAL")? * c.v("PIF")? / 100.0)
}

/// VALHH = 0.25 * VALPS
fn valhh(c: &EvalContext) -> EvalResult {
    Ok(0.25 * c.v("VALPS")?)
}

/// IFPS = IF * PIF / 100
fn ifps(c: &EvalContext) -> EvalResult {
    Ok(c.v("IF")? * c.v("PIF")? / 100.0)
}

/// PIPRL = 100 * IPRLPS / IPRL
fn piprl(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("IPRLPS")? / c.v("IPRL")?)
}

/// IHPS = IH * PIH / 100
fn ihps(c: &EvalContext) -> EvalResult {
    Ok(c.v("IH")? * c.v("PIH")? / 100.0)
}

/// IHHPS = IHHPS(-1)
///     * (0.8456*IHPS + 0.5674*IPRLPS + 0.0803*(PIBUS/100)*IBUS)
///     / (same expression lagged one quarter)
fn ihhps(c: &EvalContext) -> EvalResult {
    let numerator = 0.8456 * c.v("IHPS")?
        + 0.5674 * c.v("IPRLPS")?
        + 0.0803 * (c.v("PIBUS")? / 100.0) * c.v("IBUS")?;
    let denominator = 0.8456 * c.lag("IHPS", 1)?
        + 0.5674 * c.lag("IPRLPS", 1)?
        + 0.0803 * (c.lag("PIBUS", 1)? / 100.0) * c.lag("IBUS", 1)?;
    Ok(c.lag("IHHPS", 1)? * numerator / denominator)
}

/// PIBUS = 100 * (IFPS - IHPS - IPRLPS
///     - (PIF*0.9828/100)*(PCIH + PCLEB) - GGIPS) / IBUS
fn pibus(c: &EvalContext) -> EvalResult {
    let numerator = c.v("IFPS")? - c.v("IHPS")? - c.v("IPRLPS")?
        - (c.v("PIF")? * 0.9828 / 100.0) * (c.v("PCIH")? + c.v("PCLEB")?)
        - c.v("GGIPS")?;
    Ok(100.0 * numerator / c.v("IBUS")?)
}

/// ICCPS = 0.1543*IHPS + 0.4204*IPRLPS + 0.8331*(PIBUS/100)*IBUS
fn iccps(c: &EvalContext) -> EvalResult {
    Ok(0.1543 * c.v("IHPS")?
        + 0.4204 * c.v("IPRLPS")?
        + 0.8331 * (c.v("PIBUS")? / 100.0) * c.v("IBUS")?)
}

/// IPCPS = (PIF*0.9828/100)*(PCIH + PCLEB) + 0.0456*(PIBUS/100)*IBUS
fn ipcps(c: &EvalContext) -> EvalResult {
    Ok((c.v("PIF")? * 0.9828 / 100.0) * (c.v("PCIH")? + c.v("PCLEB")?)
        + 0.0456 * (c.v("PIBUS")? / 100.0) * c.v("IBUS")?)
}

/// IFCPS = IFPS - IHHPS - ICCPS - LAIPS - CGIPS - IPCPS
fn ifcps(c: &EvalContext) -> EvalResult {
    Ok(c.v("IFPS")? - c.v("IHHPS")? - c.v("ICCPS")? - c.v("LAIPS")? - c.v("CGIPS")?
        - c.v("IPCPS")?)
}

/// NETAD = (PEHC / 1000) * 1.5166
fn netad(c: &EvalContext) -> EvalResult {
    Ok((c.v("PEHC")? / 1000.0) * 1.5166)
}

/// HSALL = HSALL(-1) + NETAD
fn hsall(c: &EvalContext) -> EvalResult {
    Ok(c.lag("HSALL", 1)? + c.v("NETAD")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("DB", Identity, db),
        Equation::new("DP", Identity, dp),
        Equation::new("DV", Identity, dv),
        Equation::new("WB", Identity, wb),
        Equation::new("WP", Identity, wp),
        Equation::new("WV", Identity, wv),
        Equation::new("TAFB", Identity, tafb),
        Equation::new("TAFP", Identity, tafp),
        Equation::new("TAFV", Identity, tafv),
        Equation::new("TAF", Identity, taf),
        Equation::new("WG", Identity, wg),
        Equation::new("CDEBT", Identity, cdebt),
        Equation::new("CEQUITY", Identity, cequity),
        Equation::new("RWACC", Identity, rwacc),
        Equation::new("RDELTA", Identity, rdelta),
        Equation::new("COCU", Identity, cocu),
        Equation::new("COC", Identity, coc),
        Equation::new("KSTAR", Identity, kstar),
        Equation::new("KMSXH", Identity, kmsxh),
        Equation::new("KGAP", Identity, kgap),
        Equation::new("TQ", Identity, tq),
        Equation::new("PKMSXHB", Identity, pkmsxhb),
        Equation::new("IBUS", Identity, ibus),
        Equation::new("IBUSX", Identity, ibusx),
        Equation::new("GGIPS", Identity, ggips),
        Equation::new("GGI", Identity, ggi),
        Equation::new("GGIX", Identity, ggix),
        Equation::new("GGIDEF", Ratio, ggidef),
        Equation::new("HIMPROV", LogDifference, himprov),
        Equation::new("PCIH", Ratio, pcih),
        Equation::new("VALPS", Identity, valps),
        Equation::new("VALHH", Identity, valhh),
        Equation::new("IFPS", Identity, ifps),
        Equation::new("PIPRL", Identity, piprl),
        Equation::new("IHPS", Identity, ihps),
        Equation::new("IHHPS", Ratio, ihhps),
        Equation::new("PIBUS", Identity, pibus),
        Equation::new("ICCPS", Identity, iccps),
        Equation::new("IPCPS", Identity, ipcps),
        Equation::new("IFCPS", Identity, ifcps),
        Equation::new("NETAD", Identity, netad),
        Equation::new("HSALL", Identity, hsall),
    ]
}
