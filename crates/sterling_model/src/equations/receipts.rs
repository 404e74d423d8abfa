//! Public sector receipts: tax aggregates and current receipts.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

/// CT = NSCTP + NNSCTP
fn ct(c: &EvalContext) -> EvalResult {
    Ok(c.v("NSCTP")? + c.v("NNSCTP")?)
}

/// CETAX = VREC + TXFUEL + TXTOB + TXALC + CUST + CCL + AL + TXCUS
fn cetax(c: &EvalContext) -> EvalResult {
    Ok(c.v("VREC")? + c.v("TXFUEL")? + c.v("TXTOB")? + c.v("TXALC")? + c.v("CUST")?
        + c.v("CCL")?
        + c.v("AL")?
        + c.v("TXCUS")?)
}

/// VED = VEDHH + VEDCO
fn ved(c: &EvalContext) -> EvalResult {
    Ok(c.v("VEDHH")? + c.v("VEDCO")?)
}

/// OCT = VEDHH + BBC + PASSPORT + OHT
fn oct(c: &EvalContext) -> EvalResult {
    Ok(c.v("VEDHH")? + c.v("BBC")? + c.v("PASSPORT")? + c.v("OHT")?)
}

/// d(CGC) / CGC(-1) = 0.21 * d(ROCB) / ROCB(-1),
/// re-levelled as CGC = CGC(-1) * (1 + 0.21 * d(ROCB)/ROCB(-1))
fn cgc(c: &EvalContext) -> EvalResult {
    let d_rocb = c.v("ROCB")? - c.lag("ROCB", 1)?;
    Ok(c.lag("CGC", 1)? * (1.0 + 0.21 * d_rocb / c.lag("ROCB", 1)?))
}

/// PSINTR = CGNDIV + LANDIV + PCNDIV
fn psintr(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGNDIV")? + c.v("LANDIV")? + c.v("PCNDIV")?)
}

/// CGRENT = RNCG + HHTCG
fn cgrent(c: &EvalContext) -> EvalResult {
    Ok(c.v("RNCG")? + c.v("HHTCG")?)
}

/// TAXCRED = MILAPM + CTC
fn taxcred(c: &EvalContext) -> EvalResult {
    Ok(c.v("MILAPM")? + c.v("CTC")?)
}

/// INCTAXG = TYEM + TSEOP + TCINV - INCTAC + CTC - NPISHTC
fn inctaxg(c: &EvalContext) -> EvalResult {
    Ok(c.v("TYEM")? + c.v("TSEOP")? + c.v("TCINV")? - c.v("INCTAC")? + c.v("CTC")?
        - c.v("NPISHTC")?)
}

/// PUBSTIW = TYEM + TSEOP + PRT + TCINV + CT + CGT + FCACA + BETPRF + BETLEVY
///     + OFGEM - NPISHTC - TYPCO + PROV - LAEPS
fn pubstiw(c: &EvalContext) -> EvalResult {
    Ok(c.v("TYEM")? + c.v("TSEOP")? + c.v("PRT")? + c.v("TCINV")? + c.v("CT")? + c.v("CGT")?
        + c.v("FCACA")?
        + c.v("BETPRF")?
        + c.v("BETLEVY")?
        + c.v("OFGEM")?
        - c.v("NPISHTC")?
        - c.v("TYPCO")?
        + c.v("PROV")?
        - c.v("LAEPS")?)
}

/// PUBSTPD = (CETAX - BETPRF) + EXDUTAC + XLAVAT + LAVAT - EUOT + TSD + ROCS
///     + TXMIS + RFP + (NNDRA + VEDCO + LAPT + OPT + EUETS) + CIL + ENVLEVY
///     + BANKROLL + RULC
fn pubstpd(c: &EvalContext) -> EvalResult {
    Ok((c.v("CETAX")? - c.v("BETPRF")?)
        + c.v("EXDUTAC")?
        + c.v("XLAVAT")?
        + c.v("LAVAT")?
        - c.v("EUOT")?
        + c.v("TSD")?
        + c.v("ROCS")?
        + c.v("TXMIS")?
        + c.v("RFP")?
        + (c.v("NNDRA")? + c.v("VEDCO")? + c.v("LAPT")? + c.v("OPT")? + c.v("EUETS")?)
        + c.v("CIL")?
        + c.v("ENVLEVY")?
        + c.v("BANKROLL")?
        + c.v("RULC")?)
}

/// PSCR = PUBSTIW + PUBSTPD + OCT + CC + INHT + EENIC + EMPNIC
///     + (RCGIM + RLAIM + OSPC) + PSINTR + (RNCG + HHTCG) + LARENT + PCRENT
///     + BLEVY + LAEPS + SWISSCAP
fn pscr(c: &EvalContext) -> EvalResult {
    Ok(c.v("PUBSTIW")? + c.v("PUBSTPD")? + c.v("OCT")? + c.v("CC")? + c.v("INHT")?
        + c.v("EENIC")?
        + c.v("EMPNIC")?
        + (c.v("RCGIM")? + c.v("RLAIM")? + c.v("OSPC")?)
        + c.v("PSINTR")?
        + (c.v("RNCG")? + c.v("HHTCG")?)
        + c.v("LARENT")?
        + c.v("PCRENT")?
        + c.v("BLEVY")?
        + c.v("LAEPS")?
        + c.v("SWISSCAP")?)
}

/// NATAXES = PUBSTIW + PUBSTPD + OCT + BLEVY + INHT + LAEPS + SWISSCAP
///     + EENIC + EMPNIC + CC + EUOT
fn nataxes(c: &EvalContext) -> EvalResult {
    Ok(c.v("PUBSTIW")? + c.v("PUBSTPD")? + c.v("OCT")? + c.v("BLEVY")? + c.v("INHT")?
        + c.v("LAEPS")?
        + c.v("SWISSCAP")?
        + c.v("EENIC")?
        + c.v("EMPNIC")?
        + c.v("CC")?
        + c.v("EUOT")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("CT", Identity, ct),
        Equation::new("CETAX", Identity, cetax),
        Equation::new("VED", Identity, ved),
        Equation::new("OCT", Identity, oct),
        Equation::new("CGC", RatioOfDifferences, cgc),
        Equation::new("PSINTR", Identity, psintr),
        Equation::new("CGRENT", Identity, cgrent),
        Equation::new("TAXCRED", Identity, taxcred),
        Equation::new("INCTAXG", Identity, inctaxg),
        Equation::new("PUBSTIW", Identity, pubstiw),
        Equation::new("PUBSTPD", Identity, pubstpd),
        Equation::new("PSCR", Identity, pscr),
        Equation::new("NATAXES", Identity, nataxes),
    ]
}
