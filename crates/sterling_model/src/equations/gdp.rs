//! GDP aggregation and the market-sector GVA satellite.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::solve_ratio;

/// TFEPS = CGGPS + CONSPS + DINVPS + VALPS + IFPS + XPS
fn tfeps(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGGPS")? + c.v("CONSPS")? + c.v("DINVPS")? + c.v("VALPS")? + c.v("IFPS")?
        + c.v("XPS")?)
}

/// SDEPS = PGDP * SDE / 100
fn sdeps(c: &EvalContext) -> EvalResult {
    Ok(c.v("PGDP")? * c.v("SDE")? / 100.0)
}

/// GDPMPS = TFEPS - MPS + SDEPS
fn gdpmps(c: &EvalContext) -> EvalResult {
    Ok(c.v("TFEPS")? - c.v("MPS")? + c.v("SDEPS")?)
}

/// MGDPNSA = GDPMPS
fn mgdpnsa(c: &EvalContext) -> EvalResult {
    c.v("GDPMPS")
}

/// BPAPS = (CETAX - BETPRF) + EXDUTAC + XLAVAT + LAVAT + TSD + TXMIS + ROCS
///     - (EUSUBP + LASUBP + CGSUBP + CCLACA) + BANKROLL + BLEVY
fn bpaps(c: &EvalContext) -> EvalResult {
    Ok((c.v("CETAX")? - c.v("BETPRF")?)
        + c.v("EXDUTAC")?
        + c.v("XLAVAT")?
        + c.v("LAVAT")?
        + c.v("TSD")?
        + c.v("TXMIS")?
        + c.v("ROCS")?
        - (c.v("EUSUBP")? + c.v("LASUBP")? + c.v("CGSUBP")? + c.v("CCLACA")?)
        + c.v("BANKROLL")?
        + c.v("BLEVY")?)
}

/// GVAPS = GDPMPS - BPAPS
fn gvaps(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPMPS")? - c.v("BPAPS")?)
}

/// TFE = CGG + CONS + DINV + VAL + IF + X
fn tfe(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGG")? + c.v("CONS")? + c.v("DINV")? + c.v("VAL")? + c.v("IF")? + c.v("X")?)
}

/// BPA / BPA(-1) = GDPM / GDPM(-1)
fn bpa(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("BPA", 1)?,
        c.v("GDPM")? / c.lag("GDPM", 1)?,
    ))
}

/// GVA = GDPM - BPA
fn gva(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPM")? - c.v("BPA")?)
}

/// PGVA = 100 * GVAPS / GVA
fn pgva(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("GVAPS")? / c.v("GVA")?)
}

/// TPRODPS = NNDRA + NIS + VEDCO + OPT + LAPT + EUETS - CGSUBPR - LASUBPR
///     - EUSUBPR
fn tprodps(c: &EvalContext) -> EvalResult {
    Ok(c.v("NNDRA")? + c.v("NIS")? + c.v("VEDCO")? + c.v("OPT")? + c.v("LAPT")?
        + c.v("EUETS")?
        - c.v("CGSUBPR")?
        - c.v("LASUBPR")?
        - c.v("EUSUBPR")?)
}

/// SDI = SDI(-1)
fn sdi(c: &EvalContext) -> EvalResult {
    c.lag("SDI", 1)
}

/// OS = GDPMPS - FYEMP - MI - BPAPS - TPRODPS - SDI
fn os(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPMPS")? - c.v("FYEMP")? - c.v("MI")? - c.v("BPAPS")? - c.v("TPRODPS")?
        - c.v("SDI")?)
}

/// RENTCO / RENTCO(-1) = GDPMPS / GDPMPS(-1)
fn rentco(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("RENTCO", 1)?,
        c.v("GDPMPS")? / c.lag("GDPMPS", 1)?,
    ))
}

/// IROO = (PRENT * POP16) / 1000
fn iroo(c: &EvalContext) -> EvalResult {
    Ok((c.v("PRENT")? * c.v("POP16")?) / 1000.0)
}

/// OSHH = 12874 + 0.85 * IROO - DIPHHmf
fn oshh(c: &EvalContext) -> EvalResult {
    Ok(12874.0 + 0.85 * c.v("IROO")? - c.v("DIPHHmf")?)
}

/// FISIMGG = 0
fn fisimgg(_: &EvalContext) -> EvalResult {
    Ok(0.0)
}

/// FISIMPS = (DIRHHf + DIPHHuf + DIPHHmf) + (DIRICf + DIPICf) + FISIMGG
///     + FISIMROW
fn fisimps(c: &EvalContext) -> EvalResult {
    Ok((c.v("DIRHHf")? + c.v("DIPHHuf")? + c.v("DIPHHmf")?)
        + (c.v("DIRICf")? + c.v("DIPICf")?)
        + c.v("FISIMGG")?
        + c.v("FISIMROW")?)
}

/// FYCPR = OS - OSHH - OSGG - OSPC - RENTCO + SA - FISIMPS
fn fycpr(c: &EvalContext) -> EvalResult {
    Ok(c.v("OS")? - c.v("OSHH")? - c.v("OSGG")? - c.v("OSPC")? - c.v("RENTCO")? + c.v("SA")?
        - c.v("FISIMPS")?)
}

/// OSCO = OS - OSHH - OSGG - OSPC
fn osco(c: &EvalContext) -> EvalResult {
    Ok(c.v("OS")? - c.v("OSHH")? - c.v("OSGG")? - c.v("OSPC")?)
}

/// GTPFC = FYCPR - NNSGTP - NSGTP
fn gtpfc(c: &EvalContext) -> EvalResult {
    Ok(c.v("FYCPR")? - c.v("NNSGTP")? - c.v("NSGTP")?)
}

/// FC = FISIMPS + GTPFC
fn fc(c: &EvalContext) -> EvalResult {
    Ok(c.v("FISIMPS")? + c.v("GTPFC")?)
}

/// GNIPS = GDPMPS + NIPD + (EECOMPC - EECOMPD) + (EUSUBPR + EUSUBP)
///     - (EUOT + EUVAT)
fn gnips(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPMPS")? + c.v("NIPD")?
        + (c.v("EECOMPC")? - c.v("EECOMPD")?)
        + (c.v("EUSUBPR")? + c.v("EUSUBP")?)
        - (c.v("EUOT")? + c.v("EUVAT")?))
}

/// NNSGVA = GVA - NSGVA
fn nnsgva(c: &EvalContext) -> EvalResult {
    Ok(c.v("GVA")? - c.v("NSGVA")?)
}

/// GAP = GDPM / TRGDP * 100 - 100
fn gap(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPM")? / c.v("TRGDP")? * 100.0 - 100.0)
}

/// GDPMAL = GDPM / POPAL
fn gdpmal(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPM")? / c.v("POPAL")?)
}

/// TRGDPAL = TRGDP / POPAL
fn trgdpal(c: &EvalContext) -> EvalResult {
    Ok(c.v("TRGDP")? / c.v("POPAL")?)
}

/// GDPM16 = GDPM / POP16
fn gdpm16(c: &EvalContext) -> EvalResult {
    Ok(c.v("GDPM")? / c.v("POP16")?)
}

/// TRGDP16 = TRGDP / POP16
fn trgdp16(c: &EvalContext) -> EvalResult {
    Ok(c.v("TRGDP")? / c.v("POP16")?)
}

/// GGVAPS = CGWS + LAWS + OSGG
fn ggvaps(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGWS")? + c.v("LAWS")? + c.v("OSGG")?)
}

/// MSGVAPS = GVAPS - GGVAPS
fn msgvaps(c: &EvalContext) -> EvalResult {
    Ok(c.v("GVAPS")? - c.v("GGVAPS")?)
}

/// GGVA / GGVA(-1) = CGG / CGG(-1)
fn ggva(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("GGVA", 1)?,
        c.v("CGG")? / c.lag("CGG", 1)?,
    ))
}

/// MSGVA = GVA - GGVA
fn msgva(c: &EvalContext) -> EvalResult {
    Ok(c.v("GVA")? - c.v("GGVA")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("TFEPS", Identity, tfeps),
        Equation::new("SDEPS", Identity, sdeps),
        Equation::new("GDPMPS", Identity, gdpmps),
        Equation::new("MGDPNSA", Identity, mgdpnsa),
        Equation::new("BPAPS", Identity, bpaps),
        Equation::new("GVAPS", Identity, gvaps),
        Equation::new("TFE", Identity, tfe),
        Equation::new("BPA", Ratio, bpa),
        Equation::new("GVA", Identity, gva),
        Equation::new("PGVA", Identity, pgva),
        Equation::new("TPRODPS", Identity, tprodps),
        Equation::new("SDI", Identity, sdi),
        Equation::new("OS", Identity, os),
        Equation::new("RENTCO", Ratio, rentco),
        Equation::new("IROO", Identity, iroo),
        Equation::new("OSHH", Identity, oshh),
        Equation::new("FISIMGG", Identity, fisimgg),
        Equation::new("FISIMPS", Identity, fisimps),
        Equation::new("FYCPR", Identity, fycpr),
        Equation::new("OSCO", Identity, osco),
        Equation::new("GTPFC", Identity, gtpfc),
        Equation::new("FC", Identity, fc),
        Equation::new("GNIPS", Identity, gnips),
        Equation::new("NNSGVA", Identity, nnsgva),
        Equation::new("GAP", Identity, gap),
        Equation::new("GDPMAL", Identity, gdpmal),
        Equation::new("TRGDPAL", Identity, trgdpal),
        Equation::new("GDPM16", Identity, gdpm16),
        Equation::new("TRGDP16", Identity, trgdp16),
        Equation::new("GGVAPS", Identity, ggvaps),
        Equation::new("MSGVAPS", Identity, msgvaps),
        Equation::new("GGVA", Ratio, ggva),
        Equation::new("MSGVA", Identity, msgva),
    ]
}
