//! Public sector totals: borrowing, cash requirements, debt and net worth.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{solve_d, solve_ratio};

/// CGSUBP = PSCE - (CGWS + CGP + RCGIM + LAWS + LAPR + RLAIM) - LATSUB
///     - (CGSB + LASBHH) - CGNCGA - ECNET - LANCGA - (CGOTR + LAOTRHH)
///     - (DICGOP + DILAPR + DIPCOP) - EUVAT - GNP4 - CGSUBPR
fn cgsubp(c: &EvalContext) -> EvalResult {
    Ok(c.v("PSCE")?
        - (c.v("CGWS")? + c.v("CGP")? + c.v("RCGIM")? + c.v("LAWS")? + c.v("LAPR")?
            + c.v("RLAIM")?)
        - c.v("LATSUB")?
        - (c.v("CGSB")? + c.v("LASBHH")?)
        - c.v("CGNCGA")?
        - c.v("ECNET")?
        - c.v("LANCGA")?
        - (c.v("CGOTR")? + c.v("LAOTRHH")?)
        - (c.v("DICGOP")? + c.v("DILAPR")? + c.v("DIPCOP")?)
        - c.v("EUVAT")?
        - c.v("GNP4")?
        - c.v("CGSUBPR")?)
}

/// DEP = RCGIM + RLAIM + PCCON
fn dep(c: &EvalContext) -> EvalResult {
    Ok(c.v("RCGIM")? + c.v("RLAIM")? + c.v("PCCON")?)
}

/// PSCB = PSCR - PSCE - DEP
fn pscb(c: &EvalContext) -> EvalResult {
    Ok(c.v("PSCR")? - c.v("PSCE")? - c.v("DEP")?)
}

/// NPACG = (NPACG(-1) + NPACG(-2) + NPACG(-3) + NPACG(-4)) / 4
fn npacg(c: &EvalContext) -> EvalResult {
    Ok((c.lag("NPACG", 1)? + c.lag("NPACG", 2)? + c.lag("NPACG", 3)? + c.lag("NPACG", 4)?) / 4.0)
}

/// NPALA = (NPALA(-1) + NPALA(-2) + NPALA(-3) + NPALA(-4)) / 4
fn npala(c: &EvalContext) -> EvalResult {
    Ok((c.lag("NPALA", 1)? + c.lag("NPALA", 2)? + c.lag("NPALA", 3)? + c.lag("NPALA", 4)?) / 4.0)
}

/// PSGI = CGIPS + LAIPS + IPCPS + IBPC + DINVCG + (NPACG + NPALA)
///     + (KCGPSO - KPSCG) + (KLA - KGLAPC - KGLA) + (KPCPS - KPSPC) + ASSETSA
fn psgi(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGIPS")? + c.v("LAIPS")? + c.v("IPCPS")? + c.v("IBPC")? + c.v("DINVCG")?
        + (c.v("NPACG")? + c.v("NPALA")?)
        + (c.v("KCGPSO")? - c.v("KPSCG")?)
        + (c.v("KLA")? - c.v("KGLAPC")? - c.v("KGLA")?)
        + (c.v("KPCPS")? - c.v("KPSPC")?)
        + c.v("ASSETSA")?)
}

/// TME = PSCE + DEP + PSNI
fn tme(c: &EvalContext) -> EvalResult {
    Ok(c.v("PSCE")? + c.v("DEP")? + c.v("PSNI")?)
}

/// CGNB = (CGWS + CGP) + CGTSUB + CGSB + CGNCGA + CGCGLA + CGOTR + GNP4
///     + EUVAT + DICGOP + (CGIPS + NPACG) + DINVCG + (KCGLA + KCGPC) + KCGPSO
///     - KPSCG - (PUBSTIW + TYPCO) - (PUBSTPD - LAPT) - (OCT + LANNDR)
///     - (INHT + LAEPS + SWISSCAP) - (EMPNIC + EENIC) - CGNDIV - CGINTRA
///     - (RNCG + HHTCG + BLEVY)
fn cgnb(c: &EvalContext) -> EvalResult {
    Ok((c.v("CGWS")? + c.v("CGP")?)
        + c.v("CGTSUB")?
        + c.v("CGSB")?
        + c.v("CGNCGA")?
        + c.v("CGCGLA")?
        + c.v("CGOTR")?
        + c.v("GNP4")?
        + c.v("EUVAT")?
        + c.v("DICGOP")?
        + (c.v("CGIPS")? + c.v("NPACG")?)
        + c.v("DINVCG")?
        + (c.v("KCGLA")? + c.v("KCGPC")?)
        + c.v("KCGPSO")?
        - c.v("KPSCG")?
        - (c.v("PUBSTIW")? + c.v("TYPCO")?)
        - (c.v("PUBSTPD")? - c.v("LAPT")?)
        - (c.v("OCT")? + c.v("LANNDR")?)
        - (c.v("INHT")? + c.v("LAEPS")? + c.v("SWISSCAP")?)
        - (c.v("EMPNIC")? + c.v("EENIC")?)
        - c.v("CGNDIV")?
        - c.v("CGINTRA")?
        - (c.v("RNCG")? + c.v("HHTCG")? + c.v("BLEVY")?))
}

/// LANB = (LAWS + LAPR) + LATSUB + LASBHH + LANCGA - CGCGLA + LAOTRHH
///     + DILAPR + (LAIPS + NPALA) - KCGLA + (KLA - KGLAPC) - KGLA - LAPT
///     - (CC - LANNDR) - LAINTRA - LANDIV - LARENT - CIL
fn lanb(c: &EvalContext) -> EvalResult {
    Ok((c.v("LAWS")? + c.v("LAPR")?)
        + c.v("LATSUB")?
        + c.v("LASBHH")?
        + c.v("LANCGA")?
        - c.v("CGCGLA")?
        + c.v("LAOTRHH")?
        + c.v("DILAPR")?
        + (c.v("LAIPS")? + c.v("NPALA")?)
        - c.v("KCGLA")?
        + (c.v("KLA")? - c.v("KGLAPC")?)
        - c.v("KGLA")?
        - c.v("LAPT")?
        - (c.v("CC")? - c.v("LANNDR")?)
        - c.v("LAINTRA")?
        - c.v("LANDIV")?
        - c.v("LARENT")?
        - c.v("CIL")?)
}

/// GGNB = CGNB + LANB
fn ggnb(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGNB")? + c.v("LANB")?)
}

/// GGNBCY = GGNB
fn ggnbcy(c: &EvalContext) -> EvalResult {
    c.v("GGNB")
}

/// PCNB = DIPCOP + IPCPS + IBPC - (KCGPC + KGLAPC) + (KPCPS - KPSPC) + TYPCO
///     - OSPC - PCNDIV - PCINTRA - PCRENT
fn pcnb(c: &EvalContext) -> EvalResult {
    Ok(c.v("DIPCOP")? + c.v("IPCPS")? + c.v("IBPC")?
        - (c.v("KCGPC")? + c.v("KGLAPC")?)
        + (c.v("KPCPS")? - c.v("KPSPC")?)
        + c.v("TYPCO")?
        - c.v("OSPC")?
        - c.v("PCNDIV")?
        - c.v("PCINTRA")?
        - c.v("PCRENT")?)
}

/// PCNBCY = PCNB
fn pcnbcy(c: &EvalContext) -> EvalResult {
    c.v("PCNB")
}

/// PSNBNSA = -PSCB + PSNI
fn psnbnsa(c: &EvalContext) -> EvalResult {
    Ok(-c.v("PSCB")? + c.v("PSNI")?)
}

/// PSNBCY = PSNBNSA
fn psnbcy(c: &EvalContext) -> EvalResult {
    c.v("PSNBNSA")
}

/// SWAPS = 0
fn swaps(_: &EvalContext) -> EvalResult {
    Ok(0.0)
}

/// TDEF = CGNB + LANB + SWAPS
fn tdef(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGNB")? + c.v("LANB")? + c.v("SWAPS")?)
}

/// CGLSFA = (LCGOS + LCGPR) + CGMISP
fn cglsfa(c: &EvalContext) -> EvalResult {
    Ok((c.v("LCGOS")? + c.v("LCGPR")?) + c.v("CGMISP")?)
}

/// PSLSFA = CGLSFA + (LALEND + LAMISE) + (PCLEND + PCMISE)
fn pslsfa(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGLSFA")?
        + (c.v("LALEND")? + c.v("LAMISE")?)
        + (c.v("PCLEND")? + c.v("PCMISE")?))
}

/// CGACADJ = (EXDUTAC + NICAC + INCTAC) + FCACA + CGACRES + (ILGAC + CONACC)
///     + MFTRAN
fn cgacadj(c: &EvalContext) -> EvalResult {
    Ok((c.v("EXDUTAC")? + c.v("NICAC")? + c.v("INCTAC")?)
        + c.v("FCACA")?
        + c.v("CGACRES")?
        + (c.v("ILGAC")? + c.v("CONACC")?)
        + c.v("MFTRAN")?)
}

/// PSACADJ = CGACADJ + LAAC + LAMFT + PCAC + PCGILT + MFTPC
fn psacadj(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGACADJ")? + c.v("LAAC")? + c.v("LAMFT")? + c.v("PCAC")? + c.v("PCGILT")?
        + c.v("MFTPC")?)
}

/// PSFL = CGGILTS + OFLPS + NATSAV + MKTIG
fn psfl(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGGILTS")? + c.v("OFLPS")? + c.v("NATSAV")? + c.v("MKTIG")?)
}

/// PSTA = PSTA(-1) * PIF/PIF(-1)
///     + 0.5*(PSNI + KCGPC + KGLAPC - KLA - KCGPSO) * (1 + GGIDEF/GGIDEF(-1))
fn psta(c: &EvalContext) -> EvalResult {
    Ok(c.lag("PSTA", 1)? * c.v("PIF")? / c.lag("PIF", 1)?
        + 0.5
            * (c.v("PSNI")? + c.v("KCGPC")? + c.v("KGLAPC")? - c.v("KLA")? - c.v("KCGPSO")?)
            * (1.0 + c.v("GGIDEF")? / c.lag("GGIDEF", 1)?))
}

/// PSNW = PSTA + PSFA - PSFL
fn psnw(c: &EvalContext) -> EvalResult {
    Ok(c.v("PSTA")? + c.v("PSFA")? - c.v("PSFL")?)
}

/// LABRO = LANB + LALEND + LAMISE + LAAC + LAGILT + LAMFT - LCGLA
fn labro(c: &EvalContext) -> EvalResult {
    Ok(c.v("LANB")? + c.v("LALEND")? + c.v("LAMISE")? + c.v("LAAC")? + c.v("LAGILT")?
        + c.v("LAMFT")?
        - c.v("LCGLA")?)
}

/// CGNCR = CGNB + CGLSFA + CGACADJ + LCGLA + LCGPC
fn cgncr(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGNB")? + c.v("CGLSFA")? + c.v("CGACADJ")? + c.v("LCGLA")? + c.v("LCGPC")?)
}

/// PSNCR = PSNBNSA + PSLSFA + PSACADJ
fn psncr(c: &EvalContext) -> EvalResult {
    Ok(c.v("PSNBNSA")? + c.v("PSLSFA")? + c.v("PSACADJ")?)
}

/// COIN / COIN(-4) = M0 / M0(-4)
fn coin(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("COIN", 4)?,
        c.v("M0")? / c.lag("M0", 4)?,
    ))
}

/// d(PSND) = PSNCR - ILGAC + d(FLEASGG) + d(FLEASPC) + PSNDRES
fn psnd(c: &EvalContext) -> EvalResult {
    let d_fleasgg = c.v("FLEASGG")? - c.lag("FLEASGG", 1)?;
    let d_fleaspc = c.v("FLEASPC")? - c.lag("FLEASPC", 1)?;
    let rhs = c.v("PSNCR")? - c.v("ILGAC")? + d_fleasgg + d_fleaspc + c.v("PSNDRES")?;
    Ok(solve_d(c.lag("PSND", 1)?, rhs))
}

/// GGLIQ = CGLIQ + LALIQ
fn ggliq(c: &EvalContext) -> EvalResult {
    Ok(c.v("CGLIQ")? + c.v("LALIQ")?)
}

/// d(GGGD) = CGNCR + LABRO - ILGAC + d(SRES) + d(GGLIQ) + GGGDRES
fn gggd(c: &EvalContext) -> EvalResult {
    let d_sres = c.v("SRES")? - c.lag("SRES", 1)?;
    let d_ggliq = c.v("GGLIQ")? - c.lag("GGLIQ", 1)?;
    let rhs = c.v("CGNCR")? + c.v("LABRO")? - c.v("ILGAC")? + d_sres + d_ggliq + c.v("GGGDRES")?;
    Ok(solve_d(c.lag("GGGD", 1)?, rhs))
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("CGSUBP", Identity, cgsubp),
        Equation::new("DEP", Identity, dep),
        Equation::new("PSCB", Identity, pscb),
        Equation::new("NPACG", Identity, npacg),
        Equation::new("NPALA", Identity, npala),
        Equation::new("PSGI", Identity, psgi),
        Equation::new("TME", Identity, tme),
        Equation::new("CGNB", Identity, cgnb),
        Equation::new("LANB", Identity, lanb),
        Equation::new("GGNB", Identity, ggnb),
        Equation::new("GGNBCY", Identity, ggnbcy),
        Equation::new("PCNB", Identity, pcnb),
        Equation::new("PCNBCY", Identity, pcnbcy),
        Equation::new("PSNBNSA", Identity, psnbnsa),
        Equation::new("PSNBCY", Identity, psnbcy),
        Equation::new("SWAPS", Identity, swaps),
        Equation::new("TDEF", Identity, tdef),
        Equation::new("CGLSFA", Identity, cglsfa),
        Equation::new("PSLSFA", Identity, pslsfa),
        Equation::new("CGACADJ", Identity, cgacadj),
        Equation::new("PSACADJ", Identity, psacadj),
        Equation::new("PSFL", Identity, psfl),
        Equation::new("PSTA", Identity, psta),
        Equation::new("PSNW", Identity, psnw),
        Equation::new("LABRO", Identity, labro),
        Equation::new("CGNCR", Identity, cgncr),
        Equation::new("PSNCR", Identity, psncr),
        Equation::new("COIN", Ratio, coin),
        Equation::new("PSND", Difference, psnd),
        Equation::new("GGLIQ", Identity, ggliq),
        Equation::new("GGGD", Difference, gggd),
    ]
}
