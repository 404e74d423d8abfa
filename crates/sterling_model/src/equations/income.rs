//! Income account: wage bill, social contributions, household income and
//! sectoral net lending.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{safe_log, solve_d, solve_ratio};

/// WFP = ADJW * PSAVEI * (EMS - ESLFS) + (52/4000)*CGWADJ*ERCG*ECG
///     + (52/4000)*LAWADJ*ERLA*ELA
fn wfp(c: &EvalContext) -> EvalResult {
    Ok(c.v("ADJW")? * c.v("PSAVEI")? * (c.v("EMS")? - c.v("ESLFS")?)
        + (52.0 / 4000.0) * c.v("CGWADJ")? * c.v("ERCG")? * c.v("ECG")?
        + (52.0 / 4000.0) * c.v("LAWADJ")? * c.v("ERLA")? * c.v("ELA")?)
}

/// MI / MI(-1) = WFP / WFP(-1)
fn mi(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("MI", 1)?,
        c.v("WFP")? / c.lag("WFP", 1)?,
    ))
}

/// EMPSC = EMPISC + CGASC + EMPNIC + EMPCPP
fn empsc(c: &EvalContext) -> EvalResult {
    Ok(c.v("EMPISC")? + c.v("CGASC")? + c.v("EMPNIC")? + c.v("EMPCPP")?)
}

/// FYEMP = WFP + EMPSC
fn fyemp(c: &EvalContext) -> EvalResult {
    Ok(c.v("WFP")? + c.v("EMPSC")?)
}

/// EMPISC = HHISC + LASC + CGISC
fn empisc(c: &EvalContext) -> EvalResult {
    Ok(c.v("HHISC")? + c.v("LASC")? + c.v("CGISC")?)
}

/// EMPASC = EMPSC - EMPISC
fn empasc(c: &EvalContext) -> EvalResult {
    Ok(c.v("EMPSC")? - c.v("EMPISC")?)
}

/// EMPISCPP / EMPISCPP(-1) = EMPISC / EMPISC(-1)
fn empiscpp(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("EMPISCPP", 1)?,
        c.v("EMPISC")? / c.lag("EMPISC", 1)?,
    ))
}

/// HHISC / HHISC(-1) = WFP / WFP(-1)
fn hhisc(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("HHISC", 1)?,
        c.v("WFP")? / c.lag("WFP", 1)?,
    ))
}

/// HHSB = 2 * HHISC
fn hhsb(c: &EvalContext) -> EvalResult {
    Ok(2.0 * c.v("HHISC")?)
}

/// OSB / OSB(-1) = PCE/PCE(-1) * GAD3/GAD3(-1)
fn osb(c: &EvalContext) -> EvalResult {
    let rhs = (c.v("PCE")? / c.lag("PCE", 1)?) * (c.v("GAD3")? / c.lag("GAD3", 1)?);
    Ok(solve_ratio(c.lag("OSB", 1)?, rhs))
}

/// SBHH = EMPISC + OSB + (HHSB - HHISC - EMPISCPP) + CGSB + LASBHH + EESCLA
///     + EESCCG + CGASC - BENAB
fn sbhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("EMPISC")? + c.v("OSB")?
        + (c.v("HHSB")? - c.v("HHISC")? - c.v("EMPISCPP")?)
        + c.v("CGSB")?
        + c.v("LASBHH")?
        + c.v("EESCLA")?
        + c.v("EESCCG")?
        + c.v("CGASC")?
        - c.v("BENAB")?)
}

/// TYWHH = TYEM + TSEOP + CC + CGT + OCT - NPISHTC
fn tywhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("TYEM")? + c.v("TSEOP")? + c.v("CC")? + c.v("CGT")? + c.v("OCT")?
        - c.v("NPISHTC")?)
}

/// NMTRHH = LAOTRHH + (CGOTR - HHTCG) + (HHTFA - HHTA) + EUSF + 100
fn nmtrhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("LAOTRHH")? + (c.v("CGOTR")? - c.v("HHTCG")?) + (c.v("HHTFA")? - c.v("HHTA")?)
        + c.v("EUSF")?
        + 100.0)
}

/// DIPHHx = DIPHH + DIPHHmf + DIPHHuf
fn diphhx(c: &EvalContext) -> EvalResult {
    Ok(c.v("DIPHH")? + c.v("DIPHHmf")? + c.v("DIPHHuf")?)
}

/// DIPHHmf = LHP(-1) * ((1 + (RMORT - R)/100)^0.25 - 1)
fn diphhmf(c: &EvalContext) -> EvalResult {
    Ok(c.lag("LHP", 1)? * ((1.0 + (c.v("RMORT")? - c.v("R")?) / 100.0).powf(0.25) - 1.0))
}

/// DIPHH = (LHP(-1) + OLPE(-1)) * ((1 + (0.9*R + 0.2)/100)^0.25 - 1)
fn diphh(c: &EvalContext) -> EvalResult {
    Ok((c.lag("LHP", 1)? + c.lag("OLPE", 1)?)
        * ((1.0 + (0.9 * c.v("R")? + 0.2) / 100.0).powf(0.25) - 1.0))
}

/// DIRHHx = DIRHH - DIRHHf
fn dirhhx(c: &EvalContext) -> EvalResult {
    Ok(c.v("DIRHH")? - c.v("DIRHHf")?)
}

/// DIRHHf = -(0.75 * DEPHH(-1) * ((1 + (RDEP - R)/100)^0.25 - 1))
fn dirhhf(c: &EvalContext) -> EvalResult {
    Ok(-(0.75
        * c.lag("DEPHH", 1)?
        * ((1.0 + (c.v("RDEP")? - c.v("R")?) / 100.0).powf(0.25) - 1.0)))
}

/// DIRICx = DIRIC - DIRICf
fn diricx(c: &EvalContext) -> EvalResult {
    Ok(c.v("DIRIC")? - c.v("DIRICf")?)
}

/// d(DIRICf) = -2.75*M4IC(-1)*((1 + (0.9*R - 0.2 - R)/100)^0.25 - 1)
///     + 2.75*M4IC(-2)*((1 + (0.9*R(-1) - 0.2 - R(-1))/100)^0.25 - 1)
fn diricf(c: &EvalContext) -> EvalResult {
    let term_t = -2.75
        * c.lag("M4IC", 1)?
        * ((1.0 + (0.9 * c.v("R")? - 0.2 - c.v("R")?) / 100.0).powf(0.25) - 1.0);
    let term_t1 = 2.75
        * c.lag("M4IC", 2)?
        * ((1.0 + (0.9 * c.lag("R", 1)? - 0.2 - c.lag("R", 1)?) / 100.0).powf(0.25) - 1.0);
    Ok(solve_d(c.lag("DIRICf", 1)?, term_t + term_t1))
}

/// d(DIRIC) = 1.3*(M4IC(-1)*((1+R/100)^0.25 - 1) - M4IC(-2)*((1+R(-1)/100)^0.25 - 1))
///     + 0.6*(M4IC(-1)*((1+ROCB/100)^0.25 - 1) - M4IC(-2)*((1+ROCB(-1)/100)^0.25 - 1))
fn diric(c: &EvalContext) -> EvalResult {
    let part1 = (c.lag("M4IC", 1)? * ((1.0 + c.v("R")? / 100.0).powf(0.25) - 1.0)
        - c.lag("M4IC", 2)? * ((1.0 + c.lag("R", 1)? / 100.0).powf(0.25) - 1.0))
        * 1.3;
    let part2 = (c.lag("M4IC", 1)? * ((1.0 + c.v("ROCB")? / 100.0).powf(0.25) - 1.0)
        - c.lag("M4IC", 2)? * ((1.0 + c.lag("ROCB", 1)? / 100.0).powf(0.25) - 1.0))
        * 0.6;
    Ok(solve_d(c.lag("DIRIC", 1)?, part1 + part2))
}

/// DIPICx = DIPIC + DIPICf
fn dipicx(c: &EvalContext) -> EvalResult {
    Ok(c.v("DIPIC")? + c.v("DIPICf")?)
}

/// d(DIPICf) = STLIC*((1 + (RIC - R)/100)^0.25 - 1) + FXLIC*((1.029)^0.25 - 1)
///     - STLIC(-1)*((1 + (RIC(-1) - R(-1))/100)^0.25 - 1) + FXLIC(-1)*((1.029)^0.25 - 1)
fn dipicf(c: &EvalContext) -> EvalResult {
    let fxlic_const = (1.0_f64 + 2.9 / 100.0).powf(0.25) - 1.0;
    let rhs = c.v("STLIC")? * ((1.0 + (c.v("RIC")? - c.v("R")?) / 100.0).powf(0.25) - 1.0)
        + c.v("FXLIC")? * fxlic_const
        - c.lag("STLIC", 1)?
            * ((1.0 + (c.lag("RIC", 1)? - c.lag("R", 1)?) / 100.0).powf(0.25) - 1.0)
        + c.lag("FXLIC", 1)? * fxlic_const;
    Ok(solve_d(c.lag("DIPICf", 1)?, rhs))
}

/// d(DIPIC) = (STLIC(-1)*((1+R/100)^0.25 - 1) - STLIC(-2)*((1+R(-1)/100)^0.25 - 1))
///     + (FXLIC(-1)*((1+ROCB/100)^0.25 - 1) - FXLIC(-2)*((1+ROCB(-1)/100)^0.25 - 1))
///     + (BLIC(-1)*((1+RL/100)^0.25 - 1) - BLIC(-2)*((1+RL(-1)/100)^0.25 - 1))
fn dipic(c: &EvalContext) -> EvalResult {
    let part1 = c.lag("STLIC", 1)? * ((1.0 + c.v("R")? / 100.0).powf(0.25) - 1.0)
        - c.lag("STLIC", 2)? * ((1.0 + c.lag("R", 1)? / 100.0).powf(0.25) - 1.0);
    let part2 = c.lag("FXLIC", 1)? * ((1.0 + c.v("ROCB")? / 100.0).powf(0.25) - 1.0)
        - c.lag("FXLIC", 2)? * ((1.0 + c.lag("ROCB", 1)? / 100.0).powf(0.25) - 1.0);
    let part3 = c.lag("BLIC", 1)? * ((1.0 + c.v("RL")? / 100.0).powf(0.25) - 1.0)
        - c.lag("BLIC", 2)? * ((1.0 + c.lag("RL", 1)? / 100.0).powf(0.25) - 1.0);
    Ok(solve_d(c.lag("DIPIC", 1)?, part1 + part2 + part3))
}

/// WYQC / WYQC(-1) = FYCPR / FYCPR(-1)
fn wyqc(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("WYQC", 1)?,
        c.v("FYCPR")? / c.lag("FYCPR", 1)?,
    ))
}

/// log(NDIVHH) = -8.605599 + 0.8092696*log(FYCPR(-4)) + 0.6597959*log(CORP)
fn ndivhh(c: &EvalContext) -> EvalResult {
    Ok((-8.605599
        + 0.8092696 * safe_log(c.lag("FYCPR", 4)?)
        + 0.6597959 * safe_log(c.v("CORP")?))
    .exp())
}

/// PIRHH = NDIVHH + APIIH + DIRHH + WYQC
fn pirhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("NDIVHH")? + c.v("APIIH")? + c.v("DIRHH")? + c.v("WYQC")?)
}

/// PIPHH = DIPHH
fn piphh(c: &EvalContext) -> EvalResult {
    c.v("DIPHH")
}

/// EECPP = ((1 + RL/100)^0.25 - 1) * (PIHH(-1) * 0.729)
///     + (1.05^0.25 - 1) * (PIHH(-1) * 0.271)
fn eecpp(c: &EvalContext) -> EvalResult {
    Ok(((1.0 + c.v("RL")? / 100.0).powf(0.25) - 1.0) * (c.lag("PIHH", 1)? * 0.729)
        + (1.05_f64.powf(0.25) - 1.0) * (c.lag("PIHH", 1)? * 0.271))
}

/// EESC = EESCLA + EENIC + EECPP + EESCCG
fn eesc(c: &EvalContext) -> EvalResult {
    Ok(c.v("EESCLA")? + c.v("EENIC")? + c.v("EECPP")? + c.v("EESCCG")?)
}

/// HHDI = MI + FYEMP - EMPSC - EESC - TYWHH + NMTRHH + SBHH
///     + (PIRHH - PIPHH + FSMADJ) - HHSB + HHISC + (EECOMPC - EECOMPD) + OSHH
fn hhdi(c: &EvalContext) -> EvalResult {
    Ok(c.v("MI")? + c.v("FYEMP")? - c.v("EMPSC")? - c.v("EESC")? - c.v("TYWHH")?
        + c.v("NMTRHH")?
        + c.v("SBHH")?
        + (c.v("PIRHH")? - c.v("PIPHH")? + c.v("FSMADJ")?)
        - c.v("HHSB")?
        + c.v("HHISC")?
        + (c.v("EECOMPC")? - c.v("EECOMPD")?)
        + c.v("OSHH")?)
}

/// RHHDI = 100 * HHDI / PCE
fn rhhdi(c: &EvalContext) -> EvalResult {
    Ok(100.0 * c.v("HHDI")? / c.v("PCE")?)
}

/// EMPCPP / EMPCPP(-1) = WFP / WFP(-1)
fn empcpp(c: &EvalContext) -> EvalResult {
    Ok(solve_ratio(
        c.lag("EMPCPP", 1)?,
        c.v("WFP")? / c.lag("WFP", 1)?,
    ))
}

/// NEAHH = EMPCPP + EECPP + EMPISCPP - OSB
fn neahh(c: &EvalContext) -> EvalResult {
    Ok(c.v("EMPCPP")? + c.v("EECPP")? + c.v("EMPISCPP")? - c.v("OSB")?)
}

/// SVHH = HHDI + NEAHH - CONSPS
fn svhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("HHDI")? + c.v("NEAHH")? - c.v("CONSPS")?)
}

/// SY = 100 * (SVHH / (NEAHH + HHDI))
fn sy(c: &EvalContext) -> EvalResult {
    Ok(100.0 * (c.v("SVHH")? / (c.v("NEAHH")? + c.v("HHDI")?)))
}

/// KGHH = -INHT + 0.95*KLA + 0.55*KCGPSO + 0.4*EUKT
fn kghh(c: &EvalContext) -> EvalResult {
    Ok(-c.v("INHT")? + 0.95 * c.v("KLA")? + 0.55 * c.v("KCGPSO")? + 0.4 * c.v("EUKT")?)
}

/// NAFHH = SVHH + KGHH - DINVHH - VALHH - NPAHH - IHHPS
fn nafhh(c: &EvalContext) -> EvalResult {
    Ok(c.v("SVHH")? + c.v("KGHH")? - c.v("DINVHH")? - c.v("VALHH")? - c.v("NPAHH")?
        - c.v("IHHPS")?)
}

/// NAFCO = -NAFHH + CB + EUKT - CGKTA - OPSKTA + NPAA + SDEPS - SDI + PSNBCY
fn nafco(c: &EvalContext) -> EvalResult {
    Ok(-c.v("NAFHH")? + c.v("CB")? + c.v("EUKT")? - c.v("CGKTA")? - c.v("OPSKTA")?
        + c.v("NPAA")?
        + c.v("SDEPS")?
        - c.v("SDI")?
        + c.v("PSNBCY")?)
}

/// NAFFC = -12012 + FISIMPS - NEAHH - BLEVY
fn naffc(c: &EvalContext) -> EvalResult {
    Ok(-12012.0 + c.v("FISIMPS")? - c.v("NEAHH")? - c.v("BLEVY")?)
}

/// NAFIC = NAFCO - NAFFC
fn nafic(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAFCO")? - c.v("NAFFC")?)
}

/// SAVCO = NAFCO + KGHH - DINVHH + DINVPS - DINVCG + VALPS - VALHH - NPAHH
///     + IFPS - IHHPS - NPACG - CGIPS - KLA - KCGPSO - LAIPS - NPALA + INHT
///     + KGLA - EUKT + CGKTA + OPSKTA - NPAA - IPCPS - IBPC
fn savco(c: &EvalContext) -> EvalResult {
    Ok(c.v("NAFCO")? + c.v("KGHH")? - c.v("DINVHH")? + c.v("DINVPS")? - c.v("DINVCG")?
        + c.v("VALPS")?
        - c.v("VALHH")?
        - c.v("NPAHH")?
        + c.v("IFPS")?
        - c.v("IHHPS")?
        - c.v("NPACG")?
        - c.v("CGIPS")?
        - c.v("KLA")?
        - c.v("KCGPSO")?
        - c.v("LAIPS")?
        - c.v("NPALA")?
        + c.v("INHT")?
        + c.v("KGLA")?
        - c.v("EUKT")?
        + c.v("CGKTA")?
        + c.v("OPSKTA")?
        - c.v("NPAA")?
        - c.v("IPCPS")?
        - c.v("IBPC")?)
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("WFP", Identity, wfp),
        Equation::new("MI", Ratio, mi),
        Equation::new("EMPSC", Identity, empsc),
        Equation::new("FYEMP", Identity, fyemp),
        Equation::new("EMPISC", Identity, empisc),
        Equation::new("EMPASC", Identity, empasc),
        Equation::new("EMPISCPP", Ratio, empiscpp),
        Equation::new("HHISC", Ratio, hhisc),
        Equation::new("HHSB", Identity, hhsb),
        Equation::new("OSB", Ratio, osb),
        Equation::new("SBHH", Identity, sbhh),
        Equation::new("TYWHH", Identity, tywhh),
        Equation::new("NMTRHH", Identity, nmtrhh),
        Equation::new("DIPHHx", Identity, diphhx),
        Equation::new("DIPHHmf", Identity, diphhmf),
        Equation::new("DIPHH", Identity, diphh),
        Equation::new("DIRHHx", Identity, dirhhx),
        Equation::new("DIRHHf", Identity, dirhhf),
        Equation::new("DIRICx", Identity, diricx),
        Equation::new("DIRICf", Difference, diricf),
        Equation::new("DIRIC", Difference, diric),
        Equation::new("DIPICx", Identity, dipicx),
        Equation::new("DIPICf", Difference, dipicf),
        Equation::new("DIPIC", Difference, dipic),
        Equation::new("WYQC", Ratio, wyqc),
        Equation::new("NDIVHH", Level, ndivhh),
        Equation::new("PIRHH", Identity, pirhh),
        Equation::new("PIPHH", Identity, piphh),
        Equation::new("EECPP", Identity, eecpp),
        Equation::new("EESC", Identity, eesc),
        Equation::new("HHDI", Identity, hhdi),
        Equation::new("RHHDI", Identity, rhhdi),
        Equation::new("EMPCPP", Ratio, empcpp),
        Equation::new("NEAHH", Identity, neahh),
        Equation::new("SVHH", Identity, svhh),
        Equation::new("SY", Identity, sy),
        Equation::new("KGHH", Identity, kghh),
        Equation::new("NAFHH", Identity, nafhh),
        Equation::new("NAFCO", Identity, nafco),
        Equation::new("NAFFC", Identity, naffc),
        Equation::new("NAFIC", Identity, nafic),
        Equation::new("SAVCO", Identity, savco),
    ]
}
