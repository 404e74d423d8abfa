//! Household consumption and durables.

use sterling_core::{Equation, EquationKind, EvalContext, EvalResult};

use crate::funcs::{dlog, pulse_at, safe_log, solve_dlog};

/// dlog(CONS) = 0.2645906 + 0.1029795*dlog(RHHDI) - 0.0083736*d(LFSUR)
///     + 0.1269445*dlog((GPW*1000)/(PCE/100))
///     - 0.0004036*d(R(-1) - (-1 + PCE/PCE(-4))*100)
///     - 0.1250582*(log(CONS(-1)) - 0.4392933*log(RHHDI(-1))
///         - 0.1059181*log((GPW(-1)*1000)/(PCE(-1)/100))
///         - 0.2215558*log(NFWPE(-1)/(PCE(-1)/100)))
fn cons(c: &EvalContext) -> EvalResult {
    let d_lfsur = c.v("LFSUR")? - c.lag("LFSUR", 1)?;

    let real_gpw_t = (c.v("GPW")? * 1000.0) / (c.v("PCE")? / 100.0);
    let real_gpw_t1 = (c.lag("GPW", 1)? * 1000.0) / (c.lag("PCE", 1)? / 100.0);
    let dlog_real_gpw = (real_gpw_t / real_gpw_t1).ln();

    // d() of the lagged real rate: [R(-1) - (-1 + PCE/PCE(-4))*100]
    // minus the same expression one quarter earlier.
    let real_r_t = c.lag("R", 1)? - (-1.0 + c.v("PCE")? / c.lag("PCE", 4)?) * 100.0;
    let real_r_t1 = c.lag("R", 2)? - (-1.0 + c.lag("PCE", 1)? / c.lag("PCE", 5)?) * 100.0;

    let ecm = safe_log(c.lag("CONS", 1)?)
        - 0.4392933 * safe_log(c.lag("RHHDI", 1)?)
        - 0.1059181 * safe_log((c.lag("GPW", 1)? * 1000.0) / (c.lag("PCE", 1)? / 100.0))
        - 0.2215558 * safe_log(c.lag("NFWPE", 1)? / (c.lag("PCE", 1)? / 100.0));

    let rhs = 0.2645906 + 0.1029795 * dlog(c, "RHHDI", 0)?
        - 0.0083736 * d_lfsur
        + 0.1269445 * dlog_real_gpw
        - 0.0004036 * (real_r_t - real_r_t1)
        - 0.1250582 * ecm;
    Ok(solve_dlog(c.lag("CONS", 1)?, rhs))
}

/// CONSPS = CONS * PCE / 100
fn consps(c: &EvalContext) -> EvalResult {
    Ok(c.v("CONS")? * c.v("PCE")? / 100.0)
}

/// dlog(CDUR) = dlog(CONS) - 0.6408491*(dlog(PCDUR) - dlog(PCE))
///     + 0.0378296*dlog(PD) + 0.4517152*dlog(RHHDI) + 0.3438288*dlog(RHHDI(-1))
///     - 0.0421498*log(CDUR(-1)/CONS(-1))
///     - 0.0145656*log(PCDUR(-1)*((((1+R(-1)/100)^0.25)-1)
///         + ((1.25^0.25)-1) - d(PCDUR(-1))/PCDUR(-1))/100)
///     + 0.0313983*log(NFWPE(-1)/(PCE(-1)/100)) - 0.6203775
///     + 0.0636941*([2009Q4] - [2010Q1])
fn cdur(c: &EvalContext) -> EvalResult {
    let nom_rate = (1.0 + c.lag("R", 1)? / 100.0).powf(0.25) - 1.0;
    let depr_rate = 1.25_f64.powf(0.25) - 1.0;
    let d_pcdur_1 = c.lag("PCDUR", 1)? - c.lag("PCDUR", 2)?;
    let cap_gain = d_pcdur_1 / c.lag("PCDUR", 1)?;
    let user_cost = c.lag("PCDUR", 1)? * (nom_rate + depr_rate - cap_gain) / 100.0;

    let rhs = dlog(c, "CONS", 0)?
        - 0.6408491 * (dlog(c, "PCDUR", 0)? - dlog(c, "PCE", 0)?)
        + 0.0378296 * dlog(c, "PD", 0)?
        + 0.4517152 * dlog(c, "RHHDI", 0)?
        + 0.3438288 * dlog(c, "RHHDI", 1)?
        - 0.0421498 * safe_log(c.lag("CDUR", 1)? / c.lag("CONS", 1)?)
        - 0.0145656 * safe_log(user_cost)
        + 0.0313983 * safe_log(c.lag("NFWPE", 1)? / (c.lag("PCE", 1)? / 100.0))
        - 0.6203775
        + 0.0636941 * (pulse_at(c, 2009, 4) - pulse_at(c, 2010, 1));
    Ok(solve_dlog(c.lag("CDUR", 1)?, rhs))
}

/// CDURPS = (PCDUR / 100) * CDUR
fn cdurps(c: &EvalContext) -> EvalResult {
    Ok((c.v("PCDUR")? / 100.0) * c.v("CDUR")?)
}

/// dlog(PD) = dlog(GPW / APH) - 0.1278181*log(PD(-1)/(GPW(-1)/APH(-1)))
///     + 1.54494*(dlog(APH) - dlog(PCE))
///     + estimation-sample pulse dummies + 0.2217687
fn pd(c: &EvalContext) -> EvalResult {
    let ratio_t = c.v("GPW")? / c.v("APH")?;
    let ratio_t1 = c.lag("GPW", 1)? / c.lag("APH", 1)?;
    let dlog_ratio = (ratio_t / ratio_t1).ln();

    let ecm = safe_log(c.lag("PD", 1)? / (c.lag("GPW", 1)? / c.lag("APH", 1)?));

    let rhs = dlog_ratio - 0.1278181 * ecm
        + 1.54494 * (dlog(c, "APH", 0)? - dlog(c, "PCE", 0)?)
        + 0.2058841 * (pulse_at(c, 1992, 3) - pulse_at(c, 1992, 4))
        + 0.340128 * pulse_at(c, 2004, 1)
        + 0.1437075 * (pulse_at(c, 2009, 4) - pulse_at(c, 2010, 1))
        + 0.2732277 * (pulse_at(c, 2016, 1) - pulse_at(c, 2016, 2))
        + 0.2217687;
    Ok(solve_dlog(c.lag("PD", 1)?, rhs))
}

pub fn equations() -> Vec<Equation> {
    use EquationKind::*;
    vec![
        Equation::new("CONS", LogDifference, cons),
        Equation::new("CONSPS", Identity, consps),
        Equation::new("CDUR", LogDifference, cdur),
        Equation::new("CDURPS", Identity, cdurps),
        Equation::new("PD", LogDifference, pd),
    ]
}
