//! The equation dialect: helpers shared by the transcribed equation bodies.
//!
//! The source equations were written in differenced, log-differenced or
//! ratioed form; each body here evaluates the right-hand side directly and
//! re-levels it with one of the `solve_*` inversions. Period dummies and
//! trends reproduce the original estimation-sample indicator terms.

use sterling_core::{EvalContext, EvalResult, Period};

/// Floor applied before taking logarithms, so transiently nonpositive
/// iterates degrade an estimate instead of poisoning the sweep with NaNs.
pub const LOG_FLOOR: f64 = 1e-10;

/// Natural log with the argument clamped to [`LOG_FLOOR`].
pub fn safe_log(x: f64) -> f64 {
    x.max(LOG_FLOOR).ln()
}

/// Log first difference of `name` at `lag` quarters back:
/// `ln(x(t-lag) / x(t-lag-1))`.
///
/// Deliberately unguarded: a nonpositive ratio yields NaN, which the solver
/// treats as "skip this update this pass".
pub fn dlog(c: &EvalContext, name: &str, lag: i64) -> EvalResult {
    Ok((c.lag(name, lag)? / c.lag(name, lag + 1)?).ln())
}

/// Inverts `dlog(X) = rhs` to `X = X(-1) * exp(rhs)`.
pub fn solve_dlog(lag1: f64, rhs: f64) -> f64 {
    lag1 * rhs.exp()
}

/// Inverts `d(X) = rhs` to `X = X(-1) + rhs`.
pub fn solve_d(lag1: f64, rhs: f64) -> f64 {
    lag1 + rhs
}

/// Inverts `X / X(-k) = rhs` to `X = X(-k) * rhs`.
pub fn solve_ratio(lagk: f64, rhs: f64) -> f64 {
    lagk * rhs
}

/// 1.0 in exactly the given quarter, else 0.0.
pub fn pulse_at(c: &EvalContext, year: i32, quarter: u8) -> f64 {
    if c.period() == Period::new(year, quarter) {
        1.0
    } else {
        0.0
    }
}

/// 1.0 from the given quarter onwards, else 0.0.
pub fn step_from(c: &EvalContext, year: i32, quarter: u8) -> f64 {
    if c.period() >= Period::new(year, quarter) {
        1.0
    } else {
        0.0
    }
}

/// 1.0 up to and including the given quarter, else 0.0.
pub fn step_until(c: &EvalContext, year: i32, quarter: u8) -> f64 {
    if c.period() <= Period::new(year, quarter) {
        1.0
    } else {
        0.0
    }
}

/// Number of quarters elapsed since the base quarter, as a float.
pub fn trend_from(c: &EvalContext, year: i32, quarter: u8) -> f64 {
    c.period().quarters_since(Period::new(year, quarter)) as f64
}

/// Average of a per-quarter expression over the four quarters of `year`.
/// Used by the base-year index equations.
pub fn year_average<'a>(
    c: &EvalContext<'a>,
    year: i32,
    f: impl Fn(&EvalContext<'a>, Period) -> EvalResult,
) -> EvalResult {
    let mut sum = 0.0;
    for quarter in 1..=4 {
        sum += f(c, Period::new(year, quarter))?;
    }
    Ok(sum / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sterling_core::{Period, SeriesStore};

    fn store_with(values: &[(i32, u8, &str, f64)]) -> SeriesStore {
        let mut store = SeriesStore::new(Period::new(2008, 1), Period::new(2010, 4));
        for &(year, quarter, name, value) in values {
            store.set(Period::new(year, quarter), name, value).unwrap();
        }
        store
    }

    #[test]
    fn safe_log_floors_nonpositive_input() {
        assert_eq!(safe_log(-3.0), LOG_FLOOR.ln());
        assert_eq!(safe_log(1.0), 0.0);
    }

    #[test]
    fn dlog_reads_the_requested_lag() {
        let store = store_with(&[
            (2009, 4, "X", 2.0),
            (2010, 1, "X", 4.0),
            (2010, 2, "X", 8.0),
        ]);
        let c = EvalContext::new(&store, Period::new(2010, 2));
        assert!((dlog(&c, "X", 0).unwrap() - 2.0_f64.ln()).abs() < 1e-12);
        assert!((dlog(&c, "X", 1).unwrap() - 2.0_f64.ln()).abs() < 1e-12);
        assert!(dlog(&c, "X", 2).is_err());
    }

    #[test]
    fn inversions_re_level_the_rhs() {
        assert_eq!(solve_d(10.0, 2.5), 12.5);
        assert_eq!(solve_ratio(10.0, 1.1), 11.0);
        assert!((solve_dlog(10.0, 0.1) - 10.0 * 0.1_f64.exp()).abs() < 1e-12);
    }

    #[test]
    fn dummies_compare_against_the_target_quarter() {
        let store = store_with(&[]);
        let c = EvalContext::new(&store, Period::new(2009, 4));
        assert_eq!(pulse_at(&c, 2009, 4), 1.0);
        assert_eq!(pulse_at(&c, 2009, 3), 0.0);
        assert_eq!(step_from(&c, 2005, 1), 1.0);
        assert_eq!(step_from(&c, 2010, 1), 0.0);
        assert_eq!(step_until(&c, 2011, 2), 1.0);
        assert_eq!(step_until(&c, 2009, 3), 0.0);
        assert_eq!(trend_from(&c, 2008, 4), 4.0);
    }

    #[test]
    fn year_average_spans_all_four_quarters() {
        let store = store_with(&[
            (2009, 1, "P", 1.0),
            (2009, 2, "P", 2.0),
            (2009, 3, "P", 3.0),
            (2009, 4, "P", 4.0),
        ]);
        let c = EvalContext::new(&store, Period::new(2010, 1));
        let avg = year_average(&c, 2009, |c, p| c.at("P", p)).unwrap();
        assert_eq!(avg, 2.5);
    }
}
