//! Model constants: period boundaries, index weights and the
//! additive-adjustment table.
//!
//! Solver tuning defaults (200 sweeps, 1e-8 tolerance, 0.7 damping) live on
//! `sterling_core::SolverSettings::default`.

use sterling_core::{AdjustmentTable, Period};

pub fn history_start() -> Period {
    Period::new(1970, 1)
}

pub fn history_end() -> Period {
    Period::new(2024, 4)
}

pub fn forecast_start() -> Period {
    Period::new(2025, 1)
}

pub fn forecast_end() -> Period {
    Period::new(2030, 4)
}

/// CPI rent weight.
pub const W1: f64 = 0.084;
/// Mortgage interest weight in the RPI.
pub const W4: f64 = 0.024;
/// Owner-occupied housing weight in CPIH.
pub const W5: f64 = 0.172;

/// RPI component index base values.
pub const I4: f64 = 222.8;
pub const I7: f64 = 317.7;
pub const I9: f64 = 319.5;
pub const I10: f64 = 115.1;
pub const I11: f64 = 114.7;
pub const I12: f64 = 111.2;

/// Exogenous add-factors applied after each period converges.
pub fn adjustments() -> AdjustmentTable {
    AdjustmentTable::new([
        ("PRMIP", "PRMIP_A"),
        ("PSNBCY", "PSNBCY_A"),
        ("SBHH", "SBHH_A"),
        ("TYWHH", "TYWHH_A"),
        ("EESC", "EESC_A"),
        ("MGDPNSA", "MGDPNSA_A"),
    ])
}
