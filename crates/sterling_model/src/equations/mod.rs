//! The full equation registry, one module per economic sub-system.
//!
//! Sweep order matters for convergence speed, not correctness: sub-systems
//! that most directly feed the rest are evaluated earlier in each pass. The
//! order is fixed here and pinned by a test; treat reordering as a tunable,
//! never as a refactoring no-op.

use anyhow::Result;
use sterling_core::EquationRegistry;

pub mod balance_of_payments;
pub mod balance_sheet;
pub mod consumption;
pub mod exports;
pub mod financial;
pub mod gdp;
pub mod imports;
pub mod income;
pub mod inventories;
pub mod investment;
pub mod labour;
pub mod north_sea;
pub mod prices;
pub mod public_expenditure;
pub mod public_totals;
pub mod receipts;

pub use prices::cost_block;

/// Deepest lag read by any equation, in quarters (several balance-sheet and
/// consumption equations read back six quarters through nested differences).
pub const MAX_LAG: i64 = 6;

/// Builds the complete registry in sweep order.
pub fn registry() -> Result<EquationRegistry> {
    let registry = EquationRegistry::builder()
        .max_lag(MAX_LAG)
        .group("labour", labour::equations())?
        .group("prices", prices::equations())?
        .group("income", income::equations())?
        .group("consumption", consumption::equations())?
        .group("inventories", inventories::equations())?
        .group("investment", investment::equations())?
        .group("exports", exports::equations())?
        .group("imports", imports::equations())?
        .group("north_sea", north_sea::equations())?
        .group("gdp", gdp::equations())?
        .group("public_expenditure", public_expenditure::equations())?
        .group("receipts", receipts::equations())?
        .group("balance_of_payments", balance_of_payments::equations())?
        .group("public_totals", public_totals::equations())?
        .group("financial", financial::equations())?
        .group("balance_sheet", balance_sheet::equations())?
        .build();
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::registry;

    #[test]
    fn registry_builds_without_duplicate_targets() {
        let registry = registry().unwrap();
        assert!(registry.len() > 350, "expected the full model, got {}", registry.len());
    }

    #[test]
    fn sweep_order_starts_with_the_upstream_groups() {
        let registry = registry().unwrap();
        let groups: Vec<&str> = registry.groups().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            groups,
            vec![
                "labour",
                "prices",
                "income",
                "consumption",
                "inventories",
                "investment",
                "exports",
                "imports",
                "north_sea",
                "gdp",
                "public_expenditure",
                "receipts",
                "balance_of_payments",
                "public_totals",
                "financial",
                "balance_sheet",
            ]
        );
    }

    #[test]
    fn cost_block_targets_are_registered_equations() {
        let registry = registry().unwrap();
        for name in super::cost_block().targets() {
            assert!(registry.contains(name), "{name} missing from registry");
        }
    }
}
