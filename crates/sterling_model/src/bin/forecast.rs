//! Runs the model end to end on synthetic data: generate, solve the
//! forecast range, print summaries and export a CSV of all series.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use sterling_core::{Period, SeriesStore, SolverSettings};
use sterling_model::Model;

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("STERLING_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = SolverSettings::default();
    let mut model = Model::new(settings)?;

    println!("Generating synthetic data...");
    model.generate_synthetic_data();
    {
        let store = model.store().expect("data just generated");
        println!(
            "  {} quarters, {} variables",
            store.periods().count(),
            store.column_count()
        );
    }

    let start: Period = "2025Q1".parse()?;
    let end: Period = "2028Q4".parse()?;
    println!(
        "Solving {} quarters from {start} to {end} \
         (max {} iterations, tolerance {:e}, damping {})...",
        end - start + 1,
        settings.max_iterations,
        settings.tolerance,
        settings.damping,
    );
    let outcomes = model.solve(Some(start), Some(end))?;

    for outcome in &outcomes {
        if outcome.converged {
            println!(
                "  {}: converged in {} iterations",
                outcome.period, outcome.iterations
            );
        } else {
            println!(
                "  {}: NOT converged after {} iterations \
                 (max change {:.2e} in {})",
                outcome.period,
                outcome.iterations,
                outcome.max_rel_change,
                outcome.worst_variable.as_deref().unwrap_or("?"),
            );
        }
    }

    println!();
    print!("{}", model.summary("2025Q4".parse()?)?);
    println!();
    print!("{}", model.summary(end)?);

    let path = Path::new("results.csv");
    export_csv(model.store().expect("store populated"), path)?;
    println!("\nResults exported to {}", path.display());

    Ok(())
}

/// Writes the whole store as CSV: one row per quarter, one column per
/// variable, undefined cells left empty.
fn export_csv(store: &SeriesStore, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write!(out, "period")?;
    for name in store.names() {
        write!(out, ",{name}")?;
    }
    writeln!(out)?;

    for period in store.periods() {
        write!(out, "{period}")?;
        for name in store.names() {
            match store.get(period, name) {
                Ok(value) => write!(out, ",{value}")?,
                Err(_) => write!(out, ",")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
