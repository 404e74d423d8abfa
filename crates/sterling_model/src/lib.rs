/// The `sterling_model` crate is the concrete quarterly macroeconomic model
/// built on the `sterling_core` solver engine: the full equation registry
/// (16 economic groups), the model's configuration constants, a
/// deterministic synthetic data generator, and the `Model` orchestrator
/// used by the `forecast` binary.
pub mod config;
pub mod data;
pub mod equations;
pub mod funcs;
pub mod model;

pub use model::Model;
