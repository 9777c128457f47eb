//! Cash reconciliation for the PV de Caisse.
//!
//! This module implements the physical count processor and the
//! reconciliation engine: counts validated against the denomination
//! catalog, a physical total recomputed from the counts on every change,
//! and the signed discrepancy against the theoretical balance.
//!
//! # Modules
//!
//! - `types` - Count lines and discrepancy annotations
//! - `counts` - Count sheet seeded from the catalog, count application
//! - `engine` - Discrepancy computation and sign classification
//! - `error` - Reconciliation error types

pub mod counts;
pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use counts::CountSheet;
pub use engine::{DiscrepancySign, Reconciliation, ReconciliationEngine};
pub use error::ReconciliationError;
pub use types::{CashCount, DiscrepancyEntry, DiscrepancyKind};
