//! Core business logic for Rano.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `denomination` - Banknote/coin catalog used for physical counts
//! - `reconciliation` - Physical count processing and discrepancy calculation
//! - `ledger` - Theoretical cash balance aggregation for a period
//! - `statement` - Cash statement lifecycle state machine
//! - `signature` - Three-role signature protocol driving validation
//! - `export` - Frozen snapshot handed to the document renderer

pub mod denomination;
pub mod export;
pub mod ledger;
pub mod reconciliation;
pub mod signature;
pub mod statement;
