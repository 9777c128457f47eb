//! Cash statement lifecycle management.
//!
//! This module implements the statement state machine:
//! `draft -> pending_validation -> validated | rejected`, with `validated`
//! reachable only through the signature coordinator.
//!
//! # Modules
//!
//! - `types` - Status enum and lifecycle actions
//! - `error` - Statement-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

pub use error::StatementError;
pub use service::{StatementService, SubmitChecklist};
pub use types::{StatementAction, StatementStatus};
