//! Three-role signature protocol for cash statements.
//!
//! A pending statement must be signed once by each of the treasurer, the
//! secretary general, and the president. The third signature validates the
//! statement in the same operation.
//!
//! # Modules
//!
//! - `types` - Roles, signatures, and the per-statement signature set
//! - `coordinator` - Sign preconditions and the auto-validation decision
//! - `error` - Signature error types

pub mod coordinator;
pub mod error;
pub mod types;

pub use coordinator::{SignOutcome, SignatureCoordinator};
pub use error::SignatureError;
pub use types::{Signature, SignatureRole, SignatureSet};
