//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod denomination;
pub mod directory;
pub mod ledger;
pub mod signature;
pub mod statement;

pub use denomination::DenominationRepository;
pub use directory::EmployeeDirectory;
pub use ledger::LedgerRepository;
pub use signature::{SignResult, SignatureRepository};
pub use statement::{
    CountInput, DiscrepancyInput, StatementDraftInput, StatementFilter, StatementRepoError,
    StatementRepository, StatementWithDetails,
};
