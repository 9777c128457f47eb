//! `SeaORM` entity definitions.

pub mod cash_counts;
pub mod cash_statements;
pub mod denominations;
pub mod donations;
pub mod employees;
pub mod expenses;
pub mod invoice_payments;
pub mod loan_repayments;
pub mod loans;
pub mod salary_payments;
pub mod sea_orm_active_enums;
pub mod statement_discrepancies;
pub mod statement_signatures;
