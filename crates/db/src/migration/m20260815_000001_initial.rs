//! Initial database migration.
//!
//! Creates the enums, core tables, financial event tables, indexes, and seed
//! data for the cash statement workflow.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: REFERENCE TABLES
        // ============================================================
        db.execute_unprepared(EMPLOYEES_SQL).await?;
        db.execute_unprepared(DENOMINATIONS_SQL).await?;

        // ============================================================
        // PART 3: CASH STATEMENTS
        // ============================================================
        db.execute_unprepared(CASH_STATEMENTS_SQL).await?;
        db.execute_unprepared(CASH_COUNTS_SQL).await?;
        db.execute_unprepared(STATEMENT_DISCREPANCIES_SQL).await?;
        db.execute_unprepared(STATEMENT_SIGNATURES_SQL).await?;

        // ============================================================
        // PART 4: FINANCIAL EVENT TABLES
        // ============================================================
        db.execute_unprepared(FINANCIAL_EVENTS_SQL).await?;

        // ============================================================
        // PART 5: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_DENOMINATIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Statement lifecycle
CREATE TYPE statement_status AS ENUM (
    'draft',
    'pending_validation',
    'validated',
    'rejected'
);

-- Physical money kind
CREATE TYPE denomination_kind AS ENUM ('banknote', 'coin');

-- Discrepancy justification kind
CREATE TYPE discrepancy_kind AS ENUM ('voucher', 'loss', 'gain');

-- Signature roles, one of each required for validation
CREATE TYPE signature_role AS ENUM (
    'treasurer',
    'secretary_general',
    'president'
);
";

const EMPLOYEES_SQL: &str = r"
CREATE TABLE employees (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    full_name VARCHAR(255) NOT NULL,
    position VARCHAR(100) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_employees_position ON employees(lower(position)) WHERE is_active = true;
";

const DENOMINATIONS_SQL: &str = r"
CREATE TABLE denominations (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    value NUMERIC(12, 2) NOT NULL,
    kind denomination_kind NOT NULL,
    display_order INTEGER NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    CONSTRAINT chk_denomination_value_positive CHECK (value > 0),
    UNIQUE (value, kind)
);
";

const CASH_STATEMENTS_SQL: &str = r"
CREATE TABLE cash_statements (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    statement_number VARCHAR(20) NOT NULL UNIQUE,
    statement_date DATE NOT NULL,
    period_start DATE,
    period_end DATE,
    theoretical_balance NUMERIC(14, 2),
    calculation_details JSONB,
    physical_balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    total_discrepancy NUMERIC(14, 2) NOT NULL DEFAULT 0,
    status statement_status NOT NULL DEFAULT 'draft',
    notes TEXT,
    submitted_by UUID REFERENCES employees(id),
    submitted_at TIMESTAMPTZ,
    validated_at TIMESTAMPTZ,
    rejected_by UUID REFERENCES employees(id),
    rejected_at TIMESTAMPTZ,
    rejection_reason TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_statement_period CHECK (
        period_start IS NULL OR period_end IS NULL OR period_end >= period_start
    )
);

CREATE INDEX idx_statements_status ON cash_statements(status);
CREATE INDEX idx_statements_date ON cash_statements(statement_date DESC);
";

const CASH_COUNTS_SQL: &str = r"
CREATE TABLE cash_counts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    statement_id UUID NOT NULL REFERENCES cash_statements(id) ON DELETE CASCADE,
    denomination_id UUID NOT NULL REFERENCES denominations(id),
    denomination_value NUMERIC(12, 2) NOT NULL,
    denomination_kind denomination_kind NOT NULL,
    quantity BIGINT NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_count_quantity CHECK (quantity >= 0),
    CONSTRAINT chk_count_amount CHECK (amount = denomination_value * quantity),
    UNIQUE (statement_id, denomination_id)
);

CREATE INDEX idx_cash_counts_statement ON cash_counts(statement_id);
";

const STATEMENT_DISCREPANCIES_SQL: &str = r"
CREATE TABLE statement_discrepancies (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    statement_id UUID NOT NULL REFERENCES cash_statements(id) ON DELETE CASCADE,
    kind discrepancy_kind NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    description TEXT NOT NULL,
    reference VARCHAR(100),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_discrepancies_statement ON statement_discrepancies(statement_id);
";

const STATEMENT_SIGNATURES_SQL: &str = r"
CREATE TABLE statement_signatures (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    statement_id UUID NOT NULL REFERENCES cash_statements(id) ON DELETE CASCADE,
    role signature_role NOT NULL,
    employee_id UUID NOT NULL REFERENCES employees(id),
    signed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (statement_id, role)
);

CREATE INDEX idx_signatures_statement ON statement_signatures(statement_id);
";

const FINANCIAL_EVENTS_SQL: &str = r"
CREATE TABLE invoice_payments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    invoice_number VARCHAR(50) NOT NULL,
    payer_name VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_invoice_payment_amount CHECK (amount > 0)
);

CREATE INDEX idx_invoice_payments_date ON invoice_payments(entry_date);

CREATE TABLE donations (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    donor_name VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_donation_amount CHECK (amount > 0)
);

CREATE INDEX idx_donations_date ON donations(entry_date);

CREATE TABLE loans (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    borrower_name VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_loan_amount CHECK (amount > 0)
);

CREATE INDEX idx_loans_date ON loans(entry_date);

CREATE TABLE loan_repayments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    loan_id UUID REFERENCES loans(id),
    borrower_name VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_loan_repayment_amount CHECK (amount > 0)
);

CREATE INDEX idx_loan_repayments_date ON loan_repayments(entry_date);

CREATE TABLE expenses (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    label VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expense_amount CHECK (amount > 0)
);

CREATE INDEX idx_expenses_date ON expenses(entry_date);

CREATE TABLE salary_payments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    employee_id UUID REFERENCES employees(id),
    amount NUMERIC(14, 2) NOT NULL,
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_salary_payment_amount CHECK (amount > 0)
);

CREATE INDEX idx_salary_payments_date ON salary_payments(entry_date);
";

const SEED_DENOMINATIONS_SQL: &str = r"
-- ============================================================
-- SEED: Ariary denominations in circulation
-- ============================================================
INSERT INTO denominations (value, kind, display_order) VALUES
(20000, 'banknote', 1),
(10000, 'banknote', 2),
(5000, 'banknote', 3),
(2000, 'banknote', 4),
(1000, 'banknote', 5),
(500, 'banknote', 6),
(200, 'banknote', 7),
(100, 'banknote', 8),
(50, 'coin', 9),
(20, 'coin', 10),
(10, 'coin', 11),
(5, 'coin', 12),
(2, 'coin', 13),
(1, 'coin', 14)
ON CONFLICT (value, kind) DO NOTHING;
";

const DROP_ALL_SQL: &str = r"
-- ============================================================
-- DROP ALL: Rollback migration
-- Order matters due to foreign key constraints
-- ============================================================

DROP TABLE IF EXISTS salary_payments CASCADE;
DROP TABLE IF EXISTS expenses CASCADE;
DROP TABLE IF EXISTS loan_repayments CASCADE;
DROP TABLE IF EXISTS loans CASCADE;
DROP TABLE IF EXISTS donations CASCADE;
DROP TABLE IF EXISTS invoice_payments CASCADE;
DROP TABLE IF EXISTS statement_signatures CASCADE;
DROP TABLE IF EXISTS statement_discrepancies CASCADE;
DROP TABLE IF EXISTS cash_counts CASCADE;
DROP TABLE IF EXISTS cash_statements CASCADE;
DROP TABLE IF EXISTS denominations CASCADE;
DROP TABLE IF EXISTS employees CASCADE;

DROP TYPE IF EXISTS signature_role CASCADE;
DROP TYPE IF EXISTS discrepancy_kind CASCADE;
DROP TYPE IF EXISTS denomination_kind CASCADE;
DROP TYPE IF EXISTS statement_status CASCADE;
";
