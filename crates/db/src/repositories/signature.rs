//! Signature repository.
//!
//! Applies the three-role signature protocol under a row lock: the statement
//! is fetched `FOR UPDATE`, the coordinator decides the outcome, and the
//! signature insert plus any status flip commit in the same transaction. A
//! unique index on `(statement_id, role)` backstops the in-transaction
//! already-signed check against concurrent writers.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use rano_core::signature::{
    Signature, SignatureCoordinator, SignatureError, SignatureRole, SignatureSet, SignOutcome,
};
use rano_core::statement::StatementStatus;

use crate::entities::{cash_statements, sea_orm_active_enums, statement_signatures};

use super::directory::{find_active_on, position_matches};
use super::statement::{core_status_to_db, db_status_to_core};

/// Result of a successful sign.
#[derive(Debug, Clone)]
pub struct SignResult {
    /// The statement after the signature, `validated` if this was the third.
    pub statement: cash_statements::Model,
    /// The recorded signature row.
    pub signature: statement_signatures::Model,
    /// The coordinator's decision.
    pub outcome: SignOutcome,
}

/// Signature repository.
#[derive(Debug, Clone)]
pub struct SignatureRepository {
    db: DatabaseConnection,
}

impl SignatureRepository {
    /// Creates a new signature repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs a pending statement for one role.
    ///
    /// The third signature flips the statement to `validated` in the same
    /// transaction, so readers never observe a complete set on a pending
    /// statement.
    ///
    /// # Errors
    ///
    /// * `SignatureError::StatementNotFound` if the id is unknown
    /// * `SignatureError::InvalidState` if the statement is not pending
    /// * `SignatureError::AlreadySigned` if the role already signed
    /// * `SignatureError::RoleIneligible` if the employee's position does
    ///   not match the role
    pub async fn sign(
        &self,
        statement_id: Uuid,
        employee_id: Uuid,
        role: SignatureRole,
    ) -> Result<SignResult, SignatureError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SignatureError::Database(e.to_string()))?;

        // Row lock serializes concurrent signers of the same statement.
        let statement = cash_statements::Entity::find_by_id(statement_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| SignatureError::Database(e.to_string()))?
            .ok_or(SignatureError::StatementNotFound(statement_id))?;

        let signatures = signature_set_on(&txn, statement_id).await?;

        let employee = find_active_on(&txn, employee_id)
            .await
            .map_err(|e| SignatureError::Database(e.to_string()))?;
        let is_eligible = employee.is_some_and(|e| position_matches(&e.position, role));

        let outcome = SignatureCoordinator::sign(
            db_status_to_core(&statement.status),
            &signatures,
            employee_id,
            role,
            is_eligible,
        )?;

        let signature_row = statement_signatures::ActiveModel {
            id: Set(Uuid::now_v7()),
            statement_id: Set(statement_id),
            role: Set(core_role_to_db(outcome.role)),
            employee_id: Set(outcome.signature.employee_id),
            signed_at: Set(outcome.signature.signed_at.into()),
        };

        let signature = signature_row.insert(&txn).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                SignatureError::AlreadySigned { role }
            } else {
                SignatureError::Database(e.to_string())
            }
        })?;

        let statement = if outcome.completes_validation() {
            let now = Utc::now().into();
            let mut active: cash_statements::ActiveModel = statement.into();
            active.status = Set(core_status_to_db(StatementStatus::Validated));
            active.validated_at = Set(Some(now));
            active.updated_at = Set(now);
            active
                .update(&txn)
                .await
                .map_err(|e| SignatureError::Database(e.to_string()))?
        } else {
            statement
        };

        txn.commit()
            .await
            .map_err(|e| SignatureError::Database(e.to_string()))?;

        Ok(SignResult {
            statement,
            signature,
            outcome,
        })
    }

    /// Builds the in-memory signature set for a statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn signature_set(
        &self,
        statement_id: Uuid,
    ) -> Result<SignatureSet, SignatureError> {
        signature_set_on(&self.db, statement_id).await
    }
}

/// Loads the signature rows into a `SignatureSet` on any connection.
async fn signature_set_on<C: sea_orm::ConnectionTrait>(
    conn: &C,
    statement_id: Uuid,
) -> Result<SignatureSet, SignatureError> {
    let rows = statement_signatures::Entity::find()
        .filter(statement_signatures::Column::StatementId.eq(statement_id))
        .all(conn)
        .await
        .map_err(|e| SignatureError::Database(e.to_string()))?;

    let mut set = SignatureSet::default();
    for row in rows {
        set.set(
            db_role_to_core(&row.role),
            Signature {
                employee_id: row.employee_id,
                signed_at: row.signed_at.into(),
            },
        );
    }
    Ok(set)
}

// ============================================================================
// Conversion helpers
// ============================================================================

/// Converts the core `SignatureRole` to the database enum.
pub(crate) fn core_role_to_db(role: SignatureRole) -> sea_orm_active_enums::SignatureRole {
    match role {
        SignatureRole::Treasurer => sea_orm_active_enums::SignatureRole::Treasurer,
        SignatureRole::SecretaryGeneral => sea_orm_active_enums::SignatureRole::SecretaryGeneral,
        SignatureRole::President => sea_orm_active_enums::SignatureRole::President,
    }
}

/// Converts the database `SignatureRole` to the core enum.
pub(crate) fn db_role_to_core(role: &sea_orm_active_enums::SignatureRole) -> SignatureRole {
    match role {
        sea_orm_active_enums::SignatureRole::Treasurer => SignatureRole::Treasurer,
        sea_orm_active_enums::SignatureRole::SecretaryGeneral => SignatureRole::SecretaryGeneral,
        sea_orm_active_enums::SignatureRole::President => SignatureRole::President,
    }
}
