//! Employee directory lookups.
//!
//! Signature eligibility is position-based: an employee may sign a role when
//! their directory position matches that role's office. Positions are stored
//! as free text (`Treasurer`, `Secretary General`, ...) so matching is done
//! on a normalized form.

use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use rano_core::signature::SignatureRole;
use rano_shared::error::AppError;

use crate::entities::employees;

/// Read-only access to the employee roster.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    db: DatabaseConnection,
}

impl EmployeeDirectory {
    /// Creates a new employee directory.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches an active employee by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_active(&self, employee_id: Uuid) -> Result<Option<employees::Model>, AppError> {
        find_active_on(&self.db, employee_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Lists active employees whose position matches a signature role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn eligible_for(&self, role: SignatureRole) -> Result<Vec<employees::Model>, AppError> {
        let rows = employees::Entity::find()
            .filter(employees::Column::IsActive.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter(|e| position_matches(&e.position, role))
            .collect())
    }

    /// Lists all active employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_active(&self) -> Result<Vec<employees::Model>, AppError> {
        employees::Entity::find()
            .filter(employees::Column::IsActive.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Checks whether an active employee may sign the given role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn is_eligible(&self, employee_id: Uuid, role: SignatureRole) -> Result<bool, AppError> {
        let employee = self.find_active(employee_id).await?;
        Ok(employee.is_some_and(|e| position_matches(&e.position, role)))
    }
}

/// Fetches an active employee on an arbitrary connection, so callers holding
/// a transaction can look up eligibility inside it.
pub(crate) async fn find_active_on<C: ConnectionTrait>(
    conn: &C,
    employee_id: Uuid,
) -> Result<Option<employees::Model>, sea_orm::DbErr> {
    employees::Entity::find_by_id(employee_id)
        .filter(employees::Column::IsActive.eq(true))
        .one(conn)
        .await
}

/// Matches a free-text position against a signature role.
pub(crate) fn position_matches(position: &str, role: SignatureRole) -> bool {
    let normalized: String = position
        .trim()
        .chars()
        .map(|c| {
            if c == ' ' || c == '-' {
                '_'
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    normalized == role.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_matching_is_case_and_separator_insensitive() {
        assert!(position_matches("Treasurer", SignatureRole::Treasurer));
        assert!(position_matches("secretary general", SignatureRole::SecretaryGeneral));
        assert!(position_matches("Secretary-General", SignatureRole::SecretaryGeneral));
        assert!(position_matches(" president ", SignatureRole::President));
    }

    #[test]
    fn test_position_mismatch() {
        assert!(!position_matches("Technician", SignatureRole::Treasurer));
        assert!(!position_matches("President", SignatureRole::Treasurer));
    }
}
