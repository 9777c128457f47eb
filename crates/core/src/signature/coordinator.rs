//! Signature preconditions and the auto-validation decision.
//!
//! Pure decision logic: the coordinator is handed the statement status, the
//! current signature set, and the directory's eligibility verdict, and
//! returns what should be persisted. The db crate applies the outcome
//! inside one transaction, so the third signature and the status flip to
//! `validated` are committed together.

use chrono::Utc;
use uuid::Uuid;

use crate::signature::error::SignatureError;
use crate::signature::types::{Signature, SignatureRole, SignatureSet};
use crate::statement::types::StatementStatus;

/// What to persist after a successful sign.
#[derive(Debug, Clone, Copy)]
pub struct SignOutcome {
    /// The role being signed.
    pub role: SignatureRole,
    /// The signature to append.
    pub signature: Signature,
    /// The status to persist alongside the signature: `Validated` when this
    /// was the third role, unchanged `PendingValidation` otherwise.
    pub new_status: StatementStatus,
}

impl SignOutcome {
    /// Returns true if this signature completed the set.
    #[must_use]
    pub fn completes_validation(&self) -> bool {
        self.new_status == StatementStatus::Validated
    }
}

/// Stateless coordinator for the three-role signature protocol.
pub struct SignatureCoordinator;

impl SignatureCoordinator {
    /// Decides whether `employee_id` may sign `role` and what the resulting
    /// state is. All-or-nothing: any error means nothing is persisted.
    ///
    /// # Errors
    ///
    /// * `SignatureError::InvalidState` if the statement is not pending
    /// * `SignatureError::AlreadySigned` if the role already has a signature
    /// * `SignatureError::RoleIneligible` if the directory says no
    pub fn sign(
        current_status: StatementStatus,
        signatures: &SignatureSet,
        employee_id: Uuid,
        role: SignatureRole,
        is_eligible: bool,
    ) -> Result<SignOutcome, SignatureError> {
        if current_status != StatementStatus::PendingValidation {
            return Err(SignatureError::InvalidState {
                status: current_status,
            });
        }

        if signatures.get(role).is_some() {
            return Err(SignatureError::AlreadySigned { role });
        }

        if !is_eligible {
            return Err(SignatureError::RoleIneligible { employee_id, role });
        }

        let signature = Signature {
            employee_id,
            signed_at: Utc::now(),
        };

        // Would this signature complete the set?
        let mut next = *signatures;
        next.set(role, signature);
        let new_status = if next.is_complete() {
            StatementStatus::Validated
        } else {
            StatementStatus::PendingValidation
        };

        Ok(SignOutcome {
            role,
            signature,
            new_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed(set: &mut SignatureSet, role: SignatureRole) {
        set.set(
            role,
            Signature {
                employee_id: Uuid::new_v4(),
                signed_at: Utc::now(),
            },
        );
    }

    #[test]
    fn test_first_signature_keeps_pending() {
        let set = SignatureSet::default();
        let outcome = SignatureCoordinator::sign(
            StatementStatus::PendingValidation,
            &set,
            Uuid::new_v4(),
            SignatureRole::Treasurer,
            true,
        )
        .unwrap();
        assert_eq!(outcome.new_status, StatementStatus::PendingValidation);
        assert!(!outcome.completes_validation());
    }

    #[test]
    fn test_third_signature_validates() {
        let mut set = SignatureSet::default();
        signed(&mut set, SignatureRole::Treasurer);
        signed(&mut set, SignatureRole::SecretaryGeneral);

        let outcome = SignatureCoordinator::sign(
            StatementStatus::PendingValidation,
            &set,
            Uuid::new_v4(),
            SignatureRole::President,
            true,
        )
        .unwrap();
        assert_eq!(outcome.new_status, StatementStatus::Validated);
        assert!(outcome.completes_validation());
    }

    #[test]
    fn test_two_signatures_never_validate() {
        let mut set = SignatureSet::default();
        signed(&mut set, SignatureRole::Treasurer);

        let outcome = SignatureCoordinator::sign(
            StatementStatus::PendingValidation,
            &set,
            Uuid::new_v4(),
            SignatureRole::President,
            true,
        )
        .unwrap();
        assert_eq!(outcome.new_status, StatementStatus::PendingValidation);
    }

    #[test]
    fn test_already_signed_role_fails() {
        let mut set = SignatureSet::default();
        signed(&mut set, SignatureRole::Treasurer);

        let result = SignatureCoordinator::sign(
            StatementStatus::PendingValidation,
            &set,
            Uuid::new_v4(),
            SignatureRole::Treasurer,
            true,
        );
        assert!(matches!(
            result,
            Err(SignatureError::AlreadySigned {
                role: SignatureRole::Treasurer
            })
        ));
    }

    #[test]
    fn test_ineligible_employee_fails() {
        let employee_id = Uuid::new_v4();
        let result = SignatureCoordinator::sign(
            StatementStatus::PendingValidation,
            &SignatureSet::default(),
            employee_id,
            SignatureRole::President,
            false,
        );
        match result {
            Err(SignatureError::RoleIneligible {
                employee_id: id,
                role,
            }) => {
                assert_eq!(id, employee_id);
                assert_eq!(role, SignatureRole::President);
            }
            other => panic!("Expected RoleIneligible, got {other:?}"),
        }
    }

    #[test]
    fn test_sign_outside_pending_fails() {
        for status in [
            StatementStatus::Draft,
            StatementStatus::Validated,
            StatementStatus::Rejected,
        ] {
            let result = SignatureCoordinator::sign(
                status,
                &SignatureSet::default(),
                Uuid::new_v4(),
                SignatureRole::Treasurer,
                true,
            );
            assert!(matches!(result, Err(SignatureError::InvalidState { .. })));
        }
    }

    #[test]
    fn test_state_check_before_eligibility() {
        // A terminal statement rejects the sign even for eligible employees.
        let result = SignatureCoordinator::sign(
            StatementStatus::Validated,
            &SignatureSet::default(),
            Uuid::new_v4(),
            SignatureRole::Treasurer,
            false,
        );
        assert!(matches!(result, Err(SignatureError::InvalidState { .. })));
    }
}
