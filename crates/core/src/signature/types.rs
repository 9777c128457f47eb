//! Signature domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three offices that must each sign a statement once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureRole {
    /// Keeper of the cash box.
    Treasurer,
    /// Secretary general of the water committee.
    SecretaryGeneral,
    /// President of the water committee.
    President,
}

impl SignatureRole {
    /// All roles, in signing-sheet order.
    pub const ALL: [Self; 3] = [Self::Treasurer, Self::SecretaryGeneral, Self::President];

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Treasurer => "treasurer",
            Self::SecretaryGeneral => "secretary_general",
            Self::President => "president",
        }
    }

    /// Parses a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "treasurer" => Some(Self::Treasurer),
            "secretary_general" => Some(Self::SecretaryGeneral),
            "president" => Some(Self::President),
            _ => None,
        }
    }
}

impl std::fmt::Display for SignatureRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The employee who signed.
    pub employee_id: Uuid,
    /// When the signature was recorded.
    pub signed_at: DateTime<Utc>,
}

/// At most one signature per role. Signatures are append-only: there is no
/// way to remove one short of the statement being rejected outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureSet {
    /// Treasurer's signature, if recorded.
    pub treasurer: Option<Signature>,
    /// Secretary general's signature, if recorded.
    pub secretary_general: Option<Signature>,
    /// President's signature, if recorded.
    pub president: Option<Signature>,
}

impl SignatureSet {
    /// Returns the signature recorded for a role, if any.
    #[must_use]
    pub const fn get(&self, role: SignatureRole) -> Option<Signature> {
        match role {
            SignatureRole::Treasurer => self.treasurer,
            SignatureRole::SecretaryGeneral => self.secretary_general,
            SignatureRole::President => self.president,
        }
    }

    /// Records a signature for a role, replacing nothing: callers must check
    /// `get` first (the coordinator does).
    pub const fn set(&mut self, role: SignatureRole, signature: Signature) {
        match role {
            SignatureRole::Treasurer => self.treasurer = Some(signature),
            SignatureRole::SecretaryGeneral => self.secretary_general = Some(signature),
            SignatureRole::President => self.president = Some(signature),
        }
    }

    /// Number of roles that have signed.
    #[must_use]
    pub fn signed_count(&self) -> usize {
        SignatureRole::ALL
            .iter()
            .filter(|r| self.get(**r).is_some())
            .count()
    }

    /// Returns true when all three roles have signed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.signed_count() == SignatureRole::ALL.len()
    }

    /// The roles that have not signed yet, in signing-sheet order.
    #[must_use]
    pub fn missing_roles(&self) -> Vec<SignatureRole> {
        SignatureRole::ALL
            .into_iter()
            .filter(|r| self.get(*r).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig() -> Signature {
        Signature {
            employee_id: Uuid::new_v4(),
            signed_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_roundtrip() {
        for role in SignatureRole::ALL {
            assert_eq!(SignatureRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(SignatureRole::parse("TREASURER"), Some(SignatureRole::Treasurer));
        assert_eq!(SignatureRole::parse("mayor"), None);
    }

    #[test]
    fn test_empty_set() {
        let set = SignatureSet::default();
        assert_eq!(set.signed_count(), 0);
        assert!(!set.is_complete());
        assert_eq!(set.missing_roles(), SignatureRole::ALL.to_vec());
    }

    #[test]
    fn test_set_and_get() {
        let mut set = SignatureSet::default();
        let signature = sig();
        set.set(SignatureRole::SecretaryGeneral, signature);
        assert_eq!(set.get(SignatureRole::SecretaryGeneral), Some(signature));
        assert_eq!(set.get(SignatureRole::Treasurer), None);
        assert_eq!(set.signed_count(), 1);
    }

    #[test]
    fn test_complete_after_all_three() {
        let mut set = SignatureSet::default();
        for role in SignatureRole::ALL {
            assert!(!set.is_complete());
            set.set(role, sig());
        }
        assert!(set.is_complete());
        assert!(set.missing_roles().is_empty());
    }
}
