//! Data types passed between the CLI and the credential flows.

use std::fmt;

/// The (service, username) pair a credential is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialTarget {
    pub service: String,
    pub username: String,
}

impl CredentialTarget {
    /// Build a target, or `None` if either part is missing or empty.
    pub fn new(service: Option<&str>, username: Option<&str>) -> Option<Self> {
        match (service, username) {
            (Some(service), Some(username)) if !service.is_empty() && !username.is_empty() => {
                Some(Self {
                    service: service.to_string(),
                    username: username.to_string(),
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for CredentialTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.service)
    }
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(CredentialTarget),
    Remove(CredentialTarget),
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage was printed instead of running an action.
    Help,
    /// A password was stored.
    Stored,
    /// A credential was deleted.
    Removed,
    /// The user declined the removal.
    Kept,
    /// Removal found no such credential.
    NotFound,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::NotFound => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_target_requires_both_parts() {
        assert!(CredentialTarget::new(Some("github"), Some("alice")).is_some());
        assert!(CredentialTarget::new(None, Some("alice")).is_none());
        assert!(CredentialTarget::new(Some("github"), None).is_none());
        assert!(CredentialTarget::new(Some(""), Some("alice")).is_none());
        assert!(CredentialTarget::new(Some("github"), Some("")).is_none());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Help.exit_code(), 0);
        assert_eq!(Outcome::Stored.exit_code(), 0);
        assert_eq!(Outcome::Removed.exit_code(), 0);
        assert_eq!(Outcome::Kept.exit_code(), 0);
        assert_eq!(Outcome::NotFound.exit_code(), 1);
    }
}
