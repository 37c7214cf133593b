//! Error types for keyring-cli.

use thiserror::Error;

/// Main error type for credential operations.
#[derive(Error, Debug)]
pub enum KeyringError {
    #[error("No credentials stored for user [{username}] of service [{service}]")]
    CredentialNotFound { service: String, username: String },

    #[error("Credential store error: {0}")]
    Store(keyring::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeyringError {
    /// Whether this is the "entry does not exist" condition of the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, KeyringError::CredentialNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, KeyringError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_prompt_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "not a terminal");
        let err: KeyringError = dialoguer::Error::IO(io).into();

        assert!(matches!(err, KeyringError::Prompt(_)));
        assert!(err.to_string().contains("not a terminal"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_not_found() {
        let missing = KeyringError::CredentialNotFound {
            service: "github".to_string(),
            username: "alice".to_string(),
        };
        assert!(missing.is_not_found());
        assert!(!KeyringError::InputClosed.is_not_found());
    }
}
