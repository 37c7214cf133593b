//! Credential store backends.

use crate::error::{KeyringError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use tracing::debug;
use zeroize::Zeroizing;

/// A place that maps (service, username) to a secret password.
pub trait CredentialStore {
    /// Store `password` for (service, username), replacing any previous value.
    fn set(&self, service: &str, username: &str, password: &str) -> Result<()>;

    /// Delete the credential for (service, username).
    ///
    /// Fails with [`KeyringError::CredentialNotFound`] when there is no such entry.
    fn delete(&self, service: &str, username: &str) -> Result<()>;
}

/// The operating system's native credential store.
///
/// macOS Keychain, Windows Credential Manager or the Linux Secret Service,
/// depending on the platform the binary was built for.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(service: &str, username: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(service, username).map_err(KeyringError::Store)
    }
}

impl CredentialStore for KeyringStore {
    fn set(&self, service: &str, username: &str, password: &str) -> Result<()> {
        debug!(service, username, "Setting password in OS keyring");
        Self::entry(service, username)?
            .set_password(password)
            .map_err(KeyringError::Store)
    }

    fn delete(&self, service: &str, username: &str) -> Result<()> {
        debug!(service, username, "Deleting credential from OS keyring");
        match Self::entry(service, username)?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Err(KeyringError::CredentialNotFound {
                service: service.to_string(),
                username: username.to_string(),
            }),
            Err(e) => Err(KeyringError::Store(e)),
        }
    }
}

/// In-process credential store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<(String, String), Zeroizing<String>>>,
    set_calls: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the password stored for (service, username).
    pub fn get(&self, service: &str, username: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(&(service.to_string(), username.to_string()))
            .map(|p| p.as_str().to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Number of times `set` has been called.
    pub fn set_calls(&self) -> usize {
        self.set_calls.get()
    }
}

impl CredentialStore for MemoryStore {
    fn set(&self, service: &str, username: &str, password: &str) -> Result<()> {
        self.set_calls.set(self.set_calls.get() + 1);
        self.entries.borrow_mut().insert(
            (service.to_string(), username.to_string()),
            Zeroizing::new(password.to_string()),
        );
        Ok(())
    }

    fn delete(&self, service: &str, username: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .remove(&(service.to_string(), username.to_string()))
            .map(|_| ())
            .ok_or_else(|| KeyringError::CredentialNotFound {
                service: service.to_string(),
                username: username.to_string(),
            })
    }
}
