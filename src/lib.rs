//! keyring-cli: store and remove service credentials in the OS keyring.

pub mod cli;
pub mod error;
pub mod logger;
pub mod models;
pub mod operations;
pub mod prompt;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::{KeyringError, Result};
pub use models::{Action, CredentialTarget, Outcome};
pub use store::{CredentialStore, KeyringStore, MemoryStore};
