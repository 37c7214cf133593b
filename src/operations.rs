//! The add and remove credential flows.

use crate::error::Result;
use crate::models::{CredentialTarget, Outcome};
use crate::prompt::Prompter;
use crate::store::CredentialStore;
use crate::utils::Console;
use tracing::debug;

/// Prompt shown for both the password and its confirmation.
pub const PASSWORD_PROMPT: &str = "Password";

/// Ask for a password twice until both entries match, then store it.
///
/// There is no retry limit: a user who keeps mistyping is asked again
/// until the entries agree or the process is interrupted.
pub fn add_credential(
    store: &dyn CredentialStore,
    prompter: &mut dyn Prompter,
    console: &mut Console,
    target: &CredentialTarget,
) -> Result<Outcome> {
    let password = loop {
        let password = prompter.password(PASSWORD_PROMPT)?;
        console.info("Please confirm the password")?;
        let confirmation = prompter.password(PASSWORD_PROMPT)?;

        if password == confirmation {
            break password;
        }
        console.warning("Passwords do not match, please retry")?;
    };

    debug!(credential = %target, "Passwords match, storing credential");
    store.set(&target.service, &target.username, &password)?;
    console.success(&format!("Credentials for [{}] stored", target.service))?;

    Ok(Outcome::Stored)
}

/// Ask for confirmation, then delete the stored credential.
///
/// Only a literal `y` or `n` is accepted. A missing credential is reported
/// and turned into [`Outcome::NotFound`]; other store failures propagate.
pub fn remove_credential(
    store: &dyn CredentialStore,
    prompter: &mut dyn Prompter,
    console: &mut Console,
    target: &CredentialTarget,
) -> Result<Outcome> {
    let prompt = format!(
        "Are you sure you want to remove saved credentials for [{}] [y/n]: ",
        target.service
    );

    let confirmed = loop {
        match prompter.line(&prompt)?.as_str() {
            "y" => break true,
            "n" => break false,
            _ => continue,
        }
    };

    if !confirmed {
        debug!(credential = %target, "Removal declined");
        return Ok(Outcome::Kept);
    }

    match store.delete(&target.service, &target.username) {
        Ok(()) => {
            console.success(&format!(
                "Credentials of user [{}] for service [{}] removed",
                target.username, target.service
            ))?;
            Ok(Outcome::Removed)
        }
        Err(e) if e.is_not_found() => {
            console.error(&format!("Failed to remove credentials: {e}"))?;
            Ok(Outcome::NotFound)
        }
        Err(e) => Err(e),
    }
}
