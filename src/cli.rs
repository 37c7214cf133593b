//! Command-line interface implementation.

use crate::error::Result;
use crate::models::{Action, CredentialTarget, Outcome};
use crate::operations;
use crate::prompt::Prompter;
use crate::store::CredentialStore;
use crate::utils::Console;
use clap::{CommandFactory, Parser};
use tracing::debug;

/// Simple keyring handler.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Add credentials to keyring
    #[arg(short, long)]
    pub add: bool,

    /// Remove credentials from keyring
    #[arg(short, long)]
    pub remove: bool,

    /// Service name to add or remove
    #[arg(short, long)]
    pub service: Option<String>,

    /// Username to add or remove
    #[arg(short, long)]
    pub username: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The action to run, if the arguments describe exactly one complete action.
    pub fn action(&self) -> Option<Action> {
        let target = CredentialTarget::new(self.service.as_deref(), self.username.as_deref());
        match (self.add, self.remove) {
            (true, false) => target.map(Action::Add),
            (false, true) => target.map(Action::Remove),
            _ => None,
        }
    }

    /// Execute the requested action against `store`.
    pub fn execute(
        &self,
        store: &dyn CredentialStore,
        prompter: &mut dyn Prompter,
        console: &mut Console,
    ) -> Result<Outcome> {
        match self.action() {
            Some(Action::Add(target)) => {
                debug!(credential = %target, "Adding credentials");
                operations::add_credential(store, prompter, console, &target)
            }
            Some(Action::Remove(target)) => {
                debug!(credential = %target, "Removing credentials");
                operations::remove_credential(store, prompter, console, &target)
            }
            None => {
                debug!("No complete action given, printing help");
                let help = Self::command().render_help();
                console.print(&help.to_string())?;
                Ok(Outcome::Help)
            }
        }
    }
}
