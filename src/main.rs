//! Main entry point for keyring-cli.

use clap::Parser;
use keyring_cli::cli::Cli;
use keyring_cli::logger::init_cli_logger;
use keyring_cli::prompt::TerminalPrompter;
use keyring_cli::store::KeyringStore;
use keyring_cli::utils::{error_exit, Console};
use tracing::debug;

fn main() {
    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    debug!(?cli, "Parsed arguments");

    let store = KeyringStore::new();
    let mut prompter = TerminalPrompter::new();
    let mut console = Console::stdio();

    match cli.execute(&store, &mut prompter, &mut console) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => error_exit(&e.to_string(), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["keyring-cli", "-a", "-s", "github", "-u", "alice"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["keyring-cli", "-v"]);
        assert!(cli.is_ok_and(|c| c.verbose));
    }
}
