//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::process::ExitCode;

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::Configuration;
use crate::error::{NotesError, Result};
use crate::ui::UserInterface;

use super::action::{resolve_action, Action};
use super::add::AddCommand;
use super::pending::{EditCommand, ListCommand, SearchCommand};
use super::register::RegisterCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Process exit code; anything outside `0..=255` becomes a generic failure.
    pub fn process_exit_code(&self) -> ExitCode {
        u8::try_from(self.exit_code).map_or(ExitCode::FAILURE, ExitCode::from)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: Configuration,
}

impl CommandDispatcher {
    /// Create a dispatcher around the configuration built from the command line.
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Get the command-line configuration (before any merge from disk).
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Configuration the given action runs with.
    ///
    /// Every action except `register` merges the persisted file first.
    pub fn prepare(&self, action: Action) -> Result<Configuration> {
        if action.requires_config() {
            debug!("Loading config from {}", self.config.file_path().display());
            self.config.clone().load()
        } else {
            Ok(self.config.clone())
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Fails with [`NotesError::InvalidCommand`] when no action was selected.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(action) = resolve_action(cli) else {
            return Err(invalid_command());
        };
        debug!("Resolved action '{}'", action);

        let config = self.prepare(action)?;

        let command: Box<dyn Command> = match (action, &cli.command) {
            (Action::Register, _) => Box::new(RegisterCommand::new(config)),
            (Action::Add, Some(Commands::Add(args))) => {
                Box::new(AddCommand::new(config, args.clone()))
            }
            (Action::Ls, _) => Box::new(ListCommand::new(config)),
            (Action::Edit, Some(Commands::Edit(args))) => {
                Box::new(EditCommand::new(config, args.clone()))
            }
            (Action::Search, _) => Box::new(SearchCommand::new(config)),
            // Add and Edit are only resolved from their own subcommand.
            (Action::Add | Action::Edit, _) => return Err(invalid_command()),
        };

        command.execute(ui)
    }
}

fn invalid_command() -> NotesError {
    let names: Vec<&str> = Action::ALL.iter().map(Action::name).collect();
    NotesError::InvalidCommand {
        message: format!("expected one of: {}", names.join(", ")),
    }
}
