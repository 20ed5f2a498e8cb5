//! Register command implementation.
//!
//! The `notes register` command writes a new config file, minting a token
//! on the server when none was given.

use crate::config::Configuration;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The register command implementation.
pub struct RegisterCommand {
    config: Configuration,
}

impl RegisterCommand {
    /// Create a new register command.
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }
}

impl Command for RegisterCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.config.clone();
        let minted = config.auth_token().is_none();

        config.create()?;

        if minted {
            ui.message(&format!("Obtained a new token from {}", config.server_url()));
        }
        ui.success(&format!(
            "Registered with {} (config: {})",
            config.server_url(),
            config.file_path().display()
        ));

        Ok(CommandResult::success())
    }
}
