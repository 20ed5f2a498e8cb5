//! Commands the server does not support yet.
//!
//! `ls`, `edit` and `search` load the configuration like every other
//! action, then report that there is nothing to do. They exist so the
//! command line is stable while the server grows these endpoints.

use tracing::debug;

use crate::cli::args::EditArgs;
use crate::config::Configuration;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

fn not_available(
    action: &str,
    config: &Configuration,
    ui: &mut dyn UserInterface,
) -> CommandResult {
    debug!("'{}' has no server endpoint ({})", action, config.server_url());
    ui.warning(&format!("`notes {}` is not available yet", action));
    CommandResult::success()
}

/// The ls command implementation.
pub struct ListCommand {
    config: Configuration,
}

impl ListCommand {
    /// Create a new ls command.
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        Ok(not_available("ls", &self.config, ui))
    }
}

/// The edit command implementation.
pub struct EditCommand {
    config: Configuration,
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(config: Configuration, args: EditArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EditArgs {
        &self.args
    }
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        debug!("edit requested for note {}", self.args.id);
        Ok(not_available("edit", &self.config, ui))
    }
}

/// The search command implementation.
pub struct SearchCommand {
    config: Configuration,
}

impl SearchCommand {
    /// Create a new search command.
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }
}

impl Command for SearchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        Ok(not_available("search", &self.config, ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn config() -> Configuration {
        Configuration::new("/unused", "http://localhost", Some("t".into()))
    }

    #[test]
    fn ls_succeeds_with_warning() {
        let mut ui = MockUI::new();
        let result = ListCommand::new(config()).execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_warning("notes ls"));
    }

    #[test]
    fn edit_succeeds_with_warning() {
        let mut ui = MockUI::new();
        let cmd = EditCommand::new(config(), EditArgs { id: "7".into() });
        assert_eq!(cmd.args().id, "7");
        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_warning("notes edit"));
    }

    #[test]
    fn search_succeeds_with_warning() {
        let mut ui = MockUI::new();
        let result = SearchCommand::new(config()).execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_warning("notes search"));
    }
}
