//! Add command implementation.
//!
//! The `notes add <note>` command sends a new note to the server.

use tracing::debug;

use crate::cli::args::AddArgs;
use crate::config::Configuration;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    config: Configuration,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(config: Configuration, args: AddArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AddArgs {
        &self.args
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let token = self.config.require_token()?;
        let client = self.config.client()?;

        debug!("Sending note to {}", client.base_url());
        client.add_note(token, &self.args.note)?;

        ui.success("Note added");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use serde_json::json;

    fn add(config: Configuration, note: &str) -> AddCommand {
        AddCommand::new(
            config,
            AddArgs {
                note: note.to_string(),
            },
        )
    }

    #[test]
    fn add_sends_note_with_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/add")
                .query_param("AUTH-TOKEN", "tok")
                .json_body(json!({ "note": "water plants" }));
            then.status(200);
        });
        let config = Configuration::new("/unused", server.base_url(), Some("tok".into()));
        let mut ui = MockUI::new();

        let result = add(config, "water plants").execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_success("Note added"));
        mock.assert();
    }

    #[test]
    fn add_without_token_fails_before_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/add");
            then.status(200);
        });
        let config = Configuration::new("/unused", server.base_url(), None);

        let err = add(config, "x").execute(&mut MockUI::new()).unwrap_err();

        assert!(matches!(err, NotesError::ConfigError { .. }));
        mock.assert_calls(0);
    }

    #[test]
    fn add_reports_server_rejection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/add");
            then.status(401);
        });
        let config = Configuration::new("/unused", server.base_url(), Some("tok".into()));
        let mut ui = MockUI::new();

        let err = add(config, "x").execute(&mut ui).unwrap_err();

        assert!(matches!(err, NotesError::NetworkError { .. }));
        assert!(ui.successes().is_empty());
    }
}
