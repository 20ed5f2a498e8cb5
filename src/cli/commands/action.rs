//! Action resolution.
//!
//! Maps the parsed subcommand onto one of the fixed set of [`Action`]s.

use std::fmt;

use crate::cli::args::{Cli, Commands};

/// A user-invocable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Register,
    Add,
    Ls,
    Edit,
    Search,
}

impl Action {
    /// Every action, in resolution order.
    pub const ALL: [Action; 5] = [
        Action::Add,
        Action::Register,
        Action::Ls,
        Action::Edit,
        Action::Search,
    ];

    /// Name of the action as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Add => "add",
            Self::Ls => "ls",
            Self::Edit => "edit",
            Self::Search => "search",
        }
    }

    /// Whether the parsed command line selects this action.
    pub fn is_selected(&self, cli: &Cli) -> bool {
        matches!(
            (self, &cli.command),
            (Self::Register, Some(Commands::Register))
                | (Self::Add, Some(Commands::Add(_)))
                | (Self::Ls, Some(Commands::Ls))
                | (Self::Edit, Some(Commands::Edit(_)))
                | (Self::Search, Some(Commands::Search))
        )
    }

    /// Whether the action needs the persisted configuration before it runs.
    pub fn requires_config(&self) -> bool {
        !matches!(self, Self::Register)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Return the first action, in [`Action::ALL`] order, selected on the command line.
pub fn resolve_action(cli: &Cli) -> Option<Action> {
    Action::ALL.into_iter().find(|action| action.is_selected(cli))
}
