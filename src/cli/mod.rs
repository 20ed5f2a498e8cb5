//! Command-line interface for notes.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Action resolution, dispatch and command implementations

pub mod args;
pub mod commands;

pub use args::{AddArgs, Cli, Commands, EditArgs};
pub use commands::{resolve_action, Action, Command, CommandDispatcher, CommandResult};
