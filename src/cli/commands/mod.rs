//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! [`resolve_action`] picks the selected [`Action`]; [`CommandDispatcher`]
//! merges the persisted configuration when the action needs it and routes
//! to the implementation.

pub mod action;
pub mod add;
pub mod dispatcher;
pub mod pending;
pub mod register;

pub use action::{resolve_action, Action};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
