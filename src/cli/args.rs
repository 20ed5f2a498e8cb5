//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgAction, Parser, Subcommand};
use std::time::Duration;

use crate::config::{Configuration, DEFAULT_CONFIG_PATH, DEFAULT_SERVER_URL};

/// A todo.txt-style command-line client for a remote notes server.
#[derive(Debug, Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Path to config
    #[arg(long, value_name = "FILE", global = true, env = "NOTES_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Server to work with
    #[arg(long, value_name = "URL", global = true, env = "NOTES_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Existing token
    #[arg(long, value_name = "TOKEN", global = true, env = "NOTES_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", global = true, env = "NOTES_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Minimal output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Build the in-memory configuration from flags, env and defaults.
    ///
    /// Nothing is read from disk here; commands that need the persisted
    /// values call [`Configuration::load`].
    pub fn configuration(&self) -> Configuration {
        Configuration::new(&self.config, self.server.clone(), self.token.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Register this device and write the config file
    Register,

    /// Add a note
    Add(AddArgs),

    /// List notes
    Ls,

    /// Edit a note
    Edit(EditArgs),

    /// Search notes
    Search,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Note text
    pub note: String,
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EditArgs {
    /// Note id
    pub id: String,
}
