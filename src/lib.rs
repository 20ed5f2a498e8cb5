//! notes - command-line client for a remote note-taking service.
//!
//! The client registers a device with the server (obtaining an auth token),
//! keeps the server URL and token in a small local file, and sends note
//! operations to the server over HTTP.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, action resolution and command dispatch
//! - [`client`] - Blocking HTTP client for the notes service
//! - [`config`] - The persisted configuration file
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use notes::config::IniFile;
//!
//! let ini = IniFile::parse("[Main]\nserver = http://localhost\ntoken = abc\n").unwrap();
//! assert_eq!(ini.get("Main", "token"), Some("abc"));
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{NotesError, Result};
