//! Error types for notes operations.
//!
//! This module defines [`NotesError`], the error type returned by every
//! command, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each failure kind has its own variant so callers and tests can match on it
//! - Internal helpers may use `anyhow`; they are wrapped at module boundaries
//! - The binary's `main` is the single place that turns an error into exit code 1

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for notes operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Registration attempted against an existing configuration file.
    #[error("Config [{path}] already exists")]
    ConfigExists { path: PathBuf },

    /// An action that needs a configuration ran before `register`.
    #[error("Config [{path}] not found (run `notes register` first)")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file present but unreadable or missing fields.
    #[error("Invalid config at {path}: {message}")]
    ConfigError { path: PathBuf, message: String },

    /// Transport-level failure or unexpected HTTP status.
    #[error("Request to {url} failed: {message}")]
    NetworkError { url: String, message: String },

    /// Server response was not what we expected.
    #[error("Unexpected server response: {message}")]
    ParseError { message: String },

    /// No recognized action on the command line.
    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;
