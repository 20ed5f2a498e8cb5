//! The persisted client configuration.
//!
//! A [`Configuration`] starts from command-line values and defaults. The
//! `register` action persists it with [`Configuration::create`]; every other
//! action merges the file's values over the defaults with
//! [`Configuration::load`] before it runs.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use super::ini::IniFile;
use crate::client::{NotesClient, DEFAULT_TIMEOUT};
use crate::error::{NotesError, Result};

/// Section holding the client settings.
pub const CONFIG_SECTION: &str = "Main";

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.notes";

/// Default notes server.
pub const DEFAULT_SERVER_URL: &str = "http://note.snoopt.ru";

const SERVER_KEY: &str = "server";
const TOKEN_KEY: &str = "token";

/// Client identity: where the config lives, which server to talk to, and the
/// token that authenticates us there.
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    file_path: PathBuf,
    server_url: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl Configuration {
    /// Build a configuration from in-memory values.
    ///
    /// `file_path` is expanded (`~`, `$VAR`) before use.
    pub fn new(file_path: &str, server_url: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            file_path: expand_path(file_path),
            server_url: server_url.into(),
            auth_token,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the HTTP timeout used for requests made on behalf of this configuration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path of the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Server base URL.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Auth token, if known.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// HTTP timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a file exists at [`Self::file_path`].
    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// The auth token, or a `ConfigError` when none is known.
    pub fn require_token(&self) -> Result<&str> {
        self.auth_token()
            .ok_or_else(|| self.config_error("no auth token configured".to_string()))
    }

    fn config_error(&self, message: String) -> NotesError {
        NotesError::ConfigError {
            path: self.file_path.clone(),
            message,
        }
    }

    /// HTTP client bound to this configuration's server.
    pub fn client(&self) -> Result<NotesClient> {
        NotesClient::with_timeout(&self.server_url, self.timeout)
    }

    /// Ask the server for a fresh token.
    pub fn request_new_token(&self) -> Result<String> {
        self.client()?.generate_key()
    }

    /// Persist this configuration to a new file.
    ///
    /// Fails with [`NotesError::ConfigExists`] if the file is already there;
    /// an existing file is never overwritten. Without a token, one is
    /// requested from the server first.
    pub fn create(&mut self) -> Result<()> {
        if self.exists() {
            return Err(NotesError::ConfigExists {
                path: self.file_path.clone(),
            });
        }

        check_value(SERVER_KEY, &self.server_url).map_err(|m| self.config_error(m))?;

        match &self.auth_token {
            Some(token) => check_value(TOKEN_KEY, token).map_err(|m| self.config_error(m))?,
            None => {
                debug!("No token supplied, requesting one from {}", self.server_url);
                let token = self.request_new_token()?;
                check_value(TOKEN_KEY, &token).map_err(|m| NotesError::ParseError {
                    message: format!("server issued an unusable token: {}", m),
                })?;
                self.auth_token = Some(token);
            }
        }

        let content = self.render()?;
        write_new_file(&self.file_path, &content)?;
        debug!("Wrote config to {}", self.file_path.display());
        Ok(())
    }

    /// Merge the persisted file over this configuration.
    ///
    /// Server and token from disk replace whatever was supplied on the
    /// command line. The timeout is a runtime setting and is kept.
    pub fn load(self) -> Result<Self> {
        if !self.exists() {
            return Err(NotesError::ConfigNotFound {
                path: self.file_path,
            });
        }

        let (server_url, auth_token) = read_persisted(&self.file_path)?;

        if server_url != self.server_url {
            debug!(
                "Using server {} from {} (ignoring {})",
                server_url,
                self.file_path.display(),
                self.server_url
            );
        }

        Ok(Self {
            server_url,
            auth_token: Some(auth_token),
            ..self
        })
    }

    /// Render the file contents.
    pub fn render(&self) -> Result<String> {
        let token = self.require_token()?;
        let mut ini = IniFile::new();
        ini.set(CONFIG_SECTION, SERVER_KEY, &self.server_url);
        ini.set(CONFIG_SECTION, TOKEN_KEY, token);
        Ok(ini.to_string())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("file_path", &self.file_path)
            .field("server_url", &self.server_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Check that a value survives a write/read cycle through the file.
///
/// The file format trims surrounding whitespace, ends an entry at a line
/// break and treats an empty value as missing. The message never echoes
/// the value.
fn check_value(key: &str, value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err(format!("'{}' is empty", key));
    }
    if value.contains(['\r', '\n']) {
        return Err(format!("'{}' contains a line break", key));
    }
    if value.trim() != value {
        return Err(format!("'{}' has leading or trailing whitespace", key));
    }
    Ok(())
}

/// Expand `~` and environment variables in a path.
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string());
    PathBuf::from(expanded)
}

fn read_persisted(path: &Path) -> Result<(String, String)> {
    let config_error = |message: String| NotesError::ConfigError {
        path: path.to_path_buf(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let ini = IniFile::parse(&content).map_err(|e| config_error(e.to_string()))?;

    if !ini.has_section(CONFIG_SECTION) {
        return Err(config_error(format!("missing section [{}]", CONFIG_SECTION)));
    }

    let field = |key: &str| match ini.get(CONFIG_SECTION, key) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(config_error(format!(
            "missing '{}' in section [{}]",
            key, CONFIG_SECTION
        ))),
    };

    Ok((field(SERVER_KEY)?, field(TOKEN_KEY)?))
}

/// Create `path` and write `content`, refusing to touch an existing file.
fn write_new_file(path: &Path, content: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => NotesError::ConfigExists {
            path: path.to_path_buf(),
        },
        _ => NotesError::Io(e),
    })?;

    file.write_all(content.as_bytes())?;
    Ok(())
}
