//! Blocking HTTP client for the notes service.
//!
//! Wraps a `reqwest` blocking client bound to one server URL and maps
//! transport failures, bad statuses and malformed bodies onto
//! [`NotesError`] variants.

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{NotesError, Result};

/// Query parameter carrying the auth token.
pub const AUTH_TOKEN_PARAM: &str = "AUTH-TOKEN";

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of `GET /generate_key`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Body of `PUT /add`.
#[derive(Debug, Serialize)]
struct AddNoteRequest<'a> {
    note: &'a str,
}

/// Talks to one notes server.
pub struct NotesClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl NotesClient {
    /// Create a client for `base_url` with the default 30-second timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("notes/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            timeout,
        })
    }

    /// Get the server URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the URL for an endpoint below the server URL.
    pub fn endpoint(&self, path: &str) -> String {
        join_endpoint(&self.base_url, path)
    }

    /// Ask the server to mint a new auth token.
    pub fn generate_key(&self) -> Result<String> {
        let url = self.endpoint("generate_key");
        debug!("Requesting new token from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_error(&url, e))?;

        if !response.status().is_success() {
            return Err(NotesError::NetworkError {
                message: format!("HTTP {}", response.status()),
                url,
            });
        }

        let body = response.text().map_err(|e| network_error(&url, e))?;
        parse_token(&body)
    }

    /// Submit a new note.
    pub fn add_note(&self, token: &str, note: &str) -> Result<()> {
        let endpoint = self.endpoint("add");
        let url = Url::parse_with_params(&endpoint, [(AUTH_TOKEN_PARAM, token)]).map_err(
            |e| NotesError::NetworkError {
                url: endpoint.clone(),
                message: format!("invalid URL: {}", e),
            },
        )?;
        debug!("Adding note ({} bytes) via {}", note.len(), endpoint);

        let response = self
            .client
            .put(url)
            .json(&AddNoteRequest { note })
            .send()
            .map_err(|e| network_error(&endpoint, e))?;

        if !response.status().is_success() {
            return Err(NotesError::NetworkError {
                message: format!("HTTP {}", response.status()),
                url: endpoint,
            });
        }

        Ok(())
    }
}

/// Join an endpoint onto a server URL, collapsing trailing slashes.
pub fn join_endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Extract the token from a `generate_key` response body.
pub fn parse_token(body: &str) -> Result<String> {
    let response: TokenResponse =
        serde_json::from_str(body).map_err(|e| NotesError::ParseError {
            message: format!("expected {{\"token\": \"...\"}}: {}", e),
        })?;
    Ok(response.token)
}

fn network_error(url: &str, err: reqwest::Error) -> NotesError {
    // Strip the URL reqwest embeds so the token query never reaches the message.
    NotesError::NetworkError {
        url: url.to_string(),
        message: err.without_url().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn default_timeout_is_30_seconds() {
        let client = NotesClient::new("http://localhost").unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn custom_timeout() {
        let client =
            NotesClient::with_timeout("http://localhost", Duration::from_secs(5)).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn join_endpoint_handles_trailing_slash() {
        assert_eq!(
            join_endpoint("http://note.snoopt.ru", "generate_key"),
            "http://note.snoopt.ru/generate_key"
        );
        assert_eq!(
            join_endpoint("http://note.snoopt.ru/", "generate_key"),
            "http://note.snoopt.ru/generate_key"
        );
        assert_eq!(
            join_endpoint("http://host/api//", "/add"),
            "http://host/api/add"
        );
    }

    #[test]
    fn parse_token_reads_token_field() {
        assert_eq!(parse_token(r#"{"token": "abc"}"#).unwrap(), "abc");
    }

    #[test]
    fn parse_token_ignores_extra_fields() {
        assert_eq!(
            parse_token(r#"{"token": "abc", "expires": 0}"#).unwrap(),
            "abc"
        );
    }

    #[test]
    fn parse_token_rejects_invalid_json() {
        let err = parse_token("<html>oops</html>").unwrap_err();
        assert!(matches!(err, NotesError::ParseError { .. }));
    }

    #[test]
    fn parse_token_rejects_missing_field() {
        let err = parse_token(r#"{"key": "abc"}"#).unwrap_err();
        assert!(matches!(err, NotesError::ParseError { .. }));
        assert!(err.to_string().contains("token"));
    }

    #[test]
    fn parse_token_rejects_non_string_token() {
        let err = parse_token(r#"{"token": 42}"#).unwrap_err();
        assert!(matches!(err, NotesError::ParseError { .. }));
    }

    // --- Mock HTTP tests ---

    #[test]
    fn generate_key_returns_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/generate_key");
            then.status(200).json_body(json!({ "token": "abc" }));
        });

        let client = NotesClient::new(&server.base_url()).unwrap();
        assert_eq!(client.generate_key().unwrap(), "abc");
        mock.assert();
    }

    #[test]
    fn generate_key_reports_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/generate_key");
            then.status(500).body("Internal Server Error");
        });

        let client = NotesClient::new(&server.base_url()).unwrap();
        let err = client.generate_key().unwrap_err();

        assert!(matches!(err, NotesError::NetworkError { .. }));
        assert!(err.to_string().contains("500"), "got: {}", err);
    }

    #[test]
    fn generate_key_rejects_non_json_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/generate_key");
            then.status(200).body("not json");
        });

        let client = NotesClient::new(&server.base_url()).unwrap();
        let err = client.generate_key().unwrap_err();

        assert!(matches!(err, NotesError::ParseError { .. }));
    }

    #[test]
    fn generate_key_reports_connection_failure() {
        // Port 9 (discard) on localhost is almost never listening.
        let client = NotesClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(2))
            .unwrap();
        let err = client.generate_key().unwrap_err();

        assert!(matches!(err, NotesError::NetworkError { .. }));
    }

    #[test]
    fn add_note_sends_token_and_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/add")
                .query_param("AUTH-TOKEN", "secret")
                .json_body(json!({ "note": "buy milk" }));
            then.status(200);
        });

        let client = NotesClient::new(&server.base_url()).unwrap();
        client.add_note("secret", "buy milk").unwrap();

        mock.assert();
    }

    #[test]
    fn add_note_reports_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/add");
            then.status(403);
        });

        let client = NotesClient::new(&server.base_url()).unwrap();
        let err = client.add_note("bad", "note").unwrap_err();

        assert!(matches!(err, NotesError::NetworkError { .. }));
        assert!(err.to_string().contains("403"));
        assert!(!err.to_string().contains("bad"));
    }

    #[test]
    fn add_note_rejects_invalid_server_url() {
        let client = NotesClient::new("not a url").unwrap();
        let err = client.add_note("t", "n").unwrap_err();

        assert!(matches!(err, NotesError::NetworkError { .. }));
    }
}
