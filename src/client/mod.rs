//! Notes service client.
//!
//! - [`http`] - Blocking HTTP client for `generate_key` and `add`

pub mod http;

pub use http::{join_endpoint, parse_token, NotesClient, AUTH_TOKEN_PARAM, DEFAULT_TIMEOUT};
