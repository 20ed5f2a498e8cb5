//! Local configuration for the notes client.
//!
//! - [`ini`] - Reading and writing the INI-style file format
//! - [`store`] - The [`Configuration`] type: create, load, token requests

pub mod ini;
pub mod store;

pub use ini::IniFile;
pub use store::{
    expand_path, Configuration, CONFIG_SECTION, DEFAULT_CONFIG_PATH, DEFAULT_SERVER_URL,
};
