//! INI-style file parsing and rendering.
//!
//! The configuration file is a tiny INI document: one `[Main]` section
//! holding `server` and `token`. This module reads and writes that shape
//! without caring which keys are present; the store checks required fields.

use anyhow::{bail, Result};
use std::fmt;

/// An ordered INI document.
///
/// # Supported Formats
///
/// - Section headers: `[Main]`
/// - Entries: `key = value` or `key: value`
/// - Comments: lines starting with `#` or `;`
/// - Whitespace around keys and values is trimmed
/// - Keys are case-insensitive and stored lower-cased
///
/// # Example
///
/// ```
/// use notes::config::IniFile;
///
/// let content = r#"
/// ; written by notes
/// [Main]
/// server = http://note.snoopt.ru
/// token: abc123
/// "#;
///
/// let ini = IniFile::parse(content).unwrap();
/// assert_eq!(ini.get("Main", "server"), Some("http://note.snoopt.ru"));
/// assert_eq!(ini.get("Main", "token"), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniFile {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI content.
    ///
    /// Fails on an entry that appears before any section header and on
    /// lines that are neither a header, a comment nor an entry.
    pub fn parse(content: &str) -> Result<Self> {
        let mut ini = Self::new();
        let mut current: Option<usize> = None;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            let line_no = index + 1;

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    bail!("line {}: unterminated section header '{}'", line_no, line);
                };
                let name = name.trim();
                if name.is_empty() {
                    bail!("line {}: empty section name", line_no);
                }
                current = Some(ini.section_index_or_insert(name));
                continue;
            }

            let Some((key, value)) = Self::parse_entry(line) else {
                bail!("line {}: expected 'key = value', found '{}'", line_no, line);
            };

            let Some(section) = current else {
                bail!("line {}: entry '{}' appears before any section header", line_no, key);
            };

            ini.sections[section].set(key, value);
        }

        Ok(ini)
    }

    /// Split a `key = value` or `key: value` line at the first delimiter.
    fn parse_entry(line: &str) -> Option<(String, String)> {
        let pos = line.find(['=', ':'])?;
        let key = line[..pos].trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        let value = line[pos + 1..].trim().to_string();
        Some((key, value))
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        if let Some(index) = self.sections.iter().position(|s| s.name == name) {
            return index;
        }
        self.sections.push(Section {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.sections.len() - 1
    }

    /// Check whether a section exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.iter().any(|s| s.name == section)
    }

    /// Look up a value. Section names are case-sensitive, keys are not.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let index = self.section_index_or_insert(section);
        self.sections[index].set(key.to_lowercase(), value.to_string());
    }
}

impl Section {
    fn set(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "{} = {}", key, value)?;
            }
        }
        Ok(())
    }
}
