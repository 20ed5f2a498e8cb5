//! Visual theme and styling.

use console::Style;

/// Styles for terminal output.
#[derive(Debug, Clone)]
pub struct NotesTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for NotesTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = NotesTheme::plain().format_success("Registered");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Registered"));
    }

    #[test]
    fn theme_formats_warning() {
        let msg = NotesTheme::plain().format_warning("Not yet");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Not yet"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = NotesTheme::plain().format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_theme_adds_no_escape_codes() {
        let msg = NotesTheme::plain().format_success("ok");
        assert_eq!(msg, "✓ ok");
    }
}
