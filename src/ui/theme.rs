//! Visual theme and styling.

use console::Style;

/// logmark-build's visual theme.
#[derive(Debug, Clone)]
pub struct LogmarkTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for LogmarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LogmarkTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim().italic(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            command: Style::new(),
            hint: Style::new(),
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

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check whether colored output should be used.
///
/// `NO_COLOR` (any value) disables colors, per https://no-color.org.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_message() {
        let theme = LogmarkTheme::plain();
        assert_eq!(
            theme.format_success("Build complete!"),
            "✓ Build complete!"
        );
    }

    #[test]
    fn format_warning_includes_message() {
        let theme = LogmarkTheme::plain();
        assert_eq!(theme.format_warning("heads up"), "⚠ heads up");
    }

    #[test]
    fn format_error_includes_message() {
        let theme = LogmarkTheme::plain();
        assert_eq!(theme.format_error("it broke"), "✗ it broke");
    }

    #[test]
    fn plain_theme_adds_no_ansi() {
        let theme = LogmarkTheme::plain();
        let formatted = theme.format_success("ok");
        assert!(!formatted.contains('\x1b'));
    }
}
