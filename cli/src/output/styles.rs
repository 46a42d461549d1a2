//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Up-to-date instances (green)
    pub success: Style,
    /// Outdated instances in check mode (yellow)
    pub warning: Style,
    /// Instances being updated (cyan)
    pub action: Style,
    /// Dimmed/secondary text such as instance ARNs
    pub dim: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.action = Style::new().cyan();
        self.dim = Style::new().dimmed();
    }
}
