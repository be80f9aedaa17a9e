/// Input mode for the catalog screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate the grouped list, open items
    #[default]
    Normal,
    /// Search bar focused, every keystroke refilters the list
    Search,
}

impl Mode {
    /// Get display name for the status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Normal => "BROWSE",
            Mode::Search => "SEARCH",
        }
    }

    /// Get color for the status bar
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Mode::Normal => Color::Cyan,
            Mode::Search => Color::Magenta,
        }
    }
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Grouped, searchable catalog list
    #[default]
    Catalog,
    /// Per-item demo with local interactive state
    Detail,
}
