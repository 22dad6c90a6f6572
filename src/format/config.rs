//! Output configuration for token listings and syntax tree dumps.

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per tree level
    pub indent_width: usize,
    /// Whether tree dumps annotate each node with its source position
    pub show_positions: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_positions: false,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Annotate tree nodes with their source positions
    pub fn with_positions(mut self, show: bool) -> Self {
        self.show_positions = show;
        self
    }
}
