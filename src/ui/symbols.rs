//! UI symbols (icons, separators, placeholders)
//!
//! Unicode is used throughout; every symbol renders one cell wide.

/// Entry icons in Tree View
pub mod icons {
    /// Directory (▸)
    pub const DIRECTORY: char = '▸';
    /// File (·)
    pub const FILE: char = '·';
    /// Parent directory (↰)
    pub const PARENT: char = '↰';
}

/// Row markers
pub mod markers {
    /// Selected row
    pub const SELECTED: &str = "> ";
    /// Unselected row
    pub const UNSELECTED: &str = "  ";
    /// Unsaved changes marker in the blob title
    pub const MODIFIED: &str = "●";
}

/// Separators
pub mod separators {
    /// Between breadcrumb elements
    pub const BREADCRUMB: &str = " / ";
}

/// Loading placeholder
pub mod skeleton {
    /// Fill character for skeleton cells
    pub const FILL: char = '░';
}
