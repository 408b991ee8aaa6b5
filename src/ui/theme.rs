//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the title bar and breadcrumb trail
pub mod location {
    use super::*;

    /// Repository name
    pub const REPOSITORY: Color = Color::Cyan;
    /// Current branch badge background
    pub const BRANCH_BG: Color = Color::Magenta;
    /// Route path shown at the right of the title
    pub const ROUTE: Color = Color::DarkGray;
    /// Navigable breadcrumb element
    pub const LINK: Color = Color::Blue;
    /// Current (non-navigable) breadcrumb element
    pub const CURRENT: Color = Color::White;
}

/// Colors for Tree View
pub mod tree_view {
    use super::*;

    /// Directory entry
    pub const DIRECTORY: Color = Color::Blue;
    /// File entry
    pub const FILE: Color = Color::Reset;
    /// Parent (`..`) entry
    pub const PARENT: Color = Color::DarkGray;
    /// Last commit message column
    pub const MESSAGE: Color = Color::Gray;
    /// Last update column
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Column header
    pub const HEADER: Color = Color::Yellow;
    /// Loading placeholder blocks
    pub const SKELETON: Color = Color::DarkGray;
}

/// Colors for Blob View
pub mod blob_view {
    use super::*;

    /// "modified" marker and commit button
    pub const DIRTY: Color = Color::Yellow;
    /// Commit button background
    pub const COMMIT_BUTTON_BG: Color = Color::Green;
}

/// Colors for the commit form
pub mod commit_form {
    use super::*;

    /// Focused field border / label
    pub const FOCUSED: Color = Color::Cyan;
    /// Unfocused field label
    pub const LABEL: Color = Color::Gray;
    /// Enabled submit button background
    pub const SUBMIT_BG: Color = Color::Green;
    /// Disabled submit button
    pub const DISABLED: Color = Color::DarkGray;
}

/// Colors for the selected row
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}
