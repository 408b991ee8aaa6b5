//! Keybinding definitions for Grove
//!
//! All keybindings and status bar hints are defined here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// Ctrl+C: quit from anywhere
pub fn is_force_quit(key: &KeyEvent) -> bool {
    is_ctrl(key, 'c')
}

/// Ctrl+L: re-fetch the current route
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'l')
}

/// Ctrl+S: open the commit form (blob view)
pub fn is_commit_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 's')
}

/// Ctrl+B: branch selector (blob view)
pub fn is_branch_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'b')
}

/// Ctrl+P: breadcrumb jump (blob view)
pub fn is_path_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'p')
}

/// Ctrl+Y: copy route path (blob view)
pub fn is_copy_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'y')
}

/// Alt+Left: history back
pub fn is_history_back(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) && key.code == KeyCode::Left
}

/// Alt+Right: history forward
pub fn is_history_forward(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) && key.code == KeyCode::Right
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application (tree view) or close help
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Close overlay / leave blob view
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Tree View keys
// =============================================================================

/// Open selected row
pub const OPEN: KeyCode = KeyCode::Enter;

/// Go to parent directory
pub const PARENT: KeyCode = KeyCode::Backspace;

/// Go to parent directory (vim style)
pub const PARENT_ALT: KeyCode = KeyCode::Char('h');

/// Branch selector
pub const BRANCH: KeyCode = KeyCode::Char('b');

/// Breadcrumb jump
pub const PATH_JUMP: KeyCode = KeyCode::Char('p');

/// History back
pub const BACK: KeyCode = KeyCode::Char('[');

/// History forward
pub const FORWARD: KeyCode = KeyCode::Char(']');

/// Copy route path to clipboard
pub const COPY_PATH: KeyCode = KeyCode::Char('y');

pub fn is_parent(code: KeyCode) -> bool {
    matches!(code, PARENT | PARENT_ALT)
}

// =============================================================================
// Help panel entries
// =============================================================================

/// A key binding row in the help panel
#[derive(Debug, Clone, Copy)]
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Ctrl+L",
        description: "Reload current view",
    },
    KeyBindEntry {
        key: "Ctrl+C",
        description: "Quit (asks when there are unsaved changes)",
    },
];

pub const TREE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k ↑/↓",
        description: "Move selection",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top / bottom",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Open directory or file",
    },
    KeyBindEntry {
        key: "Backspace/h",
        description: "Parent directory",
    },
    KeyBindEntry {
        key: "b",
        description: "Switch branch",
    },
    KeyBindEntry {
        key: "p",
        description: "Jump to a path element",
    },
    KeyBindEntry {
        key: "[ / ]",
        description: "History back / forward",
    },
    KeyBindEntry {
        key: "y",
        description: "Copy location path",
    },
    KeyBindEntry {
        key: "?",
        description: "Show this help",
    },
    KeyBindEntry {
        key: "q",
        description: "Quit",
    },
];

pub const BLOB_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Esc",
        description: "Back to directory",
    },
    KeyBindEntry {
        key: "Ctrl+S",
        description: "Commit changes",
    },
    KeyBindEntry {
        key: "Ctrl+B",
        description: "Switch branch",
    },
    KeyBindEntry {
        key: "Ctrl+P",
        description: "Jump to a path element",
    },
    KeyBindEntry {
        key: "Alt+←/→",
        description: "History back / forward",
    },
    KeyBindEntry {
        key: "Ctrl+Y",
        description: "Copy location path",
    },
];

pub const COMMIT_FORM_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Tab/Shift+Tab",
        description: "Next / previous field",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Commit and push (when all fields are filled)",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Close without committing",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_PARENT: KeyHint = KeyHint {
    key: "BS",
    label: "Up",
    color: Color::Blue,
};
pub const HINT_BRANCH: KeyHint = KeyHint {
    key: "b",
    label: "Branch",
    color: Color::Magenta,
};
pub const HINT_PATH: KeyHint = KeyHint {
    key: "p",
    label: "Path",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "Esc",
    label: "Back",
    color: Color::Blue,
};
pub const HINT_COMMIT: KeyHint = KeyHint {
    key: "^S",
    label: "Commit changes",
    color: Color::Green,
};
pub const HINT_BRANCH_CTRL: KeyHint = KeyHint {
    key: "^B",
    label: "Branch",
    color: Color::Magenta,
};
pub const HINT_PATH_CTRL: KeyHint = KeyHint {
    key: "^P",
    label: "Path",
    color: Color::Blue,
};
pub const HINT_YES: KeyHint = KeyHint {
    key: "y",
    label: "Yes",
    color: Color::Green,
};
pub const HINT_NO: KeyHint = KeyHint {
    key: "n",
    label: "No",
    color: Color::Red,
};
pub const HINT_NAV: KeyHint = KeyHint {
    key: "j/k",
    label: "Move",
    color: Color::Cyan,
};
pub const HINT_SELECT: KeyHint = KeyHint {
    key: "Enter",
    label: "Select",
    color: Color::Green,
};
pub const HINT_DIALOG_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};
pub const HINT_NEXT_FIELD: KeyHint = KeyHint {
    key: "Tab",
    label: "Next field",
    color: Color::Cyan,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Commit and push",
    color: Color::Green,
};

/// Overlay that takes over key input (and the status bar)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHintKind {
    /// y/n confirmation
    Confirm,
    /// Single-select list
    Select,
    /// Commit form
    CommitForm,
}

/// Context for dynamic hint selection
#[derive(Debug, Default)]
pub struct HintContext {
    /// Blob view has unsaved changes
    pub dirty: bool,
    /// Current tree location is below the root
    pub below_root: bool,
    /// Active overlay (overrides view hints)
    pub overlay: Option<OverlayHintKind>,
}

/// Get the hints for the current context
///
/// Priority: overlay > view.
pub fn current_hints(view: View, ctx: &HintContext) -> Vec<KeyHint> {
    if let Some(kind) = ctx.overlay {
        return overlay_hints(kind);
    }
    match view {
        View::Tree => tree_hints(ctx),
        View::Blob => blob_hints(ctx),
        View::Help => vec![HINT_BACK],
    }
}

fn overlay_hints(kind: OverlayHintKind) -> Vec<KeyHint> {
    match kind {
        OverlayHintKind::Confirm => vec![HINT_YES, HINT_NO],
        OverlayHintKind::Select => vec![HINT_NAV, HINT_SELECT, HINT_DIALOG_CANCEL],
        OverlayHintKind::CommitForm => vec![HINT_NEXT_FIELD, HINT_SUBMIT, HINT_DIALOG_CANCEL],
    }
}

fn tree_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut hints = vec![HINT_OPEN];
    if ctx.below_root {
        hints.push(HINT_PARENT);
    }
    hints.extend([HINT_BRANCH, HINT_PATH, HINT_HELP, HINT_QUIT]);
    hints
}

fn blob_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut hints = vec![HINT_BACK];
    // The commit control is only offered while there is something to commit
    if ctx.dirty {
        hints.push(HINT_COMMIT);
    }
    hints.extend([HINT_BRANCH_CTRL, HINT_PATH_CTRL]);
    hints
}
