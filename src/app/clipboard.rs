//! Clipboard support for sharing route paths
//!
//! Uses the first available system tool: pbcopy (macOS), wl-copy (Wayland),
//! xclip or xsel (X11).

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

use super::state::App;

const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Errors from copying to the system clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool found (install pbcopy, wl-copy, xclip, or xsel)")]
    NoTool,

    #[error("Failed to run {program}: {source}")]
    Io {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} exited with an error")]
    Failed(&'static str),
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let &(program, args) = CLIPBOARD_COMMANDS
        .iter()
        .find(|(program, _)| is_available(program))
        .ok_or(ClipboardError::NoTool)?;
    let io_error = |source: std::io::Error| ClipboardError::Io { program, source };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(io_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(io_error)?;
    }

    if child.wait().map_err(io_error)?.success() {
        debug!(program, "copied to clipboard");
        Ok(())
    } else {
        Err(ClipboardError::Failed(program))
    }
}

/// Check if a command is available on the system
fn is_available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

impl App {
    /// Copy the shareable path of the current route
    pub(crate) fn copy_route_path(&mut self) {
        let path = self.route.to_path();
        match copy_to_clipboard(&path) {
            Ok(()) => self.notify_success(format!("Copied {}", path)),
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}
