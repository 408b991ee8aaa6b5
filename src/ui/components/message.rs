//! Error and notification message components
//!
//! For empty states, use `empty_state` module.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for banner display
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

fn notification_colors(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    }
}

/// Build a notification line for the title bar
///
/// The message is cut with "…" so the whole line fits in `max_width`
/// columns. Returns an empty line when not even one character fits.
pub fn build_notification_title(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, color) = notification_colors(notification.kind);
    // " label " + " message "
    let fixed = label.chars().count() + 4;
    let budget = max_width.saturating_sub(fixed);
    let length = notification.message.chars().count();

    let message = if length <= budget {
        notification.message.clone()
    } else if budget >= 2 {
        let kept: String = notification.message.chars().take(budget - 1).collect();
        format!("{}…", kept)
    } else {
        return Line::default();
    };

    Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(format!(" {} ", message), Style::default().fg(color)),
    ])
}
