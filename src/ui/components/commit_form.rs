//! Commit form overlay
//!
//! Collects the commit message and author of an edited file. The submit
//! button is disabled until every field holds at least one character, and
//! the form is frozen while its push is in flight.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::dialog::centered_rect;
use crate::model::CommitDraft;
use crate::ui::theme;

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitField {
    #[default]
    Message,
    Name,
    Email,
    Submit,
}

impl CommitField {
    const ORDER: [CommitField; 4] = [
        CommitField::Message,
        CommitField::Name,
        CommitField::Email,
        CommitField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn label(self) -> &'static str {
        match self {
            CommitField::Message => "Commit message",
            CommitField::Name => "Author name",
            CommitField::Email => "Author email",
            CommitField::Submit => "",
        }
    }
}

/// Action returned from CommitForm key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitFormAction {
    /// Commit and push with the current draft
    Submit,
    /// Close the form without committing
    Cancel,
}

/// Commit form state; dropped when the form closes
#[derive(Debug, Clone, Default)]
pub struct CommitForm {
    pub draft: CommitDraft,
    pub focus: CommitField,
    /// A push with this draft has not reported back yet
    pub submitting: bool,
}

impl CommitForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.draft.can_submit()
    }

    fn field_mut(&mut self, field: CommitField) -> Option<&mut String> {
        match field {
            CommitField::Message => Some(&mut self.draft.message),
            CommitField::Name => Some(&mut self.draft.author_name),
            CommitField::Email => Some(&mut self.draft.author_email),
            CommitField::Submit => None,
        }
    }

    fn field(&self, field: CommitField) -> &str {
        match field {
            CommitField::Message => &self.draft.message,
            CommitField::Name => &self.draft.author_name,
            CommitField::Email => &self.draft.author_email,
            CommitField::Submit => "",
        }
    }

    /// Handle key input
    ///
    /// Enter on a text field moves to the next field; Enter on the button
    /// submits only when [`CommitForm::can_submit`] holds. Keys are ignored
    /// while submitting.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<CommitFormAction> {
        if self.submitting {
            return None;
        }
        match key.code {
            KeyCode::Esc => Some(CommitFormAction::Cancel),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter if self.focus == CommitField::Submit => {
                self.can_submit().then_some(CommitFormAction::Submit)
            }
            KeyCode::Enter => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Backspace => {
                if let Some(text) = self.field_mut(self.focus) {
                    text.pop();
                }
                None
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(text) = self.field_mut(self.focus) {
                    text.push(c);
                }
                None
            }
            _ => None,
        }
    }

    /// Render the form centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 64.min(area.width.saturating_sub(4));
        let form_area = centered_rect(width, 14.min(area.height), area);

        frame.render_widget(Clear, form_area);
        let block = Block::default()
            .title(Line::styled(
                " Edit commit ",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::commit_form::FOCUSED));
        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let [message, name, email, _, button] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        for (field, field_area) in [
            (CommitField::Message, message),
            (CommitField::Name, name),
            (CommitField::Email, email),
        ] {
            self.render_field(frame, field_area, field);
        }
        self.render_button(frame, button);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: CommitField) {
        let focused = self.focus == field;
        let color = if focused {
            theme::commit_form::FOCUSED
        } else {
            theme::commit_form::LABEL
        };
        let value = self.field(field);

        // Show the tail of long input
        let available = area.width.saturating_sub(2) as usize;
        let count = value.chars().count();
        let shown: String = if count > available && available > 0 {
            let skip = count + 1 - available;
            format!("…{}", value.chars().skip(skip).collect::<String>())
        } else {
            value.to_string()
        };

        let input = Paragraph::new(shown).block(
            Block::default()
                .title(format!(" {} ", field.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(input, area);

        if focused {
            let cursor = count.min(available) as u16;
            frame.set_cursor_position((area.x + 1 + cursor, area.y + 1));
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        if self.submitting {
            let line = Line::from(Span::styled(
                "Committing...",
                Style::default().fg(theme::commit_form::DISABLED),
            ))
            .centered();
            frame.render_widget(Paragraph::new(line), area);
            return;
        }
        let style = match (self.can_submit(), self.focus == CommitField::Submit) {
            (false, _) => Style::default()
                .fg(theme::commit_form::DISABLED)
                .add_modifier(Modifier::CROSSED_OUT),
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(theme::commit_form::SUBMIT_BG)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(theme::commit_form::SUBMIT_BG),
        };
        let line = Line::from(vec![Span::styled("[ Commit and push ]", style)]).centered();
        frame.render_widget(Paragraph::new(line), area);
    }
}
