//! Title bar: repository, branch, route path, and breadcrumb trail

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Breadcrumb, Notification, Route};
use crate::ui::{components, symbols, theme};

/// Rows taken by [`render_location_bar`]
pub const LOCATION_BAR_HEIGHT: u16 = 2;

/// Breadcrumb trail; navigable elements are styled as links
pub fn build_breadcrumb_line(crumbs: &[Breadcrumb]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];

    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                symbols::separators::BREADCRUMB,
                Style::default().fg(Color::DarkGray),
            ));
        }
        let style = if crumb.navigable {
            Style::default()
                .fg(theme::location::LINK)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
                .fg(theme::location::CURRENT)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(crumb.label.clone(), style));
    }

    Line::from(spans)
}

fn build_title_line(repo_name: &str, route: &Route) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", repo_name),
        Style::default()
            .fg(theme::location::REPOSITORY)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(location) = route.location() {
        spans.push(Span::styled(
            format!(" {} ", location.branch()),
            Style::default().fg(Color::Black).bg(theme::location::BRANCH_BG),
        ));
    }
    spans.push(Span::styled(
        format!(" {}", route.to_path()),
        Style::default().fg(theme::location::ROUTE),
    ));

    Line::from(spans)
}

/// Render the two-row title bar at the top of `area`
///
/// The notification (if any) is right-aligned on the first row and cut to
/// the space the title leaves free.
pub fn render_location_bar(
    frame: &mut Frame,
    area: Rect,
    repo_name: &str,
    route: &Route,
    notification: Option<&Notification>,
) {
    let [title_area, crumb_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let title = build_title_line(repo_name, route);
    let title_width = title.width();
    frame.render_widget(Paragraph::new(title), title_area);

    if let Some(notification) = notification.filter(|n| !n.is_expired()) {
        let available = (title_area.width as usize).saturating_sub(title_width + 2);
        let line = components::build_notification_title(notification, available);
        if !line.spans.is_empty() {
            frame.render_widget(Paragraph::new(line.right_aligned()), title_area);
        }
    }

    let crumbs = route
        .location()
        .map(|location| location.breadcrumbs(repo_name))
        .unwrap_or_default();
    frame.render_widget(Paragraph::new(build_breadcrumb_line(&crumbs)), crumb_area);
}
