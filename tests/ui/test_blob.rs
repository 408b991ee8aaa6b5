//! Render tests for the Blob View and the commit form

use crossterm::event::{KeyCode, KeyEvent};
use insta::assert_snapshot;

use grove::model::RepositoryLocation;
use grove::ui::components::CommitForm;
use grove::ui::views::BlobView;

use crate::{draw, screen};

fn loaded(text: &str) -> BlobView {
    let mut view = BlobView::new(RepositoryLocation::from_route_params("main", Some("src/app.ts")));
    view.set_content(text.to_string());
    view
}

#[test]
fn test_clean_file() {
    let view = loaded("export const x = 1;\n");
    let rows = draw(60, 8, |frame| view.render(frame, frame.area()));
    let text = screen(&rows);

    assert!(rows[0].contains("app.ts"));
    assert!(text.contains("export const x = 1;"));
    assert!(!text.contains("modified"));
    assert!(!text.contains("Commit changes"));
}

#[test]
fn test_dirty_file_shows_badge_and_commit_control() {
    let mut view = loaded("export const x = 1;\n");
    view.handle_key(KeyEvent::from(KeyCode::Char('x')));
    let rows = draw(60, 8, |frame| view.render(frame, frame.area()));

    assert!(rows[0].contains("● modified"));
    assert!(rows[6].contains("Commit changes"));
    assert!(screen(&rows).contains("xexport const x = 1;"));
}

#[test]
fn test_loading_and_error() {
    let view = BlobView::new(RepositoryLocation::from_route_params("main", Some("a.txt")));
    let rows = draw(60, 8, |frame| view.render(frame, frame.area()));
    assert!(screen(&rows).contains("Loading..."));

    let mut view = view;
    view.set_error("backend returned 404: main:a.txt not found");
    let rows = draw(60, 10, |frame| view.render(frame, frame.area()));
    let text = screen(&rows);
    assert!(text.contains("Failed to load"));
    assert!(text.contains("main:a.txt not found"));
}

#[test]
fn test_commit_form_disabled_until_complete() {
    let mut form = CommitForm::new();
    let rows = draw(80, 20, |frame| form.render(frame, frame.area()));
    let text = screen(&rows);

    assert!(text.contains("Edit commit"));
    assert!(text.contains("Commit message"));
    assert!(text.contains("Author name"));
    assert!(text.contains("Author email"));
    assert!(text.contains("[ Commit and push ]"));

    for c in "fix".chars() {
        form.handle_key(KeyEvent::from(KeyCode::Char(c)));
    }
    let rows = draw(80, 20, |frame| form.render(frame, frame.area()));
    let message_row = rows
        .iter()
        .find(|row| row.contains("fix"))
        .map(|row| row.trim().trim_matches('│').trim())
        .unwrap();
    assert_snapshot!(message_row, @"fix");
}
