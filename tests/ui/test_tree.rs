//! Render tests for the Tree View

use insta::assert_snapshot;

use grove::model::{FilesResponse, RepositoryLocation};
use grove::ui::views::TreeView;

use crate::common::file_info;
use crate::{draw, screen};

const NOW_MS: i64 = 1_700_000_000_000 + 3 * 86_400_000;

fn src_view() -> TreeView {
    let mut view = TreeView::new(RepositoryLocation::from_route_params("main", Some("src")));
    view.set_listing(FilesResponse {
        trees: vec![file_info("components", "1700000000")],
        blobs: vec![file_info("app.ts", "1700000000")],
    });
    view
}

fn row_with<'a>(rows: &'a [String], needle: &str) -> &'a str {
    rows.iter()
        .find(|row| row.contains(needle))
        .map(|row| row.trim())
        .unwrap_or_else(|| panic!("no row containing {needle:?}"))
}

#[test]
fn test_listing_columns() {
    let view = src_view();
    let rows = draw(80, 10, |frame| view.render(frame, frame.area(), NOW_MS));
    let text = screen(&rows);

    assert!(text.contains("Files"));
    assert!(text.contains("Name"));
    assert!(text.contains("Last commit"));
    assert!(text.contains("Last update"));

    let file_row = row_with(&rows, "app.ts");
    assert!(file_row.contains("update app.ts"));
    assert!(file_row.contains("3 days ago"));
}

#[test]
fn test_parent_row_first_and_selected() {
    let view = src_view();
    let rows = draw(80, 10, |frame| view.render(frame, frame.area(), NOW_MS));

    let names: Vec<usize> = ["↰ ..", "▸ components", "· app.ts"]
        .iter()
        .map(|name| rows.iter().position(|row| row.contains(name)).unwrap())
        .collect();
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(row_with(&rows, "↰ ..").contains("> ↰ .."));
    assert!(!row_with(&rows, "app.ts").contains("> "));
}

#[test]
fn test_parent_row_has_no_commit_columns() {
    let view = src_view();
    let rows = draw(80, 10, |frame| view.render(frame, frame.area(), NOW_MS));
    assert_snapshot!(row_with(&rows, "↰ ..").trim_matches('│').trim(), @"> ↰ ..");
}

#[test]
fn test_loading_shows_skeleton() {
    let view = TreeView::new(RepositoryLocation::root("main"));
    let rows = draw(80, 10, |frame| view.render(frame, frame.area(), NOW_MS));
    let text = screen(&rows);

    assert!(text.contains("Name"));
    assert!(text.contains('░'));
}

#[test]
fn test_fetch_error_inline() {
    let mut view = TreeView::new(RepositoryLocation::from_route_params("dev", Some("src")));
    view.set_error("backend returned 404: not found");
    let rows = draw(80, 12, |frame| view.render(frame, frame.area(), NOW_MS));
    let text = screen(&rows);

    assert!(text.contains("Failed to load"));
    assert!(text.contains("backend returned 404: not found"));
    assert!(text.contains("Press Ctrl+L to retry"));
}

#[test]
fn test_empty_root_directory() {
    let mut view = TreeView::new(RepositoryLocation::root("main"));
    view.set_listing(FilesResponse::default());
    let rows = draw(80, 10, |frame| view.render(frame, frame.area(), NOW_MS));

    assert!(screen(&rows).contains("This directory is empty."));
}

#[test]
fn test_selection_moves_marker() {
    use crossterm::event::{KeyCode, KeyEvent};

    let mut view = src_view();
    view.handle_key(KeyEvent::from(KeyCode::Char('G')));
    let rows = draw(80, 10, |frame| view.render(frame, frame.area(), NOW_MS));

    assert!(row_with(&rows, "app.ts").contains("> · app.ts"));
    assert!(!row_with(&rows, "↰ ..").contains("> "));
}
