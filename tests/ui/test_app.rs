//! Full-screen render tests driven through `App`

use crossterm::event::KeyCode;
use insta::assert_snapshot;

use grove::app::App;

use crate::common::{ctrl, new_app, open_app, press, sample_backend, settle, type_text};
use crate::{draw, screen};

fn render(app: &App, width: u16, height: u16) -> Vec<String> {
    draw(width, height, |frame| app.render(frame))
}

#[test]
fn test_title_bar_and_breadcrumbs() {
    let backend = sample_backend();
    let app = open_app(&backend, "/tree/main/src");
    let rows = render(&app, 100, 16);

    assert_snapshot!(rows[0].trim(), @"demo  main  /tree/main/src");
    assert_snapshot!(rows[1].trim(), @"demo / src");
}

#[test]
fn test_tree_status_bar() {
    let backend = sample_backend();
    let app = open_app(&backend, "/tree/main/");
    let rows = render(&app, 100, 16);

    assert_snapshot!(
        rows[15].trim(),
        @"[Enter] Open   [b] Branch   [p] Path   [?] Help   [q] Quit"
    );
}

#[test]
fn test_subdirectory_offers_parent_hint() {
    let backend = sample_backend();
    let app = open_app(&backend, "/tree/main/src");
    let rows = render(&app, 100, 16);

    assert!(rows[15].contains("[BS] Up"));
}

#[test]
fn test_commit_hint_only_when_dirty() {
    let backend = sample_backend();
    let mut app = open_app(&backend, "/blob/main/src/app.ts");

    let rows = render(&app, 100, 16);
    assert!(!rows[15].contains("Commit changes"));

    type_text(&mut app, "x");
    let rows = render(&app, 100, 16);
    assert!(rows[15].contains("[^S] Commit changes"));
}

#[test]
fn test_loading_before_dispatch() {
    let backend = sample_backend();
    let app = new_app(&backend, "/");
    let rows = render(&app, 80, 12);

    assert!(screen(&rows).contains("Loading repository..."));
    assert!(backend.calls().is_empty());
}

#[test]
fn test_guard_dialog_over_blob() {
    let backend = sample_backend();
    let mut app = open_app(&backend, "/blob/main/src/app.ts");
    type_text(&mut app, "x");
    press(&mut app, KeyCode::Esc);

    let rows = render(&app, 100, 20);
    let text = screen(&rows);
    assert!(text.contains("Unsaved changes"));
    assert!(rows[19].contains("[y] Yes"));
}

#[test]
fn test_commit_failure_banner() {
    let backend = sample_backend();
    backend.reject_pushes(403);
    let mut app = open_app(&backend, "/blob/main/src/app.ts");
    type_text(&mut app, "x");
    app.on_key_event(ctrl('s'));
    for field in ["fix", "A", "a@b.c"] {
        type_text(&mut app, field);
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Enter);
    settle(&mut app);

    let rows = render(&app, 100, 24);
    let text = screen(&rows);
    assert!(text.contains("Commit failed"));
    // The form stays open underneath
    assert!(text.contains("Edit commit"));
}

#[test]
fn test_commit_in_flight_button() {
    let backend = sample_backend();
    let gate = backend.hold("POST /blob/main/src/app.ts");
    let mut app = open_app(&backend, "/blob/main/src/app.ts");
    type_text(&mut app, "x");
    app.on_key_event(ctrl('s'));
    for field in ["fix", "A", "a@b.c"] {
        type_text(&mut app, field);
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Enter);
    app.resolve_pending_fetches();

    let text = screen(&render(&app, 100, 24));
    assert!(text.contains("Committing..."));
    assert!(!text.contains("[ Commit and push ]"));

    gate.release();
    settle(&mut app);
    assert!(app.commit_form.is_none());
}

#[test]
fn test_help_view() {
    let backend = sample_backend();
    let mut app = open_app(&backend, "/tree/main/");
    press(&mut app, KeyCode::Char('?'));

    let rows = render(&app, 80, 40);
    let text = screen(&rows);
    assert!(text.contains("Grove - Help"));
    assert!(text.contains("Tree View:"));
    assert!(text.contains("Blob View:"));
}
