//! Render tests for Dialog components

use grove::app::UNSAVED_CHANGES_MESSAGE;
use grove::ui::components::{Dialog, DialogCallback, SelectItem};

use crate::{draw, screen};

#[test]
fn test_discard_confirm_dialog() {
    let dialog = Dialog::confirm(
        "Unsaved changes",
        UNSAVED_CHANGES_MESSAGE,
        None,
        DialogCallback::DiscardAndQuit,
    );
    let rows = draw(80, 12, |frame| dialog.render(frame, frame.area()));
    let text = screen(&rows);

    assert!(text.contains(" Unsaved changes "));
    assert!(text.contains("Are you sure"));
    assert!(text.contains("[Y]es"));
    assert!(text.contains("[N]o"));
}

#[test]
fn test_branch_selector_marks_cursor() {
    let dialog = Dialog::select(
        "Branch",
        "Switch to branch:",
        vec![
            SelectItem::new("main", "main"),
            SelectItem::new("feature/auth", "feature/auth"),
        ],
        1,
        DialogCallback::SwitchBranch,
    );
    let rows = draw(60, 14, |frame| dialog.render(frame, frame.area()));
    let text = screen(&rows);

    assert!(text.contains(" Branch "));
    assert!(text.contains("Switch to branch:"));
    assert!(text.contains("> feature/auth"));
    assert!(text.contains("  main"));
    assert!(!text.contains("> main"));
    assert!(text.contains("[Enter] Select"));
}

#[test]
fn test_empty_selector_renders() {
    let dialog = Dialog::select("Path", "Jump to:", vec![], 0, DialogCallback::JumpToPath);
    let rows = draw(60, 12, |frame| dialog.render(frame, frame.area()));
    let text = screen(&rows);

    assert!(text.contains("Jump to:"));
    assert!(!text.contains("> "));
}
