use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn discard_dialog() -> Dialog {
    Dialog::confirm(
        "Unsaved changes",
        "You have unsaved changes. Are you sure you want to leave?",
        None,
        DialogCallback::DiscardAndQuit,
    )
}

fn branch_dialog(initial: usize) -> Dialog {
    Dialog::select(
        "Branch",
        "Switch to branch:",
        vec![
            SelectItem::new("main", "main"),
            SelectItem::new("dev", "dev"),
            SelectItem::new("feature/x", "feature/x"),
        ],
        initial,
        DialogCallback::SwitchBranch,
    )
}

#[test]
fn test_confirm_dialog_yes() {
    for code in [KeyCode::Char('y'), KeyCode::Char('Y'), KeyCode::Enter] {
        let mut d = discard_dialog();
        assert_eq!(d.handle_key(key(code)), Some(DialogResult::Confirmed(None)));
    }
}

#[test]
fn test_confirm_dialog_no() {
    for code in [KeyCode::Char('n'), KeyCode::Char('N'), KeyCode::Esc] {
        let mut d = discard_dialog();
        assert_eq!(d.handle_key(key(code)), Some(DialogResult::Cancelled));
    }
}

#[test]
fn test_confirm_dialog_ignores_other_keys() {
    let mut d = discard_dialog();
    assert_eq!(d.handle_key(key(KeyCode::Char('x'))), None);
}

#[test]
fn test_select_initial_cursor() {
    assert_eq!(branch_dialog(1).cursor, 1);
    // Out-of-range preselection is clamped to the last item
    assert_eq!(branch_dialog(10).cursor, 2);
}

#[test]
fn test_select_navigation_and_confirm() {
    let mut d = branch_dialog(0);
    assert!(d.handle_key(key(KeyCode::Char('j'))).is_none());
    assert!(d.handle_key(key(KeyCode::Down)).is_none());
    assert!(d.handle_key(key(KeyCode::Down)).is_none());
    assert_eq!(d.cursor, 2);
    assert!(d.handle_key(key(KeyCode::Char('k'))).is_none());
    assert_eq!(
        d.handle_key(key(KeyCode::Enter)),
        Some(DialogResult::Confirmed(Some("dev".to_string())))
    );
}

#[test]
fn test_select_cancel() {
    let mut d = branch_dialog(0);
    assert_eq!(d.handle_key(key(KeyCode::Esc)), Some(DialogResult::Cancelled));
}

#[test]
fn test_select_empty_enter_cancels() {
    let mut d = Dialog::select("Path", "Jump to:", vec![], 0, DialogCallback::JumpToPath);
    assert_eq!(d.handle_key(key(KeyCode::Enter)), Some(DialogResult::Cancelled));
}
