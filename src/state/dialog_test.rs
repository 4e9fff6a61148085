use super::*;

fn open_with(draft: &str) -> CreateBoardDialogState {
    let mut d = CreateBoardDialogState::default();
    d.open();
    d.set_draft(draft);
    d
}

// =============================================================
// Opening / cancelling
// =============================================================

#[test]
fn dialog_default_is_closed() {
    let d = CreateBoardDialogState::default();
    assert_eq!(d.phase, DialogPhase::Closed);
    assert!(!d.is_open());
}

#[test]
fn open_starts_with_empty_draft() {
    let mut d = CreateBoardDialogState::default();
    d.draft = "leftover".to_owned();
    d.open();
    assert_eq!(d.phase, DialogPhase::Open);
    assert!(d.draft.is_empty());
}

#[test]
fn open_while_open_keeps_draft() {
    let mut d = open_with("Ops");
    d.open();
    assert_eq!(d.draft, "Ops");
}

#[test]
fn cancel_discards_input() {
    let mut d = open_with("Ops");
    d.cancel();
    assert_eq!(d.phase, DialogPhase::Closed);
    assert!(d.draft.is_empty());
    assert!(d.warning.is_none());
}

// =============================================================
// Confirm
// =============================================================

#[test]
fn confirm_blank_name_warns_and_stays_open() {
    for blank in ["", "   ", "\t\n"] {
        let mut d = open_with(blank);
        assert_eq!(d.confirm(), None);
        assert_eq!(d.phase, DialogPhase::Open);
        assert_eq!(d.warning.as_deref(), Some(EMPTY_NAME_WARNING));
    }
}

#[test]
fn editing_draft_clears_warning() {
    let mut d = open_with(" ");
    d.confirm();
    d.set_draft("S");
    assert!(d.warning.is_none());
}

#[test]
fn confirm_trims_and_moves_to_submitting() {
    let mut d = open_with("  Sprint 1 ");
    let submission = d.confirm().unwrap();
    assert_eq!(submission.name, "Sprint 1");
    assert_eq!(d.phase, DialogPhase::Submitting);
    assert!(d.is_submitting());
}

#[test]
fn confirm_is_ignored_unless_open() {
    let mut closed = CreateBoardDialogState::default();
    closed.draft = "Ops".to_owned();
    assert_eq!(closed.confirm(), None);

    let mut d = open_with("Ops");
    d.confirm().unwrap();
    assert_eq!(d.confirm(), None);
}

// =============================================================
// Completion
// =============================================================

#[test]
fn created_closes_dialog() {
    let mut d = open_with("Ops");
    let s = d.confirm().unwrap();
    assert!(d.finish_created(s.ticket));
    assert_eq!(d.phase, DialogPhase::Closed);
    assert!(d.draft.is_empty());
}

#[test]
fn failure_reopens_with_draft_and_error() {
    let mut d = open_with("Ops");
    let s = d.confirm().unwrap();
    assert!(d.finish_failed(s.ticket, "board creation failed with status 500"));
    assert_eq!(d.phase, DialogPhase::Open);
    assert_eq!(d.draft, "Ops");
    assert_eq!(d.error.as_deref(), Some("board creation failed with status 500"));
}

#[test]
fn result_of_abandoned_submission_is_ignored() {
    let mut d = open_with("Ops");
    let abandoned = d.confirm().unwrap();
    d.cancel();
    d.open();
    d.set_draft("Dev");
    assert!(!d.finish_created(abandoned.ticket));
    assert!(!d.finish_failed(abandoned.ticket, "late"));
    assert_eq!(d.phase, DialogPhase::Open);
    assert_eq!(d.draft, "Dev");
    assert!(d.error.is_none());

    let current = d.confirm().unwrap();
    assert_ne!(current.ticket, abandoned.ticket);
}
