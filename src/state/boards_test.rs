use super::*;

fn board(id: i64, name: &str) -> Board {
    Board {
        id: BoardId::from(id),
        name: name.to_owned(),
        is_active: true,
    }
}

#[test]
fn boards_state_defaults() {
    let s = BoardsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.selected.is_none());
    assert_eq!(s.list_seq, 0);
    assert_eq!(s.title_label(), NO_BOARD_TITLE);
}

#[test]
fn entries_match_boards_one_to_one() {
    let mut s = BoardsState::default();
    let token = s.begin_load();
    let mut archived = board(3, "Archive");
    archived.is_active = false;
    assert!(s.apply_list(token, vec![board(1, "Sprint 1"), board(2, "Backlog"), archived]));

    let entries = s.entries();
    assert_eq!(entries.len(), 3);
    let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Sprint 1", "Backlog", "Archive"]);
    assert!(entries[0].active);
    assert!(!entries[2].active);
    assert!(!s.loading);
}

#[test]
fn stale_list_response_is_discarded() {
    let mut s = BoardsState::default();
    let first = s.begin_load();
    let second = s.begin_load();
    assert!(s.apply_list(second, vec![board(2, "New")]));
    assert!(!s.apply_list(first, vec![board(1, "Old")]));
    assert_eq!(s.items, vec![board(2, "New")]);
    assert!(!s.fail_load(first));
}

#[test]
fn failed_load_keeps_previous_items() {
    let mut s = BoardsState::default();
    let token = s.begin_load();
    s.apply_list(token, vec![board(1, "Ops")]);
    let token = s.begin_load();
    assert!(s.fail_load(token));
    assert!(!s.loading);
    assert_eq!(s.items, vec![board(1, "Ops")]);
}

#[test]
fn select_sets_title_and_highlight() {
    let mut s = BoardsState::default();
    let token = s.begin_load();
    s.apply_list(token, vec![board(1, "Ops"), board(2, "Dev")]);

    assert!(s.select(&BoardId::from(2), "Dev"));
    assert_eq!(s.title_label(), "Dev");
    let selected: Vec<_> = s.entries().into_iter().filter(|e| e.selected).map(|e| e.id).collect();
    assert_eq!(selected, vec![BoardId::from(2)]);
}

#[test]
fn select_unknown_board_changes_nothing() {
    let mut s = BoardsState::default();
    assert!(!s.select(&BoardId::from(9), "Ghost"));
    assert!(s.selected.is_none());
    assert!(s.title.is_none());
}

#[test]
fn title_comes_from_the_clicked_row_when_ids_repeat() {
    let mut s = BoardsState::default();
    let token = s.begin_load();
    s.apply_list(token, vec![board(4, "Ops"), board(4, "Ops (archived)")]);

    assert!(s.select(&BoardId::from(4), "Ops (archived)"));
    assert_eq!(s.title_label(), "Ops (archived)");
}

#[test]
fn reload_clears_selection_but_keeps_title() {
    let mut s = BoardsState::default();
    let token = s.begin_load();
    s.apply_list(token, vec![board(1, "Ops")]);
    s.select(&BoardId::from(1), "Ops");

    let token = s.begin_load();
    s.apply_list(token, vec![board(1, "Ops"), board(2, "Dev")]);
    assert!(s.selected.is_none());
    assert!(s.entries().iter().all(|e| !e.selected));
    assert_eq!(s.title_label(), "Ops");
}
