//! Board-list state for the page header dropdown.
//!
//! DESIGN
//! ======
//! Every list load takes a token from [`BoardsState::begin_load`]. Only the
//! response carrying the latest token is applied, so a slow reload cannot
//! overwrite a newer one.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use crate::net::types::{Board, BoardId};

/// Title shown before any board has been picked.
pub const NO_BOARD_TITLE: &str = "Select a board";

/// One selectable row of the rendered board list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardEntry {
    pub id: BoardId,
    pub label: String,
    pub active: bool,
    pub selected: bool,
}

/// Fetched boards plus the current selection.
#[derive(Clone, Debug, Default)]
pub struct BoardsState {
    pub items: Vec<Board>,
    /// Board highlighted in the list; cleared by every successful reload.
    pub selected: Option<BoardId>,
    /// Label of the last selected board, shown as the page title.
    pub title: Option<String>,
    pub loading: bool,
    /// Token of the most recently issued list request.
    pub list_seq: u64,
}

impl BoardsState {
    /// Mark a list request as in flight and return its token.
    pub fn begin_load(&mut self) -> u64 {
        self.list_seq += 1;
        self.loading = true;
        self.list_seq
    }

    /// Replace the list with `boards` if `token` is still current.
    pub fn apply_list(&mut self, token: u64, boards: Vec<Board>) -> bool {
        if token != self.list_seq {
            return false;
        }
        self.items = boards;
        self.selected = None;
        self.loading = false;
        true
    }

    /// Settle a failed request, leaving the previous list in place.
    pub fn fail_load(&mut self, token: u64) -> bool {
        if token != self.list_seq {
            return false;
        }
        self.loading = false;
        true
    }

    /// Select the entry for `id` and title the page with `label`, the text of
    /// the row that was clicked. Returns `false` if no such board is listed.
    pub fn select(&mut self, id: &BoardId, label: &str) -> bool {
        if !self.items.iter().any(|b| &b.id == id) {
            return false;
        }
        self.selected = Some(id.clone());
        self.title = Some(label.to_owned());
        true
    }

    /// Rows to render, one per board, in response order.
    pub fn entries(&self) -> Vec<BoardEntry> {
        self.items
            .iter()
            .map(|b| BoardEntry {
                id: b.id.clone(),
                label: b.name.clone(),
                active: b.is_active,
                selected: self.selected.as_ref() == Some(&b.id),
            })
            .collect()
    }

    pub fn title_label(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_BOARD_TITLE)
    }
}
