//! Columns of the selected board.
//!
//! Loads are tokenized like the board list: picking board A then board B
//! quickly must never end with A's columns on screen.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use crate::net::types::{BoardId, Column};

#[derive(Clone, Debug, Default)]
pub struct ColumnsState {
    /// Board whose columns are currently displayed.
    pub board_id: Option<BoardId>,
    pub items: Vec<Column>,
    pub loading: bool,
    /// Token of the most recently issued column request.
    pub request_seq: u64,
}

impl ColumnsState {
    /// Mark a column request as in flight and return its token.
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Show `columns` for `board_id` if `token` is still current.
    pub fn apply(&mut self, token: u64, board_id: BoardId, columns: Vec<Column>) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.board_id = Some(board_id);
        self.items = columns;
        self.loading = false;
        true
    }

    /// Settle a failed request, leaving the displayed columns untouched.
    pub fn fail(&mut self, token: u64) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.loading = false;
        true
    }
}

/// Heading for the column at `index` (zero-based).
pub fn column_heading(column: &Column, index: usize) -> String {
    match column.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("Column {}", index + 1),
    }
}
