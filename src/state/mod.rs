//! Client-side state for the task-board page.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `boards`, `columns`, `dialog`) and
//! each concern lives behind its own handle, so a component subscribes only to
//! the model it reads. Typing in the create-board dialog never re-renders the
//! board list or the column area.

pub mod boards;
pub mod columns;
pub mod dialog;
pub mod session;

use std::cell::RefCell;

use leptos::prelude::*;

use boards::BoardsState;
use columns::ColumnsState;
use dialog::CreateBoardDialogState;
use session::SessionState;

/// Shared access to one slice of page state.
///
/// Returns `None` once the state is gone (the page was torn down), which ends
/// whatever flow was running.
pub trait StateHandle<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateHandle<T> for RefCell<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateHandle<T> for RwSignal<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// The four state slices the page controller writes to.
pub trait PageState {
    type Session: StateHandle<SessionState>;
    type Boards: StateHandle<BoardsState>;
    type Columns: StateHandle<ColumnsState>;
    type Dialog: StateHandle<CreateBoardDialogState>;

    fn session(&self) -> &Self::Session;
    fn boards(&self) -> &Self::Boards;
    fn columns(&self) -> &Self::Columns;
    fn dialog(&self) -> &Self::Dialog;
}

/// One reactive signal per concern, as provided to the components.
#[derive(Clone, Copy, Debug)]
pub struct TaskBoardState {
    pub session: RwSignal<SessionState>,
    pub boards: RwSignal<BoardsState>,
    pub columns: RwSignal<ColumnsState>,
    pub dialog: RwSignal<CreateBoardDialogState>,
}

impl TaskBoardState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            boards: RwSignal::new(BoardsState::default()),
            columns: RwSignal::new(ColumnsState::default()),
            dialog: RwSignal::new(CreateBoardDialogState::default()),
        }
    }
}

impl Default for TaskBoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState for TaskBoardState {
    type Session = RwSignal<SessionState>;
    type Boards = RwSignal<BoardsState>;
    type Columns = RwSignal<ColumnsState>;
    type Dialog = RwSignal<CreateBoardDialogState>;

    fn session(&self) -> &Self::Session {
        &self.session
    }

    fn boards(&self) -> &Self::Boards {
        &self.boards
    }

    fn columns(&self) -> &Self::Columns {
        &self.columns
    }

    fn dialog(&self) -> &Self::Dialog {
        &self.dialog
    }
}
