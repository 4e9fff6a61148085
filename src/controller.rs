//! Page controller for the task board.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`TaskBoardContext`] is the one value every event handler receives. It owns
//! the REST client, the preference store, the browser shell and a handle to the
//! page state, so no handler reaches for globals and the whole flow can run in
//! native tests against fakes.
//!
//! ERROR HANDLING
//! ==============
//! Read failures are logged and swallowed: the list or column area keeps what
//! it showed before. Create failures are logged, shown inline in the dialog and
//! announced through [`BrowserShell::notify`]. Nothing retries.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::{ApiError, BoardApi, HttpBoardApi};
use crate::net::types::BoardId;
use crate::state::{PageState, StateHandle, TaskBoardState};
use crate::state::session::SessionState;
use crate::util::shell::{BrowserShell, ENTRY_PAGE, WindowShell};
use crate::util::storage::{self, LocalStorage, PreferenceStore, USER_KEY};

/// Blocking message shown when the backend rejects a new board.
pub const CREATE_FAILED_MESSAGE: &str = "Could not create the board. Please try again.";

/// Blocking message shown after a board was created.
pub fn created_message(name: &str) -> String {
    format!("Board \"{name}\" created.")
}

/// Handler context for the task-board page.
#[derive(Clone, Debug)]
pub struct TaskBoardContext<A, S, H, St> {
    pub api: A,
    pub store: S,
    pub shell: H,
    pub state: St,
}

/// Context wired to the real browser collaborators.
pub type BrowserContext = TaskBoardContext<HttpBoardApi, LocalStorage, WindowShell, TaskBoardState>;

impl<A, S, H, St> TaskBoardContext<A, S, H, St>
where
    A: BoardApi,
    S: PreferenceStore,
    H: BrowserShell,
    St: PageState,
{
    /// Page load: greeting first, then the board list.
    pub async fn init(&self) {
        self.load_user_name();
        self.load_boards().await;
    }

    /// Resolve the header greeting from the cached user record.
    pub fn load_user_name(&self) {
        let session = SessionState::from_record(storage::load_user(&self.store).as_ref());
        self.state.session().mutate(|s| *s = session);
    }

    /// Fetch the board list and re-render it. Failures leave the list as is.
    pub async fn load_boards(&self) {
        let Some(token) = self.state.boards().mutate(|s| s.begin_load()) else {
            return;
        };
        match self.api.list_boards().await {
            Ok(boards) => {
                let count = boards.len();
                if self.state.boards().mutate(|s| s.apply_list(token, boards)) == Some(true) {
                    log::debug!("loaded {count} boards");
                } else {
                    log::debug!("discarded stale board list (request {token})");
                }
            }
            Err(e) => {
                log::error!("failed to load boards: {e}");
                self.state.boards().mutate(|s| s.fail_load(token));
            }
        }
    }

    /// A board entry was clicked: retitle the page with the clicked label and
    /// load its columns.
    pub async fn select_board(&self, board_id: BoardId, label: String) {
        if self.state.boards().mutate(|s| s.select(&board_id, &label)) != Some(true) {
            log::warn!("selected board {board_id} is not listed");
            return;
        }
        log::debug!("selected board {board_id} ({label})");
        self.load_columns(board_id).await;
    }

    /// Fetch and render the columns of `board_id`. Failures leave the
    /// displayed columns as they are.
    pub async fn load_columns(&self, board_id: BoardId) {
        let Some(token) = self.state.columns().mutate(|s| s.begin_load()) else {
            return;
        };
        match self.api.list_columns(&board_id).await {
            Ok(columns) => {
                let applied = self.state.columns().mutate(|s| s.apply(token, board_id.clone(), columns));
                if applied != Some(true) {
                    log::debug!("discarded stale columns for board {board_id}");
                }
            }
            Err(e) => {
                log::error!("failed to load columns for board {board_id}: {e}");
                self.state.columns().mutate(|s| s.fail(token));
            }
        }
    }

    pub fn open_create_dialog(&self) {
        self.state.dialog().mutate(|s| s.open());
    }

    pub fn edit_board_name(&self, text: String) {
        self.state.dialog().mutate(|s| s.set_draft(text));
    }

    pub fn cancel_create_dialog(&self) {
        self.state.dialog().mutate(|s| s.cancel());
    }

    /// Validate the draft and create the board. The dialog closes only after
    /// the backend accepted it; a failure keeps the draft for another try.
    pub async fn confirm_create_dialog(&self) {
        let Some(Some(submission)) = self.state.dialog().mutate(|s| s.confirm()) else {
            return;
        };
        match self.api.create_board(&submission.name).await {
            Ok(board) => {
                log::info!("created board {} ({})", board.id, board.name);
                self.state.dialog().mutate(|s| s.finish_created(submission.ticket));
                self.shell.notify(&created_message(&board.name));
                self.load_boards().await;
            }
            Err(e) => {
                log::error!("failed to create board {:?}: {e}", submission.name);
                self.state
                    .dialog()
                    .mutate(|s| s.finish_failed(submission.ticket, create_error_detail(&e)));
                self.shell.notify(CREATE_FAILED_MESSAGE);
            }
        }
    }

    /// Forget the cached user and go back to the entry page.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove_item(USER_KEY) {
            log::warn!("could not clear cached user: {e}");
        }
        self.shell.navigate(ENTRY_PAGE);
    }
}

fn create_error_detail(error: &ApiError) -> String {
    match error {
        ApiError::Create { status } => format!("The server rejected the board (status {status})."),
        ApiError::Transport(_) => "The server could not be reached.".to_owned(),
        other => other.to_string(),
    }
}
