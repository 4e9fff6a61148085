//! Task-board page: header, column area and the create-board dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only screen of the app. Mounting it runs the page-load flow
//! once (greeting, then board list); everything after that is user-driven.

use leptos::prelude::*;

use crate::components::column_board::ColumnBoard;
use crate::components::create_board_dialog::CreateBoardDialog;
use crate::components::toolbar::Toolbar;
use crate::controller::BrowserContext;
use crate::state::dialog::CreateBoardDialogState;

#[component]
pub fn TaskBoardPage() -> impl IntoView {
    let ctx = expect_context::<BrowserContext>();
    let dialog = ctx.state.dialog;

    leptos::task::spawn_local(async move {
        ctx.init().await;
    });

    view! {
        <div class="task-board-page">
            <Toolbar/>
            <main class="task-board-page__body">
                <ColumnBoard/>
            </main>
            <Show when=move || dialog.with(CreateBoardDialogState::is_open)>
                <CreateBoardDialog/>
            </Show>
        </div>
    }
}
