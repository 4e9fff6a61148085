//! Top bar with the board title, board picker, greeting and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers are attached once when the page mounts; the board dropdown itself
//! re-renders from state without re-wiring the toolbar.

use leptos::prelude::*;

use crate::components::board_list::BoardList;
use crate::controller::BrowserContext;
use crate::state::TaskBoardState;
use crate::state::session::SessionState;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = expect_context::<BrowserContext>();
    let TaskBoardState { session, boards, .. } = ctx.state;

    let board_title = move || boards.with(|s| s.title_label().to_owned());
    let greeting = move || session.with(SessionState::label);
    let loading = move || boards.with(|s| s.loading);

    let on_create = {
        let ctx = ctx.clone();
        move |_| ctx.open_create_dialog()
    };
    let on_logout = move |_| ctx.logout();

    view! {
        <header class="toolbar">
            <h1 id="boardTitle" class="toolbar__board-name">{board_title}</h1>
            <span class="toolbar__divider" aria-hidden="true"></span>

            <div class="toolbar__boards dropdown">
                <span class="toolbar__boards-label">
                    {move || if loading() { "Boards (loading...)" } else { "Boards" }}
                </span>
                <BoardList/>
            </div>

            <button id="createBoardButton" class="btn toolbar__new-board" on:click=on_create>
                "+ New Board"
            </button>

            <span class="toolbar__spacer"></span>

            <span id="userName" class="toolbar__self">{greeting}</span>
            <button id="logoutButton" class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
