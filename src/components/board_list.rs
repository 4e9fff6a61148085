//! Dropdown list of boards.
//!
//! DESIGN
//! ======
//! Rows are keyed by board identity, so a reload that returns the same boards
//! keeps the existing `<li>` nodes and their click listeners instead of
//! rebuilding the whole list.

use leptos::prelude::*;

use crate::controller::BrowserContext;
use crate::state::boards::{BoardEntry, BoardsState};

/// Selectable list of every fetched board.
#[component]
pub fn BoardList() -> impl IntoView {
    let ctx = expect_context::<BrowserContext>();
    let boards = ctx.state.boards;

    let entries = move || boards.with(BoardsState::entries);
    let is_selected = move |entry: &BoardEntry| {
        let id = entry.id.clone();
        move || boards.with(|s| s.selected.as_ref() == Some(&id))
    };

    view! {
        <ul id="boardsList" class="board-list dropdown-menu">
            <For
                each=entries
                key=|entry: &BoardEntry| (entry.id.clone(), entry.label.clone(), entry.active)
                children=move |entry: BoardEntry| {
                    let selected = is_selected(&entry);
                    let ctx = ctx.clone();
                    let BoardEntry { id, label, active, .. } = entry;
                    let data_id = id.to_string();
                    let text = label.clone();
                    view! {
                        <li class="board-list__item">
                            <a
                                class="dropdown-item"
                                class:board-list__link--inactive=!active
                                class:board-list__link--selected=selected
                                data-board-id=data_id
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    let ctx = ctx.clone();
                                    let id = id.clone();
                                    let clicked = label.clone();
                                    leptos::task::spawn_local(async move {
                                        ctx.select_board(id, clicked).await;
                                    });
                                }
                            >
                                {text}
                            </a>
                        </li>
                    }
                }
            />
        </ul>
    }
}
