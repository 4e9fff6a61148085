//! Column area of the selected board.

use leptos::prelude::*;

use crate::controller::BrowserContext;
use crate::state::columns::column_heading;

/// Renders one panel per column of the selected board, in response order.
#[component]
pub fn ColumnBoard() -> impl IntoView {
    let columns = expect_context::<BrowserContext>().state.columns;

    let has_board = move || columns.with(|s| s.board_id.is_some());
    let is_empty = move || columns.with(|s| s.items.is_empty());
    let headings = move || {
        columns.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(index, column)| column_heading(column, index))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section id="board" class="column-board" class:column-board--loading=move || columns.with(|s| s.loading)>
            <Show
                when=has_board
                fallback=|| view! { <p class="column-board__hint">"Pick a board to see its columns."</p> }
            >
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="column-board__hint">"This board has no columns yet."</p> }
                >
                    <div class="column-board__columns">
                        {move || {
                            headings()
                                .into_iter()
                                .map(|heading| {
                                    view! {
                                        <article class="column-board__column">
                                            <h3 class="column-board__heading">{heading}</h3>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
