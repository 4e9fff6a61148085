//! Modal dialog for creating a new board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only while the dialog state is not `Closed`. All transitions go
//! through the page controller; this component just forwards input and
//! button presses.

use leptos::prelude::*;

use crate::controller::BrowserContext;
use crate::state::dialog::CreateBoardDialogState;

#[component]
pub fn CreateBoardDialog() -> impl IntoView {
    let ctx = expect_context::<BrowserContext>();
    let dialog = ctx.state.dialog;

    let submit = Callback::new({
        let ctx = ctx.clone();
        move |()| {
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                ctx.confirm_create_dialog().await;
            });
        }
    });
    let cancel = Callback::new({
        let ctx = ctx.clone();
        move |()| ctx.cancel_create_dialog()
    });
    let on_input = move |ev: leptos::ev::Event| ctx.edit_board_name(event_target_value(&ev));

    let submitting = move || dialog.with(CreateBoardDialogState::is_submitting);
    let warning = move || dialog.with(|s| s.warning.clone());
    let error = move || dialog.with(|s| s.error.clone());

    view! {
        <div class="modal-container" on:click=move |_| cancel.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h5>"Create New Board"</h5>
                <input
                    id="newBoardName"
                    class="form-control mb-2"
                    type="text"
                    placeholder="Board name"
                    autofocus=true
                    prop:value=move || dialog.with(|s| s.draft.clone())
                    on:input=on_input
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                submit.run(());
                            }
                            "Escape" => {
                                ev.prevent_default();
                                cancel.run(());
                            }
                            _ => {}
                        }
                    }
                />
                <Show when=move || warning().is_some()>
                    <p class="modal-content__warning">{move || warning().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error().is_some()>
                    <p class="modal-content__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="d-flex justify-content-end">
                    <button
                        id="saveBoardButton"
                        class="btn btn-success me-2"
                        disabled=submitting
                        on:click=move |_| submit.run(())
                    >
                        {move || if submitting() { "Saving..." } else { "Save" }}
                    </button>
                    <button id="cancelBoardButton" class="btn btn-secondary" on:click=move |_| cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
