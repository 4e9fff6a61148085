//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ApiConfig;
use crate::controller::{BrowserContext, TaskBoardContext};
use crate::net::api::HttpBoardApi;
use crate::pages::task_board::TaskBoardPage;
use crate::state::TaskBoardState;
use crate::util::shell::WindowShell;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Builds the page controller once and provides it to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::resolve();
    log::info!("task board using api at {}", config.base_url);

    let ctx: BrowserContext = TaskBoardContext {
        api: HttpBoardApi::new(config),
        store: LocalStorage,
        shell: WindowShell,
        state: TaskBoardState::new(),
    };
    provide_context(ctx);

    view! {
        <Title text="Task Board"/>
        <TaskBoardPage/>
    }
}
