use leptos::prelude::*;
use crate::config::BoardConfig;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <main class="app">
            <KanbanBoard />
        </main>
    }
}
