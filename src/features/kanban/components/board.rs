use leptos::prelude::*;
use crate::config::BoardConfig;
use crate::features::kanban::components::{DragOverlay, KanbanColumn};
use crate::features::kanban::hooks::{use_board, use_drag};
use crate::models::Id;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let board = use_board();
    let drag = use_drag(board.board, config.activation_distance);
    provide_context(board);
    provide_context(drag);

    // Column order only; each column reads its own fields from the board.
    let column_ids = Memo::new(move |_| {
        board.board.with(|b| b.columns().iter().map(|c| c.id).collect::<Vec<Id>>())
    });

    view! {
        <div
            class="kanban-page"
            class:dragging=move || drag.is_dragging()
        >
            <div class="kanban-board">
                <For
                    each=move || column_ids.get()
                    key=|id| *id
                    children=move |column_id| view! { <KanbanColumn column_id=column_id /> }
                />
                <button class="add-column-btn" on:click=move |_| board.create_column.run(())>
                    "🞦 Add column"
                </button>
            </div>
            <DragOverlay />
        </div>
    }
}
