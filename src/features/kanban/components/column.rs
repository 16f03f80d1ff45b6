use leptos::html::Input;
use leptos::prelude::*;
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::{BoardHook, DragHook};
use crate::features::kanban::services::DragItem;
use crate::models::Id;
use crate::utils::format_count;

#[component]
pub fn KanbanColumn(column_id: Id) -> impl IntoView {
    let board = expect_context::<BoardHook>();
    let drag = expect_context::<DragHook>();
    let (edit_mode, set_edit_mode) = signal(false);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let title = move || {
        board
            .board
            .with(|b| b.column(column_id).map(|c| c.title.clone()).unwrap_or_default())
    };
    let task_ids = Memo::new(move |_| {
        board.board.with(|b| b.tasks_in(column_id).map(|t| t.id).collect::<Vec<Id>>())
    });

    Effect::new(move |_| {
        if edit_mode.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let commit_title = move |value: String| {
        if edit_mode.get_untracked() {
            set_edit_mode.set(false);
            board.rename_column.run((column_id, value));
        }
    };

    let start_drag = move |e: leptos::ev::PointerEvent| {
        if edit_mode.get_untracked() {
            return;
        }
        let snapshot = board.board.with_untracked(|b| b.column(column_id).cloned());
        if let Some(column) = snapshot {
            drag.press(DragItem::Column(column), &e);
        }
    };

    view! {
        <div
            class="kanban-column"
            data-column-id=column_id.to_string()
            class:is-dragging=move || drag.is_active(column_id)
        >
            <div
                class="column-header"
                on:pointerdown=start_drag
                on:click=move |_| {
                    if !drag.consume_click() {
                        set_edit_mode.set(true);
                    }
                }
            >
                <div class="column-title">
                    <span class="task-count">{move || format_count(task_ids.with(Vec::len))}</span>
                    <Show
                        when=move || edit_mode.get()
                        fallback=move || view! { <h3>{title}</h3> }
                    >
                        <input
                            type="text"
                            class="column-title-input"
                            node_ref=input_ref
                            prop:value=title
                            on:click=|e| e.stop_propagation()
                            on:blur=move |e| commit_title(event_target_value(&e))
                            on:keydown=move |e| {
                                if e.key() == "Enter" {
                                    commit_title(event_target_value(&e));
                                }
                            }
                        />
                    </Show>
                </div>
                <button
                    class="column-delete-btn"
                    title="Delete column"
                    on:pointerdown=|e| e.stop_propagation()
                    on:click=move |e| {
                        e.stop_propagation();
                        board.delete_column.run(column_id);
                    }
                >"🗑"</button>
            </div>

            <div class="column-content">
                <For
                    each=move || task_ids.get()
                    key=|id| *id
                    children=move |task_id| view! { <TaskCard task_id=task_id /> }
                />
            </div>

            <button class="add-task-btn" on:click=move |_| board.create_task.run(column_id)>
                "🞦 Add task"
            </button>
        </div>
    }
}
