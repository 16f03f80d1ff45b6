use leptos::html::Textarea;
use leptos::prelude::*;
use crate::features::kanban::hooks::{BoardHook, DragHook};
use crate::features::kanban::services::DragItem;
use crate::models::Id;

#[component]
pub fn TaskCard(task_id: Id) -> impl IntoView {
    let board = expect_context::<BoardHook>();
    let drag = expect_context::<DragHook>();
    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_is_over, set_mouse_is_over) = signal(false);
    let textarea_ref: NodeRef<Textarea> = NodeRef::new();

    let content = move || {
        board
            .board
            .with(|b| b.task(task_id).map(|t| t.content.clone()).unwrap_or_default())
    };

    let toggle_mode = move || {
        set_edit_mode.update(|editing| *editing = !*editing);
        set_mouse_is_over.set(false);
    };
    // Leaving edit mode removes the textarea, which can fire a second blur.
    let leave_edit = move || set_edit_mode.set(false);

    Effect::new(move |_| {
        if edit_mode.get() {
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
            }
        }
    });

    let start_drag = move |e: leptos::ev::PointerEvent| {
        if edit_mode.get_untracked() {
            return;
        }
        let snapshot = board.board.with_untracked(|b| b.task(task_id).cloned());
        if let Some(task) = snapshot {
            drag.press(DragItem::Task(task), &e);
        }
    };

    view! {
        <Show
            when=move || edit_mode.get()
            fallback=move || view! {
                <div
                    class="task-card"
                    data-task-id=task_id.to_string()
                    class:is-dragging=move || drag.is_active(task_id)
                    on:pointerenter=move |_| set_mouse_is_over.set(true)
                    on:pointerleave=move |_| set_mouse_is_over.set(false)
                    on:pointerdown=start_drag
                    on:click=move |_| {
                        if !drag.consume_click() {
                            toggle_mode();
                        }
                    }
                >
                    <p class="task-content">{content}</p>
                    <Show when=move || mouse_is_over.get() && !drag.is_dragging()>
                        <button
                            class="task-delete-btn"
                            title="Delete task"
                            on:pointerdown=|e| e.stop_propagation()
                            on:click=move |e| {
                                e.stop_propagation();
                                board.delete_task.run(task_id);
                            }
                        >"🗑"</button>
                    </Show>
                </div>
            }
        >
            <div class="task-card editing">
                <textarea
                    class="task-content-input"
                    placeholder="Task content here"
                    node_ref=textarea_ref
                    prop:value=content
                    on:input=move |e| board.update_task.run((task_id, event_target_value(&e)))
                    on:blur=move |_| leave_edit()
                    on:keydown=move |e| {
                        if e.key() == "Enter" && e.shift_key() {
                            e.prevent_default();
                            leave_edit();
                        }
                    }
                ></textarea>
            </div>
        </Show>
    }
}
