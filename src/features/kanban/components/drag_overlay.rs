use leptos::portal::Portal;
use leptos::prelude::*;
use crate::features::kanban::hooks::{BoardHook, DragHook};
use crate::features::kanban::services::DragItem;
use crate::utils::format_count;

/// Copy of the dragged column or task that follows the pointer.
///
/// Rendered into `document.body` so board scrolling and overflow clipping do
/// not affect it.
#[component]
pub fn DragOverlay() -> impl IntoView {
    let board = expect_context::<BoardHook>();
    let drag = expect_context::<DragHook>();

    let style = move || {
        let at = drag.overlay_position();
        format!("transform: translate({}px, {}px);", at.x, at.y)
    };

    view! {
        <Portal>
            <Show when=move || drag.is_dragging()>
                <div class="drag-overlay" style=style>
                    {move || match drag.active.get() {
                        Some(DragItem::Column(column)) => {
                            let tasks = board.board.with(|b| {
                                b.tasks_in(column.id).map(|t| t.content.clone()).collect::<Vec<_>>()
                            });
                            view! {
                                <div class="kanban-column overlay">
                                    <div class="column-header">
                                        <div class="column-title">
                                            <span class="task-count">{format_count(tasks.len())}</span>
                                            <h3>{column.title}</h3>
                                        </div>
                                    </div>
                                    <div class="column-content">
                                        {tasks
                                            .into_iter()
                                            .map(|content| view! {
                                                <div class="task-card"><p class="task-content">{content}</p></div>
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                            .into_any()
                        }
                        Some(DragItem::Task(task)) => {
                            let content = board
                                .board
                                .with(|b| b.task(task.id).map(|t| t.content.clone()))
                                .unwrap_or(task.content);
                            view! {
                                <div class="task-card overlay">
                                    <p class="task-content">{content}</p>
                                </div>
                            }
                            .into_any()
                        }
                        None => view! {}.into_any(),
                    }}
                </div>
            </Show>
        </Portal>
    }
}
