//! Drag-and-drop rules for the board.
//!
//! Tasks follow the pointer while it moves: hovering a task over another task
//! puts it in that task's column at that task's position, hovering it over a
//! column moves it into the column without touching its position. Columns
//! only move when they are dropped on another column.

#[cfg(test)]
#[path = "drag_controller_test.rs"]
mod drag_controller_test;

use crate::core::Board;
use crate::models::{Column, Id, Task};

/// Snapshot of the element being dragged, kept for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum DragItem {
    Column(Column),
    Task(Task),
}

impl DragItem {
    pub fn id(&self) -> Id {
        match self {
            DragItem::Column(column) => column.id,
            DragItem::Task(task) => task.id,
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self, DragItem::Task(_))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, DragItem::Column(_))
    }
}

/// Element currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Column(Id),
    Task(Id),
}

impl DropTarget {
    pub fn id(self) -> Id {
        match self {
            DropTarget::Column(id) | DropTarget::Task(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored,
    /// The task took the target task's column and list position.
    TaskMoved { from: usize, to: usize, column_id: Id },
    /// The task changed column and kept its list position.
    TaskReassigned { column_id: Id },
    ColumnMoved { from: usize, to: usize },
}

impl DragOutcome {
    pub fn changed(self) -> bool {
        self != DragOutcome::Ignored
    }
}

/// Applies one drag-over event to the board.
pub fn apply_drag_over(board: &mut Board, active: &DragItem, over: Option<DropTarget>) -> DragOutcome {
    let Some(over) = over else {
        return DragOutcome::Ignored;
    };
    if over.id() == active.id() {
        return DragOutcome::Ignored;
    }
    let DragItem::Task(task) = active else {
        return DragOutcome::Ignored;
    };
    let Some(from) = board.task_index(task.id) else {
        return DragOutcome::Ignored;
    };

    match over {
        DropTarget::Task(target_id) => {
            let Some(to) = board.task_index(target_id) else {
                return DragOutcome::Ignored;
            };
            let column_id = board.tasks()[to].column_id;
            if board.reassign_task(task.id, column_id).is_err() || !board.move_task(from, to) {
                return DragOutcome::Ignored;
            }
            DragOutcome::TaskMoved { from, to, column_id }
        }
        DropTarget::Column(column_id) => {
            if board.tasks()[from].column_id == column_id {
                return DragOutcome::Ignored;
            }
            match board.reassign_task(task.id, column_id) {
                Ok(()) => DragOutcome::TaskReassigned { column_id },
                Err(err) => {
                    log::warn!("drag over ignored: {err}");
                    DragOutcome::Ignored
                }
            }
        }
    }
}

/// Applies the drop at the end of a drag to the board.
pub fn apply_drag_end(board: &mut Board, active: &DragItem, over: Option<DropTarget>) -> DragOutcome {
    let (DragItem::Column(column), Some(DropTarget::Column(target_id))) = (active, over) else {
        return DragOutcome::Ignored;
    };
    if column.id == target_id {
        return DragOutcome::Ignored;
    }
    let (Some(from), Some(to)) = (board.column_index(column.id), board.column_index(target_id)) else {
        return DragOutcome::Ignored;
    };
    if board.move_column(from, to) {
        DragOutcome::ColumnMoved { from, to }
    } else {
        DragOutcome::Ignored
    }
}

/// Tracks the drag in progress between drag-start and drag-end.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<DragItem>,
    over: Option<DropTarget>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn over(&self) -> Option<DropTarget> {
        self.over
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn drag_start(&mut self, item: DragItem) {
        log::debug!("drag start: {item:?}");
        self.active = Some(item);
        self.over = None;
    }

    /// Reports a new hover target. Repeated reports of the same target are
    /// ignored, so a task does not bounce back and forth over its neighbour.
    pub fn drag_over(&mut self, board: &mut Board, over: Option<DropTarget>) -> DragOutcome {
        if self.over == over {
            return DragOutcome::Ignored;
        }
        self.over = over;
        let Some(active) = self.active.as_ref() else {
            return DragOutcome::Ignored;
        };
        let outcome = apply_drag_over(board, active, over);
        if outcome.changed() {
            log::debug!("drag over {over:?}: {outcome:?}");
        }
        outcome
    }

    /// Finishes the drag. Drag state is cleared whatever the outcome.
    pub fn drag_end(&mut self, board: &mut Board) -> DragOutcome {
        let over = self.over.take();
        let Some(active) = self.active.take() else {
            return DragOutcome::Ignored;
        };
        let outcome = apply_drag_end(board, &active, over);
        log::debug!("drag end on {over:?}: {outcome:?}");
        outcome
    }

    pub fn cancel(&mut self) {
        self.active = None;
        self.over = None;
    }
}
