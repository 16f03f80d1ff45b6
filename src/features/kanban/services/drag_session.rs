//! One press-to-release interaction: pointer activation, hover targeting,
//! the drop, and swallowing the click the browser fires after a drag.

#[cfg(test)]
#[path = "drag_session_test.rs"]
mod drag_session_test;

use crate::core::Board;
use crate::models::Id;
use super::drag_controller::{DragController, DragItem, DragOutcome, DropTarget};
use super::pointer_sensor::{Point, PointerSensor};

/// Data attribute carrying a task card's id.
pub const TASK_ID_ATTR: &str = "data-task-id";
/// Data attribute carrying a column's id.
pub const COLUMN_ID_ATTR: &str = "data-column-id";

/// Closest task card and column enclosing the element under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverHit {
    pub task: Option<Id>,
    pub column: Option<Id>,
}

impl HoverHit {
    /// Builds a hit from raw attribute values; unparsable values count as absent.
    pub fn from_attributes(task: Option<&str>, column: Option<&str>) -> Self {
        Self {
            task: task.and_then(|raw| raw.parse().ok()),
            column: column.and_then(|raw| raw.parse().ok()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DragSession {
    sensor: PointerSensor,
    controller: DragController,
    suppress_click: bool,
}

impl DragSession {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            sensor: PointerSensor::new(activation_distance),
            controller: DragController::new(),
            suppress_click: false,
        }
    }

    pub fn active(&self) -> Option<&DragItem> {
        self.controller.active()
    }

    pub fn over(&self) -> Option<DropTarget> {
        self.controller.over()
    }

    pub fn is_armed(&self) -> bool {
        self.sensor.is_armed()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn press(&mut self, item: DragItem, at: Point) {
        self.suppress_click = false;
        self.sensor.press(item, at);
    }

    /// Feeds a pointer move; returns whether this move started the drag.
    pub fn motion(&mut self, at: Point) -> bool {
        match self.sensor.motion(at) {
            Some(item) => {
                self.controller.drag_start(item);
                true
            }
            None => false,
        }
    }

    /// Task cards are only targets for task drags; a column drag over a
    /// card targets the column around it.
    pub fn target_for(&self, hit: HoverHit) -> Option<DropTarget> {
        let dragging_task = self.active().is_some_and(DragItem::is_task);
        match (hit.task, hit.column) {
            (Some(task), _) if dragging_task => Some(DropTarget::Task(task)),
            (_, Some(column)) => Some(DropTarget::Column(column)),
            _ => None,
        }
    }

    pub fn hover(&mut self, board: &mut Board, hit: HoverHit) -> DragOutcome {
        if !self.is_dragging() {
            return DragOutcome::Ignored;
        }
        let target = self.target_for(hit);
        self.controller.drag_over(board, target)
    }

    /// Ends the press. A press that never became a drag leaves the board
    /// and the following click alone.
    pub fn release(&mut self, board: &mut Board) -> DragOutcome {
        if !self.sensor.release() {
            return DragOutcome::Ignored;
        }
        self.suppress_click = true;
        self.controller.drag_end(board)
    }

    pub fn cancel(&mut self) {
        self.sensor.release();
        self.controller.cancel();
    }

    /// True once for the click the browser fires right after a drag ends.
    pub fn consume_click(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}
