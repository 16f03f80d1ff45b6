//! Full drag sequences driven through the public board API, the way the UI
//! drives them: press, activation, a series of hover targets, release.

use kanban_board::core::Board;
use kanban_board::features::kanban::services::{DragController, DragItem, DragOutcome, DropTarget, Point, PointerSensor};
use kanban_board::models::Id;

fn board_with(columns: usize, tasks_per_column: usize) -> (Board, Vec<Id>) {
    let mut board = Board::new();
    let columns: Vec<Id> = (0..columns).map(|_| board.create_column()).collect();
    for column in &columns {
        for _ in 0..tasks_per_column {
            board.create_task(*column).expect("column exists");
        }
    }
    (board, columns)
}

fn tasks_of(board: &Board, column: Id) -> Vec<Id> {
    board.tasks_in(column).map(|t| t.id).collect()
}

#[test]
fn task_dragged_across_columns_lands_next_to_hovered_task() {
    let (mut board, columns) = board_with(2, 2);
    let [left, right] = [columns[0], columns[1]];
    let dragged = tasks_of(&board, left)[0];
    let target = tasks_of(&board, right)[1];

    let mut sensor = PointerSensor::new(3.0);
    let mut controller = DragController::new();
    sensor.press(DragItem::Task(board.task(dragged).cloned().expect("task")), Point::new(10.0, 10.0));
    assert!(sensor.motion(Point::new(11.0, 10.0)).is_none());
    let item = sensor.motion(Point::new(20.0, 10.0)).expect("drag activates");
    controller.drag_start(item);

    assert!(controller.drag_over(&mut board, Some(DropTarget::Column(right))).changed());
    let outcome = controller.drag_over(&mut board, Some(DropTarget::Task(target)));
    assert!(matches!(outcome, DragOutcome::TaskMoved { column_id, .. } if column_id == right));

    assert!(sensor.release());
    assert_eq!(controller.drag_end(&mut board), DragOutcome::Ignored);

    assert_eq!(tasks_of(&board, left).len(), 1);
    let right_tasks = tasks_of(&board, right);
    assert_eq!(right_tasks.len(), 3);
    assert_eq!(right_tasks[2], dragged);
    assert_eq!(board.tasks().len(), 4);
}

#[test]
fn task_dragged_onto_empty_column_keeps_list_position() {
    let (mut board, columns) = board_with(2, 2);
    let empty = board.create_column();
    let dragged = tasks_of(&board, columns[1])[0];
    let index_before = board.task_index(dragged);

    let mut controller = DragController::new();
    controller.drag_start(DragItem::Task(board.task(dragged).cloned().expect("task")));
    let outcome = controller.drag_over(&mut board, Some(DropTarget::Column(empty)));

    assert_eq!(outcome, DragOutcome::TaskReassigned { column_id: empty });
    assert_eq!(board.task_index(dragged), index_before);
    assert_eq!(tasks_of(&board, empty), vec![dragged]);
    controller.drag_end(&mut board);
    assert!(!controller.is_dragging());
}

#[test]
fn column_drag_reorders_only_on_drop() {
    let (mut board, columns) = board_with(3, 1);
    let mut controller = DragController::new();
    controller.drag_start(DragItem::Column(board.column(columns[0]).cloned().expect("column")));

    assert_eq!(controller.drag_over(&mut board, Some(DropTarget::Column(columns[2]))), DragOutcome::Ignored);
    let order: Vec<Id> = board.columns().iter().map(|c| c.id).collect();
    assert_eq!(order, columns);

    assert_eq!(controller.drag_end(&mut board), DragOutcome::ColumnMoved { from: 0, to: 2 });
    let order: Vec<Id> = board.columns().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![columns[1], columns[2], columns[0]]);
    for column in &columns {
        assert_eq!(board.task_count_in(*column), 1);
    }
}

#[test]
fn click_without_travel_never_starts_a_drag() {
    let (board, columns) = board_with(1, 0);
    let mut sensor = PointerSensor::new(3.0);
    sensor.press(DragItem::Column(board.column(columns[0]).cloned().expect("column")), Point::new(5.0, 5.0));
    assert!(sensor.motion(Point::new(6.0, 6.0)).is_none());
    assert!(!sensor.release());
}

#[test]
fn deleting_a_column_mid_drag_leaves_board_consistent() {
    let (mut board, columns) = board_with(2, 2);
    let dragged = tasks_of(&board, columns[0])[0];
    let mut controller = DragController::new();
    controller.drag_start(DragItem::Task(board.task(dragged).cloned().expect("task")));

    board.delete_column(columns[1]).expect("delete");
    assert_eq!(controller.drag_over(&mut board, Some(DropTarget::Column(columns[1]))), DragOutcome::Ignored);
    assert_eq!(board.task(dragged).map(|t| t.column_id), Some(columns[0]));
    assert!(board.tasks().iter().all(|t| board.column(t.column_id).is_some()));
}
