use super::*;
use crate::models::{Id, Task};

fn task_item() -> DragItem {
    DragItem::Task(Task::new(Id(1), Id(10), "Task 0"))
}

#[test]
fn unarmed_sensor_ignores_motion() {
    let mut sensor = PointerSensor::new(3.0);
    assert!(sensor.motion(Point::new(50.0, 50.0)).is_none());
    assert!(!sensor.release());
}

#[test]
fn short_travel_stays_a_click() {
    let mut sensor = PointerSensor::new(3.0);
    sensor.press(task_item(), Point::new(10.0, 10.0));
    assert!(sensor.motion(Point::new(11.0, 12.0)).is_none());
    assert!(sensor.is_armed());
    assert!(!sensor.release());
    assert!(!sensor.is_armed());
}

#[test]
fn reaching_activation_distance_starts_drag_once() {
    let mut sensor = PointerSensor::new(3.0);
    sensor.press(task_item(), Point::new(0.0, 0.0));

    assert_eq!(sensor.motion(Point::new(3.0, 0.0)), Some(task_item()));
    assert!(sensor.is_active());
    assert!(sensor.motion(Point::new(40.0, 0.0)).is_none());
    assert!(sensor.release());
    assert!(!sensor.is_active());
}

#[test]
fn diagonal_travel_uses_euclidean_distance() {
    let mut sensor = PointerSensor::new(5.0);
    sensor.press(task_item(), Point::new(0.0, 0.0));
    assert!(sensor.motion(Point::new(3.0, 3.0)).is_none());
    assert!(sensor.motion(Point::new(3.0, 4.0)).is_some());
}

#[test]
fn new_press_resets_previous_drag() {
    let mut sensor = PointerSensor::new(0.0);
    sensor.press(task_item(), Point::default());
    assert!(sensor.motion(Point::default()).is_some());

    let column = DragItem::Column(crate::models::Column::new(Id(10), "Column 1"));
    sensor.press(column.clone(), Point::default());
    assert!(!sensor.is_active());
    assert_eq!(sensor.motion(Point::new(1.0, 1.0)), Some(column));
}

#[test]
fn negative_distance_is_clamped() {
    let mut sensor = PointerSensor::new(-4.0);
    sensor.press(task_item(), Point::new(2.0, 2.0));
    assert!(sensor.motion(Point::new(2.0, 2.0)).is_some());
}

#[test]
fn point_helpers() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(4.0, 6.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(b.offset_from(a), Point::new(3.0, 4.0));
}
