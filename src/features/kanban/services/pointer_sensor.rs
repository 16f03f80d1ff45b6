//! Pointer activation: a press only becomes a drag once the pointer has
//! travelled far enough, so plain clicks still reach the click handlers.

#[cfg(test)]
#[path = "pointer_sensor_test.rs"]
mod pointer_sensor_test;

use super::drag_controller::DragItem;

/// Viewport position of the pointer, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone)]
pub struct PointerSensor {
    activation_distance: f64,
    pressed: Option<(DragItem, Point)>,
    active: bool,
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance: activation_distance.max(0.0),
            pressed: None,
            active: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Arms the sensor for `item`; a previous press is forgotten.
    pub fn press(&mut self, item: DragItem, at: Point) {
        self.pressed = Some((item, at));
        self.active = false;
    }

    /// Feeds a pointer move. Yields the pressed item exactly once, on the
    /// first move that reaches the activation distance.
    pub fn motion(&mut self, at: Point) -> Option<DragItem> {
        if self.active {
            return None;
        }
        let (item, origin) = self.pressed.as_ref()?;
        if origin.distance_to(at) < self.activation_distance {
            return None;
        }
        self.active = true;
        Some(item.clone())
    }

    /// Disarms the sensor and reports whether the press had turned into a drag.
    pub fn release(&mut self) -> bool {
        self.pressed = None;
        std::mem::take(&mut self.active)
    }
}
