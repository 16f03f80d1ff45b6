use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use crate::core::Board;
use crate::features::kanban::services::{
    DragItem, DragOutcome, DragSession, HoverHit, Point, COLUMN_ID_ATTR, TASK_ID_ATTR,
};
use crate::models::Id;

/// Drag state shared by the board, its columns, its task cards and the overlay.
#[derive(Clone, Copy)]
pub struct DragHook {
    board: RwSignal<Board>,
    session: StoredValue<DragSession>,
    pointer: RwSignal<Point>,
    grab_offset: RwSignal<Point>,
    pub active: RwSignal<Option<DragItem>>,
}

pub fn use_drag(board: RwSignal<Board>, activation_distance: f64) -> DragHook {
    let hook = DragHook {
        board,
        session: StoredValue::new(DragSession::new(activation_distance)),
        pointer: RwSignal::new(Point::default()),
        grab_offset: RwSignal::new(Point::default()),
        active: RwSignal::new(None),
    };

    // Moves and releases are tracked on the window so a drag keeps working
    // when the pointer leaves the element it started on.
    let _ = window_event_listener(ev::pointermove, move |e| hook.on_move(pointer_point(&e)));
    let _ = window_event_listener(ev::pointerup, move |_| hook.on_release());
    let _ = window_event_listener(ev::pointercancel, move |_| hook.on_cancel());

    hook
}

fn pointer_point(e: &ev::PointerEvent) -> Point {
    Point::new(f64::from(e.client_x()), f64::from(e.client_y()))
}

// Drop targets come from hit-testing the pointer position, so they do not
// depend on which element holds pointer capture.
fn hit_at(at: Point) -> HoverHit {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.element_from_point(at.x as f32, at.y as f32))
    else {
        return HoverHit::default();
    };
    let task = closest_attr(&el, TASK_ID_ATTR);
    let column = closest_attr(&el, COLUMN_ID_ATTR);
    HoverHit::from_attributes(task.as_deref(), column.as_deref())
}

fn closest_attr(el: &web_sys::Element, attr: &str) -> Option<String> {
    el.closest(&format!("[{}]", attr)).ok().flatten()?.get_attribute(attr)
}

impl DragHook {
    /// Arms the drag from a primary-button press on a draggable element.
    pub fn press(&self, item: DragItem, e: &ev::PointerEvent) {
        if e.button() != 0 {
            return;
        }
        let at = pointer_point(e);
        let target = e
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        let offset = target
            .as_ref()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                at.offset_from(Point::new(rect.left(), rect.top()))
            })
            .unwrap_or_default();
        // Touch and pen presses capture the pointer implicitly; let it go so
        // hover and leave events keep reaching the other elements.
        if let Some(el) = target {
            let _ = el.release_pointer_capture(e.pointer_id());
        }

        self.grab_offset.set(offset);
        self.pointer.set(at);
        self.session.update_value(|s| s.press(item, at));
    }

    pub fn is_dragging(&self) -> bool {
        self.active.with(Option::is_some)
    }

    /// Whether `id` is the element being dragged; its resting place renders
    /// as a placeholder.
    pub fn is_active(&self, id: Id) -> bool {
        self.active.with(|a| a.as_ref().map(DragItem::id) == Some(id))
    }

    /// Overlay top-left corner, keeping the grab point under the pointer.
    pub fn overlay_position(&self) -> Point {
        self.pointer.get().offset_from(self.grab_offset.get())
    }

    pub fn consume_click(&self) -> bool {
        let mut suppressed = false;
        self.session.update_value(|s| suppressed = s.consume_click());
        suppressed
    }

    fn on_move(&self, at: Point) {
        if !self.session.with_value(DragSession::is_armed) {
            return;
        }
        self.pointer.set(at);
        let mut started = false;
        self.session.update_value(|s| started = s.motion(at));
        if started {
            self.sync_active();
        }
        if self.session.with_value(DragSession::is_dragging) {
            let hit = hit_at(at);
            self.apply(|s, b| s.hover(b, hit));
        }
    }

    fn on_release(&self) {
        if !self.session.with_value(DragSession::is_armed) {
            return;
        }
        self.apply(DragSession::release);
        self.sync_active();
    }

    fn on_cancel(&self) {
        self.session.update_value(DragSession::cancel);
        self.sync_active();
    }

    // Runs a session step against the board in place; subscribers are only
    // notified when the step changed the board.
    fn apply(&self, step: impl FnOnce(&mut DragSession, &mut Board) -> DragOutcome) {
        let session = self.session;
        self.board.maybe_update(|b| {
            let mut outcome = DragOutcome::Ignored;
            session.update_value(|s| outcome = step(s, b));
            outcome.changed()
        });
    }

    fn sync_active(&self) {
        let now = self.session.with_value(|s| s.active().cloned());
        self.active.maybe_update(|current| {
            if *current == now {
                return false;
            }
            *current = now;
            true
        });
    }
}
