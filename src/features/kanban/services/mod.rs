pub mod drag_controller;
pub mod drag_session;
pub mod pointer_sensor;

pub use drag_controller::*;
pub use drag_session::*;
pub use pointer_sensor::*;
