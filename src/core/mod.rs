pub mod board;
pub mod ids;
pub mod reorder;

pub use board::Board;
pub use ids::{random_u32, IdSource};
pub use reorder::move_item;
