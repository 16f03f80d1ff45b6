use crate::models::Id;

/// Failures raised by [`crate::core::Board`] when an operation names an
/// entity that is not on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column not found: {0}")]
    ColumnNotFound(Id),
    #[error("task not found: {0}")]
    TaskNotFound(Id),
}
