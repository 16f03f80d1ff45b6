pub mod column;
pub mod id;
pub mod task;

// Export the board entities for use throughout the app
pub use column::Column;
pub use id::Id;
pub use task::Task;
