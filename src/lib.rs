pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod models;
pub mod utils;

pub use config::BoardConfig;
pub use error::BoardError;
