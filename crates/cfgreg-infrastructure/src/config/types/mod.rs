//! Configuration types module

pub mod app;
pub mod logging;
pub mod registry;

// Re-export main types
pub use app::*;
