//! Dashboard screen
//!
//! Split into a per-pass state, key handling and rendering components

pub mod components;
pub mod input;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::{DashboardState, Selection};
