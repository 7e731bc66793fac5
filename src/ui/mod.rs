// Module declarations
mod app;
pub mod dashboard;
mod error_screen;
// Re-exports for external use
pub use app::{App, Screen, UIConfig, run};
