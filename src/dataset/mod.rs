//! Input datasets: model, Feather loader, errors and the process-wide cache.

pub mod cache;
pub mod error;
pub mod loader;
pub mod model;

pub use cache::DatasetCache;
pub use error::LoadError;
pub use loader::{DatasetSource, FeatherSource};
pub use model::{DailySummary, Datasets, HourlyReading};
