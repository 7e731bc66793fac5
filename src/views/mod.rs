//! Pure data shaping for the dashboard widgets
//!
//! Everything here is a function of the loaded datasets and the current
//! selection; nothing touches the terminal.

pub mod chart;
pub mod gradient;
pub mod selection;
pub mod table;

pub use chart::{ChartModel, ChartSeries, LineStyle};
pub use selection::{date_label, readings_on, selectable_dates, step_index};
pub use table::TableModel;
