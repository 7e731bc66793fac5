//! Date selector for the hourly table.

use crate::consts::dashboard_consts::DATE_FORMAT;
use crate::dataset::HourlyReading;
use chrono::NaiveDate;

/// Distinct dates of the hourly collection, in order of first appearance.
pub fn selectable_dates(hourly: &[HourlyReading]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    for reading in hourly {
        if !dates.contains(&reading.fecha) {
            dates.push(reading.fecha);
        }
    }
    dates
}

/// Readings whose date equals `date`, preserving timestamp order.
pub fn readings_on(hourly: &[HourlyReading], date: NaiveDate) -> Vec<&HourlyReading> {
    hourly.iter().filter(|r| r.fecha == date).collect()
}

/// `YYYY-MM-DD`
pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Moves a selector index by `delta`, clamped to `[0, len)`.
pub fn step_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}
