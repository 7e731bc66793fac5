//! Hourly and daily temperature records

use chrono::{NaiveDate, NaiveDateTime};

/// One timestamped temperature observation plus its hour's min/max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyReading {
    pub fecha_hora: NaiveDateTime,
    pub fecha: NaiveDate,
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// One day's aggregated min/max/average temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySummary {
    pub fecha: NaiveDate,
    pub temp_min_dia: f64,
    pub temp_max_dia: f64,
    pub temp_promedio: f64,
}

/// Both collections as loaded from disk. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    hourly: Vec<HourlyReading>,
    daily: Vec<DailySummary>,
}

impl Datasets {
    pub fn new(hourly: Vec<HourlyReading>, daily: Vec<DailySummary>) -> Self {
        Self { hourly, daily }
    }

    pub fn hourly(&self) -> &[HourlyReading] {
        &self.hourly
    }

    pub fn daily(&self) -> &[DailySummary] {
        &self.daily
    }

    /// The first daily row, i.e. the earliest forecast date.
    pub fn today(&self) -> Option<&DailySummary> {
        self.daily.first()
    }
}
