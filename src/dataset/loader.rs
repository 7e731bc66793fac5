//! Feather (Arrow IPC) loading of the two dashboard sources.

use super::error::LoadError;
use super::model::{DailySummary, Datasets, HourlyReading};
use crate::consts::dashboard_consts::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use log::{debug, info};
use polars::prelude::*;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Days between 0001-01-01 (CE day 1) and 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Anything that can produce both dashboard collections.
pub trait DatasetSource {
    /// Identifies the source for cache keying and log lines.
    fn identity(&self) -> String;

    fn load(&self) -> Result<Datasets, LoadError>;
}

/// The two Feather files written by the data-generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatherSource {
    hourly_path: PathBuf,
    daily_path: PathBuf,
}

impl FeatherSource {
    pub fn new(hourly_path: impl Into<PathBuf>, daily_path: impl Into<PathBuf>) -> Self {
        Self {
            hourly_path: hourly_path.into(),
            daily_path: daily_path.into(),
        }
    }

    pub fn hourly_path(&self) -> &Path {
        &self.hourly_path
    }

    pub fn daily_path(&self) -> &Path {
        &self.daily_path
    }
}

impl DatasetSource for FeatherSource {
    fn identity(&self) -> String {
        format!(
            "feather:{}+{}",
            self.hourly_path.display(),
            self.daily_path.display()
        )
    }

    fn load(&self) -> Result<Datasets, LoadError> {
        let hourly_frame = read_feather(&self.hourly_path)?;
        let daily_frame = read_feather(&self.daily_path)?;

        let hourly = hourly_readings(&hourly_frame)?;
        let daily = daily_summaries(&daily_frame)?;
        info!(
            "Loaded {} hourly readings and {} daily summaries",
            hourly.len(),
            daily.len()
        );

        Ok(Datasets::new(hourly, daily))
    }
}

fn read_feather(path: &Path) -> Result<DataFrame, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::MissingSource {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;
    let frame = IpcReader::new(file).finish()?;
    debug!("Read {} rows from {}", frame.height(), path.display());
    Ok(frame)
}

/// Decodes the hourly frame (`fecha_hora`, `fecha`, `temp`, `temp_min`, `temp_max`).
pub fn hourly_readings(frame: &DataFrame) -> Result<Vec<HourlyReading>, LoadError> {
    const SOURCE: &str = "hourly";
    if frame.height() == 0 {
        return Err(LoadError::Empty(SOURCE));
    }

    let fecha_hora = timestamp_column(frame, SOURCE, "fecha_hora")?;
    let fecha = date_column(frame, SOURCE, "fecha")?;
    let temp = float_column(frame, SOURCE, "temp")?;
    let temp_min = float_column(frame, SOURCE, "temp_min")?;
    let temp_max = float_column(frame, SOURCE, "temp_max")?;

    Ok((0..frame.height())
        .map(|row| HourlyReading {
            fecha_hora: fecha_hora[row],
            fecha: fecha[row],
            temp: temp[row],
            temp_min: temp_min[row],
            temp_max: temp_max[row],
        })
        .collect())
}

/// Decodes the daily frame (`fecha`, `temp_min_dia`, `temp_max_dia`, `temp_promedio`).
pub fn daily_summaries(frame: &DataFrame) -> Result<Vec<DailySummary>, LoadError> {
    const SOURCE: &str = "daily";
    if frame.height() == 0 {
        return Err(LoadError::Empty(SOURCE));
    }

    let fecha = date_column(frame, SOURCE, "fecha")?;
    let temp_min_dia = float_column(frame, SOURCE, "temp_min_dia")?;
    let temp_max_dia = float_column(frame, SOURCE, "temp_max_dia")?;
    let temp_promedio = float_column(frame, SOURCE, "temp_promedio")?;

    Ok((0..frame.height())
        .map(|row| DailySummary {
            fecha: fecha[row],
            temp_min_dia: temp_min_dia[row],
            temp_max_dia: temp_max_dia[row],
            temp_promedio: temp_promedio[row],
        })
        .collect())
}

/// Layouts accepted for timestamps stored as text, tried in order.
const TIMESTAMP_TEXT_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Wall-clock timestamps. Timezone-aware columns are shown in their own zone.
fn timestamp_column(
    frame: &DataFrame,
    source_name: &'static str,
    column: &'static str,
) -> Result<Vec<NaiveDateTime>, LoadError> {
    let values = frame.column(column)?;
    match values.dtype() {
        DataType::String => text_column(values, source_name, column, parse_timestamp_text),
        DataType::Datetime(_, Some(tz)) => {
            let zone: Tz = tz.as_str().parse().map_err(|e| LoadError::InvalidValue {
                source_name,
                column,
                reason: format!("unknown time zone '{}': {}", tz, e),
            })?;
            let millis = values
                .cast(&DataType::Datetime(TimeUnit::Milliseconds, Some(tz.clone())))?
                .cast(&DataType::Int64)?;
            epoch_millis(&millis, source_name, column, |utc| {
                utc.with_timezone(&zone).naive_local()
            })
        }
        _ => {
            let millis = values
                .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
                .cast(&DataType::Int64)?;
            epoch_millis(&millis, source_name, column, |utc| utc.naive_utc())
        }
    }
}

fn epoch_millis(
    millis: &Column,
    source_name: &'static str,
    column: &'static str,
    wall_clock: impl Fn(DateTime<Utc>) -> NaiveDateTime,
) -> Result<Vec<NaiveDateTime>, LoadError> {
    millis
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.ok_or_else(|| null_value(source_name, column, row))?;
            DateTime::from_timestamp_millis(value)
                .map(&wall_clock)
                .ok_or_else(|| LoadError::InvalidValue {
                    source_name,
                    column,
                    reason: format!("timestamp out of range at row {}", row),
                })
        })
        .collect()
}

fn date_column(
    frame: &DataFrame,
    source_name: &'static str,
    column: &'static str,
) -> Result<Vec<NaiveDate>, LoadError> {
    let values = frame.column(column)?;
    match values.dtype() {
        DataType::String => return text_column(values, source_name, column, parse_date_text),
        DataType::Datetime(..) => {
            return Ok(timestamp_column(frame, source_name, column)?
                .into_iter()
                .map(|timestamp| timestamp.date())
                .collect());
        }
        _ => {}
    }

    let days = values.cast(&DataType::Date)?.cast(&DataType::Int32)?;
    days.i32()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.ok_or_else(|| null_value(source_name, column, row))?;
            UNIX_EPOCH_DAYS_FROM_CE
                .checked_add(value)
                .and_then(NaiveDate::from_num_days_from_ce_opt)
                .ok_or_else(|| LoadError::InvalidValue {
                    source_name,
                    column,
                    reason: format!("date out of range at row {}", row),
                })
        })
        .collect()
}

fn text_column<T>(
    values: &Column,
    source_name: &'static str,
    column: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Vec<T>, LoadError> {
    values
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.ok_or_else(|| null_value(source_name, column, row))?;
            parse(value.trim()).ok_or_else(|| LoadError::InvalidValue {
                source_name,
                column,
                reason: format!("unrecognized value '{}' at row {}", value, row),
            })
        })
        .collect()
}

/// RFC 3339 text keeps its own offset's wall-clock time.
fn parse_timestamp_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.naive_local());
    }
    TIMESTAMP_TEXT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| parse_timestamp_text(text).map(|timestamp| timestamp.date()))
}

fn float_column(
    frame: &DataFrame,
    source_name: &'static str,
    column: &'static str,
) -> Result<Vec<f64>, LoadError> {
    let values = frame.column(column)?.cast(&DataType::Float64)?;

    values
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| null_value(source_name, column, row)))
        .collect()
}

fn null_value(source_name: &'static str, column: &'static str, row: usize) -> LoadError {
    LoadError::InvalidValue {
        source_name,
        column,
        reason: format!("null value at row {}", row),
    }
}
