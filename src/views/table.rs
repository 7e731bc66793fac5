//! Table models for the daily summary and the per-day hourly view.

use super::gradient::{Shade, column_range, shade};
use crate::consts::dashboard_consts::{DATE_FORMAT, DATE_TIME_FORMAT};
use crate::dataset::{DailySummary, HourlyReading};
use crate::metrics::format_one_decimal;

pub const DAILY_HEADERS: [&str; 4] = [
    "Fecha",
    "Temp. Mínima (°C)",
    "Temp. Máxima (°C)",
    "Temp. Promedio (°C)",
];

pub const HOURLY_HEADERS: [&str; 4] = [
    "Fecha y Hora",
    "Temperatura (°C)",
    "Temp. Mínima (°C)",
    "Temp. Máxima (°C)",
];

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    /// Present on gradient-shaded numeric cells only.
    pub shade: Option<Shade>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: [&'static str; 4],
    pub rows: Vec<Vec<TableCell>>,
}

impl TableModel {
    pub fn daily(daily: &[DailySummary]) -> Self {
        let rows = build_rows(
            daily,
            |d| d.fecha.format(DATE_FORMAT).to_string(),
            [|d| d.temp_min_dia, |d| d.temp_max_dia, |d| d.temp_promedio],
        );
        Self {
            headers: DAILY_HEADERS,
            rows,
        }
    }

    /// Rows of one selected day; the date column is implied by the selection.
    pub fn hourly(readings: &[&HourlyReading]) -> Self {
        let rows = build_rows(
            readings,
            |r| r.fecha_hora.format(DATE_TIME_FORMAT).to_string(),
            [|r| r.temp, |r| r.temp_min, |r| r.temp_max],
        );
        Self {
            headers: HOURLY_HEADERS,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text rendering used by the summary mode.
    pub fn to_text(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].text.chars().count())
                    .chain(std::iter::once(self.headers[col].chars().count()))
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        let mut out = String::new();
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');
        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| pad(&cell.text, *w))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }
        out
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

/// First column is a label, the other three are shaded per column.
fn build_rows<T>(
    items: &[T],
    label: impl Fn(&T) -> String,
    values: [fn(&T) -> f64; 3],
) -> Vec<Vec<TableCell>> {
    let ranges: Vec<Option<(f64, f64)>> = values
        .iter()
        .map(|value| column_range(items.iter().map(value)))
        .collect();

    items
        .iter()
        .map(|item| {
            let mut cells = vec![TableCell {
                text: label(item),
                shade: None,
            }];
            for (value, range) in values.iter().zip(&ranges) {
                let v = value(item);
                cells.push(TableCell {
                    text: format_one_decimal(v),
                    shade: range.map(|(lo, hi)| shade(v, lo, hi)),
                });
            }
            cells
        })
        .collect()
}
