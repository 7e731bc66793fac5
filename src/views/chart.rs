//! Chart models: series, min-max band, axes and hover text.
//!
//! The models are plain data so the render pass can be recomputed from the
//! datasets and the current cursor alone.

use crate::consts::dashboard_consts::{DATE_FORMAT, DATE_TIME_FORMAT, colors};
use crate::dataset::{DailySummary, HourlyReading};
use crate::metrics::format_celsius;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use ratatui::style::Color;

/// How a series line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend label.
    pub name: &'static str,
    /// Short label used in hover text.
    pub hover_name: &'static str,
    pub color: Color,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

/// Shaded area between a lower and an upper bound at each x.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub name: &'static str,
    pub color: Color,
    /// `(x, lower, upper)`
    pub bounds: Vec<(f64, f64, f64)>,
}

impl Band {
    /// Fills the band with points on a `columns` x `rows` grid over the given
    /// bounds, interpolating linearly between consecutive x values.
    pub fn raster(
        &self,
        columns: usize,
        rows: usize,
        x_bounds: [f64; 2],
        y_bounds: [f64; 2],
    ) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        if self.bounds.is_empty() || columns == 0 || rows == 0 {
            return points;
        }
        let x_step = (x_bounds[1] - x_bounds[0]) / columns as f64;
        let y_step = (y_bounds[1] - y_bounds[0]) / rows as f64;
        if !(x_step.is_finite() && y_step.is_finite() && x_step > 0.0 && y_step > 0.0) {
            return points;
        }

        // bounds outside the plot are clamped to it, non-finite columns are skipped
        let clamp_y = |y: f64| y.clamp(y_bounds[0], y_bounds[1]);
        let mut push_column = |x: f64, lower: f64, upper: f64| {
            let (lower, upper) = (clamp_y(lower), clamp_y(upper));
            if !x.is_finite() || lower.is_nan() || upper.is_nan() {
                return;
            }
            let mut y = lower;
            while y <= upper {
                points.push((x, y));
                y += y_step;
            }
            points.push((x, upper));
        };

        if let [(x, lower, upper)] = self.bounds[..] {
            push_column(x, lower, upper);
            return points;
        }

        for pair in self.bounds.windows(2) {
            let (x0, lo0, hi0) = pair[0];
            let (x1, lo1, hi1) = pair[1];
            let (lo0, hi0, lo1, hi1) = (clamp_y(lo0), clamp_y(hi0), clamp_y(lo1), clamp_y(hi1));
            let mut x = x0.max(x_bounds[0]);
            let end = x1.min(x_bounds[1]);
            if !x.is_finite() || !end.is_finite() {
                continue;
            }
            while x < end {
                let t = (x - x0) / (x1 - x0);
                push_column(x, lo0 + (lo1 - lo0) * t, hi0 + (hi1 - hi0) * t);
                x += x_step;
            }
        }
        if let Some(&(x, lower, upper)) = self.bounds.last() {
            push_column(x, lower, upper);
        }
        points
    }
}

/// One chart: an optional band, line series and axis decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub band: Option<Band>,
    pub series: Vec<ChartSeries>,
    /// Hover label of each x position (date or date+time).
    pub x_labels: Vec<String>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub axis_x_labels: Vec<String>,
    pub axis_y_labels: Vec<String>,
}

impl ChartModel {
    pub fn daily(daily: &[DailySummary]) -> Self {
        let xs: Vec<f64> = daily.iter().map(|d| day_x(d.fecha)).collect();
        let series_of = |f: fn(&DailySummary) -> f64| -> Vec<(f64, f64)> {
            xs.iter().zip(daily).map(|(x, d)| (*x, f(d))).collect()
        };

        let band = Band {
            name: "Rango Min-Max",
            color: colors::RANGE_BAND,
            bounds: xs
                .iter()
                .zip(daily)
                .map(|(x, d)| (*x, d.temp_min_dia, d.temp_max_dia))
                .collect(),
        };

        let series = vec![
            ChartSeries {
                name: "Temperatura Máxima",
                hover_name: "Máxima",
                color: colors::MAX_TEMP,
                style: LineStyle::Solid,
                points: series_of(|d| d.temp_max_dia),
            },
            ChartSeries {
                name: "Temperatura Mínima",
                hover_name: "Mínima",
                color: colors::MIN_TEMP,
                style: LineStyle::Solid,
                points: series_of(|d| d.temp_min_dia),
            },
            ChartSeries {
                name: "Temperatura Promedio",
                hover_name: "Promedio",
                color: colors::AVG_TEMP,
                style: LineStyle::Dotted,
                points: series_of(|d| d.temp_promedio),
            },
        ];

        let x_bounds = padded_x_bounds(&xs, 0.5);
        Self {
            title: "📊 Pronóstico de Temperatura - Próximos 5 Días",
            x_title: "Fecha",
            y_title: "Temperatura (°C)",
            band: Some(band),
            y_bounds: y_bounds(&series),
            series,
            x_labels: daily
                .iter()
                .map(|d| d.fecha.format(DATE_FORMAT).to_string())
                .collect(),
            axis_x_labels: axis_labels(x_bounds, |x| {
                NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default()
            }),
            x_bounds,
            axis_y_labels: Vec::new(),
        }
        .with_y_labels()
    }

    pub fn hourly(hourly: &[HourlyReading]) -> Self {
        let xs: Vec<f64> = hourly.iter().map(|r| hour_x(r.fecha_hora)).collect();
        let series_of = |f: fn(&HourlyReading) -> f64| -> Vec<(f64, f64)> {
            xs.iter().zip(hourly).map(|(x, r)| (*x, f(r))).collect()
        };

        let series = vec![
            ChartSeries {
                name: "Temperatura",
                hover_name: "Temperatura",
                color: colors::HOURLY_TEMP,
                style: LineStyle::Solid,
                points: series_of(|r| r.temp),
            },
            ChartSeries {
                name: "Máxima",
                hover_name: "Máxima",
                color: colors::MAX_TEMP,
                style: LineStyle::Dotted,
                points: series_of(|r| r.temp_max),
            },
            ChartSeries {
                name: "Mínima",
                hover_name: "Mínima",
                color: colors::MIN_TEMP,
                style: LineStyle::Dotted,
                points: series_of(|r| r.temp_min),
            },
        ];

        let x_bounds = padded_x_bounds(&xs, 1.0);
        Self {
            title: "🕐 Evolución de Temperatura por Hora",
            x_title: "Fecha y Hora",
            y_title: "Temperatura (°C)",
            band: None,
            y_bounds: y_bounds(&series),
            series,
            x_labels: hourly
                .iter()
                .map(|r| r.fecha_hora.format(DATE_TIME_FORMAT).to_string())
                .collect(),
            axis_x_labels: axis_labels(x_bounds, |x| {
                DateTime::from_timestamp((x * 3600.0).round() as i64, 0)
                    .map(|dt| dt.naive_utc().format("%m-%d %H:%M").to_string())
                    .unwrap_or_default()
            }),
            x_bounds,
            axis_y_labels: Vec::new(),
        }
        .with_y_labels()
    }

    fn with_y_labels(mut self) -> Self {
        self.axis_y_labels = axis_labels(self.y_bounds, |y| format!("{:.0}°C", y));
        self
    }

    /// Number of x positions the cursor can visit.
    pub fn len(&self) -> usize {
        self.x_labels.len()
    }

    pub fn x_at(&self, index: usize) -> Option<f64> {
        self.series
            .first()
            .and_then(|s| s.points.get(index))
            .map(|(x, _)| *x)
    }

    /// Per-series hover text at `index`, e.g. `Máxima · 2024-01-10 · 20.0°C`.
    pub fn hover_text(&self, index: usize) -> Vec<String> {
        let Some(label) = self.x_labels.get(index) else {
            return Vec::new();
        };
        self.series
            .iter()
            .filter_map(|s| {
                s.points
                    .get(index)
                    .map(|(_, y)| format!("{} · {} · {}", s.hover_name, label, format_celsius(*y)))
            })
            .collect()
    }

    /// All series at `index` on one line, the x label shown once.
    pub fn unified_hover(&self, index: usize) -> Option<String> {
        let label = self.x_labels.get(index)?;
        let values: Vec<String> = self
            .series
            .iter()
            .filter_map(|s| {
                s.points
                    .get(index)
                    .map(|(_, y)| format!("{} {}", s.hover_name, format_celsius(*y)))
            })
            .collect();
        Some(format!("{} │ {}", label, values.join(" │ ")))
    }

    /// Vertical line at the cursor position spanning the y axis.
    pub fn cursor_line(&self, index: usize) -> Option<[(f64, f64); 2]> {
        let x = self.x_at(index)?;
        Some([(x, self.y_bounds[0]), (x, self.y_bounds[1])])
    }
}

fn day_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Hours since the Unix epoch.
fn hour_x(timestamp: NaiveDateTime) -> f64 {
    timestamp.and_utc().timestamp() as f64 / 3600.0
}

fn padded_x_bounds(xs: &[f64], pad: f64) -> [f64; 2] {
    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if hi - lo < f64::EPSILON {
        [lo - pad, hi + pad]
    } else {
        [lo, hi]
    }
}

fn y_bounds(series: &[ChartSeries]) -> [f64; 2] {
    let values = series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y));
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    [lo.floor() - 1.0, hi.ceil() + 1.0]
}

/// Three labels: both ends and the middle, which is how ratatui spaces them.
fn axis_labels(bounds: [f64; 2], format: impl Fn(f64) -> String) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![format(bounds[0]), format(mid), format(bounds[1])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn summary(d: u32, min: f64, max: f64, avg: f64) -> DailySummary {
        DailySummary {
            fecha: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            temp_min_dia: min,
            temp_max_dia: max,
            temp_promedio: avg,
        }
    }

    fn reading(d: u32, h: u32, temp: f64) -> HourlyReading {
        let fecha = NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        HourlyReading {
            fecha_hora: fecha.and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap()),
            fecha,
            temp,
            temp_min: temp - 0.5,
            temp_max: temp + 0.5,
        }
    }

    fn daily_fixture() -> Vec<DailySummary> {
        vec![
            summary(10, 10.0, 20.0, 15.0),
            summary(11, 8.3, 22.7, 14.1),
            summary(12, 11.0, 18.0, 14.4),
        ]
    }

    #[test]
    fn test_band_bounds_equal_daily_min_max() {
        let daily = daily_fixture();
        let chart = ChartModel::daily(&daily);
        let band = chart.band.unwrap();
        assert_eq!(band.bounds.len(), daily.len());
        for ((_, lower, upper), d) in band.bounds.iter().zip(&daily) {
            assert_eq!(*lower, d.temp_min_dia);
            assert_eq!(*upper, d.temp_max_dia);
        }
    }

    #[test]
    fn test_band_raster_stays_within_bounds() {
        let chart = ChartModel::daily(&daily_fixture());
        let band = chart.band.as_ref().unwrap();
        let points = band.raster(40, 20, chart.x_bounds, chart.y_bounds);
        assert!(!points.is_empty());
        for (x, y) in points {
            assert!(x >= chart.x_bounds[0] && x <= chart.x_bounds[1]);
            assert!((8.3..=22.7).contains(&y), "y={} escaped the band", y);
        }
    }

    #[test]
    fn test_single_day_band_is_one_column() {
        let chart = ChartModel::daily(&[summary(10, 10.0, 20.0, 15.0)]);
        let band = chart.band.as_ref().unwrap();
        let points = band.raster(10, 10, chart.x_bounds, chart.y_bounds);
        let x = chart.x_at(0).unwrap();
        assert!(points.iter().all(|(px, _)| *px == x));
        assert!(points.contains(&(x, 20.0)));
        assert!(points.contains(&(x, 10.0)));
    }

    #[test]
    fn test_band_raster_skips_infinite_bounds() {
        let y_bounds = [0.0, 6.0];
        for bounds in [
            vec![(0.0, 1.0, 5.0), (1.0, f64::NEG_INFINITY, 5.0)],
            vec![(0.0, f64::NEG_INFINITY, 5.0), (1.0, 1.0, 5.0)],
            vec![(0.0, 1.0, f64::INFINITY), (1.0, f64::NAN, 5.0)],
        ] {
            let band = Band {
                name: "Rango Min-Max",
                color: colors::RANGE_BAND,
                bounds,
            };
            let points = band.raster(10, 10, [0.0, 1.0], y_bounds);
            assert!(points.len() < 1_000, "{} points", points.len());
            for (x, y) in points {
                assert!(x.is_finite() && y.is_finite());
                assert!((y_bounds[0]..=y_bounds[1]).contains(&y), "y={}", y);
            }
        }

        let band = Band {
            name: "Rango Min-Max",
            color: colors::RANGE_BAND,
            bounds: vec![(0.0, 1.0, 5.0), (1.0, f64::NEG_INFINITY, 5.0)],
        };
        let points = band.raster(10, 10, [0.0, 1.0], y_bounds);
        // the infinite lower bound is drawn at the bottom of the plot
        assert!(points.contains(&(1.0, 0.0)));
        assert!(points.contains(&(1.0, 5.0)));
    }

    #[test]
    fn test_daily_hover_text() {
        let chart = ChartModel::daily(&daily_fixture());
        assert_eq!(
            chart.hover_text(1),
            [
                "Máxima · 2024-01-11 · 22.7°C",
                "Mínima · 2024-01-11 · 8.3°C",
                "Promedio · 2024-01-11 · 14.1°C",
            ]
        );
        assert!(chart.hover_text(9).is_empty());
    }

    #[test]
    fn test_hourly_hover_text_has_time() {
        let chart = ChartModel::hourly(&[reading(10, 0, 12.04), reading(10, 3, 13.0)]);
        assert_eq!(
            chart.unified_hover(0).unwrap(),
            "2024-01-10 00:00 │ Temperatura 12.0°C │ Máxima 12.5°C │ Mínima 11.5°C"
        );
        assert_eq!(chart.len(), 2);
    }

    #[test]
    fn test_y_bounds_cover_all_series() {
        let chart = ChartModel::daily(&daily_fixture());
        assert_eq!(chart.y_bounds, [7.0, 24.0]);
        assert_eq!(chart.axis_y_labels, ["7°C", "16°C", "24°C"]);
    }

    #[test]
    fn test_daily_axis_labels_are_dates() {
        let chart = ChartModel::daily(&daily_fixture());
        assert_eq!(
            chart.axis_x_labels,
            ["2024-01-10", "2024-01-11", "2024-01-12"]
        );
    }

    #[test]
    fn test_cursor_line_spans_y_axis() {
        let chart = ChartModel::daily(&daily_fixture());
        let [(x0, y0), (x1, y1)] = chart.cursor_line(2).unwrap();
        assert_eq!(x0, x1);
        assert_eq!([y0, y1], chart.y_bounds);
        assert!(chart.cursor_line(3).is_none());
    }
}
