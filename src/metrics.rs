//! Scalar metrics derived from the loaded datasets.

use crate::consts::dashboard_consts::{DATE_FORMAT, DATE_TIME_FORMAT};
use crate::dataset::{DailySummary, Datasets};
use chrono::{NaiveDate, NaiveDateTime};

/// `15.0°C`
pub fn format_celsius(value: f64) -> String {
    format!("{}°C", format_one_decimal(value))
}

/// `15.0`, rounded from the exact binary value (19.45 shows as `19.4`).
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// The value a reader sees once it is formatted to one decimal.
fn displayed(value: f64) -> f64 {
    format_one_decimal(value).parse().unwrap_or(value)
}

/// Metrics of the first daily row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodayMetrics {
    pub fecha: NaiveDate,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    /// Difference of the displayed max and min.
    pub amplitude: f64,
}

impl TodayMetrics {
    pub fn from_summary(summary: &DailySummary) -> Self {
        Self {
            fecha: summary.fecha,
            average: summary.temp_promedio,
            max: summary.temp_max_dia,
            min: summary.temp_min_dia,
            amplitude: displayed(summary.temp_max_dia) - displayed(summary.temp_min_dia),
        }
    }

    /// Label/value pairs in panel order.
    pub fn labeled_values(&self) -> [(&'static str, String); 4] {
        [
            ("🌡️ Temperatura Promedio", format_celsius(self.average)),
            ("🔥 Temperatura Máxima", format_celsius(self.max)),
            ("❄️ Temperatura Mínima", format_celsius(self.min)),
            ("📊 Amplitud Térmica", format_celsius(self.amplitude)),
        ]
    }

    /// `dd/mm/YYYY`
    pub fn short_date(&self) -> String {
        self.fecha.format("%d/%m/%Y").to_string()
    }
}

/// Sidebar facts about the loaded data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetInfo {
    pub last_update: NaiveDateTime,
    pub record_count: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl DatasetInfo {
    pub fn last_update_text(&self) -> String {
        self.last_update.format(DATE_TIME_FORMAT).to_string()
    }

    pub fn period_text(&self) -> String {
        format!(
            "{} a {}",
            self.first_date.format(DATE_FORMAT),
            self.last_date.format(DATE_FORMAT)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMetrics {
    pub info: DatasetInfo,
    pub today: TodayMetrics,
}

impl DashboardMetrics {
    /// Returns `None` when either collection is empty.
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let last_update = datasets.hourly().iter().map(|r| r.fecha_hora).max()?;
        let first_date = datasets.daily().iter().map(|d| d.fecha).min()?;
        let last_date = datasets.daily().iter().map(|d| d.fecha).max()?;
        let today = TodayMetrics::from_summary(datasets.today()?);

        Some(Self {
            info: DatasetInfo {
                last_update,
                record_count: datasets.hourly().len(),
                first_date,
                last_date,
            },
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::HourlyReading;
    use chrono::NaiveTime;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn reading(d: u32, h: u32) -> HourlyReading {
        HourlyReading {
            fecha_hora: day(d).and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap()),
            fecha: day(d),
            temp: 15.0,
            temp_min: 14.0,
            temp_max: 16.0,
        }
    }

    fn summary(d: u32, min: f64, max: f64, avg: f64) -> DailySummary {
        DailySummary {
            fecha: day(d),
            temp_min_dia: min,
            temp_max_dia: max,
            temp_promedio: avg,
        }
    }

    #[test]
    fn test_single_day_metrics() {
        let today = TodayMetrics::from_summary(&summary(10, 10.0, 20.0, 15.0));
        let values: Vec<String> = today.labeled_values().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, ["15.0°C", "20.0°C", "10.0°C", "10.0°C"]);
        assert_eq!(today.short_date(), "10/01/2024");
    }

    #[test]
    fn test_amplitude_matches_displayed_values() {
        for (min, max) in [
            (9.96, 20.04),
            (-3.35, 7.25),
            (0.04, 0.06),
            (12.349, 30.951),
            (0.15, 19.45),
        ] {
            let today = TodayMetrics::from_summary(&summary(10, min, max, 0.0));
            let shown_max: f64 = format_one_decimal(today.max).parse().unwrap();
            let shown_min: f64 = format_one_decimal(today.min).parse().unwrap();
            assert_eq!(
                format_one_decimal(today.amplitude),
                format_one_decimal(shown_max - shown_min),
                "min={} max={}",
                min,
                max
            );
        }
    }

    #[test]
    fn test_dataset_info_scenario() {
        let datasets = Datasets::new(
            vec![reading(10, 0), reading(10, 12), reading(11, 0)],
            vec![summary(10, 10.0, 20.0, 15.0), summary(11, 9.0, 21.0, 14.0)],
        );
        let metrics = DashboardMetrics::compute(&datasets).unwrap();
        assert_eq!(metrics.info.last_update_text(), "2024-01-11 00:00");
        assert_eq!(metrics.info.record_count, 3);
        assert_eq!(metrics.info.period_text(), "2024-01-10 a 2024-01-11");
    }

    #[test]
    fn test_last_update_is_max_not_last() {
        let datasets = Datasets::new(
            vec![reading(11, 6), reading(10, 0)],
            vec![summary(10, 1.0, 2.0, 1.5)],
        );
        let metrics = DashboardMetrics::compute(&datasets).unwrap();
        assert_eq!(metrics.info.last_update_text(), "2024-01-11 06:00");
    }

    #[test]
    fn test_empty_datasets_have_no_metrics() {
        let datasets = Datasets::new(Vec::new(), vec![summary(10, 1.0, 2.0, 1.5)]);
        assert!(DashboardMetrics::compute(&datasets).is_none());
    }

    #[test]
    fn test_format_celsius_rounds_to_one_decimal() {
        assert_eq!(format_celsius(15.04), "15.0°C");
        assert_eq!(format_celsius(15.06), "15.1°C");
    }

    #[test]
    fn test_halfway_values_round_like_printf() {
        assert_eq!(format_one_decimal(19.45), "19.4");
        assert_eq!(format_one_decimal(0.15), "0.1");
        assert_eq!(format_celsius(-19.45), "-19.4°C");
    }

    #[test]
    fn test_amplitude_uses_displayed_extremes() {
        let today = TodayMetrics::from_summary(&summary(10, 0.15, 19.45, 9.8));
        let values: Vec<String> = today.labeled_values().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, ["9.8°C", "19.4°C", "0.1°C", "19.3°C"]);
    }
}
