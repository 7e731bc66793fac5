//! Summary mode execution
//!
//! One render pass printed to stdout instead of drawn in a terminal UI.

use super::SessionData;
use crate::cli_messages::print_section;
use crate::consts::dashboard_consts::FOOTER_CAPTION;
use crate::dataset::{DatasetCache, LoadError};
use crate::print_cmd_error;
use crate::ui::dashboard::components::sidebar::info_lines;
use crate::ui::dashboard::{DashboardState, Selection};
use log::{error, info};
use std::error::Error;

/// Builds every printed section of the summary, title first.
pub fn summary_sections(state: &DashboardState) -> Vec<(String, Vec<String>)> {
    let today = &state.metrics.today;
    let metrics = std::iter::once(format!("Pronóstico para: {}", state.today_long_date()))
        .chain(
            today
                .labeled_values()
                .into_iter()
                .map(|(label, value)| format!("{} {}", label, value)),
        )
        .collect();

    let info = info_lines(state)
        .into_iter()
        .map(|(label, value)| format!("{} {}", label, value))
        .collect();

    let chart = &state.daily_chart;
    let forecast = (0..chart.len())
        .flat_map(|index| chart.hover_text(index))
        .collect();

    vec![
        (
            format!("🌤️ Pronóstico del Clima - {}", state.ui_config.city),
            vec![FOOTER_CAPTION.to_string()],
        ),
        ("ℹ️ Información".to_string(), info),
        (
            format!("📈 Métricas Principales - {}", today.short_date()),
            metrics,
        ),
        (chart.title.to_string(), forecast),
        (
            "📅 Resumen Diario de Temperaturas".to_string(),
            state.daily_table().to_text().lines().map(String::from).collect(),
        ),
    ]
}

/// Loads the data once and prints the dashboard as text
///
/// # Returns
/// * `Ok(())` - Summary printed
/// * `Err` - The data could not be loaded; the user-facing message was printed
pub fn run_summary_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let mut cache = DatasetCache::new();
    let state = cache
        .get_or_load(&session.source)
        .and_then(|datasets| {
            DashboardState::build(datasets, Selection::default(), session.ui_config.clone())
        })
        .inspect_err(|e: &LoadError| {
            error!("Summary unavailable: {}", e);
            print_cmd_error!("Dashboard unavailable", &e.user_message());
        })?;

    info!(
        "Printing summary of {} daily rows",
        state.datasets.daily().len()
    );
    for (title, lines) in summary_sections(&state) {
        print_section(&title, &lines);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DailySummary, Datasets, HourlyReading};
    use crate::ui::UIConfig;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;

    #[test]
    fn test_sections_carry_metrics_and_table() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let datasets = Datasets::new(
            vec![HourlyReading {
                fecha_hora: day.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
                fecha: day,
                temp: 14.0,
                temp_min: 13.0,
                temp_max: 15.0,
            }],
            vec![DailySummary {
                fecha: day,
                temp_min_dia: 10.0,
                temp_max_dia: 20.0,
                temp_promedio: 15.0,
            }],
        );
        let state =
            DashboardState::build(Arc::new(datasets), Selection::default(), UIConfig::default())
                .unwrap();

        let sections = summary_sections(&state);
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].0, "🌤️ Pronóstico del Clima - Santiago, Chile");
        assert!(sections[1].1.contains(&"Total de registros: 1".to_string()));
        assert_eq!(sections[2].0, "📈 Métricas Principales - 10/01/2024");
        assert!(sections[2].1.contains(&"🌡️ Temperatura Promedio 15.0°C".to_string()));
        assert!(sections[2].1.contains(&"📊 Amplitud Térmica 10.0°C".to_string()));
        assert_eq!(
            sections[3].1,
            [
                "Máxima · 2024-01-10 · 20.0°C",
                "Mínima · 2024-01-10 · 10.0°C",
                "Promedio · 2024-01-10 · 15.0°C",
            ]
        );
        assert!(sections[4].1.iter().any(|line| line.contains("2024-01-10")));
    }
}
