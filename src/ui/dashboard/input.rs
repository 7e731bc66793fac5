//! Key handling for the dashboard selection
//!
//! Keys only change the [`Selection`]; the next render pass rebuilds the
//! dashboard from it.

use super::state::{ChartFocus, DashboardState, Selection, TableTab};
use crate::views::step_index;

use crossterm::event::KeyCode;

/// Rows scrolled by one page key.
const PAGE_ROWS: usize = 10;

impl DashboardState {
    /// Returns the selection that results from pressing `key`.
    pub fn apply_key(&self, key: KeyCode) -> Selection {
        let mut selection = self.selection;
        match key {
            KeyCode::Tab | KeyCode::BackTab => {
                selection.tab = selection.tab.toggled();
                selection.table_scroll = 0;
            }
            KeyCode::Char('1') => {
                selection.tab = TableTab::Daily;
                selection.table_scroll = 0;
            }
            KeyCode::Char('2') => {
                selection.tab = TableTab::Hourly;
                selection.table_scroll = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                selection.date_index = step_index(selection.date_index, -1, self.dates.len());
                selection.table_scroll = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selection.date_index = step_index(selection.date_index, 1, self.dates.len());
                selection.table_scroll = 0;
            }
            KeyCode::PageUp => {
                selection.table_scroll = selection.table_scroll.saturating_sub(PAGE_ROWS);
            }
            KeyCode::PageDown => {
                let last = self.active_table_len().saturating_sub(1);
                selection.table_scroll = (selection.table_scroll + PAGE_ROWS).min(last);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                selection.chart_focus = match selection.chart_focus {
                    ChartFocus::Daily => ChartFocus::Hourly,
                    ChartFocus::Hourly => ChartFocus::Daily,
                };
            }
            KeyCode::Left | KeyCode::Right => {
                let delta = if key == KeyCode::Left { -1 } else { 1 };
                match selection.chart_focus {
                    ChartFocus::Daily => {
                        selection.daily_cursor =
                            step_index(selection.daily_cursor, delta, self.daily_chart.len());
                    }
                    ChartFocus::Hourly => {
                        selection.hourly_cursor =
                            step_index(selection.hourly_cursor, delta, self.hourly_chart.len());
                    }
                }
            }
            _ => {}
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DailySummary, Datasets, HourlyReading};
    use crate::ui::app::UIConfig;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;

    fn state() -> DashboardState {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let reading = |d, h| HourlyReading {
            fecha_hora: day(d).and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap()),
            fecha: day(d),
            temp: 15.0,
            temp_min: 14.0,
            temp_max: 16.0,
        };
        let daily = vec![DailySummary {
            fecha: day(10),
            temp_min_dia: 10.0,
            temp_max_dia: 20.0,
            temp_promedio: 15.0,
        }];
        let hourly = vec![reading(10, 0), reading(10, 12), reading(11, 0)];
        DashboardState::build(
            Arc::new(Datasets::new(hourly, daily)),
            Selection::default(),
            UIConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_date_selector_moves_within_bounds() {
        let mut state = state();
        state.selection = state.apply_key(KeyCode::Down);
        assert_eq!(state.selection.date_index, 1);
        state.selection = state.apply_key(KeyCode::Down);
        assert_eq!(state.selection.date_index, 1);
        state.selection = state.apply_key(KeyCode::Char('k'));
        assert_eq!(state.selection.date_index, 0);
    }

    #[test]
    fn test_tab_switches_and_resets_scroll() {
        let mut state = state();
        state.selection.table_scroll = 3;
        let selection = state.apply_key(KeyCode::Tab);
        assert_eq!(selection.tab, TableTab::Hourly);
        assert_eq!(selection.table_scroll, 0);
        state.selection = selection;
        assert_eq!(state.apply_key(KeyCode::Char('1')).tab, TableTab::Daily);
    }

    #[test]
    fn test_cursor_follows_focused_chart() {
        let mut state = state();
        state.selection = state.apply_key(KeyCode::Right);
        // one daily row, the cursor cannot move
        assert_eq!(state.selection.daily_cursor, 0);

        state.selection = state.apply_key(KeyCode::Char('c'));
        assert_eq!(state.selection.chart_focus, ChartFocus::Hourly);
        state.selection = state.apply_key(KeyCode::Right);
        state.selection = state.apply_key(KeyCode::Right);
        state.selection = state.apply_key(KeyCode::Right);
        assert_eq!(state.selection.hourly_cursor, 2);
        assert_eq!(state.selection.daily_cursor, 0);
    }

    #[test]
    fn test_uppercase_c_switches_chart_focus() {
        let mut state = state();
        state.selection = state.apply_key(KeyCode::Char('C'));
        assert_eq!(state.selection.chart_focus, ChartFocus::Hourly);
        state.selection = state.apply_key(KeyCode::Char('C'));
        assert_eq!(state.selection.chart_focus, ChartFocus::Daily);
    }
}
