//! Dashboard state
//!
//! The state is rebuilt on every render pass from the cached datasets and the
//! user's current selection.

use crate::dataset::{Datasets, LoadError};
use crate::metrics::DashboardMetrics;
use crate::ui::app::UIConfig;
use crate::views::{ChartModel, TableModel, readings_on, selectable_dates};

use chrono::NaiveDate;
use std::sync::Arc;

/// Tabs of the detailed data section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum TableTab {
    #[default]
    #[strum(to_string = "📅 Resumen Diario")]
    Daily,
    #[strum(to_string = "🕐 Datos por Hora")]
    Hourly,
}

impl TableTab {
    pub fn index(&self) -> usize {
        match self {
            TableTab::Daily => 0,
            TableTab::Hourly => 1,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            TableTab::Daily => TableTab::Hourly,
            TableTab::Hourly => TableTab::Daily,
        }
    }
}

/// Which chart the hover cursor keys act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartFocus {
    #[default]
    Daily,
    Hourly,
}

/// Everything the user can change between render passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub tab: TableTab,
    /// Index into the hourly date selector.
    pub date_index: usize,
    pub chart_focus: ChartFocus,
    pub daily_cursor: usize,
    pub hourly_cursor: usize,
    /// First visible row of the active table.
    pub table_scroll: usize,
}

impl Selection {
    /// Pulls every index back into range after the data changed.
    pub fn clamped(mut self, dates: usize, daily: usize, hourly: usize) -> Self {
        let clamp = |value: usize, len: usize| value.min(len.saturating_sub(1));
        self.date_index = clamp(self.date_index, dates);
        self.daily_cursor = clamp(self.daily_cursor, daily);
        self.hourly_cursor = clamp(self.hourly_cursor, hourly);
        self
    }
}

/// One fully computed render pass.
#[derive(Debug)]
pub struct DashboardState {
    pub datasets: Arc<Datasets>,
    pub metrics: DashboardMetrics,
    pub selection: Selection,
    /// Distinct hourly dates offered by the selector.
    pub dates: Vec<NaiveDate>,
    pub daily_chart: ChartModel,
    pub hourly_chart: ChartModel,
    pub ui_config: UIConfig,
}

impl DashboardState {
    /// Builds the state for one render pass. Fails only when a collection is
    /// empty and the dashboard has nothing to show for "today".
    pub fn build(
        datasets: Arc<Datasets>,
        selection: Selection,
        ui_config: UIConfig,
    ) -> Result<Self, LoadError> {
        let metrics = DashboardMetrics::compute(&datasets).ok_or_else(|| {
            let empty = if datasets.daily().is_empty() {
                "daily"
            } else {
                "hourly"
            };
            LoadError::Empty(empty)
        })?;
        let dates = selectable_dates(datasets.hourly());
        let selection = selection.clamped(
            dates.len(),
            datasets.daily().len(),
            datasets.hourly().len(),
        );

        Ok(Self {
            daily_chart: ChartModel::daily(datasets.daily()),
            hourly_chart: ChartModel::hourly(datasets.hourly()),
            datasets,
            metrics,
            selection,
            dates,
            ui_config,
        })
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.dates.get(self.selection.date_index).copied()
    }

    pub fn daily_table(&self) -> TableModel {
        TableModel::daily(self.datasets.daily())
    }

    /// Hourly rows of the selected date.
    pub fn hourly_table(&self) -> TableModel {
        match self.selected_date() {
            Some(date) => TableModel::hourly(&readings_on(self.datasets.hourly(), date)),
            None => TableModel::hourly(&[]),
        }
    }

    /// Rows in the table of the active tab.
    pub fn active_table_len(&self) -> usize {
        match self.selection.tab {
            TableTab::Daily => self.datasets.daily().len(),
            TableTab::Hourly => self
                .selected_date()
                .map(|date| readings_on(self.datasets.hourly(), date).len())
                .unwrap_or_default(),
        }
    }

    /// Localized long date of the first forecast day.
    pub fn today_long_date(&self) -> String {
        self.ui_config.locale.long_date(self.metrics.today.fecha)
    }
}
