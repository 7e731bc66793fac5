//! Dashboard tables component
//!
//! Renders the tabbed daily summary and hourly data tables

use super::super::state::{DashboardState, TableTab};
use super::super::utils::{panel_block, to_table};
use crate::views::date_label;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, TableState, Tabs};
use strum::IntoEnumIterator;

/// Text of the hourly date selector, e.g. `◀ 2024-01-10 ▶ (1/5)`.
pub fn date_selector_text(state: &DashboardState) -> String {
    match state.selected_date() {
        Some(date) => format!(
            "◀ {} ▶ ({}/{})",
            date_label(date),
            state.selection.date_index + 1,
            state.dates.len()
        ),
        None => "Sin fechas disponibles".to_string(),
    }
}

/// Render the tab bar and the table of the active tab.
pub fn render_tables_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    let tabs = Tabs::new(TableTab::iter().map(|tab| tab.to_string()))
        .select(state.selection.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    f.render_widget(tabs, chunks[0]);

    match state.selection.tab {
        TableTab::Daily => {
            let table = to_table(
                &state.daily_table(),
                panel_block("Resumen Diario de Temperaturas"),
            );
            let mut table_state = TableState::default().with_offset(state.selection.table_scroll);
            f.render_stateful_widget(table, chunks[1], &mut table_state);
        }
        TableTab::Hourly => render_hourly(f, chunks[1], state),
    }
}

fn render_hourly(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    let selector = Line::from(vec![
        Span::styled("Selecciona una fecha: ", Style::default().fg(Color::Gray)),
        Span::styled(
            date_selector_text(state),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [↑/↓]", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(selector), chunks[0]);

    let model = state.hourly_table();
    if model.is_empty() {
        f.render_widget(
            Paragraph::new("No hay lecturas para la fecha seleccionada")
                .style(Style::default().fg(Color::DarkGray))
                .block(panel_block("Datos por Hora")),
            chunks[1],
        );
        return;
    }
    let table = to_table(&model, panel_block("Datos por Hora"));
    let mut table_state = TableState::default().with_offset(state.selection.table_scroll);
    f.render_stateful_widget(table, chunks[1], &mut table_state);
}
