//! Dashboard utility functions
//!
//! Contains helpers used across dashboard components

use crate::views::gradient::Shade;
use crate::views::table::TableModel;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Rounded cyan panel used by every dashboard section.
pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

/// Cell style for a gradient shade, default style for plain cells.
pub fn shade_style(shade: Option<Shade>) -> Style {
    match shade {
        Some(shade) => Style::default().bg(shade.bg).fg(shade.fg),
        None => Style::default().fg(Color::White),
    }
}

/// Converts a table model into a ratatui table with equal column widths.
pub fn to_table<'a>(model: &TableModel, block: Block<'a>) -> Table<'a> {
    let header = Row::new(model.headers.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = model.rows.iter().map(|row| {
        Row::new(
            row.iter()
                .map(|cell| Cell::from(cell.text.clone()).style(shade_style(cell.shade))),
        )
    });

    Table::new(rows, [Constraint::Ratio(1, 4); 4])
        .header(header)
        .block(block)
        .column_spacing(1)
}
