//! Dashboard footer component
//!
//! Renders the data source caption and key help

use crate::consts::dashboard_consts::FOOTER_CAPTION;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const KEY_HELP: &str =
    "[Q] Salir | [Tab] Tabla | [↑/↓] Fecha | [PgUp/PgDn] Desplazar | [←/→] Cursor | [C] Gráfico | [R] Recargar";

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            FOOTER_CAPTION,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(KEY_HELP, Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
