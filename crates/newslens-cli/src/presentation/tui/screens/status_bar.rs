use super::level_color;
use crate::presentation::view_models::StatusLevel;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(
    f: &mut Frame,
    area: Rect,
    message: &str,
    level: StatusLevel,
    help: &[(&str, &str)],
) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(inner);

    let status = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(level_color(level)),
    )));
    f.render_widget(status, chunks[0]);

    let mut spans = Vec::new();
    for (key, action) in help {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!("{} ", action)));
    }
    let help_line = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Right);
    f.render_widget(help_line, chunks[1]);
}
