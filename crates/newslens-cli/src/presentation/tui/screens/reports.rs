use super::{centered_rect, level_color};
use crate::presentation::formatters::text::error_message;
use crate::presentation::presenters::reports::{present_detail, present_row};
use newslens_app::{DetailTab, ReportsState};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, reports: &ReportsState, cursor: &mut TableState) {
    if let Some(err) = reports.error() {
        let error = Paragraph::new(error_message(err))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Reports"));
        f.render_widget(error, area);
        return;
    }

    if reports.records().is_empty() {
        let text = if reports.is_loading() {
            "Loading reports..."
        } else {
            "No reports found. Start analyzing news to see reports here."
        };
        let placeholder = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Reports"));
        f.render_widget(placeholder, area);
        return;
    }

    render_table(f, area, reports, cursor);

    if reports.selected().is_some() {
        render_detail(f, area, reports);
    }
}

fn render_table(f: &mut Frame, area: Rect, reports: &ReportsState, cursor: &mut TableState) {
    let header = Row::new(vec!["STATUS", "TITLE", "SOURCE", "CONFIDENCE", "DATE"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = reports
        .visible()
        .iter()
        .map(|record| {
            let row = present_row(record);
            let color = level_color(row.severity);
            Row::new(vec![
                Cell::from(Span::styled(row.status, Style::default().fg(color))),
                Cell::from(row.title),
                Cell::from(row.source),
                Cell::from(format!("{} ({})", row.confidence_percent, row.confidence_level)),
                Cell::from(row.date),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Length(18),
        Constraint::Length(18),
    ];

    let title = if reports.is_loading() {
        "Reports (loading...)".to_string()
    } else {
        format!("Reports | page {}/{}", reports.page() + 1, reports.page_count())
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, cursor);
}

fn render_detail(f: &mut Frame, area: Rect, reports: &ReportsState) {
    let Some(record) = reports.selected() else {
        return;
    };
    let detail = present_detail(record);
    let color = level_color(detail.severity);

    let overlay = centered_rect(80, 80, area);
    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("News Report Details");
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let chunks =
        Layout::vertical([Constraint::Length(2), Constraint::Min(4)]).split(inner);

    let selected_tab = match reports.detail_tab() {
        DetailTab::Summary => 0,
        DetailTab::Content => 1,
        DetailTab::Analysis => 2,
    };
    let tabs = Tabs::new(vec!["Summary", "Content", "Analysis"])
        .select(selected_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    match reports.detail_tab() {
        DetailTab::Summary => {
            let mut lines = vec![Line::from(Span::styled(
                detail.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(source) = &detail.source {
                lines.push(Line::from(format!("Source: {}", source)));
            }
            lines.push(Line::from(format!("Date: {}", detail.date)));
            lines.push(Line::from(vec![
                Span::raw("Classification: "),
                Span::styled(
                    detail.classification.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(format!(
                "Confidence: {} ({})",
                detail.confidence_percent, detail.confidence_level
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(detail.brief_explanation.clone()));

            let summary = Paragraph::new(lines).wrap(Wrap { trim: true });
            f.render_widget(summary, chunks[1]);
        }
        DetailTab::Content => {
            let content = Paragraph::new(detail.content.clone())
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("News Content"));
            f.render_widget(content, chunks[1]);
        }
        DetailTab::Analysis => {
            let analysis = Paragraph::new(detail.explanation.clone())
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("AI Analysis"));
            f.render_widget(analysis, chunks[1]);
        }
    }
}
