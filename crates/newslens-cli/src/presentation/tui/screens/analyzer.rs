use super::level_color;
use crate::presentation::presenters;
use crate::presentation::tui::app::{AnalyzerUi, FormField};
use newslens_app::{AnalysisPhase, AnalysisWorkflow, InputMode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, workflow: &AnalysisWorkflow, ui: &AnalyzerUi) {
    let chunks = Layout::vertical([Constraint::Length(11), Constraint::Min(8)]).split(area);

    match workflow.mode() {
        InputMode::Text => render_text_form(f, chunks[0], ui),
        InputMode::File => render_file_form(f, chunks[0], ui),
    }

    render_outcome(f, chunks[1], workflow);
}

fn field_block<'a>(title: &'a str, focused: bool, editing: bool) -> Block<'a> {
    let mut style = Style::default();
    if focused {
        style = style.fg(Color::Yellow);
    }
    if focused && editing {
        style = style.add_modifier(Modifier::BOLD);
    }
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

fn field_text(value: &str, focused: bool, editing: bool) -> Line<'_> {
    if editing && focused {
        Line::from(vec![Span::raw(value), Span::raw("▏")])
    } else {
        Line::from(value)
    }
}

fn render_text_form(f: &mut Frame, area: Rect, ui: &AnalyzerUi) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Analyze Text (m: file mode)");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .split(inner);

    let fields = [
        ("News Title", &ui.title, FormField::Title),
        ("News Content", &ui.content, FormField::Content),
        ("Source (optional)", &ui.source, FormField::Source),
    ];
    for ((title, value, field), row) in fields.into_iter().zip(rows.iter()) {
        let focused = ui.focus == field;
        let paragraph = Paragraph::new(field_text(value, focused, ui.editing))
            .block(field_block(title, focused, ui.editing));
        f.render_widget(paragraph, *row);
    }
}

fn render_file_form(f: &mut Frame, area: Rect, ui: &AnalyzerUi) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Upload File (m: text mode)");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(2)]).split(inner);

    let paragraph = Paragraph::new(field_text(&ui.file_path, true, ui.editing))
        .block(field_block("File path", true, ui.editing));
    f.render_widget(paragraph, rows[0]);

    let hint = Paragraph::new("Supported formats: .txt, .doc, .docx, .pdf")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[1]);
}

fn render_outcome(f: &mut Frame, area: Rect, workflow: &AnalysisWorkflow) {
    match workflow.phase() {
        AnalysisPhase::Idle => {
            let placeholder = Paragraph::new("Enter an article and press s to analyze.")
                .block(Block::default().borders(Borders::ALL).title("Result"));
            f.render_widget(placeholder, area);
        }
        AnalysisPhase::Submitting => {
            let loading = Paragraph::new("Analyzing...")
                .block(Block::default().borders(Borders::ALL).title("Result"));
            f.render_widget(loading, area);
        }
        AnalysisPhase::Failed(err) => {
            use crate::presentation::formatters::text::error_message;
            let error = Paragraph::new(error_message(err))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Error"));
            f.render_widget(error, area);
        }
        AnalysisPhase::Success(result) => {
            let model = presenters::analysis::present_result(result);
            let color = level_color(model.severity);

            let block = Block::default()
                .borders(Borders::ALL)
                .title("Analysis Results");
            let inner = block.inner(area);
            f.render_widget(block, area);

            let rows = Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(inner);

            let mut header_lines = vec![Line::from(model.title.clone())];
            if let Some(source) = &model.source {
                header_lines.push(Line::from(Span::styled(
                    format!("Source: {}", source),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            f.render_widget(Paragraph::new(header_lines), rows[0]);

            let verdict = Line::from(Span::styled(
                model.verdict.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            f.render_widget(Paragraph::new(verdict), rows[1]);

            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).title("Confidence"))
                .gauge_style(Style::default().fg(color))
                .ratio(model.confidence.clamp(0.0, 1.0))
                .label(format!(
                    "{} ({})",
                    model.confidence_percent, model.confidence_level
                ));
            f.render_widget(gauge, rows[2]);

            let explanation = Paragraph::new(model.explanation.clone())
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("AI Explanation"));
            f.render_widget(explanation, rows[3]);
        }
    }
}
