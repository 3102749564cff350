use crate::presentation::formatters::text::error_message;
use crate::presentation::presenters::stats::present_statistics;
use crate::presentation::view_models::StatsViewModel;
use newslens_app::{ChartStatus, DashboardState};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let Some(summary) = dashboard.summary() else {
        let text = if let Some(err) = dashboard.error() {
            error_message(err)
        } else {
            "Loading statistics...".to_string()
        };
        let placeholder = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Dashboard"));
        f.render_widget(placeholder, area);
        return;
    };

    let model = present_statistics(summary, dashboard.window());

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(7),
        Constraint::Length(3),
    ])
    .split(area);

    render_cards(f, chunks[0], &model);

    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
    render_sources(f, halves[0], &model);
    render_distribution(f, halves[1], &model);

    render_chart_panel(f, chunks[2], dashboard);
}

fn card(title: &str, value: String, detail: String, color: Color) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    )
}

fn render_cards(f: &mut Frame, area: Rect, model: &StatsViewModel) {
    let cards = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .split(area);

    f.render_widget(
        card(
            "Total Analyzed",
            model.total_analyzed.to_string(),
            format!("{} in period", model.recent_analyzed),
            Color::Cyan,
        ),
        cards[0],
    );
    f.render_widget(
        card(
            "Fake Detected",
            model.fake_count.to_string(),
            format!("{} of total", model.fake_percent),
            Color::Red,
        ),
        cards[1],
    );
    f.render_widget(
        card(
            "Real Confirmed",
            model.real_count.to_string(),
            format!("{} of total", model.real_percent),
            Color::Green,
        ),
        cards[2],
    );
    f.render_widget(
        card(
            "Avg Confidence",
            model.average_confidence.clone(),
            format!("min {} | max {}", model.min_confidence, model.max_confidence),
            Color::Cyan,
        ),
        cards[3],
    );
}

fn render_sources(f: &mut Frame, area: Rect, model: &StatsViewModel) {
    let lines: Vec<Line> = if model.sources.is_empty() {
        vec![Line::from(Span::styled(
            "No sources recorded.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        model
            .sources
            .iter()
            .map(|source| {
                Line::from(vec![
                    Span::raw(format!("{:<24}", source.name)),
                    Span::raw(format!("{:>5}  ", source.total)),
                    Span::styled(
                        format!("fake {} ({})", source.fake, source.fake_percent),
                        Style::default().fg(Color::Red),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Top Sources"));
    f.render_widget(paragraph, area);
}

fn render_distribution(f: &mut Frame, area: Rect, model: &StatsViewModel) {
    let lines: Vec<Line> = model
        .distribution
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::raw(format!("{:<9}", row.range)),
                Span::styled(
                    format!("{:<24}", row.label),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{:>5}  {:>7}", row.count, row.percent)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confidence Distribution"),
    );
    f.render_widget(paragraph, area);
}

fn render_chart_panel(f: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let kind = dashboard.chart.kind();
    let line = match dashboard.chart.status() {
        ChartStatus::Idle => Line::from("Press c to fetch a chart."),
        ChartStatus::Loading => Line::from("Loading chart..."),
        ChartStatus::Loaded(saved) => Line::from(format!(
            "Saved to {} ({} KB)",
            saved.path.display(),
            saved.bytes.div_ceil(1024)
        )),
        ChartStatus::Failed => Line::from(Span::styled(
            "Chart could not be loaded. Please try again later.",
            Style::default().fg(Color::Yellow),
        )),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Chart: {} (c: next)", kind.label())),
    );
    f.render_widget(paragraph, area);
}
