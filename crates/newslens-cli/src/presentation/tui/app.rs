//! Interactive terminal UI.
//!
//! One render loop owns the terminal. Fetches run on worker threads holding
//! a clone of the shared client; their outcomes come back over an mpsc
//! channel stamped with the generation from the issuing state machine, which
//! discards anything stale. The loop itself never blocks on the network.

use crate::handlers::analyze::execute_submission;
use crate::presentation::tui::screens;
use crate::presentation::view_models::StatusLevel;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use newslens_app::{
    AnalysisPhase, AnalysisWorkflow, ChartFetch, DashboardState, InputMode, ReportsFetch,
    ReportsState, SavedChart, StatsFetch, Submission,
};
use newslens_client::{ApiClient, ApiError};
use newslens_types::{AnalysisResult, ReportRecord, StatisticsSummary};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, TableState, Tabs};
use ratatui::{Frame, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How many reports one fetch asks the server for. Pagination slices this
/// set locally.
const REPORT_FETCH_LIMIT: usize = 100;

/// Fetch outcomes sent from worker threads back to the render loop.
pub enum FetchOutcome {
    Analysis {
        generation: u64,
        outcome: std::result::Result<AnalysisResult, ApiError>,
    },
    Stats {
        generation: u64,
        outcome: std::result::Result<StatisticsSummary, ApiError>,
    },
    Reports {
        generation: u64,
        outcome: std::result::Result<Vec<ReportRecord>, ApiError>,
    },
    Chart {
        generation: u64,
        outcome: std::result::Result<SavedChart, ApiError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Analyzer,
    Dashboard,
    Reports,
}

impl Screen {
    fn index(self) -> usize {
        match self {
            Screen::Analyzer => 0,
            Screen::Dashboard => 1,
            Screen::Reports => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Content,
    Source,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Source,
            FormField::Source => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Source,
            FormField::Content => FormField::Title,
            FormField::Source => FormField::Content,
        }
    }
}

/// UI-only analyzer state: focus and the text being typed. The workflow
/// machine stays authoritative for validation and submission.
#[derive(Debug, Default)]
pub struct AnalyzerUi {
    pub focus: FormField,
    pub editing: bool,
    pub title: String,
    pub content: String,
    pub source: String,
    pub file_path: String,
}

impl AnalyzerUi {
    fn buffer_mut(&mut self, mode: InputMode) -> &mut String {
        match mode {
            InputMode::File => &mut self.file_path,
            InputMode::Text => match self.focus {
                FormField::Title => &mut self.title,
                FormField::Content => &mut self.content,
                FormField::Source => &mut self.source,
            },
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct TuiApp {
    client: Arc<ApiClient>,
    chart_dir: PathBuf,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
    screen: Screen,
    analyzer: AnalysisWorkflow,
    analyzer_ui: AnalyzerUi,
    dashboard: DashboardState,
    reports: ReportsState,
    report_cursor: TableState,
    should_quit: bool,
}

impl TuiApp {
    pub fn new(client: Arc<ApiClient>, chart_dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut report_cursor = TableState::default();
        report_cursor.select(Some(0));

        Self {
            client,
            chart_dir,
            tx,
            rx,
            screen: Screen::Analyzer,
            analyzer: AnalysisWorkflow::new(),
            analyzer_ui: AnalyzerUi::default(),
            dashboard: DashboardState::new(),
            reports: ReportsState::new(REPORT_FETCH_LIMIT),
            report_cursor,
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Mount-time fetches: dashboard summary, first chart, report list.
        let stats = self.dashboard.refresh();
        self.spawn_stats(stats);
        let chart = self
            .dashboard
            .chart
            .request(self.dashboard.chart.kind(), self.dashboard.window());
        self.spawn_chart(chart);
        let reports = self.reports.refresh();
        self.spawn_reports(reports);

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Keyboard first, then any fetch outcomes that arrived meanwhile.
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            while let Ok(outcome) = self.rx.try_recv() {
                self.apply_outcome(outcome);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Analysis {
                generation,
                outcome,
            } => self.analyzer.complete(generation, outcome),
            FetchOutcome::Stats {
                generation,
                outcome,
            } => self.dashboard.complete(generation, outcome),
            FetchOutcome::Reports {
                generation,
                outcome,
            } => {
                self.reports.complete(generation, outcome);
                self.clamp_report_cursor();
            }
            FetchOutcome::Chart {
                generation,
                outcome,
            } => self.dashboard.chart.complete(generation, outcome),
        }
    }

    // ---- key handling -------------------------------------------------

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.screen == Screen::Analyzer && self.analyzer_ui.editing {
            self.handle_editing_key(key);
            return;
        }

        if self.screen == Screen::Reports && self.reports.selected().is_some() {
            self.handle_detail_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.screen = Screen::Analyzer,
            KeyCode::Char('2') => self.screen = Screen::Dashboard,
            KeyCode::Char('3') => self.screen = Screen::Reports,
            _ => match self.screen {
                Screen::Analyzer => self.handle_analyzer_key(key),
                Screen::Dashboard => self.handle_dashboard_key(key),
                Screen::Reports => self.handle_reports_key(key),
            },
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.analyzer_ui.editing = false,
            KeyCode::Backspace => {
                self.analyzer_ui.buffer_mut(self.analyzer.mode()).pop();
            }
            KeyCode::Char(c) => {
                self.analyzer_ui.buffer_mut(self.analyzer.mode()).push(c);
            }
            _ => {}
        }
    }

    fn handle_analyzer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.analyzer_ui.editing = true,
            KeyCode::Tab | KeyCode::Down => {
                if self.analyzer.mode() == InputMode::Text {
                    self.analyzer_ui.focus = self.analyzer_ui.focus.next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if self.analyzer.mode() == InputMode::Text {
                    self.analyzer_ui.focus = self.analyzer_ui.focus.prev();
                }
            }
            KeyCode::Char('m') => {
                let mode = match self.analyzer.mode() {
                    InputMode::Text => InputMode::File,
                    InputMode::File => InputMode::Text,
                };
                self.analyzer.set_mode(mode);
            }
            KeyCode::Char('s') => self.submit_analysis(),
            KeyCode::Char('r') => {
                self.analyzer.reset();
                self.analyzer_ui.clear();
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('w') => {
                let window = self.dashboard.window().next();
                if let Some(fetch) = self.dashboard.set_window(window) {
                    self.spawn_stats(fetch);
                    // The chart URL depends on the window, so it refetches too.
                    let chart = self
                        .dashboard
                        .chart
                        .request(self.dashboard.chart.kind(), window);
                    self.spawn_chart(chart);
                }
            }
            KeyCode::Char('c') => {
                let kind = self.dashboard.chart.kind().next();
                let chart = self.dashboard.chart.request(kind, self.dashboard.window());
                self.spawn_chart(chart);
            }
            _ => {}
        }
    }

    fn handle_reports_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_report_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_report_cursor(-1),
            KeyCode::Right | KeyCode::Char('n') => {
                self.reports.next_page();
                self.clamp_report_cursor();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.reports.prev_page();
                self.clamp_report_cursor();
            }
            KeyCode::Char('f') => {
                let fake_only = !self.reports.fake_only();
                if let Some(fetch) = self.reports.set_fake_only(fake_only) {
                    self.spawn_reports(fetch);
                }
            }
            KeyCode::Char('+') => {
                self.reports.cycle_rows_per_page();
                self.clamp_report_cursor();
            }
            KeyCode::Enter => {
                if let Some(index) = self.report_cursor.selected() {
                    self.reports.select_visible(index);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.reports.close_detail(),
            KeyCode::Tab => self.reports.cycle_detail_tab(),
            _ => {}
        }
    }

    fn move_report_cursor(&mut self, delta: i64) {
        let len = self.reports.visible().len();
        if len == 0 {
            self.report_cursor.select(None);
            return;
        }
        let current = self.report_cursor.selected().unwrap_or(0);
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(len - 1)
        };
        self.report_cursor.select(Some(next));
    }

    fn clamp_report_cursor(&mut self) {
        let len = self.reports.visible().len();
        if len == 0 {
            self.report_cursor.select(None);
        } else {
            let current = self.report_cursor.selected().unwrap_or(0);
            self.report_cursor.select(Some(current.min(len - 1)));
        }
    }

    // ---- effects ------------------------------------------------------

    fn submit_analysis(&mut self) {
        if self.analyzer.is_submitting() {
            return;
        }

        match self.analyzer.mode() {
            InputMode::Text => {
                self.analyzer.set_title(self.analyzer_ui.title.clone());
                self.analyzer.set_content(self.analyzer_ui.content.clone());
                self.analyzer.set_source(self.analyzer_ui.source.clone());
            }
            InputMode::File => {
                let path = self.analyzer_ui.file_path.trim();
                if path.is_empty() {
                    self.analyzer.clear_file();
                } else {
                    self.analyzer.select_file(PathBuf::from(path));
                }
            }
        }

        if let Some(submission) = self.analyzer.submit() {
            self.spawn_analysis(submission);
        }
    }

    fn spawn_analysis(&self, submission: Submission) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = execute_submission(&client, &submission.payload);
            let _ = tx.send(FetchOutcome::Analysis {
                generation: submission.generation,
                outcome,
            });
        });
    }

    fn spawn_stats(&self, fetch: StatsFetch) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = client.statistics(fetch.window);
            let _ = tx.send(FetchOutcome::Stats {
                generation: fetch.generation,
                outcome,
            });
        });
    }

    fn spawn_reports(&self, fetch: ReportsFetch) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = client.recent_reports(fetch.limit, fetch.fake_only);
            let _ = tx.send(FetchOutcome::Reports {
                generation: fetch.generation,
                outcome,
            });
        });
    }

    fn spawn_chart(&self, fetch: ChartFetch) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let dir = self.chart_dir.clone();
        thread::spawn(move || {
            let outcome = client.chart(fetch.kind, fetch.window).and_then(|bytes| {
                let path = dir.join(format!("{}-{}.png", fetch.kind.as_str(), fetch.window.slug()));
                std::fs::write(&path, &bytes).map_err(|e| {
                    ApiError::Unexpected(format!("failed to save chart: {}", e))
                })?;
                Ok(SavedChart {
                    path,
                    bytes: bytes.len() as u64,
                })
            });
            let _ = tx.send(FetchOutcome::Chart {
                generation: fetch.generation,
                outcome,
            });
        });
    }

    // ---- rendering ----------------------------------------------------

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

        let tabs = Tabs::new(vec!["[1] Analyze", "[2] Dashboard", "[3] Reports"])
            .select(self.screen.index())
            .block(Block::default().borders(Borders::ALL).title("newslens"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, chunks[0]);

        match self.screen {
            Screen::Analyzer => {
                screens::analyzer::render(f, chunks[1], &self.analyzer, &self.analyzer_ui)
            }
            Screen::Dashboard => screens::dashboard::render(f, chunks[1], &self.dashboard),
            Screen::Reports => {
                screens::reports::render(f, chunks[1], &self.reports, &mut self.report_cursor)
            }
        }

        let (message, level) = self.status_line();
        screens::status_bar::render(f, chunks[2], &message, level, self.key_help());
    }

    fn status_line(&self) -> (String, StatusLevel) {
        use crate::presentation::formatters::text::error_message;

        match self.screen {
            Screen::Analyzer => match self.analyzer.phase() {
                AnalysisPhase::Idle => ("Ready".to_string(), StatusLevel::Info),
                AnalysisPhase::Submitting => ("Analyzing...".to_string(), StatusLevel::Info),
                AnalysisPhase::Success(_) => {
                    ("Analysis complete".to_string(), StatusLevel::Success)
                }
                AnalysisPhase::Failed(err) => (error_message(err), StatusLevel::Error),
            },
            Screen::Dashboard => {
                if self.dashboard.is_loading() {
                    ("Loading statistics...".to_string(), StatusLevel::Info)
                } else if let Some(err) = self.dashboard.error() {
                    (error_message(err), StatusLevel::Error)
                } else {
                    (self.dashboard.window().label().to_string(), StatusLevel::Success)
                }
            }
            Screen::Reports => {
                if self.reports.is_loading() {
                    ("Loading reports...".to_string(), StatusLevel::Info)
                } else if let Some(err) = self.reports.error() {
                    (error_message(err), StatusLevel::Error)
                } else {
                    (
                        format!(
                            "{} reports | page {}/{} | fake only: {}",
                            self.reports.records().len(),
                            self.reports.page() + 1,
                            self.reports.page_count(),
                            if self.reports.fake_only() { "on" } else { "off" }
                        ),
                        StatusLevel::Success,
                    )
                }
            }
        }
    }

    fn key_help(&self) -> &'static [(&'static str, &'static str)] {
        if self.screen == Screen::Analyzer && self.analyzer_ui.editing {
            return &[("Esc", "done"), ("Backspace", "erase")];
        }
        if self.screen == Screen::Reports && self.reports.selected().is_some() {
            return &[("Tab", "next tab"), ("Esc", "close")];
        }
        match self.screen {
            Screen::Analyzer => &[
                ("Enter", "edit"),
                ("Tab", "field"),
                ("m", "mode"),
                ("s", "submit"),
                ("r", "reset"),
                ("q", "quit"),
            ],
            Screen::Dashboard => &[("w", "window"), ("c", "chart"), ("q", "quit")],
            Screen::Reports => &[
                ("j/k", "move"),
                ("n/p", "page"),
                ("f", "fake only"),
                ("+", "page size"),
                ("Enter", "details"),
                ("q", "quit"),
            ],
        }
    }
}
