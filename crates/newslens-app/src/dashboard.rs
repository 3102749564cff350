use newslens_client::ApiError;
use newslens_types::{ChartKind, StatisticsSummary, TimeWindow};
use std::path::PathBuf;

/// Ticket for a statistics fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsFetch {
    pub generation: u64,
    pub window: TimeWindow,
}

/// Ticket for a chart fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartFetch {
    pub generation: u64,
    pub kind: ChartKind,
    pub window: TimeWindow,
}

/// A chart image the shell fetched and wrote to disk. The client never
/// decodes the image; path and size are all the view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedChart {
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChartStatus {
    #[default]
    Idle,
    Loading,
    Loaded(SavedChart),
    Failed,
}

/// Chart selector state. A request supersedes any outstanding one for the
/// panel; image-load failure degrades to a textual placeholder, never an
/// error state for the whole dashboard.
#[derive(Debug, Default)]
pub struct ChartPanel {
    kind: ChartKind,
    status: ChartStatus,
    generation: u64,
}

impl ChartPanel {
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn status(&self) -> &ChartStatus {
        &self.status
    }

    /// Request the panel's chart for `window`, optionally switching kind.
    pub fn request(&mut self, kind: ChartKind, window: TimeWindow) -> ChartFetch {
        self.kind = kind;
        self.generation += 1;
        self.status = ChartStatus::Loading;
        ChartFetch {
            generation: self.generation,
            kind,
            window,
        }
    }

    pub fn complete(&mut self, generation: u64, outcome: Result<SavedChart, ApiError>) {
        if generation != self.generation {
            return;
        }
        self.status = match outcome {
            Ok(saved) => ChartStatus::Loaded(saved),
            Err(_) => ChartStatus::Failed,
        };
    }
}

/// The statistics dashboard: a time window, the latest summary for it, and
/// the chart panel. Fetches happen on mount and on window change, nothing
/// else; each fetch fully replaces the previous summary.
#[derive(Debug, Default)]
pub struct DashboardState {
    window: TimeWindow,
    summary: Option<StatisticsSummary>,
    loading: bool,
    error: Option<ApiError>,
    generation: u64,
    pub chart: ChartPanel,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn summary(&self) -> Option<&StatisticsSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Start (or restart) the summary fetch for the current window.
    pub fn refresh(&mut self) -> StatsFetch {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        StatsFetch {
            generation: self.generation,
            window: self.window,
        }
    }

    /// Change the window. Returns a ticket only when the value actually
    /// changed; the ticket supersedes any outstanding fetch.
    pub fn set_window(&mut self, window: TimeWindow) -> Option<StatsFetch> {
        if window == self.window {
            return None;
        }
        self.window = window;
        Some(self.refresh())
    }

    /// Apply a fetched summary. Last write wins on the triggering window: a
    /// response for a superseded generation is discarded no matter when it
    /// arrives. On failure the previous summary stays visible under the
    /// error banner.
    pub fn complete(&mut self, generation: u64, outcome: Result<StatisticsSummary, ApiError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newslens_types::StatCount;

    fn summary_with_total(total: u64) -> StatisticsSummary {
        StatisticsSummary {
            total_count: StatCount {
                total,
                fake: 0,
                real: total,
            },
            ..Default::default()
        }
    }

    #[test]
    fn out_of_order_responses_keep_the_latest_window() {
        let mut dashboard = DashboardState::new();
        let first = dashboard.refresh();

        let second = dashboard
            .set_window(TimeWindow::Month)
            .expect("window changed");

        // The newer fetch resolves first...
        dashboard.complete(second.generation, Ok(summary_with_total(30)));
        // ...then the stale one arrives late and must be discarded.
        dashboard.complete(first.generation, Ok(summary_with_total(7)));

        assert_eq!(dashboard.summary().unwrap().total_count.total, 30);
        assert!(!dashboard.is_loading());
    }

    #[test]
    fn setting_the_same_window_does_not_refetch() {
        let mut dashboard = DashboardState::new();
        assert!(dashboard.set_window(TimeWindow::Week).is_none());
        assert!(dashboard.set_window(TimeWindow::All).is_some());
        assert!(dashboard.set_window(TimeWindow::All).is_none());
    }

    #[test]
    fn failure_keeps_the_previous_summary_visible() {
        let mut dashboard = DashboardState::new();
        let fetch = dashboard.refresh();
        dashboard.complete(fetch.generation, Ok(summary_with_total(12)));

        let retry = dashboard.refresh();
        dashboard.complete(
            retry.generation,
            Err(ApiError::Server("backend down".to_string())),
        );

        assert!(dashboard.error().is_some());
        assert_eq!(dashboard.summary().unwrap().total_count.total, 12);
    }

    #[test]
    fn refresh_clears_a_previous_error() {
        let mut dashboard = DashboardState::new();
        let fetch = dashboard.refresh();
        dashboard.complete(fetch.generation, Err(ApiError::NotFound));
        assert!(dashboard.error().is_some());

        dashboard.refresh();
        assert!(dashboard.error().is_none());
        assert!(dashboard.is_loading());
    }

    #[test]
    fn chart_panel_discards_stale_images() {
        let mut panel = ChartPanel::default();
        let first = panel.request(ChartKind::Pie, TimeWindow::Week);
        let second = panel.request(ChartKind::Trend, TimeWindow::Week);

        panel.complete(
            second.generation,
            Ok(SavedChart {
                path: PathBuf::from("/tmp/trend-7d.png"),
                bytes: 1024,
            }),
        );
        panel.complete(
            first.generation,
            Ok(SavedChart {
                path: PathBuf::from("/tmp/pie-7d.png"),
                bytes: 2048,
            }),
        );

        match panel.status() {
            ChartStatus::Loaded(saved) => {
                assert_eq!(saved.path, PathBuf::from("/tmp/trend-7d.png"));
            }
            other => panic!("expected loaded chart, got {:?}", other),
        }
        assert_eq!(panel.kind(), ChartKind::Trend);
    }

    #[test]
    fn chart_failure_degrades_to_placeholder() {
        let mut panel = ChartPanel::default();
        let fetch = panel.request(ChartKind::Sources, TimeWindow::Year);
        panel.complete(fetch.generation, Err(ApiError::Server("no data".to_string())));
        assert_eq!(*panel.status(), ChartStatus::Failed);
    }
}
