use newslens_client::ApiError;
use newslens_types::ReportRecord;

/// Page sizes the report list offers.
pub const ROWS_PER_PAGE_CHOICES: [usize; 3] = [5, 10, 25];

/// Ticket for a report-list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportsFetch {
    pub generation: u64,
    pub fake_only: bool,
    pub limit: usize,
}

/// Sub-tabs of the report detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Summary,
    Content,
    Analysis,
}

impl DetailTab {
    pub fn next(self) -> Self {
        match self {
            DetailTab::Summary => DetailTab::Content,
            DetailTab::Content => DetailTab::Analysis,
            DetailTab::Analysis => DetailTab::Summary,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Summary => "Summary",
            DetailTab::Content => "Content",
            DetailTab::Analysis => "Analysis",
        }
    }
}

/// The report browser. The server applies the fake-only filter and the size
/// limit; page and rows-per-page only slice the fetched set, so neither
/// triggers a round trip. The detail view is a clone of the selected record
/// and needs no further fetch.
#[derive(Debug)]
pub struct ReportsState {
    fake_only: bool,
    records: Vec<ReportRecord>,
    page: usize,
    rows_per_page: usize,
    selected: Option<ReportRecord>,
    detail_tab: DetailTab,
    loading: bool,
    error: Option<ApiError>,
    generation: u64,
    limit: usize,
}

impl ReportsState {
    pub fn new(limit: usize) -> Self {
        Self {
            fake_only: false,
            records: Vec::new(),
            page: 0,
            rows_per_page: 10,
            selected: None,
            detail_tab: DetailTab::Summary,
            loading: false,
            error: None,
            generation: 0,
            limit,
        }
    }

    pub fn fake_only(&self) -> bool {
        self.fake_only
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn selected(&self) -> Option<&ReportRecord> {
        self.selected.as_ref()
    }

    pub fn detail_tab(&self) -> DetailTab {
        self.detail_tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Start (or restart) the list fetch with the current filter.
    pub fn refresh(&mut self) -> ReportsFetch {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        ReportsFetch {
            generation: self.generation,
            fake_only: self.fake_only,
            limit: self.limit,
        }
    }

    /// Toggle the fake-only filter. The only state change that refetches;
    /// returns a ticket only when the value actually changed.
    pub fn set_fake_only(&mut self, fake_only: bool) -> Option<ReportsFetch> {
        if fake_only == self.fake_only {
            return None;
        }
        self.fake_only = fake_only;
        Some(self.refresh())
    }

    /// Apply a fetched record set, replacing the previous one. Stale
    /// generations are discarded.
    pub fn complete(&mut self, generation: u64, outcome: Result<Vec<ReportRecord>, ApiError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err);
            }
        }
    }

    /// Rows of the current page.
    pub fn visible(&self) -> &[ReportRecord] {
        let start = self.page * self.rows_per_page;
        if start >= self.records.len() {
            return &[];
        }
        let end = (start + self.rows_per_page).min(self.records.len());
        &self.records[start..end]
    }

    pub fn page_count(&self) -> usize {
        if self.records.is_empty() {
            1
        } else {
            self.records.len().div_ceil(self.rows_per_page)
        }
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Changing the page size always jumps back to the first page so the
    /// cursor cannot land past the end of the set.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        if rows == 0 || rows == self.rows_per_page {
            return;
        }
        self.rows_per_page = rows;
        self.page = 0;
    }

    pub fn cycle_rows_per_page(&mut self) {
        let index = ROWS_PER_PAGE_CHOICES
            .iter()
            .position(|choice| *choice == self.rows_per_page)
            .unwrap_or(0);
        let rows = ROWS_PER_PAGE_CHOICES[(index + 1) % ROWS_PER_PAGE_CHOICES.len()];
        self.set_rows_per_page(rows);
    }

    /// Open the detail view for a row of the current page.
    pub fn select_visible(&mut self, index: usize) {
        let record = self.visible().get(index).cloned();
        if let Some(record) = record {
            self.selected = Some(record);
            self.detail_tab = DetailTab::Summary;
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.detail_tab = DetailTab::Summary;
    }

    pub fn set_detail_tab(&mut self, tab: DetailTab) {
        if self.selected.is_some() {
            self.detail_tab = tab;
        }
    }

    pub fn cycle_detail_tab(&mut self) {
        self.set_detail_tab(self.detail_tab.next());
    }
}
